use std::io::{self, Write};

use parlor_core::*;

use crate::command::Command;
use crate::game::{Console, Game, Score};

pub const LOSS: Score = 0;
pub const WIN: Score = 1;

#[derive(Clone, Debug)]
enum Setup {
    Random { seed: Option<u64> },
    Fixed(MineLayout),
}

/// Uncover every safe cell of a mined grid without stepping on a mine.
#[derive(Clone, Debug)]
pub struct Minesweeper {
    config: GameConfig,
    setup: Setup,
}

impl Minesweeper {
    /// Random boards, freshly seeded for every game. Fails on a configuration that cannot be played.
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            setup: Setup::Random { seed: None },
        })
    }

    /// Every game replays the board generated from `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            setup: Setup::Random { seed: Some(seed) },
        })
    }

    /// Every game is played on `layout`, which was validated when it was built.
    pub fn with_layout(layout: MineLayout) -> Self {
        Self {
            config: layout.game_config(),
            setup: Setup::Fixed(layout),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    fn new_engine(&self) -> Result<PlayEngine> {
        match &self.setup {
            Setup::Random { seed } => {
                let seed = seed.unwrap_or_else(rand::random);
                PlayEngine::generate(RandomMinefieldGenerator::seeded(seed), self.config)
            }
            Setup::Fixed(layout) => PlayEngine::generate(layout.clone(), self.config),
        }
    }
}

impl Default for Minesweeper {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            setup: Setup::Random { seed: None },
        }
    }
}

fn print_board(console: &mut Console<'_>, engine: &PlayEngine, show_mines: bool) -> io::Result<()> {
    writeln!(
        console,
        "Mines left: {} of {}",
        engine.mines_left(),
        engine.total_mines()
    )?;
    write!(console, "{}", engine.view(show_mines))
}

fn print_help(console: &mut Console<'_>) -> io::Result<()> {
    writeln!(console, "Commands: 'r row col' to reveal, 'f row col' to flag/unflag")?;
    writeln!(console, "          'h' for help, 'q' to quit")
}

fn engine_error(err: GameError) -> io::Error {
    if err.is_fatal() {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    } else {
        io::Error::other(err)
    }
}

impl Game for Minesweeper {
    fn name(&self) -> &str {
        "MineSweeper"
    }

    fn play(&mut self, console: &mut Console<'_>) -> io::Result<Option<Score>> {
        let mut engine = self.new_engine().map_err(engine_error)?;

        writeln!(console, "Welcome to Minesweeper!")?;
        writeln!(console, "Uncover tiles to reveal numbers or mines.")?;
        writeln!(console, "Numbers tell how many of the 8 adjacent tiles are mines.")?;
        print_help(console)?;
        writeln!(console, "Uncover all safe tiles to win!")?;
        print_board(console, &engine, false)?;

        loop {
            let Some(line) = console.prompt("Enter command: ")? else {
                log::debug!("input closed, abandoning game");
                writeln!(console)?;
                return Ok(None);
            };

            let command = match Command::parse(&line, engine.size()) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(console, "{err}")?;
                    continue;
                }
            };
            log::trace!("command: {command:?}");

            match command {
                Command::Quit => return Ok(None),
                Command::Help => print_help(console)?,
                Command::Flag(coords) => {
                    match engine.toggle_flag(coords) {
                        Ok(_) => {}
                        Err(GameError::CannotFlagRevealed) => {
                            writeln!(console, "Can't flag a revealed cell.")?;
                        }
                        Err(err) => return Err(engine_error(err)),
                    }
                    print_board(console, &engine, false)?;
                }
                Command::Reveal(coords) => {
                    let cell = engine.cell_at(coords);
                    if cell.is_flagged() {
                        writeln!(console, "Unflag first to reveal.")?;
                        continue;
                    }
                    if cell.is_revealed() {
                        writeln!(console, "Already revealed.")?;
                        continue;
                    }

                    let outcome = engine.reveal(coords).map_err(engine_error)?;
                    if outcome.hit_mine {
                        log::debug!("mine triggered at {:?}", engine.triggered_mine());
                        print_board(console, &engine, true)?;
                        writeln!(console, "BOOM! You hit a mine. Game over!")?;
                        return Ok(Some(LOSS));
                    }

                    print_board(console, &engine, false)?;
                    if engine.is_won() {
                        print_board(console, &engine, true)?;
                        writeln!(console, "Congratulations! You cleared all safe cells!")?;
                        return Ok(Some(WIN));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn corner_mine() -> Minesweeper {
        Minesweeper::with_layout(MineLayout::from_mine_coords((3, 3), &[(0, 0)]).unwrap())
    }

    fn run(game: &mut impl Game, script: &str) -> (io::Result<Option<Score>>, String) {
        let mut input = Cursor::new(script.to_owned());
        let mut output = Vec::new();
        let result = game.play(&mut Console::new(&mut input, &mut output));
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn name_is_exposed_through_the_contract() {
        let games: Vec<Box<dyn Game>> = vec![Box::new(Minesweeper::default())];
        assert_eq!(games[0].name(), "MineSweeper");
    }

    #[test]
    fn cascade_win_scores_one() {
        let (result, output) = run(&mut corner_mine(), "r 3 3\n");

        assert_eq!(result.unwrap(), Some(WIN));
        assert!(output.contains("Congratulations! You cleared all safe cells!"));
        assert!(output.ends_with("  1 2 3\n1 * 1  \n2 1 1  \n3      \nCongratulations! You cleared all safe cells!\n"));
    }

    #[test]
    fn win_shows_the_cleared_board_before_the_mines() {
        let (_, output) = run(&mut corner_mine(), "r 3 3\n");

        let cleared = output.find("1 . 1  \n2 1 1  \n3      \n").unwrap();
        let with_mines = output.find("1 * 1  \n2 1 1  \n3      \n").unwrap();
        assert!(cleared < with_mines);
    }

    #[test]
    fn status_line_tracks_flags() {
        let (_, output) = run(&mut corner_mine(), "f 1 1\nf 2 2\nf 2 2\nq\n");

        let status: Vec<_> = output
            .lines()
            .filter(|line| line.starts_with("Mines left:"))
            .collect();
        assert_eq!(
            status,
            ["Mines left: 1 of 1", "Mines left: 0 of 1", "Mines left: -1 of 1", "Mines left: 0 of 1"]
        );
    }

    #[test]
    fn mine_hit_scores_zero_and_shows_mines() {
        let (result, output) = run(&mut corner_mine(), "r 2 2\nr 1 1\n");

        assert_eq!(result.unwrap(), Some(LOSS));
        assert!(output.ends_with("  1 2 3\n1 * . .\n2 . 1 .\n3 . . .\nBOOM! You hit a mine. Game over!\n"));
    }

    #[test]
    fn quit_and_end_of_input_give_no_score() {
        assert_eq!(run(&mut corner_mine(), "q\n").0.unwrap(), None);
        assert_eq!(run(&mut corner_mine(), "f 1 1\n").0.unwrap(), None);
        assert_eq!(run(&mut corner_mine(), "").0.unwrap(), None);
    }

    #[test]
    fn bad_input_reprompts_without_changing_the_board() {
        let script = "\nr x 1\nr 4 1\nz 1 1\nr 1 1 1\nq\n";
        let (result, output) = run(&mut corner_mine(), script);

        assert_eq!(result.unwrap(), None);
        assert!(output.contains("Invalid. Use 'r row col' or 'f row col'"));
        assert!(output.contains("Invalid coordinates."));
        assert!(output.contains("Coordinates out of range (1-3)"));
        assert!(output.contains("Unknown command. Use 'r' or 'f'."));
        assert_eq!(output.matches("Enter command: ").count(), 6);
        assert!(!output.contains('*'));
    }

    #[test]
    fn refused_moves_are_reported() {
        let script = "f 1 2\nr 1 2\nr 2 2\nr 2 2\nf 2 2\nf 1 2\nr 1 2\nq\n";
        let (result, output) = run(&mut corner_mine(), script);

        assert_eq!(result.unwrap(), None);
        assert!(output.contains("1 . F ."));
        assert!(output.contains("Unflag first to reveal."));
        assert!(output.contains("Already revealed."));
        assert!(output.contains("Can't flag a revealed cell."));
        assert!(output.contains("1 . 1 ."));
    }

    #[test]
    fn help_is_reprinted_on_request() {
        let (_, output) = run(&mut corner_mine(), "h\nq\n");
        assert_eq!(output.matches("Commands: 'r row col'").count(), 2);
    }

    #[test]
    fn seeded_games_are_repeatable() {
        let mut game = Minesweeper::seeded(GameConfig::default(), 42).unwrap();
        let (_, first) = run(&mut game, "r 4 4\nq\n");
        let (_, second) = run(&mut game, "r 4 4\nq\n");
        assert_eq!(first, second);
    }

    #[test]
    fn misconfigured_board_is_never_offered() {
        let too_full = GameConfig::square(2, 4);
        let expected = GameError::TooManyMines { mines: 4, cells: 4 };

        assert_eq!(Minesweeper::new(too_full).unwrap_err(), expected);
        assert_eq!(Minesweeper::seeded(too_full, 9).unwrap_err(), expected);
        assert_eq!(Minesweeper::new(GameConfig::default()).unwrap().config(), GameConfig::default());
    }

    #[test]
    fn fixed_layout_is_replayed_every_game() {
        let mut game = corner_mine();
        for _ in 0..3 {
            let (result, _) = run(&mut game, "r 3 3\n");
            assert_eq!(result.unwrap(), Some(WIN));
        }
        assert_eq!(game.config(), GameConfig::square(3, 1));
    }
}
