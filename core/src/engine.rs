use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns the mine layout and the player-visible cell grid of one game.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    board: Array2<EngineCell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: EngineState::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(generator: impl MinefieldGenerator, config: GameConfig) -> Result<Self> {
        generator.generate(config).map(Self::new)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.board[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    /// True once every safe cell has been revealed.
    pub fn is_won(&self) -> bool {
        self.revealed_count == self.mine_layout.safe_cell_count()
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        use EngineCell::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = &mut self.board[coords.to_nd_index()];
        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                Ok(true)
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                Ok(false)
            }
            Revealed(_) => Err(GameError::CannotFlagRevealed),
        }
    }

    /// Reveals `coords`, flooding outwards through zero cells.
    ///
    /// Flagged and already revealed targets are left alone and yield an empty outcome. A mine yields
    /// [`RevealOutcome::mine`] without touching any cell and ends the game.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if !matches!(self.cell_at(coords), EngineCell::Hidden) {
            return Ok(RevealOutcome::no_change());
        }

        if self.mine_layout[coords] {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(RevealOutcome::mine());
        }

        let newly_revealed = self.flood_reveal(coords);
        log::trace!(
            "reveal at {coords:?} opened {} cells",
            newly_revealed.len()
        );

        if self.is_won() {
            self.end_game(true);
        } else {
            self.mark_started();
        }

        Ok(RevealOutcome {
            hit_mine: false,
            newly_revealed,
        })
    }

    /// Worklist flood fill. Cells are marked revealed when pushed, so each is pushed at most once and
    /// the origin is never rescanned.
    fn flood_reveal(&mut self, origin: Coord2) -> Vec<Coord2> {
        let mut newly_revealed = Vec::new();
        let mut to_visit = Vec::new();

        self.open_cell(origin, &mut newly_revealed, &mut to_visit);

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if matches!(self.cell_at(pos), EngineCell::Hidden) && !self.mine_layout[pos] {
                    self.open_cell(pos, &mut newly_revealed, &mut to_visit);
                }
            }
        }

        newly_revealed
    }

    fn open_cell(
        &mut self,
        coords: Coord2,
        newly_revealed: &mut Vec<Coord2>,
        to_visit: &mut Vec<Coord2>,
    ) {
        let adjacent_mines = self.mine_layout.adjacent_mine_count(coords);
        self.board[coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
        self.revealed_count += 1;
        newly_revealed.push(coords);

        if adjacent_mines == 0 {
            to_visit.push(coords);
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("game ended: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
