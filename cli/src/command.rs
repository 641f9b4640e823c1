use parlor_core::{Coord, Coord2};
use thiserror::Error;

/// A parsed console command, with coordinates already converted to 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid. Use 'r row col' or 'f row col'")]
    WrongShape,
    #[error("Invalid coordinates.")]
    BadNumber,
    #[error("{}", out_of_range_message(.rows, .cols))]
    OutOfRange { rows: Coord, cols: Coord },
    #[error("Unknown command. Use 'r' or 'f'.")]
    UnknownCommand,
}

fn out_of_range_message(rows: &Coord, cols: &Coord) -> String {
    if rows == cols {
        format!("Coordinates out of range (1-{rows})")
    } else {
        format!("Coordinates out of range (rows 1-{rows}, columns 1-{cols})")
    }
}

impl Command {
    /// Parses a normalized input line against a board of `size`.
    pub fn parse(line: &str, size: Coord2) -> Result<Self, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["q" | "quit"] => return Ok(Self::Quit),
            ["h" | "help"] => return Ok(Self::Help),
            _ => {}
        }

        let [cmd, row, col] = parts.as_slice() else {
            return Err(CommandError::WrongShape);
        };

        let (Ok(row), Ok(col)) = (row.parse::<i64>(), col.parse::<i64>()) else {
            return Err(CommandError::BadNumber);
        };

        let (rows, cols) = size;
        let out_of_range = CommandError::OutOfRange { rows, cols };
        let to_index = |value: i64, bound: Coord| {
            value
                .checked_sub(1)
                .and_then(|index| Coord::try_from(index).ok())
                .filter(|&index| index < bound)
        };
        let coords = to_index(row, rows)
            .zip(to_index(col, cols))
            .ok_or(out_of_range)?;

        match cmd.chars().next() {
            Some('r') => Ok(Self::Reveal(coords)),
            Some('f') => Ok(Self::Flag(coords)),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Coord2 = (8, 8);

    #[test]
    fn parses_reveal_and_flag_as_zero_based() {
        assert_eq!(Command::parse("r 1 1", SIZE), Ok(Command::Reveal((0, 0))));
        assert_eq!(Command::parse("f 8 3", SIZE), Ok(Command::Flag((7, 2))));
        assert_eq!(Command::parse("reveal 2  5", SIZE), Ok(Command::Reveal((1, 4))));
        assert_eq!(Command::parse("flag 4 4", SIZE), Ok(Command::Flag((3, 3))));
    }

    #[test]
    fn parses_quit_and_help() {
        assert_eq!(Command::parse("q", SIZE), Ok(Command::Quit));
        assert_eq!(Command::parse("quit", SIZE), Ok(Command::Quit));
        assert_eq!(Command::parse("help", SIZE), Ok(Command::Help));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(Command::parse("", SIZE), Err(CommandError::WrongShape));
        assert_eq!(Command::parse("r 1", SIZE), Err(CommandError::WrongShape));
        assert_eq!(Command::parse("r 1 2 3", SIZE), Err(CommandError::WrongShape));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert_eq!(Command::parse("r a 1", SIZE), Err(CommandError::BadNumber));
        assert_eq!(Command::parse("f 1 2.5", SIZE), Err(CommandError::BadNumber));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let err = CommandError::OutOfRange { rows: 8, cols: 8 };
        assert_eq!(Command::parse("r 0 1", SIZE), Err(err));
        assert_eq!(Command::parse("r 1 9", SIZE), Err(err));
        assert_eq!(Command::parse("f -3 1", SIZE), Err(err));
        assert_eq!(Command::parse("f 1000 1", SIZE), Err(err));
        assert_eq!(err.to_string(), "Coordinates out of range (1-8)");
    }

    #[test]
    fn range_message_names_both_axes_on_rectangular_boards() {
        assert_eq!(
            Command::parse("r 3 1", (2, 5)).unwrap_err().to_string(),
            "Coordinates out of range (rows 1-2, columns 1-5)"
        );
    }

    #[test]
    fn rejects_unknown_command_after_validating_coordinates() {
        assert_eq!(Command::parse("x 1 1", SIZE), Err(CommandError::UnknownCommand));
        assert_eq!(Command::parse("x 9 9", SIZE), Err(CommandError::OutOfRange { rows: 8, cols: 8 }));
    }
}
