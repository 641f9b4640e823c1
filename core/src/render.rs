use core::fmt;

use crate::*;

/// Console rendering of a [`PlayEngine`] with 1-based row and column labels.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    engine: &'a PlayEngine,
    show_mines: bool,
}

impl PlayEngine {
    /// With `show_mines` every mine is drawn as `*`, as on the final board of a game.
    pub fn view(&self, show_mines: bool) -> BoardView<'_> {
        BoardView {
            engine: self,
            show_mines,
        }
    }
}

impl BoardView<'_> {
    fn glyph(&self, coords: Coord2) -> char {
        if self.show_mines && self.engine.has_mine_at(coords) {
            '*'
        } else {
            self.engine.cell_at(coords).glyph()
        }
    }
}

fn label_width(n: Coord) -> usize {
    match n {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.engine.size();
        let row_width = label_width(rows);
        let col_width = label_width(cols);

        write!(f, "{:row_width$}", "")?;
        for col in 1..=cols {
            write!(f, " {col:>col_width$}")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{:>row_width$}", row + 1)?;
            for col in 0..cols {
                write!(f, " {:>col_width$}", self.glyph((row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
