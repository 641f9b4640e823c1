//! Console front-end: the game contract shared by every parlor game, and the minesweeper driver.

pub use command::*;
pub use game::*;
pub use minesweeper::*;

mod command;
mod game;
mod minesweeper;
