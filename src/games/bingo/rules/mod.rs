//! Bingo rules as pure functions over a board and a selection.

pub mod hint;
pub mod win;

pub use hint::find_winning_move;
pub use win::{check_win, is_complete, lines};
