//! Terminal-state rules for connect four.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{check_winner, winner};
