//! Game rules: winning-line enumeration and terminal detection

pub mod lines;
pub mod win;

pub use lines::LineSet;
pub use win::{is_draw, winner, winner_at};
