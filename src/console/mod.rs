//! Line-oriented console front end: draws the grid as text, reads 1-based
//! column numbers, and runs rounds until the player stops restarting.

mod input;
pub mod render;
mod session;

pub use input::{parse_column, wants_restart};
pub use session::{ConsoleSession, SessionSummary};
