//! Core Connect Four game logic: the grid with gravity drops and win
//! detection, the players, and the round state machine that alternates
//! turns between them.

mod grid;
mod player;
mod round;

pub use grid::{Cell, Grid, Marker, COLUMN_COUNT, ROW_COUNT};
pub use player::{Player, PlayerKind};
pub use round::{Round, RoundOutcome, TurnOutcome};
