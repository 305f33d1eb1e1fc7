//! # Connect Four
//!
//! Connect Four on the classic 6x7 grid: a human against a computer
//! opponent that always drops into the leftmost open column. Played either
//! as a line-based console game or in a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, players, round state machine
//! - [`ai`]: Agent trait and the leftmost-column opponent
//! - [`console`]: Text rendering, column parsing, the console session loop
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
