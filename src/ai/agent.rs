use crate::game::Grid;

/// Interface for computer opponents.
pub trait Agent {
    /// Pick a 0-based column for the next disc, or `None` when no column
    /// can take one.
    fn select_column(&mut self, grid: &Grid) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
