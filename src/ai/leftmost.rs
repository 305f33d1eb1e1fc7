use crate::game::Grid;

use super::agent::Agent;

/// Always drops into the leftmost column that still has room.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftmostAgent;

impl LeftmostAgent {
    pub fn new() -> Self {
        LeftmostAgent
    }
}

impl Agent for LeftmostAgent {
    fn select_column(&mut self, grid: &Grid) -> Option<usize> {
        grid.available_columns().next()
    }

    fn name(&self) -> &str {
        "Leftmost"
    }
}
