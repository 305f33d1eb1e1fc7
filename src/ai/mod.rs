mod agent;
mod leftmost;

pub use agent::Agent;
pub use leftmost::LeftmostAgent;
