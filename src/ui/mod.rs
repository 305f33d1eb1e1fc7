//! Terminal UI: the grid with a column selector, played against the
//! computer opponent.

mod app;
mod game_view;

pub use app::App;
