use crate::config::EMPTY_GLYPH;
use crate::game::{Cell, Grid, COLUMN_COUNT};

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Occupied(marker) => marker.symbol(),
    }
}

/// Render the grid one row per line, top row first, e.g. `|--HA---|`.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for (_, column, cell) in grid.cells() {
        if column == 0 {
            out.push('|');
        }
        out.push(glyph(cell));
        if column == COLUMN_COUNT - 1 {
            out.push_str("|\n");
        }
    }
    out
}
