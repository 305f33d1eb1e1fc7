use crate::game::COLUMN_COUNT;

/// Parse a 1-based column number typed by the player into a 0-based
/// column index. Returns `None` for anything that is not a column.
pub fn parse_column(line: &str) -> Option<usize> {
    let number: usize = line.trim().parse().ok()?;
    (1..=COLUMN_COUNT).contains(&number).then(|| number - 1)
}

/// Whether the end-of-round answer asks for another round.
pub fn wants_restart(line: &str) -> bool {
    line.trim() == "-r"
}
