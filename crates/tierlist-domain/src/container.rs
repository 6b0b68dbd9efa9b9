//! Container keys.
//!
//! Grid cells are keyed `r{row}-c{col}`; the pool uses a fixed sentinel.

pub const POOL_ID: &str = "__pool__";

pub fn cell_key(row: usize, col: usize) -> String {
    format!("r{}-c{}", row, col)
}

/// Parses a `r{row}-c{col}` key. Anything else, including the pool, is `None`.
pub fn parse_cell_key(key: &str) -> Option<(usize, usize)> {
    let (row, col) = key.strip_prefix('r')?.split_once("-c")?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(row) || !digits(col) {
        return None;
    }
    Some((row.parse().ok()?, col.parse().ok()?))
}
