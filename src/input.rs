//! Sanitization of user-entered cell text and dimension values.
//!
//! Nothing here fails: malformed input is coerced to a usable value instead.

use crate::grid::Grid;
use crate::util::GridConvResult;

/// Largest row or column count accepted by the front end.
pub const MAX_DIM: usize = 20;

/// Floors a finite value to an integer; non-finite values become 0.
///
/// Values beyond the `i64` range saturate.
pub fn truncate_value(value: f64) -> i64 {
    if value.is_finite() {
        value.floor() as i64
    } else {
        0
    }
}

/// Parses cell text as a number and floors it.
///
/// Surrounding whitespace is ignored. Besides decimal and exponent notation,
/// unsigned `0x`, `0o` and `0b` integer literals are accepted. Text that does
/// not parse, including the empty string, becomes 0.
pub fn parse_cell(text: &str) -> i64 {
    let text = text.trim();
    if let Some(value) = parse_prefixed_int(text) {
        return truncate_value(value);
    }
    text.parse::<f64>().map_or(0, truncate_value)
}

/// Parses `0x`/`0o`/`0b` literals; signs and empty digit strings are rejected.
fn parse_prefixed_int(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0f64, |acc, d| acc * f64::from(radix) + f64::from(d));
    Some(value)
}

/// Clamps a dimension input to `1..=max`; a missing value becomes 1.
pub fn sanitize_dim(value: Option<i64>, max: usize) -> usize {
    let max = max.max(1);
    match value {
        Some(v) if v >= 1 => usize::try_from(v).map_or(max, |v| v.min(max)),
        _ => 1,
    }
}

/// Builds a `rows x cols` grid from the top-left block of a cell buffer.
///
/// `cells` may be larger than the requested block; cells it does not cover
/// become 0.
pub fn grid_from_cells<R, S>(rows: usize, cols: usize, cells: &[R]) -> GridConvResult<Grid>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut grid = Grid::zeros(rows, cols)?;
    for (row, line) in cells.iter().take(rows).enumerate() {
        for (col, text) in line.as_ref().iter().take(cols).enumerate() {
            grid.set(row, col, parse_cell(text.as_ref()))?;
        }
    }
    Ok(grid)
}
