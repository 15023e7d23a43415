//! Compares two numeric tables for set equality within a tolerance.

#[cfg(test)]
#[path = "../tests/unit/compare_test.rs"]
mod compare_test;

use epsort_core::utils::{Float, GenericResult, compare_floats};
use std::fmt;

/// A result of tables comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    /// Every left row has a matching right row.
    Equal {
        /// Tolerance used.
        tolerance: Float,
    },
    /// Only some left rows have a matching right row.
    Partial {
        /// Pairs of matched left and right row indices.
        matches: Vec<(usize, usize)>,
        /// Amount of left rows.
        rows: usize,
    },
    /// Tables have a different amount of columns.
    Incompatible {
        /// Shape of left table: rows and columns.
        left: (usize, usize),
        /// Shape of right table: rows and columns.
        right: (usize, usize),
    },
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal { tolerance } => write!(f, "Equal within {}", format_general(*tolerance, 3)),
            Self::Partial { matches, rows } => write!(f, "{} matches of {rows} rows.", matches.len()),
            Self::Incompatible { left, right } => {
                write!(f, "Cannot compare ({}, {}) to ({}, {})", left.0, left.1, right.0, right.1)
            }
        }
    }
}

/// Compares tables ignoring row order and order of values within a row: values of every row are
/// sorted, then each left row is matched with the first unmatched right row where every value
/// differs by less than `tolerance`.
pub fn compare_tables(left: &[Vec<Float>], right: &[Vec<Float>], tolerance: Float) -> GenericResult<Comparison> {
    let left_shape = get_shape(left, "left")?;
    let right_shape = get_shape(right, "right")?;

    if left_shape.1 != right_shape.1 && !left.is_empty() && !right.is_empty() {
        return Ok(Comparison::Incompatible { left: left_shape, right: right_shape });
    }

    let left = sort_rows(left);
    let right = sort_rows(right);

    let mut is_matched = vec![false; right.len()];
    let matches = left
        .iter()
        .enumerate()
        .filter_map(|(left_idx, left_row)| {
            let right_idx = right.iter().enumerate().position(|(right_idx, right_row)| {
                !is_matched[right_idx]
                    && left_row.iter().zip(right_row.iter()).all(|(a, b)| (a - b).abs() < tolerance)
            })?;
            is_matched[right_idx] = true;

            Some((left_idx, right_idx))
        })
        .collect::<Vec<_>>();

    Ok(if matches.len() == left.len() {
        Comparison::Equal { tolerance }
    } else {
        Comparison::Partial { matches, rows: left.len() }
    })
}

fn get_shape(table: &[Vec<Float>], name: &str) -> GenericResult<(usize, usize)> {
    let width = table.first().map_or(0, |row| row.len());

    if table.iter().any(|row| row.len() != width) {
        return Err(format!("rows of {name} table have different amount of columns").into());
    }

    Ok((table.len(), width))
}

fn sort_rows(table: &[Vec<Float>]) -> Vec<Vec<Float>> {
    table
        .iter()
        .map(|row| {
            let mut row = row.clone();
            row.sort_by(|a, b| compare_floats(*a, *b));
            row
        })
        .collect()
}

/// Formats value with given amount of significant digits, switching to exponent notation
/// for small and large magnitudes: `1e-06`, `0.001`, `1.23e+03`.
fn format_general(value: Float, precision: usize) -> String {
    if value == 0. || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", precision.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else { return scientific };
    let exponent = exponent.parse::<i32>().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{value:.decimals$}").as_str()).to_string()
    }
}

fn trim_fraction(value: &str) -> &str {
    if value.contains('.') { value.trim_end_matches('0').trim_end_matches('.') } else { value }
}
