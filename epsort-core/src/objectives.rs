//! Extracts objective vectors from records.
//!
//! All downstream logic works in minimization space: maximized objectives are negated once
//! here, so no other part of the sort needs to know about objective directions.

#[cfg(test)]
#[path = "../tests/unit/objectives_test.rs"]
mod objectives_test;

use crate::boxes::{BoxVector, box_index};
use crate::records::{Provenance, Record};
use crate::utils::{Float, SortError, SortResult};

/// An ordered sequence of objective values, maximized objectives are negated.
pub type ObjectiveVector = Vec<Float>;

/// A default epsilon used for every objective when no epsilons are specified.
pub const DEFAULT_EPSILON: Float = 1e-9;

/// A concrete mapping from record columns to objectives, resolved once per run.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveLayout {
    columns: Vec<usize>,
    maximized: Vec<bool>,
    epsilons: Vec<Float>,
    required_width: usize,
}

impl ObjectiveLayout {
    /// Creates a new instance of `ObjectiveLayout` from absolute column indices, a direction flag
    /// per objective and epsilons (one per objective, `DEFAULT_EPSILON` for all if not specified).
    pub fn new(columns: Vec<usize>, maximized: Vec<bool>, epsilons: Option<Vec<Float>>) -> SortResult<Self> {
        if columns.is_empty() {
            return Err(SortError::configuration("no objectives specified"));
        }

        if maximized.len() != columns.len() {
            return Err(SortError::configuration(format!(
                "{} directions specified, but {} objectives",
                maximized.len(),
                columns.len()
            )));
        }

        let epsilons = epsilons.unwrap_or_else(|| vec![DEFAULT_EPSILON; columns.len()]);
        if epsilons.len() != columns.len() {
            return Err(SortError::configuration(format!(
                "{} epsilons specified, but {} objectives",
                epsilons.len(),
                columns.len()
            )));
        }
        validate_epsilons(&epsilons)?;

        let required_width = columns.iter().max().map_or(0, |column| column + 1);

        Ok(Self { columns, maximized, epsilons, required_width })
    }

    /// Returns amount of objectives.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Returns absolute column index of every objective.
    pub fn columns(&self) -> &[usize] {
        self.columns.as_slice()
    }

    /// Returns epsilon of every objective.
    pub fn epsilons(&self) -> &[Float] {
        self.epsilons.as_slice()
    }

    /// Returns true if objective at given position is maximized.
    pub fn is_maximized(&self, objective: usize) -> bool {
        self.maximized.get(objective).copied().unwrap_or(false)
    }

    /// Returns minimal amount of columns a record must have.
    pub fn required_width(&self) -> usize {
        self.required_width
    }

    /// Extracts objective vector from the record. Maximized values are negated.
    pub fn extract<R: Record + ?Sized>(&self, record: &R, provenance: Provenance) -> SortResult<ObjectiveVector> {
        let width = record.width();
        if width < self.required_width {
            return Err(SortError::malformed(
                provenance,
                format!("not enough columns: expected at least {}, got {width}", self.required_width),
            ));
        }

        self.columns
            .iter()
            .zip(self.maximized.iter())
            .map(|(&column, &is_maximized)| {
                let value = record
                    .value(column)
                    .ok_or_else(|| SortError::malformed(provenance, format!("column {column} is missing")))?
                    .map_err(|err| SortError::malformed(provenance, format!("{err} in column {column}")))?;

                if !value.is_finite() {
                    let reason = format!("non-finite value {value} in column {column}");
                    return Err(SortError::malformed(provenance, reason));
                }

                Ok(if is_maximized { -value } else { value })
            })
            .collect()
    }

    /// Returns box vector of given objective vector.
    pub fn boxes(&self, objectives: &[Float]) -> BoxVector {
        box_index(objectives, self.epsilons.as_slice())
    }
}

/// Checks that every epsilon is finite and strictly positive.
pub fn validate_epsilons(epsilons: &[Float]) -> SortResult<()> {
    match epsilons.iter().enumerate().find(|(_, epsilon)| !(epsilon.is_finite() && **epsilon > 0.)) {
        Some((idx, epsilon)) => {
            Err(SortError::configuration(format!("epsilon {epsilon} at position {idx} must be finite and positive")))
        }
        None => Ok(()),
    }
}
