//! Maps objective vectors onto the epsilon grid.
//!
//! The grid is half-open: box `k` covers `[k * epsilon, (k + 1) * epsilon)`, so the coordinate
//! is `floor(value / epsilon)`, rounded toward negative infinity.

#[cfg(test)]
#[path = "../tests/unit/boxes_test.rs"]
mod boxes_test;

use crate::utils::Float;

/// Integer grid coordinates of a record once each objective is divided by its epsilon.
///
/// Coordinates are kept as integral floats: they compare exactly and never overflow, even for
/// large objective values divided by a tiny epsilon.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxVector(Vec<Float>);

impl BoxVector {
    /// Creates a box vector from coordinates, every coordinate is expected to be integral.
    pub fn new(coordinates: Vec<Float>) -> Self {
        debug_assert!(coordinates.iter().all(|c| c.fract() == 0.));
        Self(coordinates)
    }

    /// Returns box coordinates.
    pub fn coordinates(&self) -> &[Float] {
        self.0.as_slice()
    }

    /// Returns amount of coordinates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the minimization corner of the box in objective space.
    pub fn corner(&self, epsilons: &[Float]) -> Vec<Float> {
        self.0.iter().zip(epsilons.iter()).map(|(coordinate, epsilon)| coordinate * epsilon).collect()
    }
}

/// Computes box coordinates: `floor(objective[i] / epsilon[i])`.
pub fn box_index(objectives: &[Float], epsilons: &[Float]) -> BoxVector {
    debug_assert_eq!(objectives.len(), epsilons.len());

    BoxVector(objectives.iter().zip(epsilons.iter()).map(|(value, epsilon)| (value / epsilon).floor()).collect())
}

/// Computes squared euclidean distance from objective vector to the minimization corner of its box.
/// Used only to pick a representative between records sharing the same box.
pub fn corner_distance(objectives: &[Float], boxes: &BoxVector, epsilons: &[Float]) -> Float {
    debug_assert_eq!(objectives.len(), boxes.len());

    objectives.iter().zip(boxes.corner(epsilons)).map(|(value, corner)| (value - corner).powi(2)).sum()
}
