//! An archive of epsilon-nondominated entries maintained incrementally.
//!
//! Invariant: box vectors of any two archived entries are incomparable, i.e. no entry
//! box-dominates another one and every box holds at most one entry.
//!
//! Time complexity of insertion is `O(N * K)`, where `N` is the archive size and `K` the number
//! of objectives.

#[cfg(test)]
#[path = "../tests/unit/archive_test.rs"]
mod archive_test;

use crate::boxes::{BoxVector, box_index, corner_distance};
use crate::dominance::{BoxRelation, compare_boxes};
use crate::objectives::ObjectiveVector;
use crate::utils::{Float, compare_floats, maybe_parallel_collect};
use std::cmp::Ordering;

/// An archive member: an item together with values derived from its objectives.
#[derive(Clone, Debug)]
pub struct ArchiveEntry<T> {
    item: T,
    objectives: ObjectiveVector,
    boxes: BoxVector,
    distance: Float,
}

impl<T> ArchiveEntry<T> {
    /// Creates a new entry computing its box vector and corner distance.
    pub fn new(item: T, objectives: ObjectiveVector, epsilons: &[Float]) -> Self {
        let boxes = box_index(objectives.as_slice(), epsilons);
        let distance = corner_distance(objectives.as_slice(), &boxes, epsilons);

        Self { item, objectives, boxes, distance }
    }

    /// Returns the archived item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns objective vector in minimization space.
    pub fn objectives(&self) -> &[Float] {
        self.objectives.as_slice()
    }

    /// Returns box vector.
    pub fn boxes(&self) -> &BoxVector {
        &self.boxes
    }

    /// Returns squared distance to the minimization corner of the box.
    pub fn corner_distance(&self) -> Float {
        self.distance
    }
}

/// A result of an insertion attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Candidate was added, `removed` entries were dominated or replaced by it.
    Accepted {
        /// Amount of evicted entries.
        removed: usize,
    },
    /// Candidate was dominated or lost a same box tie-break.
    Rejected,
}

/// Keeps epsilon-nondominated entries in insertion order.
#[derive(Clone, Debug)]
pub struct Archive<T> {
    entries: Vec<ArchiveEntry<T>>,
    parallel_threshold: Option<usize>,
}

impl<T> Default for Archive<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), parallel_threshold: None }
    }
}

impl<T> Archive<T> {
    /// Sets archive size above which the candidate is compared against entries in parallel.
    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns amount of archived entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over archived entries in their archive order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchiveEntry<T>> + '_ {
        self.entries.iter()
    }

    /// Iterates over archived items in their archive order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.item)
    }
}

impl<T: Send + Sync> Archive<T> {
    /// Sorts candidate into the archive. The candidate is rejected if any entry box-dominates it
    /// or sits in its box at the same or smaller corner distance. Otherwise, every entry it
    /// box-dominates or replaces in its box is removed and the candidate is appended.
    pub fn insert_or_reject(&mut self, candidate: ArchiveEntry<T>) -> Insertion {
        let relations = maybe_parallel_collect(self.entries.as_slice(), self.parallel_threshold, |entry| {
            compare_boxes(&entry.boxes, &candidate.boxes)
        });

        let is_rejected = relations.iter().zip(self.entries.iter()).any(|(relation, entry)| match relation {
            BoxRelation::Dominates => true,
            // ties keep the entry which is already present
            BoxRelation::Equal => compare_floats(entry.distance, candidate.distance) != Ordering::Greater,
            BoxRelation::Dominated | BoxRelation::Incomparable => false,
        });

        if is_rejected {
            return Insertion::Rejected;
        }

        let size = self.entries.len();
        let mut relations = relations.into_iter();
        self.entries.retain(|_| !matches!(relations.next(), Some(BoxRelation::Dominated | BoxRelation::Equal)));
        let removed = size - self.entries.len();

        self.entries.push(candidate);

        Insertion::Accepted { removed }
    }
}
