//! Sort run configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::objectives::{ObjectiveLayout, validate_epsilons};
use crate::utils::{Float, SortError, SortResult};

/// Selects columns of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Every column of the record.
    All,
    /// Explicitly listed column indices.
    Indices(Vec<usize>),
}

/// Specifies how column indices are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexOrigin {
    /// Zero is the first column.
    #[default]
    Start,
    /// Zero is the last column.
    End,
}

/// Parameters of an epsilon sort run.
#[derive(Clone, Debug, PartialEq)]
pub struct SortConfig {
    objectives: ColumnSelector,
    maximize: Option<ColumnSelector>,
    epsilons: Option<Vec<Float>>,
    origin: IndexOrigin,
    parallel_threshold: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            objectives: ColumnSelector::All,
            maximize: None,
            epsilons: None,
            origin: IndexOrigin::Start,
            parallel_threshold: None,
        }
    }
}

impl SortConfig {
    /// Returns objective columns selector.
    pub fn objectives(&self) -> &ColumnSelector {
        &self.objectives
    }

    /// Returns index origin.
    pub fn origin(&self) -> IndexOrigin {
        self.origin
    }

    /// Returns archive size above which comparisons run in parallel.
    pub fn parallel_threshold(&self) -> Option<usize> {
        self.parallel_threshold
    }

    /// Returns true if objective columns can be resolved only when record width is known.
    pub fn needs_width(&self) -> bool {
        self.objectives == ColumnSelector::All || self.origin == IndexOrigin::End
    }

    /// Resolves configuration into a concrete objective layout. Width of the first record is
    /// used when columns are not fully specified by configuration itself: if it is required but
    /// not given (e.g. input is empty), returns `None`.
    pub fn resolve(&self, width: Option<usize>) -> SortResult<Option<ObjectiveLayout>> {
        let width = match (self.needs_width(), width) {
            (true, None) => return Ok(None),
            (true, Some(width)) => Some(width),
            (false, _) => None,
        };

        let columns = match &self.objectives {
            ColumnSelector::All => (0..width.unwrap_or_default()).collect(),
            ColumnSelector::Indices(indices) => self.to_absolute(indices, width)?,
        };

        let maximize = match &self.maximize {
            None => vec![],
            Some(ColumnSelector::All) => columns.clone(),
            Some(ColumnSelector::Indices(indices)) => self.to_absolute(indices, width)?,
        };

        if let Some(column) = maximize.iter().find(|column| !columns.contains(column)) {
            return Err(SortError::configuration(format!("column {column} is maximized but it is not an objective")));
        }

        let maximized = columns.iter().map(|column| maximize.contains(column)).collect();

        ObjectiveLayout::new(columns, maximized, self.epsilons.clone()).map(Some)
    }

    fn to_absolute(&self, indices: &[usize], width: Option<usize>) -> SortResult<Vec<usize>> {
        indices
            .iter()
            .map(|&index| match width {
                Some(width) if index >= width => Err(SortError::configuration(format!(
                    "column {index} is out of range for {width} columns"
                ))),
                Some(width) if self.origin == IndexOrigin::End => Ok(width - 1 - index),
                _ => Ok(index),
            })
            .collect()
    }
}

/// Provides the way to build sort configuration.
#[derive(Default)]
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Sets explicit objective columns. Default is all columns.
    pub fn with_objectives(mut self, columns: Vec<usize>) -> Self {
        self.config.objectives = ColumnSelector::Indices(columns);
        self
    }

    /// Uses all columns as objectives.
    pub fn with_all_objectives(mut self) -> Self {
        self.config.objectives = ColumnSelector::All;
        self
    }

    /// Sets objective columns to maximize. Default is to minimize all objectives.
    pub fn with_maximize(mut self, columns: Vec<usize>) -> Self {
        self.config.maximize = Some(ColumnSelector::Indices(columns));
        self
    }

    /// Maximizes all objectives.
    pub fn with_maximize_all(mut self) -> Self {
        self.config.maximize = Some(ColumnSelector::All);
        self
    }

    /// Sets epsilons, one per objective. Default is `DEFAULT_EPSILON` for each objective.
    pub fn with_epsilons(mut self, epsilons: Vec<Float>) -> Self {
        self.config.epsilons = Some(epsilons);
        self
    }

    /// Sets how column indices are counted.
    pub fn with_index_origin(mut self, origin: IndexOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    /// Sets archive size above which dominance comparisons run in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = Some(threshold);
        self
    }

    /// Builds configuration checking everything which does not depend on input data.
    pub fn build(self) -> SortResult<SortConfig> {
        if let Some(epsilons) = self.config.epsilons.as_ref() {
            validate_epsilons(epsilons)?;
        }

        // NOTE when columns are fully specified, mismatches are detected before any record is read
        self.config.resolve(None)?;

        Ok(self.config)
    }
}
