//! Sort configuration file.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::io::{ReaderOptions, WriterOptions};
use crate::ranges::parse_index_range;
use epsort_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A sort configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Objective columns. Default is all columns.
    pub objectives: Option<Vec<ColumnRange>>,
    /// Objective columns to maximize.
    pub maximize: Option<Vec<ColumnRange>>,
    /// Maximizes all objectives when true.
    pub maximize_all: Option<bool>,
    /// Epsilons, one per objective.
    pub epsilons: Option<Vec<Float>>,
    /// Counts column indices from the last column when true.
    pub from_end: Option<bool>,
    /// Archive size above which comparisons run in parallel.
    pub parallel_threshold: Option<usize>,
    /// Input reading settings.
    pub input: Option<InputConfig>,
    /// Output writing settings.
    pub output: Option<OutputConfig>,
}

/// Either a single column index or a range string like `3-5`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColumnRange {
    /// A single column index.
    Index(usize),
    /// A range string, bounds are inclusive.
    Range(String),
}

/// Input reading settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    /// Column delimiter. Default is a single space.
    pub delimiter: Option<String>,
    /// Comment line prefixes.
    pub comment: Option<Vec<String>>,
    /// Amount of header lines to skip in every input.
    pub header: Option<usize>,
    /// Skips blank lines.
    pub blank: Option<bool>,
}

/// Output writing settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Appends input name to every row.
    pub contribution: Option<bool>,
    /// Appends source line number to every row.
    pub line_number: Option<bool>,
    /// Writes only objective columns.
    pub only_objectives: Option<bool>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

impl Config {
    /// Merges two configs: values set in `other` take precedence.
    pub fn merge(self, other: Config) -> Config {
        let input = match (self.input, other.input) {
            (Some(base), Some(other)) => Some(InputConfig {
                delimiter: other.delimiter.or(base.delimiter),
                comment: other.comment.or(base.comment),
                header: other.header.or(base.header),
                blank: other.blank.or(base.blank),
            }),
            (base, other) => other.or(base),
        };

        let output = match (self.output, other.output) {
            (Some(base), Some(other)) => Some(OutputConfig {
                contribution: other.contribution.or(base.contribution),
                line_number: other.line_number.or(base.line_number),
                only_objectives: other.only_objectives.or(base.only_objectives),
            }),
            (base, other) => other.or(base),
        };

        Config {
            objectives: other.objectives.or(self.objectives),
            maximize: other.maximize.or(self.maximize),
            maximize_all: other.maximize_all.or(self.maximize_all),
            epsilons: other.epsilons.or(self.epsilons),
            from_end: other.from_end.or(self.from_end),
            parallel_threshold: other.parallel_threshold.or(self.parallel_threshold),
            input,
            output,
        }
    }
}

/// Creates sort configuration.
pub fn create_sort_config(config: &Config) -> GenericResult<SortConfig> {
    let mut builder = SortConfigBuilder::default();

    if let Some(objectives) = config.objectives.as_ref() {
        builder = builder.with_objectives(to_indices(objectives)?);
    }

    if config.maximize_all.unwrap_or(false) {
        builder = builder.with_maximize_all();
    } else if let Some(maximize) = config.maximize.as_ref() {
        builder = builder.with_maximize(to_indices(maximize)?);
    }

    if let Some(epsilons) = config.epsilons.as_ref() {
        builder = builder.with_epsilons(epsilons.clone());
    }

    if config.from_end.unwrap_or(false) {
        builder = builder.with_index_origin(IndexOrigin::End);
    }

    if let Some(threshold) = config.parallel_threshold {
        builder = builder.with_parallel_threshold(threshold);
    }

    builder.build().map_err(GenericError::from)
}

/// Creates input reading options.
pub fn create_reader_options(config: &Config) -> ReaderOptions {
    let input = config.input.clone().unwrap_or_default();
    let defaults = ReaderOptions::default();

    ReaderOptions {
        delimiter: input.delimiter.unwrap_or(defaults.delimiter),
        comments: input.comment.unwrap_or(defaults.comments),
        header: input.header.unwrap_or(defaults.header),
        skip_blank: input.blank.unwrap_or(defaults.skip_blank),
    }
}

/// Creates output writing options. Objective columns, if requested, are resolved against
/// the width of the first row.
pub fn create_writer_options(
    config: &Config,
    sort_config: &SortConfig,
    width: Option<usize>,
) -> GenericResult<WriterOptions> {
    let output = config.output.clone().unwrap_or_default();
    let delimiter = create_reader_options(config).delimiter;

    let columns = if output.only_objectives.unwrap_or(false) {
        sort_config.resolve(width).map_err(GenericError::from)?.map(|layout| layout.columns().to_vec())
    } else {
        None
    };

    Ok(WriterOptions {
        delimiter,
        contribution: output.contribution.unwrap_or(false),
        line_number: output.line_number.unwrap_or(false),
        columns,
    })
}

fn to_indices(ranges: &[ColumnRange]) -> GenericResult<Vec<usize>> {
    ranges.iter().try_fold(Vec::new(), |mut acc, range| {
        match range {
            ColumnRange::Index(index) => acc.push(*index),
            ColumnRange::Range(range) => acc.extend(parse_index_range(range.as_str())?),
        }

        Ok(acc)
    })
}
