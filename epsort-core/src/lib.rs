//! This crate computes the epsilon-nondominated subset of one or more tables of records.
//!
//! Objective space is discretized into a grid with a resolution (epsilon) per objective. A record
//! survives only if no other record sits in a box which is no worse in every objective and
//! strictly better in at least one, and if it is the closest record to the best corner of its
//! own box. Typical use is merging results of several independent runs of a stochastic
//! multi-objective search into a single approximation of the efficient frontier.
//!
//! # Examples
//!
//! ```
//! use epsort_core::prelude::*;
//!
//! let tables = vec![vec![vec![1., 5.], vec![5., 1.], vec![3., 3.]], vec![vec![6., 6.]]];
//! let config = SortConfigBuilder::default().with_epsilons(vec![0.1, 0.1]).build()?;
//!
//! let survivors = eps_sort(&tables, &config)?;
//! assert_eq!(survivors.len(), 3);
//!
//! let masks = flag_nondominated(&tables, &config)?;
//! assert_eq!(masks, vec![vec![true, true, true], vec![false]]);
//! # Ok::<(), SortError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod archive;
pub mod boxes;
pub mod config;
pub mod dominance;
pub mod objectives;
pub mod prelude;
pub mod records;
pub mod sorting;
pub mod utils;

pub use self::records::{Provenance, Record};
