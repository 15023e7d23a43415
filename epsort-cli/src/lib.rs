//! A command line interface library for epsilon-nondominated sorting of delimited text tables.
//!
//! It reads inputs, applies header, comment and blank line filtering, runs the sort from
//! `epsort-core` and writes the results back as delimited text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod compare;
pub mod config;
pub mod io;
pub mod ranges;
