//! Specifies a record abstraction: a row of raw field values which can be read as numbers.

#[cfg(test)]
#[path = "../tests/unit/records_test.rs"]
mod records_test;

use crate::utils::Float;
use std::fmt;

/// Identifies where a record comes from: index of the source table and row number inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Provenance {
    /// Source table index.
    pub table: usize,
    /// Row index inside the source table.
    pub row: usize,
}

impl Provenance {
    /// Creates a new instance of `Provenance`.
    pub fn new(table: usize, row: usize) -> Self {
        Self { table, row }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table, self.row)
    }
}

/// A row of arbitrary columns. Only objective columns are ever read as numbers, the rest is
/// passed through untouched.
pub trait Record {
    /// Returns amount of columns in the row.
    fn width(&self) -> usize;

    /// Returns numeric value of the column at given index or `None` if the row is too short.
    fn value(&self, column: usize) -> Option<Result<Float, String>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn value(&self, column: usize) -> Option<Result<Float, String>> {
        (**self).value(column)
    }
}

macro_rules! numeric_record {
    ($type_: ty) => {
        impl Record for $type_ {
            fn width(&self) -> usize {
                self.len()
            }

            fn value(&self, column: usize) -> Option<Result<Float, String>> {
                self.get(column).map(|value| Ok(*value as Float))
            }
        }
    };
}

macro_rules! text_record {
    ($type_: ty) => {
        impl Record for $type_ {
            fn width(&self) -> usize {
                self.len()
            }

            fn value(&self, column: usize) -> Option<Result<Float, String>> {
                self.get(column).map(|field| parse_field(AsRef::<str>::as_ref(field)))
            }
        }
    };
}

numeric_record! { [Float] }
numeric_record! { Vec<Float> }
numeric_record! { [f32] }
numeric_record! { Vec<f32> }

text_record! { [String] }
text_record! { Vec<String> }
text_record! { [&str] }
text_record! { Vec<&str> }

/// Parses a text field as a float, surrounding whitespaces are ignored.
pub fn parse_field(field: &str) -> Result<Float, String> {
    field.trim().parse::<Float>().map_err(|_| format!("could not convert string to float: '{field}'"))
}
