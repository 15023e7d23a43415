use crate::Provenance;
use std::fmt;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// An error raised by an epsilon sort run.
#[derive(Clone, Debug, PartialEq)]
pub enum SortError {
    /// Run parameters are inconsistent: the whole run is aborted before producing any output.
    Configuration(String),
    /// A record cannot produce a valid objective vector.
    MalformedRecord {
        /// Where the offending record comes from.
        provenance: Provenance,
        /// What is wrong with it.
        reason: String,
    },
}

/// A type alias for result type with `SortError`.
pub type SortResult<T> = Result<T, SortError>;

impl SortError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a malformed record error for the record at given provenance.
    pub fn malformed(provenance: Provenance, reason: impl Into<String>) -> Self {
        Self::MalformedRecord { provenance, reason: reason.into() }
    }

    /// Returns provenance of the offending record, if the error is about a record.
    pub fn provenance(&self) -> Option<Provenance> {
        match self {
            Self::Configuration(_) => None,
            Self::MalformedRecord { provenance, .. } => Some(*provenance),
        }
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "invalid sort parameters: {msg}"),
            Self::MalformedRecord { provenance, reason } => {
                write!(f, "{reason} on row {} of input {}", provenance.row, provenance.table)
            }
        }
    }
}

impl std::error::Error for SortError {}

impl From<SortError> for GenericError {
    fn from(value: SortError) -> Self {
        Self(value.to_string())
    }
}
