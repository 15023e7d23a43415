//! Contains delimited text table reading and writing functionality.

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
