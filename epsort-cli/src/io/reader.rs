#[cfg(test)]
#[path = "../../tests/unit/io/reader_test.rs"]
mod reader_test;

use epsort_core::records::parse_field;
use epsort_core::utils::{Float, GenericError, GenericResult};
use std::io::{BufRead, BufReader, Read};

/// Specifies how raw text lines are turned into rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ReaderOptions {
    /// Column delimiter.
    pub delimiter: String,
    /// Lines whose first field starts with any of these prefixes are skipped.
    pub comments: Vec<String>,
    /// Amount of lines to skip at the beginning of every input.
    pub header: usize,
    /// Skips blank lines when true, otherwise they are passed on as rows.
    pub skip_blank: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { delimiter: " ".to_string(), comments: vec![], header: 0, skip_blank: false }
    }
}

/// Rows of one input together with their source line numbers.
#[derive(Clone, Debug, Default)]
pub struct Table {
    name: String,
    rows: Vec<Vec<String>>,
    line_numbers: Vec<usize>,
}

impl Table {
    /// Returns input name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns rows.
    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.as_slice()
    }

    /// Returns source line number (counted from 1) of the row at given index.
    pub fn line_number(&self, row: usize) -> Option<usize> {
        self.line_numbers.get(row).copied()
    }

    /// Returns amount of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl AsRef<[Vec<String>]> for Table {
    fn as_ref(&self) -> &[Vec<String>] {
        self.rows()
    }
}

/// Reads a table from the reader line by line.
pub fn read_table<R: Read>(reader: BufReader<R>, name: &str, options: &ReaderOptions) -> GenericResult<Table> {
    if options.delimiter.is_empty() {
        return Err("delimiter cannot be empty".into());
    }

    let mut table = Table { name: name.to_string(), ..Table::default() };

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|err| format!("cannot read line {line_number} of '{name}': {err}"))?;

        if line_number <= options.header {
            continue;
        }

        let line = line.trim();
        if line.is_empty() && options.skip_blank {
            continue;
        }

        let row = line.split(options.delimiter.as_str()).map(|field| field.to_string()).collect::<Vec<_>>();

        let is_comment =
            row.first().is_some_and(|first| options.comments.iter().any(|prefix| first.starts_with(prefix.as_str())));
        if is_comment {
            continue;
        }

        table.rows.push(row);
        table.line_numbers.push(line_number);
    }

    Ok(table)
}

/// Reads a table where every field is a number.
pub fn read_numeric_table<R: Read>(
    reader: BufReader<R>,
    name: &str,
    options: &ReaderOptions,
) -> GenericResult<Vec<Vec<Float>>> {
    let table = read_table(reader, name, options)?;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            row.iter().map(|field| parse_field(field)).collect::<Result<Vec<_>, _>>().map_err(|err| {
                GenericError::from(format!("{err} on line {} of '{name}'", table.line_number(idx).unwrap_or_default()))
            })
        })
        .collect()
}
