#[cfg(test)]
#[path = "../../tests/unit/io/writer_test.rs"]
mod writer_test;

use super::Table;
use epsort_core::boxes::BoxVector;
use epsort_core::sorting::Survivor;
use epsort_core::utils::GenericResult;
use std::io::Write;

/// Specifies how rows are written.
#[derive(Clone, Debug, PartialEq)]
pub struct WriterOptions {
    /// Column delimiter.
    pub delimiter: String,
    /// Appends input name to every row.
    pub contribution: bool,
    /// Appends source line number to every row, used only together with `contribution`.
    pub line_number: bool,
    /// Writes only these columns if specified, contribution is omitted then.
    pub columns: Option<Vec<usize>>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { delimiter: " ".to_string(), contribution: false, line_number: false, columns: None }
    }
}

/// Writes surviving rows in their archive order.
pub fn write_survivors<W: Write>(
    writer: &mut W,
    tables: &[Table],
    survivors: &[Survivor<'_, Vec<String>>],
    options: &WriterOptions,
) -> GenericResult<()> {
    survivors.iter().try_for_each(|survivor| {
        let table = &tables[survivor.provenance.table];
        let line = format_row(table, survivor.provenance.row, survivor.record, options, None);

        writeln!(writer, "{line}").map_err(|err| err.into())
    })
}

/// Writes every input row followed by `1` if it is in the archive and `0` otherwise.
pub fn write_flags<W: Write>(
    writer: &mut W,
    tables: &[Table],
    masks: &[Vec<bool>],
    options: &WriterOptions,
) -> GenericResult<()> {
    tables.iter().zip(masks.iter()).try_for_each(|(table, mask)| {
        table.rows().iter().zip(mask.iter()).enumerate().try_for_each(|(row_idx, (fields, is_kept))| {
            let flag = if *is_kept { "1" } else { "0" };
            let line = format_row(table, row_idx, fields, options, Some(flag));

            writeln!(writer, "{line}").map_err(|err| err.into())
        })
    })
}

/// Writes box coordinates of every row.
pub fn write_boxes<W: Write>(writer: &mut W, boxes: &[Vec<BoxVector>], delimiter: &str) -> GenericResult<()> {
    boxes.iter().flatten().try_for_each(|boxes| {
        // NOTE adding zero turns negative zero into positive one
        let line = boxes.coordinates().iter().map(|c| format!("{:.0}", c + 0.)).collect::<Vec<_>>().join(delimiter);

        writeln!(writer, "{line}").map_err(|err| err.into())
    })
}

fn format_row(table: &Table, row_idx: usize, fields: &[String], options: &WriterOptions, flag: Option<&str>) -> String {
    // NOTE objective columns are written without contribution fields
    let (mut values, contribution) = match options.columns.as_ref() {
        Some(columns) => {
            (columns.iter().filter_map(|&column| fields.get(column)).map(|field| field.as_str()).collect(), false)
        }
        None => (fields.iter().map(|field| field.as_str()).collect::<Vec<_>>(), options.contribution),
    };

    let line_number = table.line_number(row_idx).map(|number| number.to_string());
    if contribution {
        values.push(table.name());
        if let Some(line_number) = line_number.as_deref().filter(|_| options.line_number) {
            values.push(line_number);
        }
    }

    values.extend(flag);

    values.join(options.delimiter.as_str())
}
