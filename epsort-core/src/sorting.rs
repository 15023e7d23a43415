//! Feeds records of one or more tables through the archive.
//!
//! All tables form one candidate pool: records are processed in table order, then in row order
//! within each table.

#[cfg(test)]
#[path = "../tests/unit/sorting_test.rs"]
mod sorting_test;

use crate::archive::{Archive, ArchiveEntry, Insertion};
use crate::boxes::BoxVector;
use crate::config::SortConfig;
use crate::objectives::ObjectiveLayout;
use crate::records::{Provenance, Record};
use crate::utils::{InfoLogger, SortResult, Timer};

/// A record which survived the sort.
#[derive(Debug)]
pub struct Survivor<'a, R> {
    /// Where the record comes from.
    pub provenance: Provenance,
    /// The original, untouched record.
    pub record: &'a R,
}

impl<R> Clone for Survivor<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Survivor<'_, R> {}

/// Runs epsilon-nondominated sort.
pub struct EpsilonSort {
    config: SortConfig,
    logger: Option<InfoLogger>,
}

impl EpsilonSort {
    /// Creates a new instance of `EpsilonSort`.
    pub fn new(config: SortConfig) -> Self {
        Self { config, logger: None }
    }

    /// Sets a logger which receives progress information.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns surviving records in their archive order.
    pub fn sort<'a, R, T>(&self, tables: &'a [T]) -> SortResult<Vec<Survivor<'a, R>>>
    where
        R: Record + 'a,
        T: AsRef<[R]>,
    {
        let archive = self.archive(tables)?;

        Ok(archive
            .items()
            .map(|&provenance| Survivor { provenance, record: &tables[provenance.table].as_ref()[provenance.row] })
            .collect())
    }

    /// Returns a mask per table which tells, for every row, whether it is in the final archive.
    pub fn flag<R, T>(&self, tables: &[T]) -> SortResult<Vec<Vec<bool>>>
    where
        R: Record,
        T: AsRef<[R]>,
    {
        let archive = self.archive(tables)?;

        let mut masks = tables.iter().map(|table| vec![false; table.as_ref().len()]).collect::<Vec<_>>();
        archive.items().for_each(|provenance| masks[provenance.table][provenance.row] = true);

        Ok(masks)
    }

    /// Returns box vector of every record without sorting them.
    pub fn boxes<R, T>(&self, tables: &[T]) -> SortResult<Vec<Vec<BoxVector>>>
    where
        R: Record,
        T: AsRef<[R]>,
    {
        let Some(layout) = self.layout(tables)? else {
            return Ok(tables.iter().map(|_| vec![]).collect());
        };

        tables
            .iter()
            .enumerate()
            .map(|(table_idx, table)| {
                table
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(row_idx, record)| {
                        layout
                            .extract(record, Provenance::new(table_idx, row_idx))
                            .map(|objectives| layout.boxes(objectives.as_slice()))
                    })
                    .collect()
            })
            .collect()
    }

    /// Sorts all records into a new archive of their provenances.
    pub fn archive<R, T>(&self, tables: &[T]) -> SortResult<Archive<Provenance>>
    where
        R: Record,
        T: AsRef<[R]>,
    {
        let mut archive = Archive::default().with_parallel_threshold(self.config.parallel_threshold());

        let Some(layout) = self.layout(tables)? else {
            self.log("no records to sort");
            return Ok(archive);
        };

        let timer = Timer::start();

        for (table_idx, table) in tables.iter().enumerate() {
            let table_timer = Timer::start();
            let (mut accepted, mut removed) = (0, 0);
            let rows = table.as_ref();

            for (row_idx, record) in rows.iter().enumerate() {
                let provenance = Provenance::new(table_idx, row_idx);
                let objectives = layout.extract(record, provenance)?;

                if let Insertion::Accepted { removed: evicted } =
                    archive.insert_or_reject(ArchiveEntry::new(provenance, objectives, layout.epsilons()))
                {
                    accepted += 1;
                    removed += evicted;
                }
            }

            self.log(
                format!(
                    "[{}ms] table {table_idx}: {} rows, {accepted} accepted, {removed} evicted, archive size {}",
                    table_timer.elapsed_millis(),
                    rows.len(),
                    archive.len()
                )
                .as_str(),
            );
        }

        self.log(
            format!(
                "[{:.3}s] sorted {} tables into {} nondominated records",
                timer.elapsed_secs_as_float(),
                tables.len(),
                archive.len()
            )
            .as_str(),
        );

        Ok(archive)
    }

    fn layout<R, T>(&self, tables: &[T]) -> SortResult<Option<ObjectiveLayout>>
    where
        R: Record,
        T: AsRef<[R]>,
    {
        let width = tables.iter().find_map(|table| table.as_ref().first()).map(|record| record.width());
        let layout = self.config.resolve(width)?;

        if let Some(layout) = layout.as_ref() {
            self.log(
                format!(
                    "objective columns: {:?}, epsilons: {:?}, maximized: {:?}",
                    layout.columns(),
                    layout.epsilons(),
                    (0..layout.size()).filter(|&idx| layout.is_maximized(idx)).collect::<Vec<_>>()
                )
                .as_str(),
            );
        }

        Ok(layout)
    }

    fn log(&self, message: &str) {
        if let Some(logger) = self.logger.as_ref() {
            (logger)(message)
        }
    }
}

/// Performs epsilon-nondominated sort and returns surviving records in their archive order.
pub fn eps_sort<'a, R, T>(tables: &'a [T], config: &SortConfig) -> SortResult<Vec<Survivor<'a, R>>>
where
    R: Record + 'a,
    T: AsRef<[R]>,
{
    EpsilonSort::new(config.clone()).sort(tables)
}

/// Performs epsilon-nondominated sort and returns per table masks of surviving rows.
pub fn flag_nondominated<R, T>(tables: &[T], config: &SortConfig) -> SortResult<Vec<Vec<bool>>>
where
    R: Record,
    T: AsRef<[R]>,
{
    EpsilonSort::new(config.clone()).flag(tables)
}
