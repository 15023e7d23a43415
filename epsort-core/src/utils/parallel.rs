#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel, preserving source order.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Maps collection either sequentially or in parallel depending on its size.
/// Result is the same in both cases.
pub fn maybe_parallel_collect<T, F, R>(source: &[T], threshold: Option<usize>, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    match threshold {
        Some(threshold) if source.len() > threshold => parallel_collect(source, map_op),
        _ => source.iter().map(map_op).collect(),
    }
}
