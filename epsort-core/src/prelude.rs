//! This module reimports commonly used types.

pub use crate::archive::{Archive, ArchiveEntry, Insertion};
pub use crate::boxes::BoxVector;
pub use crate::config::{ColumnSelector, IndexOrigin, SortConfig, SortConfigBuilder};
pub use crate::dominance::{BoxRelation, compare_boxes};
pub use crate::objectives::{DEFAULT_EPSILON, ObjectiveLayout, ObjectiveVector};
pub use crate::records::{Provenance, Record};
pub use crate::sorting::{EpsilonSort, Survivor, eps_sort, flag_nondominated};

pub use crate::utils::{Float, GenericError, GenericResult, InfoLogger, SortError, SortResult};
