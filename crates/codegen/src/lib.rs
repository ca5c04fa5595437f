//! Constant-table generation for parsed emoji registries.
//!
//! The back half of the pipeline: [`viable::partition_viable`] splits the
//! registries into the symbol and extended partitions, [`prune`] trims
//! known-oversized families from the extended set, [`names`] derives the
//! injective ASCII identifiers, and [`emit`] renders the contract-source
//! vector literal and the JSON projections consumed by downstream SDKs.

pub mod emit;
pub mod error;
pub mod names;
pub mod prune;
pub mod viable;

pub use emit::{glyph_to_name, move_const_vector, name_list, name_to_glyph};
pub use error::{CodegenError, Result};
pub use names::{ConstEntry, ConstTable, const_name, const_table};
pub use prune::prune_oversized;
pub use viable::{Partitions, ViableEmoji, ViableSet, partition_viable};
