/// ForestSleuth Core — record model, forest queries, and loaders.
///
/// This crate contains all analysis logic with no process or terminal
/// concerns. Every query takes a borrowed record slice, builds whatever
/// scratch index it needs, and returns an owned result.
///
/// # Modules
///
/// - [`model`] — Records, the per-query forest index, and precondition checks.
/// - [`analysis`] — Leaf extraction, category ranking, subtree size aggregation.
/// - [`loader`] — JSON and CSV record parsing from any reader.
/// - [`fixture`] — The reference record set.
pub mod analysis;
pub mod fixture;
pub mod loader;
pub mod model;

pub use analysis::{
    analyse, largest_subtree_size, leaf_names, ranked_categories, top_categories, ForestReport,
};
pub use model::{validate, ForestError, Record, RecordId};
