/// Data model for record forests.
///
/// Re-exports the record type, the per-query index and the validator.
pub mod index;
pub mod record;
pub mod validate;

pub use index::ForestIndex;
pub use record::{Record, RecordId, NO_PARENT};
pub use validate::{validate, ForestError};
