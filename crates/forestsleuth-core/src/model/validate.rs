/// Optional precondition checks for record collections.
///
/// The queries in [`crate::analysis`] assume well-formed input and never
/// call into this module. Callers that want to fail fast on malformed data
/// run [`validate`] first.
use super::record::{Record, RecordId};
use std::collections::HashSet;
use thiserror::Error;

/// A violated precondition, reported for the first offending record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("duplicate record id {id}")]
    DuplicateId { id: RecordId },

    #[error("record {id} names missing parent {parent}")]
    DanglingParent { id: RecordId, parent: RecordId },

    #[error("record {id} names itself as its parent")]
    SelfParent { id: RecordId },
}

/// Check id uniqueness and parent references.
///
/// Records are checked in input order. Longer parent cycles are not
/// searched for.
pub fn validate(records: &[Record]) -> Result<(), ForestError> {
    let mut ids = HashSet::with_capacity(records.len());
    for record in records {
        if !ids.insert(record.id) {
            return Err(ForestError::DuplicateId { id: record.id });
        }
    }

    for record in records {
        let Some(parent) = record.parent else {
            continue;
        };
        if parent == record.id {
            return Err(ForestError::SelfParent { id: record.id });
        }
        if !ids.contains(&parent) {
            return Err(ForestError::DanglingParent {
                id: record.id,
                parent,
            });
        }
    }

    Ok(())
}
