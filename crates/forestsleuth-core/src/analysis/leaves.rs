/// Leaf extraction: records that no other record names as its parent.
use crate::model::{Record, RecordId};
use compact_str::CompactString;
use std::collections::{BTreeSet, HashMap};

/// Distinct names of every leaf record.
///
/// Starts from an id → name map holding every record, then evicts each id
/// that some record uses as its parent. A root stays in the map unless
/// another record points at it. Names shared by several leaves collapse to
/// one entry; a name shared by a leaf and a folder is still returned.
pub fn leaf_names(records: &[Record]) -> BTreeSet<CompactString> {
    let remaining = leaf_map(records);
    let names: BTreeSet<CompactString> = remaining.into_values().cloned().collect();
    tracing::debug!(
        records = records.len(),
        leaves = names.len(),
        "Leaf extraction complete"
    );
    names
}

/// Number of leaf records, before duplicate names are collapsed.
pub fn leaf_count(records: &[Record]) -> usize {
    leaf_map(records).len()
}

fn leaf_map(records: &[Record]) -> HashMap<RecordId, &CompactString> {
    let mut remaining: HashMap<RecordId, &CompactString> = records
        .iter()
        .map(|record| (record.id, &record.name))
        .collect();

    for record in records {
        if let Some(parent) = record.parent {
            remaining.remove(&parent);
        }
    }
    remaining
}
