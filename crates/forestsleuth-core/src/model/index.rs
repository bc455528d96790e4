/// Per-query lookup structure over a borrowed record slice.
///
/// A `ForestIndex` is built fresh inside each query that needs it and is
/// dropped before the query returns. It borrows the caller's records and
/// never outlives them.
use super::record::{Record, RecordId};
use std::collections::HashMap;

/// Id lookup plus a parent → children adjacency list.
///
/// The sentinel is represented by the `None` key, so the children of the
/// sentinel are exactly the roots.
#[derive(Debug)]
pub struct ForestIndex<'a> {
    by_id: HashMap<RecordId, &'a Record>,
    children: HashMap<Option<RecordId>, Vec<RecordId>>,
}

impl<'a> ForestIndex<'a> {
    /// Index every record in a single pass. Children keep input order.
    pub fn build(records: &'a [Record]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut children: HashMap<Option<RecordId>, Vec<RecordId>> = HashMap::new();

        for record in records {
            by_id.insert(record.id, record);
            children.entry(record.parent).or_default().push(record.id);
        }

        Self { by_id, children }
    }

    /// Look up a record by id.
    #[inline]
    pub fn get(&self, id: RecordId) -> Option<&'a Record> {
        self.by_id.get(&id).copied()
    }

    /// Own size of a record, or 0 if the id is unknown.
    #[inline]
    pub fn own_size(&self, id: RecordId) -> u64 {
        self.get(id).map_or(0, |r| r.size)
    }

    /// Direct children of `parent`. Pass `None` to get the roots.
    pub fn children(&self, parent: Option<RecordId>) -> &[RecordId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records whose parent is the sentinel, in input order.
    #[inline]
    pub fn roots(&self) -> &[RecordId] {
        self.children(None)
    }

    /// Number of distinct ids indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no records were indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
