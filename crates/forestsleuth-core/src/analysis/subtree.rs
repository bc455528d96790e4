/// Subtree size aggregation.
///
/// A root's total is its own size plus the own sizes of every descendant.
/// Totals are computed with an explicit-stack, post-order traversal so that
/// arbitrarily deep hierarchies cannot exhaust the call stack.
use crate::model::{ForestIndex, Record, RecordId};
use compact_str::CompactString;
use serde::Serialize;

/// Total size of the subtree under one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtreeTotal {
    pub id: RecordId,
    pub name: CompactString,
    pub size: u64,
}

/// One pending node on the traversal stack.
struct Frame<'a> {
    children: &'a [RecordId],
    /// Next child to descend into.
    cursor: usize,
    /// Own size plus every child subtree finished so far.
    sum: u64,
}

impl<'a> Frame<'a> {
    fn enter(index: &'a ForestIndex<'_>, id: RecordId) -> Self {
        Self {
            children: index.children(Some(id)),
            cursor: 0,
            sum: index.own_size(id),
        }
    }
}

/// Post-order sum over the subtree rooted at `root`.
///
/// A frame is popped only once all of its children have been popped and
/// folded into it, so each node's total is complete before it reaches its
/// parent.
fn subtree_size(index: &ForestIndex<'_>, root: RecordId) -> u64 {
    let mut stack = vec![Frame::enter(index, root)];
    let mut total = 0;

    while let Some(frame) = stack.last_mut() {
        if let Some(&child) = frame.children.get(frame.cursor) {
            frame.cursor += 1;
            stack.push(Frame::enter(index, child));
            continue;
        }

        let finished = frame.sum;
        stack.pop();
        match stack.last_mut() {
            Some(parent) => parent.sum = parent.sum.saturating_add(finished),
            None => total = finished,
        }
    }

    total
}

/// Subtree total of every root, in input order.
///
/// Records whose parent names a missing id are neither roots nor reachable
/// from one, so they do not contribute to any total.
pub fn subtree_totals(records: &[Record]) -> Vec<SubtreeTotal> {
    let index = ForestIndex::build(records);
    if index.is_empty() {
        return Vec::new();
    }
    index
        .roots()
        .iter()
        .filter_map(|&id| {
            let root = index.get(id)?;
            Some(SubtreeTotal {
                id,
                name: root.name.clone(),
                size: subtree_size(&index, id),
            })
        })
        .collect()
}

/// Largest subtree total across all roots, or 0 if there are no roots.
pub fn largest_subtree_size(records: &[Record]) -> u64 {
    let index = ForestIndex::build(records);
    let largest = index
        .roots()
        .iter()
        .map(|&root| subtree_size(&index, root))
        .max()
        .unwrap_or(0);
    tracing::debug!(
        records = index.len(),
        roots = index.roots().len(),
        largest,
        "Subtree aggregation complete"
    );
    largest
}
