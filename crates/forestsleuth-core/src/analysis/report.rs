/// Combined report over one record collection.
use super::categories::{ranked_categories, CategoryCount};
use super::leaves::{leaf_count, leaf_names};
use super::subtree::{subtree_totals, SubtreeTotal};
use crate::model::Record;
use compact_str::CompactString;
use serde::Serialize;

/// Results of all three queries, plus the per-root and per-category detail
/// behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForestReport {
    pub record_count: usize,
    pub root_count: usize,
    /// Leaf records, counted before duplicate names collapse.
    pub leaf_count: usize,
    /// Distinct leaf names, sorted.
    pub leaves: Vec<CompactString>,
    pub top_categories: Vec<CategoryCount>,
    /// Per-root totals, largest first (ties by id ascending).
    pub subtrees: Vec<SubtreeTotal>,
    pub largest_subtree_size: u64,
}

/// Run every query over `records`, ranking the top `top_k` categories.
pub fn analyse(records: &[Record], top_k: usize) -> ForestReport {
    let leaves: Vec<CompactString> = leaf_names(records).into_iter().collect();

    let mut subtrees = subtree_totals(records);
    subtrees.sort_by(|a, b| b.size.cmp(&a.size).then(a.id.cmp(&b.id)));
    let largest_subtree_size = subtrees.first().map_or(0, |t| t.size);

    let report = ForestReport {
        record_count: records.len(),
        root_count: subtrees.len(),
        leaf_count: leaf_count(records),
        leaves,
        top_categories: ranked_categories(records, top_k),
        subtrees,
        largest_subtree_size,
    };

    tracing::debug!(
        records = report.record_count,
        roots = report.root_count,
        leaves = report.leaf_count,
        largest = report.largest_subtree_size,
        "Report built"
    );
    report
}
