/// Category frequency ranking.
///
/// Counts every occurrence of every category tag across all records and
/// ranks them by count descending, breaking ties by name ascending.
use crate::model::Record;
use compact_str::CompactString;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A category name together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: CompactString,
    pub count: u64,
}

/// Ranking order: higher count first, then lexicographically smaller name.
///
/// Names are unique within a tally, so this is a total order.
fn rank_order(a: &CategoryCount, b: &CategoryCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name))
}

/// The `k` most frequent categories with their counts.
///
/// Returns `min(k, distinct categories)` entries. A record that lists the
/// same category twice contributes two occurrences.
pub fn ranked_categories(records: &[Record], k: usize) -> Vec<CategoryCount> {
    if k == 0 {
        return Vec::new();
    }

    let mut tally: HashMap<&str, u64> = HashMap::new();
    for record in records {
        for category in &record.categories {
            *tally.entry(category.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<CategoryCount> = tally
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: CompactString::new(name),
            count,
        })
        .collect();

    // Partial selection brings the top k to the front in O(n) average,
    // then only that slice is sorted.
    if ranked.len() > k {
        ranked.select_nth_unstable_by(k - 1, rank_order);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(rank_order);

    tracing::debug!(k, returned = ranked.len(), "Category ranking complete");
    ranked
}

/// Names of the `k` most frequent categories, in rank order.
pub fn top_categories(records: &[Record], k: usize) -> Vec<CompactString> {
    ranked_categories(records, k)
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: u64, categories: &[&str]) -> Record {
        Record::new(id, format!("file{id}"), None, 0).with_categories(categories.iter().copied())
    }

    #[test]
    fn most_frequent_category_comes_first() {
        let records = vec![
            tagged(1, &["Media"]),
            tagged(2, &["Media", "Photos"]),
            tagged(3, &["Media", "Videos"]),
            tagged(4, &["Photos"]),
        ];
        let ranked = ranked_categories(&records, 10);
        assert_eq!(
            ranked,
            vec![
                CategoryCount { name: "Media".into(), count: 3 },
                CategoryCount { name: "Photos".into(), count: 2 },
                CategoryCount { name: "Videos".into(), count: 1 },
            ]
        );
    }

    /// Equal counts are ordered by name ascending.
    #[test]
    fn ties_break_alphabetically() {
        let records = vec![tagged(1, &["zeta", "alpha", "Mid"]), tagged(2, &["beta"])];
        assert_eq!(top_categories(&records, 4), ["Mid", "alpha", "beta", "zeta"]);
    }

    /// The tie-break must hold even when the cut falls inside a tie.
    #[test]
    fn tie_at_cutoff_keeps_smallest_names() {
        let records = vec![
            tagged(1, &["d", "c", "b", "a"]),
            tagged(2, &["top"]),
            tagged(3, &["top"]),
        ];
        assert_eq!(top_categories(&records, 3), ["top", "a", "b"]);
    }

    #[test]
    fn zero_k_returns_nothing() {
        let records = vec![tagged(1, &["Media"])];
        assert!(top_categories(&records, 0).is_empty());
    }

    #[test]
    fn k_larger_than_distinct_returns_all() {
        let records = vec![tagged(1, &["b"]), tagged(2, &["a", "b"])];
        assert_eq!(top_categories(&records, 50), ["b", "a"]);
    }

    /// Repeated tags on one record count once per occurrence.
    #[test]
    fn duplicate_tags_on_one_record_count_twice() {
        let records = vec![tagged(1, &["x", "x"]), tagged(2, &["y"]), tagged(3, &["y"])];
        let ranked = ranked_categories(&records, 2);
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].count, 2);
        assert_eq!(top_categories(&records, 2), ["x", "y"]);
    }

    #[test]
    fn records_without_categories_contribute_nothing() {
        let records = vec![tagged(1, &[]), tagged(2, &[])];
        assert!(top_categories(&records, 3).is_empty());
    }

    /// Input order must not influence the result.
    #[test]
    fn ranking_is_independent_of_input_order() {
        let mut records = vec![
            tagged(1, &["b", "c"]),
            tagged(2, &["a"]),
            tagged(3, &["c", "a"]),
            tagged(4, &["d"]),
        ];
        let forward = top_categories(&records, 3);
        records.reverse();
        assert_eq!(top_categories(&records, 3), forward);
        assert_eq!(forward, ["a", "c", "b"]);
    }
}
