/// Analysis modules — stateless queries over a record slice.

pub mod categories;
pub mod leaves;
pub mod report;
pub mod subtree;

pub use categories::{ranked_categories, top_categories, CategoryCount};
pub use leaves::{leaf_count, leaf_names};
pub use report::{analyse, ForestReport};
pub use subtree::{largest_subtree_size, subtree_totals, SubtreeTotal};
