/// A single file or folder entry in a flat record collection.
///
/// Records reference their parent by id rather than by position, so a
/// collection may arrive in any order. The hierarchy is only materialised
/// on demand by [`ForestIndex`](super::ForestIndex), once per query.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "no parent" sentinel in JSON and CSV input.
pub const NO_PARENT: i64 = -1;

/// Identifier of a record. Unique across a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file or folder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    /// Display name. Not unique: two records may share a name.
    pub name: CompactString,

    /// Category tags in input order. Repeated tags are kept and each
    /// occurrence is counted separately by the category ranker.
    #[serde(default)]
    pub categories: Vec<CompactString>,

    /// Parent record, or `None` for a root. Serialised as `-1` for roots.
    #[serde(with = "parent_ref")]
    pub parent: Option<RecordId>,

    /// The record's own size in bytes, excluding any descendants.
    pub size: u64,
}

impl Record {
    /// Create a record with the given id, name, parent and own size.
    pub fn new(
        id: u64,
        name: impl Into<CompactString>,
        parent: Option<u64>,
        size: u64,
    ) -> Self {
        Self {
            id: RecordId(id),
            name: name.into(),
            categories: Vec::new(),
            parent: parent.map(RecordId),
            size,
        }
    }

    /// Builder-style helper that replaces the category list.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// `true` if this record has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Maps `Option<RecordId>` to and from the signed wire form where
/// [`NO_PARENT`] stands for `None`.
///
/// Ids span the full `u64` range, so the reader accepts unsigned values
/// as-is and only interprets signed values against the sentinel.
pub(crate) mod parent_ref {
    use super::{RecordId, NO_PARENT};
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S>(parent: &Option<RecordId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match parent {
            Some(id) => serializer.serialize_u64(id.0),
            None => serializer.serialize_i64(NO_PARENT),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ParentVisitor)
    }

    struct ParentVisitor;

    impl<'de> Visitor<'de> for ParentVisitor {
        type Value = Option<RecordId>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a record id or {NO_PARENT}")
        }

        fn visit_u64<E: de::Error>(self, id: u64) -> Result<Self::Value, E> {
            Ok(Some(RecordId(id)))
        }

        fn visit_i64<E: de::Error>(self, raw: i64) -> Result<Self::Value, E> {
            decode(raw).map_err(E::custom)
        }
    }

    /// Convert a signed wire value into a parent reference.
    pub fn decode(raw: i64) -> Result<Option<RecordId>, String> {
        match raw {
            NO_PARENT => Ok(None),
            n if n >= 0 => Ok(Some(RecordId(n as u64))),
            n => Err(format!(
                "invalid parent reference {n}: expected a record id or {NO_PARENT}"
            )),
        }
    }
}
