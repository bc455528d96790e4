/// Record loaders for JSON and CSV input.
///
/// Loaders read from any `std::io::Read` so the core never opens files
/// itself. On the wire a root's parent is written as `-1`.
///
/// JSON is an array of record objects:
///
/// ```text
/// [{ "id": 3, "name": "Folder", "categories": ["Folder"], "parent": -1, "size": 0 }]
/// ```
///
/// CSV has a header row and a `;`-separated category column:
///
/// ```text
/// id,name,categories,parent,size
/// 2,Image.jpg,Media;Photos,34,2048
/// ```
use crate::model::record::parent_ref;
use crate::model::{Record, RecordId};
use compact_str::CompactString;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(LoadError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Parse records from `reader` in this format.
    pub fn load<R: Read>(self, reader: R) -> Result<Vec<Record>, LoadError> {
        match self {
            Self::Json => load_json(reader),
            Self::Csv => load_csv(reader),
        }
    }
}

/// Errors raised while parsing record input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON record input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV record input: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot infer record format from {0:?} (expected .json or .csv)")]
    UnknownFormat(String),
}

/// Parse a JSON array of records.
pub fn load_json<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    tracing::debug!(records = records.len(), "Loaded JSON records");
    Ok(records)
}

/// One CSV row before the category column is split.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u64,
    name: CompactString,
    #[serde(default)]
    categories: String,
    #[serde(with = "parent_ref")]
    parent: Option<RecordId>,
    size: u64,
}

impl From<CsvRow> for Record {
    fn from(row: CsvRow) -> Self {
        let categories = row
            .categories
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(CompactString::new)
            .collect();
        Record {
            id: RecordId(row.id),
            name: row.name,
            categories,
            parent: row.parent,
            size: row.size,
        }
    }
}

/// Parse CSV records with an `id,name,categories,parent,size` header.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<CsvRow>()
        .map(|row| row.map(Record::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(records = records.len(), "Loaded CSV records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_loads() {
        let input = r#"[
            {"id": 3, "name": "Folder", "categories": ["Folder"], "parent": -1, "size": 0},
            {"id": 1, "name": "Document.txt", "categories": ["Documents"], "parent": 3, "size": 1024}
        ]"#;
        let records = load_json(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_root());
        assert_eq!(records[1].parent, Some(RecordId(3)));
        assert_eq!(records[1].categories, ["Documents"]);
    }

    #[test]
    fn json_rejects_negative_parent_other_than_sentinel() {
        let input = r#"[{"id": 1, "name": "x", "parent": -5, "size": 0}]"#;
        let err = load_json(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn json_rejects_non_array() {
        assert!(load_json(r#"{"id": 1}"#.as_bytes()).is_err());
    }

    #[test]
    fn csv_splits_and_trims_categories() {
        let input = "\
id,name,categories,parent,size
2,Image.jpg, Media ; Photos ,34,2048
34,Folder2,Folder,3,0
3,Folder,,-1,0
";
        let records = load_csv(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].categories, ["Media", "Photos"]);
        assert_eq!(records[0].parent, Some(RecordId(34)));
        assert!(records[2].categories.is_empty());
        assert!(records[2].is_root());
    }

    /// Parent ids beyond the signed range load as-is; only `-1` means root.
    #[test]
    fn csv_accepts_full_range_parent_ids() {
        let input = "id,name,categories,parent,size\n\
18446744073709551615,big,,-1,1\n\
1,child,,18446744073709551615,2\n";
        let records = load_csv(input.as_bytes()).unwrap();
        assert!(records[0].is_root());
        assert_eq!(records[1].parent, Some(RecordId(u64::MAX)));
    }

    #[test]
    fn csv_drops_empty_category_segments() {
        let input = "id,name,categories,parent,size\n1,a,x;;y;,-1,5\n";
        let records = load_csv(input.as_bytes()).unwrap();
        assert_eq!(records[0].categories, ["x", "y"]);
    }

    #[test]
    fn csv_rejects_bad_size() {
        let input = "id,name,categories,parent,size\n1,a,,-1,big\n";
        let err = load_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            RecordFormat::from_path(Path::new("records.JSON")).unwrap(),
            RecordFormat::Json
        );
        assert_eq!(
            RecordFormat::from_path(Path::new("dir/records.csv")).unwrap(),
            RecordFormat::Csv
        );
        assert!(matches!(
            RecordFormat::from_path(Path::new("records.txt")),
            Err(LoadError::UnknownFormat(_))
        ));
        assert!(RecordFormat::from_path(Path::new("records")).is_err());
    }
}
