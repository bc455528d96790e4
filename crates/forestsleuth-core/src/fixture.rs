/// Reference record set used by the CLI demo and the test suites.
///
/// ```text
/// Folder (3)
///   Document.txt       1024
///   Spreadsheet.xlsx   4096
///   Presentation.pptx  3072
///   Spreadsheet2.xlsx  2048
///   Folder2 (34)
///     Image.jpg        2048
///     Video.mp4        6144
///     Audio.mp3        2560
/// Code.py              1536
/// Folder3 (233)        4096
///   Backup.zip         8192
/// ```
use crate::model::Record;

/// The twelve reference records, in their canonical (id-interleaved) order.
pub fn reference_records() -> Vec<Record> {
    vec![
        Record::new(1, "Document.txt", Some(3), 1024).with_categories(["Documents"]),
        Record::new(2, "Image.jpg", Some(34), 2048).with_categories(["Media", "Photos"]),
        Record::new(3, "Folder", None, 0).with_categories(["Folder"]),
        Record::new(5, "Spreadsheet.xlsx", Some(3), 4096).with_categories(["Documents", "Excel"]),
        Record::new(8, "Backup.zip", Some(233), 8192).with_categories(["Backup"]),
        Record::new(13, "Presentation.pptx", Some(3), 3072)
            .with_categories(["Documents", "Presentation"]),
        Record::new(21, "Video.mp4", Some(34), 6144).with_categories(["Media", "Videos"]),
        Record::new(34, "Folder2", Some(3), 0).with_categories(["Folder"]),
        Record::new(55, "Code.py", None, 1536).with_categories(["Programming"]),
        Record::new(89, "Audio.mp3", Some(34), 2560).with_categories(["Media", "Audio"]),
        Record::new(144, "Spreadsheet2.xlsx", Some(3), 2048)
            .with_categories(["Documents", "Excel"]),
        Record::new(233, "Folder3", None, 4096).with_categories(["Folder"]),
    ]
}
