//! Metadata about an imported source file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Format name derived from the delimiter (csv, tsv, etc.).
    pub format: String,
    /// Encoding the contents were decoded as.
    pub encoding: String,
    /// Number of parsed rows, including a header row if present.
    pub row_count: usize,
    /// Widest row's field count.
    pub column_count: usize,
    /// When the import was performed.
    pub imported_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file whose contents have been read.
    pub fn new(
        path: PathBuf,
        contents: &[u8],
        delimiter: char,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file,
            path,
            hash,
            size_bytes: contents.len() as u64,
            format: format_name(delimiter).to_string(),
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            imported_at: Utc::now(),
        }
    }
}

/// Conventional format name for a delimiter.
pub fn format_name(delimiter: char) -> &'static str {
    match delimiter {
        '\t' => "tsv",
        ',' => "csv",
        ';' => "csv-semicolon",
        '|' => "psv",
        _ => "delimited",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(format_name(','), "csv");
        assert_eq!(format_name('\t'), "tsv");
        assert_eq!(format_name(';'), "csv-semicolon");
        assert_eq!(format_name('|'), "psv");
        assert_eq!(format_name(':'), "delimited");
    }

    #[test]
    fn test_metadata_hashes_contents() {
        let meta = SourceMetadata::new(PathBuf::from("/tmp/terms.csv"), b"a,b\n", ',', 1, 2);
        assert_eq!(meta.file, "terms.csv");
        assert_eq!(meta.size_bytes, 4);
        assert!(meta.hash.starts_with("sha256:"));
        // 64 hex digits after the prefix
        assert_eq!(meta.hash.len(), "sha256:".len() + 64);
    }
}
