//! High-level import facade composing the sniffer, parser, and mapper.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexportError, Result};
use crate::input::{
    parse_delimited, sniff_delimiter, RawTable, SourceMetadata, DEFAULT_CANDIDATES,
};
use crate::mapping::{map_rows, ImportRecord, ImportStats, MapOptions, RoleAssignment};

/// Configuration for an import run.
#[derive(Debug, Clone, Default)]
pub struct ImportConfig {
    /// Delimiter to use (None = sniff it from the text).
    pub delimiter: Option<char>,
    /// Column roles (None = guess: first column term, second definition).
    pub roles: Option<RoleAssignment>,
    /// Mapping options.
    pub map: MapOptions,
}

/// Result of importing raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    /// Delimiter used (configured or sniffed).
    pub delimiter: char,
    /// Roles used (configured or guessed).
    pub roles: RoleAssignment,
    /// The parsed table the records were mapped from.
    pub table: RawTable,
    /// Records produced.
    pub records: Vec<ImportRecord>,
    /// Aggregate statistics.
    pub stats: ImportStats,
}

/// Result of importing a file: the text-level result plus file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileImportResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Delimiter used (configured or sniffed).
    pub delimiter: char,
    /// Roles used (configured or guessed).
    pub roles: RoleAssignment,
    /// Records produced.
    pub records: Vec<ImportRecord>,
    /// Aggregate statistics.
    pub stats: ImportStats,
}

impl FileImportResult {
    /// Serialize as a pretty-printed JSON import artifact.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The import engine.
///
/// A thin stateless wrapper over the pure pipeline functions; it exists so
/// callers configure once and run many imports.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    /// Create an importer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with custom configuration.
    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Import raw text. Pure and infallible: malformed input degrades to
    /// skipped rows or empty output, never an error.
    pub fn import_text(&self, text: &str) -> ImportResult {
        let delimiter = self
            .config
            .delimiter
            .unwrap_or_else(|| sniff_delimiter(text, DEFAULT_CANDIDATES));
        let table = parse_delimited(text, delimiter);

        let roles = match &self.config.roles {
            Some(roles) => roles.clone(),
            None => {
                let width = table.rows.first().map(Vec::len).unwrap_or(0);
                RoleAssignment::guess(width)
            }
        };

        let (records, stats) = map_rows(&table, &roles, &self.config.map);

        ImportResult {
            delimiter,
            roles,
            table,
            records,
            stats,
        }
    }

    /// Import a file.
    ///
    /// Contents are decoded as UTF-8 with replacement, so byte-level
    /// damage degrades to replacement characters instead of failing the
    /// whole import.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<FileImportResult> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| LexportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let text = String::from_utf8_lossy(&contents);
        let result = self.import_text(&text);

        let source = SourceMetadata::new(
            path.to_path_buf(),
            &contents,
            result.delimiter,
            result.table.row_count(),
            result.table.column_count(),
        );

        Ok(FileImportResult {
            source,
            delimiter: result.delimiter,
            roles: result.roles,
            records: result.records,
            stats: result.stats,
        })
    }
}
