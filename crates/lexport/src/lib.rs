//! Lexport: delimited-text import engine for term lists.
//!
//! Lexport turns CSV/TSV or spreadsheet-paste text of unknown dialect into
//! structured term records plus import statistics. Three small pure
//! stages, each depending only on the one before it:
//!
//! - **Sniffer**: infer the most likely field delimiter.
//! - **Parser**: character-level quoted-field parsing into a table.
//! - **Mapper**: a column-role assignment turns rows into records.
//!
//! # Core Principles
//!
//! - **Fail-soft**: malformed quoting, ragged rows, and term-less rows
//!   degrade to sensible output and a `skipped` count, never an error.
//! - **Pure**: every stage is a function of its inputs; re-running with
//!   the same inputs gives structurally identical results.
//!
//! # Example
//!
//! ```
//! use lexport::{map_rows, parse_auto, ColumnRole, MapOptions, RoleAssignment};
//!
//! let (table, delimiter) = parse_auto("Term;Definition\ncat;a feline\n");
//! assert_eq!(delimiter, ';');
//!
//! let roles = RoleAssignment::new()
//!     .with(0, ColumnRole::Term)
//!     .with(1, ColumnRole::Definition);
//! let options = MapOptions { has_header: true, ..Default::default() };
//!
//! let (records, stats) = map_rows(&table, &roles, &options);
//! assert_eq!(records[0].term, "cat");
//! assert_eq!(stats.imported, 1);
//! ```

pub mod error;
pub mod input;
pub mod mapping;

mod importer;

pub use error::{LexportError, Result};
pub use importer::{FileImportResult, ImportConfig, ImportResult, Importer};
pub use input::{
    format_name, parse_auto, parse_delimited, sniff_delimiter, RawTable, SourceMetadata,
    DEFAULT_CANDIDATES,
};
pub use mapping::{
    assign_list, map_rows, ColumnRole, ImportRecord, ImportStats, MapOptions, RoleAssignment,
};
