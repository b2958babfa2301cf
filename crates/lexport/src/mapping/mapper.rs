//! Row-to-record mapping.

use crate::input::RawTable;

use super::record::{ImportRecord, ImportStats};
use super::role::{ColumnRole, RoleAssignment};

/// Options controlling [`map_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    /// Skip row 0 as a header row.
    pub has_header: bool,
    /// Fallback list applied to every record unless a list column
    /// overrides it in that row.
    pub default_list: Option<String>,
    /// Characters that split a tag cell into individual tags.
    pub tag_separators: Vec<char>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            has_header: false,
            default_list: None,
            tag_separators: vec![',', ';'],
        }
    }
}

/// Map table rows to records under a column-role assignment.
///
/// Pure and fail-soft: rows without a usable term are counted as skipped
/// rather than surfaced as errors, short and long rows are taken as-is,
/// and an empty-after-trim cell contributes nothing whatever its role.
/// The returned stats always satisfy `imported + skipped == rows_considered`.
pub fn map_rows(
    table: &RawTable,
    roles: &RoleAssignment,
    options: &MapOptions,
) -> (Vec<ImportRecord>, ImportStats) {
    let start = usize::from(options.has_header);
    let mut records = Vec::new();
    let mut stats = ImportStats {
        rows_considered: table.row_count().saturating_sub(start),
        ..Default::default()
    };

    for row in table.rows.iter().skip(start) {
        let mut record = ImportRecord::default();
        let mut row_list = options.default_list.clone();

        for (column, cell) in row.iter().enumerate() {
            let value = cell.trim();
            if value.is_empty() {
                continue;
            }

            match roles.role_for(column) {
                ColumnRole::Ignore => {}
                ColumnRole::Term => record.term = value.to_string(),
                ColumnRole::Definition => record.definition = Some(value.to_string()),
                ColumnRole::List => row_list = Some(value.to_string()),
                ColumnRole::Tags => {
                    record
                        .tags
                        .extend(split_tags(value, &options.tag_separators));
                }
                ColumnRole::Extra(key) => {
                    let key = key.trim();
                    let key = if key.is_empty() { "extra" } else { key };
                    record.extras.insert(key.to_string(), value.to_string());
                }
            }
        }

        if record.term.is_empty() {
            stats.skipped += 1;
            continue;
        }

        if let Some(list) = row_list.filter(|l| !l.is_empty()) {
            record.list = Some(list);
        }
        if let Some(list) = &record.list {
            *stats.list_counts.entry(list.clone()).or_insert(0) += 1;
        }

        stats.imported += 1;
        records.push(record);
    }

    (records, stats)
}

/// Split a tag cell on any separator character, dropping empty pieces.
fn split_tags(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Force one list onto every record and resync the statistics.
///
/// Supports the caller-side "import everything into this list" action on
/// already-produced records.
pub fn assign_list(records: &mut [ImportRecord], stats: &mut ImportStats, list: &str) {
    for record in records.iter_mut() {
        record.list = Some(list.to_string());
    }
    stats.resync_list_counts(records.iter());
}
