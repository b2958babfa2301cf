//! Column role definitions and per-column role assignment.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LexportError;

/// Semantic meaning assigned to a column of the parsed table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Column contributes nothing to the record.
    Ignore,
    /// The record's primary term (required for a row to import).
    Term,
    /// The record's definition.
    Definition,
    /// The list the record is assigned to.
    List,
    /// Tag values, split on the configured separators.
    Tags,
    /// An arbitrary extra output field with the given key.
    Extra(String),
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRole::Ignore => write!(f, "ignore"),
            ColumnRole::Term => write!(f, "term"),
            ColumnRole::Definition => write!(f, "definition"),
            ColumnRole::List => write!(f, "list"),
            ColumnRole::Tags => write!(f, "tags"),
            ColumnRole::Extra(key) => write!(f, "extra:{key}"),
        }
    }
}

impl FromStr for ColumnRole {
    type Err = LexportError;

    /// Parse the textual convention `term`, `definition`, `list`, `tags`,
    /// `ignore`, or `extra:<key>` (bare `extra` keys the field "extra").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ignore" => Ok(ColumnRole::Ignore),
            "term" => Ok(ColumnRole::Term),
            "definition" => Ok(ColumnRole::Definition),
            "list" => Ok(ColumnRole::List),
            "tags" => Ok(ColumnRole::Tags),
            "extra" => Ok(ColumnRole::Extra(String::new())),
            other => match other.strip_prefix("extra:") {
                Some(key) => Ok(ColumnRole::Extra(key.trim().to_string())),
                None => Err(LexportError::InvalidRole(other.to_string())),
            },
        }
    }
}

/// Sparse mapping from 0-based column index to role.
///
/// Columns without an entry behave as [`ColumnRole::Ignore`]. Insertion
/// order is preserved so serialized assignments stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignment {
    roles: IndexMap<usize, ColumnRole>,
}

impl RoleAssignment {
    /// Create an empty assignment (every column ignored).
    pub fn new() -> Self {
        Self::default()
    }

    /// The default heuristic: first column is the term and, when the table
    /// is at least two columns wide, the second is the definition.
    pub fn guess(width: usize) -> Self {
        let mut assignment = Self::new();
        if width >= 1 {
            assignment.assign(0, ColumnRole::Term);
        }
        if width >= 2 {
            assignment.assign(1, ColumnRole::Definition);
        }
        assignment
    }

    /// Set the role for a column, replacing any previous role.
    pub fn assign(&mut self, column: usize, role: ColumnRole) -> &mut Self {
        self.roles.insert(column, role);
        self
    }

    /// Builder-style [`RoleAssignment::assign`].
    pub fn with(mut self, column: usize, role: ColumnRole) -> Self {
        self.assign(column, role);
        self
    }

    /// Role for a column; unassigned columns are ignored.
    pub fn role_for(&self, column: usize) -> &ColumnRole {
        static IGNORE: ColumnRole = ColumnRole::Ignore;
        self.roles.get(&column).unwrap_or(&IGNORE)
    }

    /// Iterate over explicitly assigned (column, role) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ColumnRole)> {
        self.roles.iter().map(|(&col, role)| (col, role))
    }

    /// True if no column has an explicit role.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
