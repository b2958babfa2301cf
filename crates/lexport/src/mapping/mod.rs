//! Column roles and the row-to-record mapper.

mod mapper;
mod record;
mod role;

pub use mapper::{assign_list, map_rows, MapOptions};
pub use record::{ImportRecord, ImportStats};
pub use role::{ColumnRole, RoleAssignment};
