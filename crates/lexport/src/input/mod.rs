//! Input handling: delimiter sniffing and delimited-text parsing.

mod parser;
mod sniff;
mod source;
mod table;

pub use parser::{parse_auto, parse_delimited};
pub use sniff::{sniff_delimiter, DEFAULT_CANDIDATES};
pub use source::{format_name, SourceMetadata};
pub use table::RawTable;

/// Strip a leading UTF-8 byte-order mark, if present.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
