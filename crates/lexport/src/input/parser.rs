//! Character-level parser for delimited text.
//!
//! A small explicit state machine (unquoted/quoted) over a character
//! cursor. Regular-expression splitting cannot handle delimiters and line
//! terminators embedded in quoted fields, so every character gets an
//! individual decision.

use super::sniff::{sniff_delimiter, DEFAULT_CANDIDATES};
use super::strip_bom;
use super::table::RawTable;

/// Parse `text` into a table of string fields using `delimiter`.
///
/// Fail-soft by construction: this function never returns an error. An
/// unterminated quote consumes to end of input, rows keep exactly the
/// width their physical line produced, and a trailing line terminator does
/// not create a phantom empty row.
///
/// Quoting follows the common spreadsheet-paste dialect: `"` toggles into
/// quoted mode wherever it appears in an unquoted field (not only at the
/// field start, which is more permissive than RFC 4180), `""` inside
/// a quoted field is a literal quote, and quoted delimiters and newlines
/// are plain field content.
pub fn parse_delimited(text: &str, delimiter: char) -> RawTable {
    let text = strip_bom(text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            c if c == delimiter => row.push(std::mem::take(&mut field)),
            '\n' => {
                row.push(std::mem::take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            '\r' => {
                // CRLF counts as one terminator; a lone CR also ends the line.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            c => field.push(c),
        }
    }

    row.push(field);
    flush_row(&mut rows, &mut row);

    RawTable::new(rows)
}

/// Push a completed row unless it is the degenerate single-empty-field row
/// produced by a trailing line terminator.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

/// Sniff the delimiter, then parse. Returns the table together with the
/// delimiter that was chosen.
pub fn parse_auto(text: &str) -> (RawTable, char) {
    let delimiter = sniff_delimiter(text, DEFAULT_CANDIDATES);
    let table = parse_delimited(text, delimiter);
    (table, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str, delimiter: char) -> Vec<Vec<String>> {
        parse_delimited(text, delimiter).rows
    }

    #[test]
    fn test_basic_grid() {
        assert_eq!(rows("a,b\nc,d", ','), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_newline_suppressed() {
        assert_eq!(rows("a,b\n", ','), vec![vec!["a", "b"]]);
        assert_eq!(rows("a,b\r\n", ','), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(rows("", ',').is_empty());
    }

    #[test]
    fn test_blank_interior_line_suppressed() {
        assert_eq!(rows("a\n\nb", ','), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(rows("\"a,b\",c", ','), vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_doubled_quote_escape() {
        assert_eq!(rows("\"a\"\"b\"", ','), vec![vec!["a\"b"]]);
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        assert_eq!(rows("\"a\nb\",c", ','), vec![vec!["a\nb", "c"]]);
    }

    #[test]
    fn test_unterminated_quote_consumes_to_end() {
        assert_eq!(rows("\"a,b\nc", ','), vec![vec!["a,b\nc"]]);
    }

    #[test]
    fn test_mid_field_quote_enters_quoted_mode() {
        // Deliberate dialect choice: a quote after accumulated characters
        // still opens quoted mode. Do not "fix" toward RFC 4180.
        assert_eq!(rows("ab\"c,d\"e,f", ','), vec![vec!["abc,de", "f"]]);
    }

    #[test]
    fn test_cr_line_endings() {
        assert_eq!(rows("a,b\rc,d", ','), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            rows("a,b\r\nc,d\r\n", ','),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
    }

    #[test]
    fn test_ragged_rows_kept_as_is() {
        assert_eq!(
            rows("a,b,c\nd\ne,f", ','),
            vec![vec!["a", "b", "c"], vec!["d"], vec!["e", "f"]]
        );
    }

    #[test]
    fn test_empty_fields_preserved() {
        assert_eq!(rows(",a,\n,,", ','), vec![vec!["", "a", ""], vec!["", "", ""]]);
    }

    #[test]
    fn test_single_field_last_row_kept() {
        assert_eq!(rows("a,b\nc", ','), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_tab_delimiter() {
        assert_eq!(rows("a\tb\nc\td", '\t'), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_bom_stripped() {
        assert_eq!(rows("\u{feff}a,b", ','), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_parse_auto_detects_semicolon() {
        let (table, delimiter) = parse_auto("a;b\nc;d");
        assert_eq!(delimiter, ';');
        assert_eq!(table.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }
}
