//! Delimiter detection for delimited text of unknown dialect.

use super::strip_bom;

/// Delimiters to try when auto-detecting, in preference order.
pub const DEFAULT_CANDIDATES: &[char] = &[',', ';', '\t', '|'];

/// Infer the most likely field delimiter for `text`.
///
/// Examines at most the first 10 lines. Each candidate is scored as
/// `occurrences + 0.1 * lines_containing_it`, so a delimiter that shows up
/// consistently across lines beats one that appears many times on a single
/// line of free text. A candidate that never occurs is disqualified and
/// can never win over one that does. Ties go to the earlier candidate.
///
/// Never fails: with no usable candidate the first one is returned, and
/// with an empty candidate list the result is `,`.
pub fn sniff_delimiter(text: &str, candidates: &[char]) -> char {
    let text = strip_bom(text);
    let lines = split_lines(text);
    let lines: Vec<&str> = lines.into_iter().take(10).collect();

    let Some(&first) = candidates.first() else {
        return ',';
    };

    let mut best_delim = first;
    let mut best_score = f64::NEG_INFINITY;

    for &delim in candidates {
        let mut occurrences = 0usize;
        let mut lines_with_hit = 0usize;
        for line in &lines {
            let count = line.matches(delim).count();
            occurrences += count;
            if count > 0 {
                lines_with_hit += 1;
            }
        }

        let score = if lines_with_hit == 0 {
            -1.0
        } else {
            occurrences as f64 + lines_with_hit as f64 * 0.1
        };

        if score > best_score {
            best_score = score;
            best_delim = delim;
        }
    }

    best_delim
}

/// Split on CRLF, LF, or lone CR. A trailing terminator yields a final
/// empty line, matching the behavior of a split on a line-ending pattern.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}
