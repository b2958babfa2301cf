//! Preview command - sniff the delimiter and show the first parsed rows.

use std::path::PathBuf;

use colored::Colorize;
use lexport::{format_name, parse_auto};

use super::read_input;

pub fn run(file: PathBuf, limit: usize, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&file)?;
    let (table, delimiter) = parse_auto(&text);

    println!(
        "{} {} ({})",
        "Delimiter:".cyan().bold(),
        printable_delimiter(delimiter).white().bold(),
        format_name(delimiter)
    );

    if verbose {
        println!(
            "{} {} rows, up to {} columns",
            "Shape:".cyan().bold(),
            table.row_count(),
            table.column_count()
        );
    }

    for (index, row) in table.rows.iter().take(limit).enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| format!("[{cell}]")).collect();
        println!("{:>4}  {}", index, cells.join(" "));
    }
    if table.row_count() > limit {
        println!("      ... and {} more rows", table.row_count() - limit);
    }

    Ok(())
}

/// A readable name for whitespace delimiters.
fn printable_delimiter(delimiter: char) -> String {
    match delimiter {
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}
