//! Example: Import a delimited term-list file with lexport.
//!
//! Usage:
//!   cargo run --example import -- <file_path>

use std::env;
use std::path::Path;

use lexport::{ImportConfig, Importer, MapOptions};

fn main() -> lexport::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example import -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let importer = Importer::with_config(ImportConfig {
        map: MapOptions {
            has_header: true,
            ..Default::default()
        },
        ..Default::default()
    });

    let result = importer.import_file(path)?;

    println!("## Source");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!("## Records");
    for record in result.records.iter().take(10) {
        match &record.definition {
            Some(definition) => println!("  {}: {}", record.term, definition),
            None => println!("  {}", record.term),
        }
    }
    if result.records.len() > 10 {
        println!("  ... and {} more", result.records.len() - 10);
    }
    println!();

    println!("## Stats");
    println!("  Considered: {}", result.stats.rows_considered);
    println!("  Imported: {}", result.stats.imported);
    println!("  Skipped: {}", result.stats.skipped);
    for (list, count) in &result.stats.list_counts {
        println!("  List '{}': {}", list, count);
    }

    Ok(())
}
