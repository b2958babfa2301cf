//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexport: import term lists from delimited text
#[derive(Parser)]
#[command(name = "lexport")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a delimited file and emit the records/stats JSON artifact
    Import {
        /// Path to the data file, or '-' for stdin (paste)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the JSON artifact (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter; a single character, or "auto" to sniff it
        #[arg(short, long, default_value = "auto")]
        delimiter: String,

        /// Column role, as COL=ROLE (e.g. 0=term, 1=definition, 3=extra:pos);
        /// repeatable. Without any, column 0 is the term and column 1 the
        /// definition.
        #[arg(short, long = "role", value_name = "COL=ROLE")]
        roles: Vec<String>,

        /// Treat the first row as data rather than a header
        #[arg(long)]
        no_header: bool,

        /// Default list for records without a list column value
        #[arg(short, long)]
        list: Option<String>,

        /// Put every imported record into this list, overriding list columns
        #[arg(long, value_name = "NAME")]
        assign_list: Option<String>,

        /// Tag separator character; repeatable (default: ',' and ';')
        #[arg(long = "tag-separator", value_name = "CHAR")]
        tag_separators: Vec<char>,
    },

    /// Sniff the delimiter and show the first parsed rows
    Preview {
        /// Path to the data file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum number of rows to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}
