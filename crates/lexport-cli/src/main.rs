//! Lexport CLI - import term lists from delimited text.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            file,
            output,
            delimiter,
            roles,
            no_header,
            list,
            assign_list,
            tag_separators,
        } => commands::import::run(
            file,
            output,
            delimiter,
            roles,
            no_header,
            list,
            assign_list,
            tag_separators,
            cli.verbose,
        ),

        Commands::Preview { file, limit } => commands::preview::run(file, limit, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
