//! Import command - map a delimited file to records and emit the JSON artifact.

use std::path::PathBuf;

use colored::Colorize;
use lexport::{
    assign_list, ImportConfig, Importer, LexportError, MapOptions, RoleAssignment,
};

use super::read_input;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    delimiter: String,
    roles: Vec<String>,
    no_header: bool,
    list: Option<String>,
    assign_list_name: Option<String>,
    tag_separators: Vec<char>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ImportConfig {
        delimiter: parse_delimiter(&delimiter)?,
        roles: parse_role_specs(&roles)?,
        map: MapOptions {
            has_header: !no_header,
            default_list: list,
            tag_separators: if tag_separators.is_empty() {
                MapOptions::default().tag_separators
            } else {
                tag_separators
            },
        },
    };
    let importer = Importer::with_config(config);

    // Stdin is the paste path: no source file to describe.
    let (mut records, mut stats, roles_used, delimiter_used, source) =
        if file.as_os_str() == "-" {
            let text = read_input(&file)?;
            let result = importer.import_text(&text);
            (result.records, result.stats, result.roles, result.delimiter, None)
        } else {
            let result = importer.import_file(&file)?;
            (
                result.records,
                result.stats,
                result.roles,
                result.delimiter,
                Some(result.source),
            )
        };

    if let Some(name) = &assign_list_name {
        assign_list(&mut records, &mut stats, name);
    }

    if verbose {
        eprintln!("{}", "Roles:".yellow().bold());
        for (column, role) in roles_used.iter() {
            eprintln!("  column {column}: {role}");
        }
    }

    let mut artifact = serde_json::json!({
        "delimiter": delimiter_used,
        "roles": roles_used,
        "records": records,
        "stats": stats,
    });
    if let Some(source) = source {
        artifact["source"] = serde_json::to_value(&source)?;
    }
    let json = serde_json::to_string_pretty(&artifact)?;

    match &output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| LexportError::Io {
                path: path.clone(),
                source: e,
            })?;
            eprintln!(
                "{} {}",
                "Wrote".cyan().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{json}"),
    }

    eprintln!(
        "Imported {} of {} rows ({} skipped)",
        stats.imported.to_string().green().bold(),
        stats.rows_considered,
        stats.skipped.to_string().yellow()
    );
    for (name, count) in &stats.list_counts {
        eprintln!("  list '{}': {}", name, count);
    }

    Ok(())
}

/// Parse the --delimiter flag: "auto", "tab"/"\t", or a single character.
fn parse_delimiter(spec: &str) -> Result<Option<char>, LexportError> {
    match spec {
        "auto" => Ok(None),
        "tab" | "\\t" => Ok(Some('\t')),
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(c)),
                _ => Err(LexportError::InvalidDelimiter(s.to_string())),
            }
        }
    }
}

/// Parse repeated COL=ROLE flags into a role assignment.
fn parse_role_specs(specs: &[String]) -> Result<Option<RoleAssignment>, LexportError> {
    if specs.is_empty() {
        return Ok(None);
    }
    let mut assignment = RoleAssignment::new();
    for spec in specs {
        let (column, role) = spec
            .split_once('=')
            .ok_or_else(|| LexportError::InvalidRole(spec.clone()))?;
        let column: usize = column
            .trim()
            .parse()
            .map_err(|_| LexportError::InvalidRole(spec.clone()))?;
        assignment.assign(column, role.parse()?);
    }
    Ok(Some(assignment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexport::ColumnRole;

    #[test]
    fn test_parse_delimiter_specs() {
        assert_eq!(parse_delimiter("auto").unwrap(), None);
        assert_eq!(parse_delimiter(";").unwrap(), Some(';'));
        assert_eq!(parse_delimiter("tab").unwrap(), Some('\t'));
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn test_parse_role_specs() {
        let assignment = parse_role_specs(&[
            "0=term".to_string(),
            "1=definition".to_string(),
            "3=extra:pos".to_string(),
        ])
        .unwrap()
        .unwrap();

        assert_eq!(assignment.role_for(0), &ColumnRole::Term);
        assert_eq!(assignment.role_for(1), &ColumnRole::Definition);
        assert_eq!(
            assignment.role_for(3),
            &ColumnRole::Extra("pos".to_string())
        );
        assert_eq!(assignment.role_for(2), &ColumnRole::Ignore);
    }

    #[test]
    fn test_parse_role_specs_rejects_malformed() {
        assert!(parse_role_specs(&["term".to_string()]).is_err());
        assert!(parse_role_specs(&["x=term".to_string()]).is_err());
        assert!(parse_role_specs(&["0=frequency".to_string()]).is_err());
        assert!(parse_role_specs(&[]).unwrap().is_none());
    }
}
