//! Output formatting for CLI results

use colored::Colorize;
use dojo_client::{Provenance, Result, Sourced};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;

pub mod display;
pub mod json;
pub mod table;

/// Line shown next to results that did not come from the authenticated
/// backend
pub fn provenance_note(source: Provenance) -> Option<String> {
    match source {
        Provenance::Backend => None,
        Provenance::PublicApi => Some(format!("{}", "Showing public data (not signed in)".dimmed())),
        Provenance::Session => Some(format!("{}", "Showing saved profile (backend unavailable)".dimmed())),
        Provenance::MockData => Some(format!(
            "{} {}",
            "⚠".yellow(),
            "Backend unavailable, showing sample data".yellow()
        )),
    }
}

/// Print a facade list as a table or JSON.
///
/// JSON carries the full records; tables use the row type `D`.
pub fn print_list<T, D>(title: &str, sourced: &Sourced<Vec<T>>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
{
    if let OutputFormat::Json = format {
        println!("{}", json::format_sourced_json(&sourced.data, sourced.source)?);
        return Ok(());
    }

    let rows: Vec<D> = sourced.data.iter().map(D::from).collect();
    if let OutputFormat::Pretty = format {
        println!("{} ({})\n", title.bold(), rows.len());
    }
    println!("{}", table::format_table(&rows));
    print_note(sourced.source, format);
    Ok(())
}

/// Print a single facade value as label/value pairs or JSON.
pub fn print_record<T: Serialize>(
    title: &str,
    sourced: &Sourced<T>,
    pairs: &[(&str, String)],
    format: OutputFormat,
) -> Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", json::format_sourced_json(&sourced.data, sourced.source)?);
        return Ok(());
    }

    if let OutputFormat::Pretty = format {
        println!("{}\n", title.bold());
    }
    println!("{}", table::format_pairs(pairs));
    print_note(sourced.source, format);
    Ok(())
}

/// Provenance notes go to stdout in pretty mode and to stderr in table
/// mode, so table output stays parseable.
fn print_note(source: Provenance, format: OutputFormat) {
    if let Some(note) = provenance_note(source) {
        match format {
            OutputFormat::Pretty => println!("\n{}", note),
            _ => eprintln!("{}", note),
        }
    }
}
