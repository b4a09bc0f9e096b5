//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - headings, tables and provenance notes
    #[default]
    Pretty,
    /// Table format - tables only, notes go to stderr
    Table,
    /// JSON format - structured for scripts, provenance in `meta.source`
    Json,
}
