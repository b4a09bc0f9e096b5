//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use dojo_client::{Config, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::json;

/// Status snapshot for JSON output
#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: Option<String>,
    base_url: String,
    fallback_urls: Vec<String>,
    resolved_url: Option<String>,
    authenticated: bool,
    user: Option<String>,
}

/// Run the status command: configuration, backend reachability and session
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let session = &ctx.session;

    let config_file = match opts.config_ref() {
        Some(path) => Some(path.to_string()),
        None => Config::default_path()
            .ok()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string()),
    };
    let resolved_url = session.resolver.resolve().await;
    let user = session.session.user_data().map(|u| u.display_name().to_string());

    let report = StatusReport {
        config_file,
        base_url: session.config.base_url.clone(),
        fallback_urls: session.config.fallback_urls.clone(),
        resolved_url,
        authenticated: session.session.is_authenticated(),
        user,
    };

    if let OutputFormat::Json = ctx.format {
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "Dojo Client Status".bold());

    match &report.config_file {
        Some(path) => println!("Config file: {}", path.cyan()),
        None => println!("Config file: {}", "built-in defaults".dimmed()),
    }
    println!("Primary backend: {}", report.base_url.cyan());
    if !report.fallback_urls.is_empty() {
        println!("Fallbacks: {}", report.fallback_urls.join(", ").dimmed());
    }
    println!();

    match &report.resolved_url {
        Some(url) => println!("{} Backend reachable at {}", "✓".green(), url),
        None => {
            println!("{} No backend answered a health check", "✗".red());
            println!("  → Commands will show sample data");
        }
    }

    match &report.user {
        Some(name) if report.authenticated => {
            println!("{} Signed in as {}", "✓".green(), name.bold())
        }
        _ => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Pass --email (or set DOJO_EMAIL) to sign in");
        }
    }
    println!();

    Ok(())
}
