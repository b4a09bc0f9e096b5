//! Login command implementation

use colored::Colorize;
use dialoguer::Input;

use dojo_client::{Provenance, Result, Sourced};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output;

/// Sign in and show the user the backend returned.
///
/// Unlike the data commands, a failed sign-in is an error here.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::unauthenticated(opts)?;

    let email = match opts.email_ref() {
        Some(email) => email.to_string(),
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };

    let user = ctx.sign_in(&email).await?;

    if let crate::cli::OutputFormat::Pretty = ctx.format {
        println!("{} Signed in as {}\n", "✓".green(), user.display_name().bold());
    }

    let pairs = [
        ("ID", user.id.clone()),
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Role", user.role.clone().unwrap_or_else(|| "-".to_string())),
    ];
    output::print_record("Profile", &Sourced::new(user, Provenance::Backend), &pairs, ctx.format)
}
