//! Certificate command implementations

use colored::Colorize;

use dojo_client::Result;
use dojo_client::models::Certificate;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::output::{self, display::CertificateRow};

/// Run the certificates list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Certificate, CertificateRow, _, _>(opts, "Certificates", |ctx| async move {
        ctx.session.certificates().certificates().await
    })
    .await
}

/// Run the certificate verification command
pub async fn verify(opts: &GlobalOptions, certificate_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.session.certificates().verify(certificate_id).await;
    let verification = &result.data;

    let verdict = if verification.valid {
        "valid".green().to_string()
    } else {
        "not valid".red().to_string()
    };
    let mut pairs = vec![
        ("Certificate", verification.certificate_id.clone()),
        ("Result", verdict),
    ];
    if let Some(cert) = &verification.certificate {
        pairs.push(("Title", cert.title.clone()));
        pairs.push(("Student", cert.student_name.clone()));
        pairs.push(("Belt", cert.belt_level.clone()));
        pairs.push(("Issued", cert.issue_date.clone()));
    }
    if let Some(message) = &verification.message {
        pairs.push(("Message", message.clone()));
    }

    output::print_record("Certificate Verification", &result, &pairs, ctx.format)
}
