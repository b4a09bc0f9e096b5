//! Dashboard command implementation

use colored::Colorize;

use dojo_client::Result;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::display::{BeltLevelRow, CertificateRow, EventRow};
use crate::output::{json, provenance_note, table};

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.session.dashboard().load().await;

    if let OutputFormat::Json = ctx.format {
        println!("{}", json::format_json(&data)?);
        return Ok(());
    }

    let section = |title: &str, source| {
        println!("\n{}", title.bold());
        if let Some(note) = provenance_note(source) {
            println!("{}", note);
        }
    };

    section("Certificates", data.certificates.source);
    let rows: Vec<CertificateRow> = data.certificates.data.iter().map(CertificateRow::from).collect();
    println!("{}", table::format_table(&rows));

    section("Attendance", data.attendance.source);
    let attendance = &data.attendance.data;
    println!(
        "{}",
        table::format_pairs(&[
            ("Classes", attendance.total.to_string()),
            ("Attended", (attendance.present + attendance.late).to_string()),
            ("Rate", format!("{:.1}%", attendance.rate)),
        ])
    );

    section("Fees", data.fees.source);
    let fees = &data.fees.data;
    println!(
        "{}",
        table::format_pairs(&[
            ("Paid", format!("{:.2}", fees.paid)),
            ("Outstanding", format!("{:.2}", fees.outstanding())),
        ])
    );

    section("Upcoming Events", data.upcoming_events.source);
    let rows: Vec<EventRow> = data.upcoming_events.data.iter().map(EventRow::from).collect();
    println!("{}", table::format_table(&rows));

    section("Belt Levels", data.belt_levels.source);
    let rows: Vec<BeltLevelRow> = data.belt_levels.data.iter().map(BeltLevelRow::from).collect();
    println!("{}", table::format_table(&rows));

    Ok(())
}
