//! Attendance command implementation

use colored::Colorize;
use serde::Serialize;

use dojo_client::Result;
use dojo_client::models::{AttendanceEntry, AttendanceSummary};
use dojo_client::services::AttendanceQuery;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::display::AttendanceRow;
use crate::output::{self, json, table};

#[derive(Serialize)]
struct AttendanceReport<'a> {
    entries: &'a [AttendanceEntry],
    summary: AttendanceSummary,
}

/// Run the attendance command: records followed by a summary
pub async fn run(opts: &GlobalOptions, student: Option<String>, month: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let query = AttendanceQuery {
        student_id: student,
        month,
    };

    let attendance = ctx.session.attendance().attendance(&query).await;
    let summary = AttendanceSummary::from_entries(&attendance.data);

    if let OutputFormat::Json = ctx.format {
        let report = AttendanceReport {
            entries: &attendance.data,
            summary,
        };
        println!("{}", json::format_sourced_json(&report, attendance.source)?);
        return Ok(());
    }

    output::print_list::<AttendanceEntry, AttendanceRow>("Attendance", &attendance, ctx.format)?;

    println!(
        "\n{}",
        table::format_pairs(&[
            ("Classes", summary.total.to_string()),
            ("Present", summary.present.to_string()),
            ("Late", summary.late.to_string()),
            ("Absent", summary.absent.to_string()),
            ("Excused", summary.excused.to_string()),
            ("Attendance rate", format!("{:.1}%", summary.rate)),
        ])
    );
    if let OutputFormat::Pretty = ctx.format
        && summary.total > 0
        && summary.rate < 75.0
    {
        println!("{}", "Attendance is below 75%".yellow());
    }

    Ok(())
}
