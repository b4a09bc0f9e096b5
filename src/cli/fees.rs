//! Fee command implementation

use serde::Serialize;

use dojo_client::Result;
use dojo_client::models::{Fee, FeeSummary};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::display::FeeRow;
use crate::output::{self, json, table};

#[derive(Serialize)]
struct FeeReport<'a> {
    fees: &'a [Fee],
    summary: FeeSummary,
}

/// Run the fees command: fee list followed by totals
pub async fn run(opts: &GlobalOptions, student: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let fees = ctx.session.fees().fees(student).await;
    let summary = FeeSummary::from_fees(&fees.data);

    if let OutputFormat::Json = ctx.format {
        let report = FeeReport {
            fees: &fees.data,
            summary,
        };
        println!("{}", json::format_sourced_json(&report, fees.source)?);
        return Ok(());
    }

    output::print_list::<Fee, FeeRow>("Fees", &fees, ctx.format)?;
    println!(
        "\n{}",
        table::format_pairs(&[
            ("Total", format!("{:.2}", summary.total)),
            ("Paid", format!("{:.2}", summary.paid)),
            ("Pending", format!("{:.2}", summary.pending)),
            ("Overdue", format!("{:.2}", summary.overdue)),
            ("Outstanding", format!("{:.2}", summary.outstanding())),
        ])
    );

    Ok(())
}
