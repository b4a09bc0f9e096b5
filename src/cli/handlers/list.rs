//! Generic list command handler
//!
//! Shared flow for the list commands:
//! 1. Create command context (signing in if requested)
//! 2. Fetch through a facade
//! 3. Print as table or JSON with provenance

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use dojo_client::{Result, Sourced};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output;

/// Run a standard list command.
///
/// # Type Parameters
///
/// * `T` - The record type returned by the facade (e.g., `Student`)
/// * `D` - The table row type built from `&T`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Student, StudentRow, _, _>(opts, "Students", |ctx| async move {
///     ctx.session.students().students().await
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    title: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
    Fut: Future<Output = Sourced<Vec<T>>>,
    F: FnOnce(CommandContext) -> Fut,
{
    let ctx = CommandContext::new(opts).await?;
    let format = ctx.format;

    let sourced = fetcher(ctx).await;
    debug!("Fetched {} {} from {}", sourced.data.len(), title, sourced.source);

    output::print_list::<T, D>(title, &sourced, format)
}
