//! Event command implementation

use dojo_client::Result;
use dojo_client::models::Event;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::output::display::EventRow;

/// Run the events list command
pub async fn list(opts: &GlobalOptions, upcoming: bool) -> Result<()> {
    let title = if upcoming { "Upcoming Events" } else { "Events" };
    run_list_command::<Event, EventRow, _, _>(opts, title, |ctx| async move {
        let events = ctx.session.events();
        if upcoming {
            events.upcoming().await
        } else {
            events.events().await
        }
    })
    .await
}
