//! Student command implementation

use dojo_client::Result;
use dojo_client::models::Student;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::output::display::StudentRow;

/// Run the students list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Student, StudentRow, _, _>(opts, "Students", |ctx| async move {
        ctx.session.students().students().await
    })
    .await
}
