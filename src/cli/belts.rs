//! Belt command implementations

use dojo_client::Result;
use dojo_client::models::{BeltLevel, BeltTest, Promotion};

use crate::cli::BeltCommands;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::output::display::{BeltLevelRow, BeltTestRow, PromotionRow};

/// Run a belt subcommand
pub async fn run(opts: &GlobalOptions, command: BeltCommands) -> Result<()> {
    match command {
        BeltCommands::Levels => {
            run_list_command::<BeltLevel, BeltLevelRow, _, _>(opts, "Belt Levels", |ctx| async move {
                ctx.session.belts().levels().await
            })
            .await
        }
        BeltCommands::Promotions => {
            run_list_command::<Promotion, PromotionRow, _, _>(opts, "Promotions", |ctx| async move {
                ctx.session.belts().promotions().await
            })
            .await
        }
        BeltCommands::Tests => {
            run_list_command::<BeltTest, BeltTestRow, _, _>(opts, "Belt Tests", |ctx| async move {
                ctx.session.belts().tests().await
            })
            .await
        }
    }
}
