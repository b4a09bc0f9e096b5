//! Dojo CLI - terminal client for the academy management backend

use clap::Parser;

mod cli;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use dojo_client::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts).await,
        Commands::Login => cli::login::run(&opts).await,
        Commands::Certificates { verify } => match verify {
            Some(id) => cli::certificates::verify(&opts, &id).await,
            None => cli::certificates::list(&opts).await,
        },
        Commands::Students => cli::students::list(&opts).await,
        Commands::Attendance { student, month } => {
            cli::attendance::run(&opts, student, month).await
        }
        Commands::Fees { student } => cli::fees::run(&opts, student.as_deref()).await,
        Commands::Events { upcoming } => cli::events::list(&opts, upcoming).await,
        Commands::Belts(command) => cli::belts::run(&opts, command).await,
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Version => {
            println!("dojo version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// `--debug` raises the default filter to `debug`; `RUST_LOG` still wins.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
