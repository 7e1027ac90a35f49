mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use comfy_api::CloudSession;
use comfy_core::Controller;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a cloud session
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global).await,

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "comfy", &mut std::io::stdout());
            Ok(())
        }

        // All device commands require an authenticated session
        cmd => {
            let session_config = config::build_session_config(&cli.global)?;
            let session = CloudSession::new(session_config).map_err(comfy_core::CoreError::from)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            let controller = Controller::connect(session).await?;
            commands::dispatch(cmd, &controller, &cli.global).await
        }
    }
}
