//! convtrain entry point.

use clap::Parser;
use convtrain_cli::cli::{Cli, Command};
use convtrain_cli::commands::{run_export, run_train};
use convtrain_cli::config::TrainerConfig;
use convtrain_cli::error::CliError;
use convtrain_cli::telemetry::init_tracing;
use convtrain_client::AssistantClient;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing() {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "convtrain failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = TrainerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Train(args) => {
            let config = config.with_base_url(args.service.url.as_deref());
            config.validate()?;
            let client = AssistantClient::new(&config.service, args.service.credentials())?;
            let mut stdout = std::io::stdout();
            run_train(&client, &args, &config.polling, &mut stdout).await?;
        }
        Command::Export(args) => {
            let config = config.with_base_url(args.service.url.as_deref());
            config.validate()?;
            let client = AssistantClient::new(&config.service, args.service.credentials())?;
            let summary = run_export(&client, &args).await?;
            tracing::info!(
                output = %args.output.display(),
                intent_rows = summary.intent_rows,
                entity_rows = summary.entity_rows,
                "Export complete"
            );
        }
    }

    Ok(())
}
