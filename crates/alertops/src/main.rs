mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alertops_config::Settings;
use alertops_core::{Provider, ProviderConfig};

use crate::cli::{Cli, Command, GlobalOpts};
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
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Neither needs credentials
        Command::Resources => commands::resources::list(&cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "alertops", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let config = build_provider_config(&cli.global)?;
            let provider = Provider::configure(&config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &provider, &cli.global).await
        }
    }
}

/// Layer CLI flag overrides on top of file + environment settings.
fn build_provider_config(global: &GlobalOpts) -> Result<ProviderConfig, CliError> {
    let mut settings = Settings::load(global.config.as_deref())?;
    if let Some(ref key) = global.api_key {
        settings.api_key = Some(key.clone());
    }
    if let Some(ref url) = global.base_url {
        settings.base_url.clone_from(url);
    }
    Ok(settings.into_provider_config()?)
}
