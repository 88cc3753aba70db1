use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mvg_cli::app::{self, AppError};
use mvg_cli::cli::Cli;
use mvg_cli::config::AppConfig;
use mvg_cli::favorites::FavoritesStore;
use mvg_cli::mvg::MvgClient;

/// Log filter variable. Logs go to stderr.
const LOG_ENV: &str = "MVG_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let command = cli.into_command()?;
    let config = AppConfig::from_env()?;

    let client = MvgClient::new(config.mvg.clone())?;
    let store = FavoritesStore::new(&config.favorites_path);

    let report = app::run(&client, &store, command, &Local::now()).await?;

    let color = config.color && std::io::stdout().is_terminal();
    Ok(report.render(color))
}
