//! btcget binary entry point.

use std::process::ExitCode;

use btcget::cli::{Cli, Command};
use btcget::{BtcClient, BtcError, app, config};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_config_not_found() {
                eprintln!("\nCreate one with:\n\n\tbtcget init\n");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), BtcError> {
    let path = config::default_path()?;

    match cli.command {
        None => {
            let client = BtcClient::builder().build()?;
            let price = app::fetch_price(&path, &client).await?;
            println!("{price}");
        }
        Some(Command::Init) => {
            app::init_config(&path)?;
            println!(
                "\nConfig initialized at {} with default backend/currency.",
                path.display()
            );
            println!("\nAdd your API key with the command:\n");
            println!("\tbtcget config --key <api key>\n");
        }
        Some(cmd @ Command::Config { .. }) => {
            let changes = cmd.config_update().unwrap_or_default();
            app::update_config(&path, &changes)?;
        }
    }
    Ok(())
}
