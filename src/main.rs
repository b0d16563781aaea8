use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

// Declare modules
mod client;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod view;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::domain::Network;
use crate::state::{App, StartupOptions};

// Stakescope version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
███████╗████████╗ █████╗ ██╗  ██╗███████╗███████╗ ██████╗ ██████╗ ██████╗ ███████╗
██╔════╝╚══██╔══╝██╔══██╗██║ ██╔╝██╔════╝██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
███████╗   ██║   ███████║█████╔╝ █████╗  ███████╗██║     ██║   ██║██████╔╝█████╗
╚════██║   ██║   ██╔══██║██╔═██╗ ██╔══╝  ╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
███████║   ██║   ██║  ██║██║  ██╗███████╗███████║╚██████╗╚██████╔╝██║     ███████╗
╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
"#;

/// Stakescope - terminal UI for proof-of-stake account inspection
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Account address to inspect
    address: Option<String>,

    /// Network to connect to (mainnet, testnet, localnet)
    #[arg(short, long)]
    network: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse();
    if handle_cli_commands(&cli) {
        return Ok(());
    }

    let Some(address) = cli.address.clone() else {
        return Err(color_eyre::eyre::eyre!(
            "An account address is required. Usage: stakescope <ADDRESS>"
        ));
    };

    let network = match cli.network.as_deref() {
        Some(name) => Some(Network::from_cli_name(name).ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Unknown network '{}'. Expected mainnet, testnet, or localnet.",
                name
            )
        })?),
        None => None,
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(StartupOptions {
        address,
        network,
        seed: None,
    })?;

    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Handles CLI subcommands.
/// Returns true if a command was handled and the app should exit.
fn handle_cli_commands(cli: &Cli) -> bool {
    if let Some(command) = &cli.command {
        match command {
            Commands::Version => {
                println!("{}", LOGO);
                println!("Stakescope v{}", VERSION);
                println!("A terminal UI for proof-of-stake account inspection");
                return true;
            }
        }
    }
    false
}

/// Sets up the opt-in tracing sink.
///
/// Log output goes to a file so it never corrupts the alternate screen;
/// nothing is installed unless `RUST_LOG` is set.
fn init_tracing() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let log_path = std::env::temp_dir().join("stakescope.log");
    let log_file = std::fs::File::create(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
