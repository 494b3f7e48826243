use clap::Parser;
use finance_manager::args::{Args, Command};
use finance_manager::{commands, ui, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(args.common().finance_home().path()).await?;
    debug!("Using data file {}", config.data_path().display());

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Ui => commands::ui(config).await?.print(),
        Command::List => commands::list(config).await?.print(),
        Command::Add(add_args) => commands::add(config, add_args).await?.print(),
        Command::Delete(delete_args) => commands::delete(config, delete_args).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                "finance_manager",
                level
            ))
        }
    };

    // Anything written to stderr while the terminal UI is up lands on top of it.
    let writer = std::io::stderr.with_filter(|_| !ui::screen_taken());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();
}
