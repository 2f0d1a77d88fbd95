use clap::Parser;
use expense_tracker::args::{Args, Command};
use expense_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

#[tokio::main]
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
    let home = args.common().expense_home().path();

    let _: () = match args.command().clone() {
        Command::Init(init_args) => commands::init(home, init_args.seed()).await?.print(),
        Command::Add(add_args) => commands::add(Config::load(home).await?, add_args)
            .await?
            .print(),
        Command::Edit(edit_args) => commands::edit(Config::load(home).await?, edit_args)
            .await?
            .print(),
        Command::Delete(delete_args) => commands::delete(Config::load(home).await?, delete_args)
            .await?
            .print(),
        Command::List(list_args) => commands::list(Config::load(home).await?, list_args)
            .await?
            .print(),
        Command::Categories => commands::categories(Config::load(home).await?)
            .await?
            .print(),
        Command::Summary(summary_args) => {
            let config = Config::load(home).await?;
            commands::summary(config, summary_args).await?.print()
        }
        Command::Export(export_args) => {
            let config = Config::load(home).await?;
            commands::export(config, export_args).await?.print()
        }
        Command::Seed => commands::seed(Config::load(home).await?).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG wins over --log-level.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this package's library and binary log, at --log-level.
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
