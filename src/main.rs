use assistant::args::{Args, Command};
use assistant::menu::Menu;
use assistant::{commands, Config, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();

    let _: () = match args.command() {
        Command::Init => commands::init(home)?.print(),

        Command::Menu => {
            let config = Config::load(home)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(&config, stdin.lock(), stdout.lock()).run()?
        }

        Command::List(list_args) => {
            let config = Config::load(home)?;
            commands::list_kind(&config, list_args.kind())?.print()
        }

        Command::Export(file_args) => {
            let config = Config::load(home)?;
            commands::export_kind(&config, file_args.kind(), file_args.file())?.print()
        }

        Command::Import(file_args) => {
            let config = Config::load(home)?;
            commands::import_kind(&config, file_args.kind(), file_args.file())?.print()
        }

        Command::Report(report_args) => {
            let config = Config::load(home)?;
            commands::report(&config, report_args.start(), report_args.end())?.print()
        }

        Command::Calc(calc_args) => commands::calculate(&calc_args.expression())?.print(),
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
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
