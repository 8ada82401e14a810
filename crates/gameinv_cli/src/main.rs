//! Game inventory console entry point.
//!
//! # Responsibility
//! - Parse process configuration and start file logging.
//! - Drive one interactive menu session over stdin/stdout.

mod session;
mod view;

use clap::Parser;
use gameinv_core::{core_version, default_log_level, init_logging};
use session::Session;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_LOG_SUBDIR: &str = "gameinv-logs";

#[derive(Debug, Parser)]
#[command(name = "gameinv", version, about = "Interactive game inventory manager")]
struct Args {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "GAMEINV_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "GAMEINV_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Do not write log files.
    #[arg(long)]
    no_log: bool,
}

impl Args {
    fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_SUBDIR))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if !args.no_log {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = args.resolved_log_dir();
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    log::info!("event=cli_start module=cli status=ok version={}", core_version());

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
