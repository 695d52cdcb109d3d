mod cli;
mod config;
mod modules;

use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::cli() {
        cli::CliRes::Ok => ExitCode::from(0),
        cli::CliRes::Err => ExitCode::from(1),
    }
}
