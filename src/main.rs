use clap::Parser;
use codescan::cli::{Cli, Commands};
use codescan::commands::{self, ScanOptions};
use colored::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Scan {
            path,
            output_dir,
            format,
            database_name,
            suite,
            threads,
            config,
        } => commands::handle_scan(ScanOptions {
            path,
            output_dir,
            format,
            database_name,
            suite,
            threads,
            config,
        }),
        Commands::Summarize { file, format } => commands::handle_summarize(&file, format),
        Commands::Init { force } => commands::init_config(force),
    }
}
