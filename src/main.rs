use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use command::Sort;
use document::LocalFs;
use report::ConsoleReporter;

mod command;
mod document;
mod error;
mod key_order;
mod reorder;
mod report;

/// Sort the keys of a devcontainer.json: known fields in canonical order, the rest alphabetically.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    sort: Sort,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    match cli.sort.run(&mut LocalFs, &mut ConsoleReporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
