use std::path::PathBuf;

use tracing::warn;

use crate::error::SortError;

#[derive(Debug)]
pub enum Event<'a> {
    /// A top-level key that isn't in the key order. Emitted once per key, in output order.
    UnknownKey { key: &'a str },
    Sorted { path: PathBuf },
    Failed { error: &'a SortError },
}

/// Receives progress and diagnostics from a sort run.
pub trait Reporter {
    fn report(&mut self, event: Event<'_>);
}

/// Warnings go through `tracing`. Failures are printed to stderr regardless of the log
/// filter; the success line goes to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: Event<'_>) {
        match event {
            Event::UnknownKey { key } => warn!(key, "Undefined key found in JSON"),
            Event::Sorted { path } => println!("{}: Sorted and wrote file.", path.display()),
            Event::Failed { error } => eprintln!("Error: {}", error),
        }
    }
}
