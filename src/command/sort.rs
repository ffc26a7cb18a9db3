use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::document::{self, FileSystem};
use crate::error::SortError;
use crate::key_order::KeyOrder;
use crate::reorder::reorder;
use crate::report::{Event, Reporter};

pub const DEFAULT_FILE: &str = ".devcontainer/devcontainer.json";

#[derive(Debug, Args)]
pub struct Sort {
    /// The devcontainer.json to sort in place
    #[arg(default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// JSON file holding an array of keys to use instead of the built-in devcontainer order
    #[arg(long, value_name = "FILE")]
    pub key_order: Option<PathBuf>,
}

impl Sort {
    /// Load, reorder and write back `self.file`. Any failure is reported once and stops
    /// the run; nothing is written unless the file loaded and parsed.
    pub fn run(
        self,
        fs: &mut impl FileSystem,
        reporter: &mut impl Reporter,
    ) -> Result<(), SortError> {
        let result = self.sort(fs, reporter);
        if let Err(error) = &result {
            reporter.report(Event::Failed { error });
        }
        result
    }

    fn sort(&self, fs: &mut impl FileSystem, reporter: &mut impl Reporter) -> Result<(), SortError> {
        let order = match &self.key_order {
            Some(path) => KeyOrder::from_path(path)?,
            None => KeyOrder::devcontainer(),
        };
        debug!(keys = order.len(), "Using key order");

        let document = document::load(&*fs, &self.file)?;
        let reordered = reorder(document, &order);
        for key in &reordered.unknown_keys {
            reporter.report(Event::UnknownKey { key });
        }

        document::save(fs, &self.file, &reordered.document)?;
        reporter.report(Event::Sorted {
            path: self.file.clone(),
        });
        Ok(())
    }
}
