use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::SortError;

pub type Document = Map<String, Value>;

/// The filesystem operations the sorter needs. Reads and writes are whole-file.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

pub fn load(fs: &impl FileSystem, path: &Path) -> Result<Document, SortError> {
    if !fs.exists(path) {
        return Err(SortError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let s = fs.read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => SortError::Encoding {
            path: path.to_path_buf(),
            source,
        },
        _ => SortError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let value: Value = serde_json::from_str(&s).map_err(|source| SortError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = s.len(), "Read file");
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SortError::NotAnObject {
            path: path.to_path_buf(),
            found: kind(&other),
        }),
    }
}

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render(document: &Document) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(document)?;
    s.push('\n');
    Ok(s)
}

pub fn save(fs: &mut impl FileSystem, path: &Path, document: &Document) -> Result<(), SortError> {
    let write_error = |source: io::Error| SortError::Write {
        path: path.to_path_buf(),
        source,
    };
    let s = render(document).map_err(|e| write_error(e.into()))?;
    fs.write(path, &s).map_err(write_error)?;
    debug!(path = %path.display(), bytes = s.len(), "Wrote file");
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
