use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Deserialize;

/// Canonical field order for `devcontainer.json`.
const DEVCONTAINER_KEY_ORDER: &[&str] = &[
    "$schema",
    "name",
    // image and compose
    "image",
    "dockerComposeFile",
    "service",
    "runServices",
    "build",
    "shutdownAction",
    "overrideCommand",
    "updateRemoteUserUID",
    "init",
    "privileged",
    // users and environment
    "containerUser",
    "containerEnv",
    "remoteUser",
    "remoteEnv",
    // ports
    "forwardPorts",
    "portsAttributes",
    "otherPortsAttributes",
    "features",
    "overrideFeatureInstallOrder",
    "secrets",
    // lifecycle commands
    "initializeCommand",
    "onCreateCommand",
    "updateContentCommand",
    "postCreateCommand",
    "postStartCommand",
    "postAttachCommand",
    "waitFor",
    // workspace and mounts
    "workspaceFolder",
    "appPort",
    "runArgs",
    "workspaceMount",
    "type",
    "source",
    "target",
    "userEnvProbe",
    "hostRequirements",
    "customizations",
    "additionalProperties",
];

#[derive(Debug, thiserror::Error)]
pub enum KeyOrderError {
    #[error("duplicate key '{0}' in key order")]
    DuplicateKey(String),

    #[error("Error reading key order {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing key order {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered list of known keys. Keys listed here are written first, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct KeyOrder {
    keys: IndexSet<String>,
}

impl KeyOrder {
    pub fn new<I, S>(keys: I) -> Result<Self, KeyOrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for key in keys {
            let key = key.into();
            if set.contains(&key) {
                return Err(KeyOrderError::DuplicateKey(key));
            }
            set.insert(key);
        }
        Ok(Self { keys: set })
    }

    pub fn devcontainer() -> Self {
        Self {
            keys: DEVCONTAINER_KEY_ORDER.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Load a key order from a JSON file containing an array of strings,
    /// e.g. `["name", "image", "features"]`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KeyOrderError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| KeyOrderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&s).map_err(|source| KeyOrderError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl TryFrom<Vec<String>> for KeyOrder {
    type Error = KeyOrderError;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}
