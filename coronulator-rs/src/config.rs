//! Configuration of the command line front end.
//!
//! Config files are TOML and every key is optional:
//!
//! ```toml
//! verbose = false
//!
//! [selection]
//! age = 7
//! preconditions = 1
//! ```
use crate::{catalog::Selection, error::InputError};
use getset::*;
use log::*;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
#[serde(default)]
pub struct Config {
    // Plain values must come before tables in TOML output.
    #[getset(get_copy = "pub", set = "pub")]
    verbose: bool,

    #[getset(get = "pub", set = "pub")]
    selection: Selection,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            selection: Selection::default(),
        }
    }
}

impl Config {
    /// Parse config from a TOML string.
    pub fn from_toml(data: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(data)?)
    }

    /// Read config from file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    /// Read config from file, falling back to defaults if the file does not
    /// exist. Any other error is reported.
    pub fn from_path_or_default(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml(&data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("{} not found, using default selection", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Render config as TOML.
    pub fn to_toml(&self) -> Result<String, InputError> {
        Ok(toml::to_string(self)?)
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
