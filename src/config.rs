//! TOML configuration: default field values and log filter.
//!
//! ```toml
//! log_filter = "info"
//!
//! [defaults]
//! rate = "6000"
//! gstGoldPercent = "3"
//! gstMakingPercent = "5"
//! ```
//!
//! Defaults are raw text like any other input, so an invalid default is 0,
//! not a load error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gold::error::Result;
use crate::gold::error_catalog::GoldErrorCode;
use crate::gold::types::RawInput;
use crate::gold_err;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
    pub defaults: RawInput,
}

impl Config {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            gold_err!(GoldErrorCode::ConfigUnreadable, path => path.display(), detail => e)
        })?;
        Self::from_toml_str(&text).map_err(|e| {
            gold_err!(GoldErrorCode::ConfigInvalid, path => path.display(), detail => e.message())
        })
    }

    /// Loads `path` if given, otherwise the empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
