//! Persisted settings stored at `~/.btcget`.
//!
//! The file is a small TOML document with exactly three keys:
//!
//! ```toml
//! backend = "coinmarket"
//! key = ""
//! currency = "USD"
//! ```
//!
//! Unknown keys are ignored on load, missing ones are an error. Every
//! operation takes the path explicitly; [`default_path`] resolves the
//! per-user location.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::BtcError;

/// File name of the config, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".btcget";

/// Backend written by [`init`].
pub const DEFAULT_BACKEND: &str = "coinmarket";

/// Currency written by [`init`].
pub const DEFAULT_CURRENCY: &str = "USD";

/// The persisted settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Backend identifier, resolved by the provider factory at fetch time.
    pub backend: String,
    /// API credential, empty until the user sets one.
    pub key: String,
    /// Currency the price is converted into.
    pub currency: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            key: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ConfigRecord {
    /// Overwrite the fields present in `update`, leaving the rest alone.
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(backend) = &update.backend {
            self.backend.clone_from(backend);
        }
        if let Some(key) = &update.key {
            self.key.clone_from(key);
        }
        if let Some(currency) = &update.currency {
            self.currency.clone_from(currency);
        }
    }
}

/// A partial change to a [`ConfigRecord`]. `None` leaves a field untouched;
/// `Some(String::new())` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New backend identifier.
    pub backend: Option<String>,
    /// New API key.
    pub key: Option<String>,
    /// New conversion currency.
    pub currency: Option<String>,
}

impl ConfigUpdate {
    /// True when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.backend.is_none() && self.key.is_none() && self.currency.is_none()
    }
}

/// `<home>/.btcget`.
///
/// # Errors
///
/// Returns [`BtcError::HomeDirUnavailable`] if the home directory is unknown.
pub fn default_path() -> Result<PathBuf, BtcError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(BtcError::HomeDirUnavailable)
}

/// Read the record at `path`.
///
/// # Errors
///
/// - [`BtcError::ConfigNotFound`] if there is no file at `path`.
/// - [`BtcError::ConfigFormat`] if the file is not a complete record.
/// - [`BtcError::Io`] for any other read failure.
pub fn load(path: &Path) -> Result<ConfigRecord, BtcError> {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(BtcError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(BtcError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| BtcError::ConfigFormat {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Write `record` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`BtcError::Io`] if the parent directory or file cannot be written.
pub fn save(path: &Path, record: &ConfigRecord) -> Result<(), BtcError> {
    let contents = toml::to_string(record)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| BtcError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| BtcError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the default record to `path`, discarding whatever was there.
///
/// # Errors
///
/// Returns [`BtcError::Io`] if the file cannot be written.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err, fields(path = %path.display())))]
pub fn init(path: &Path) -> Result<ConfigRecord, BtcError> {
    let record = ConfigRecord::default();
    save(path, &record)?;
    Ok(record)
}

/// Apply `changes` to the record at `path` and write it back.
///
/// Nothing is written if the record cannot be loaded.
///
/// # Errors
///
/// - [`BtcError::ConfigNotFound`] if [`init`] has not been run for `path`.
/// - Any error from [`load`] or [`save`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, err, fields(path = %path.display()))
)]
pub fn update(path: &Path, changes: &ConfigUpdate) -> Result<ConfigRecord, BtcError> {
    let mut record = load(path)?;
    record.apply(changes);
    save(path, &record)?;
    Ok(record)
}
