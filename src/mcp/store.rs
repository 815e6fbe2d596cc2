//! Reading and writing the active-store and disabled-store documents.

use crate::core::ClaudeExtError;
use crate::mcp::models::{ConfigDocument, MergedView};
use crate::mcp::paths::{ActiveStoreResolver, ConfigPaths, DISABLED_LABEL};
use crate::utils::{ensure_dir, read_text_file, write_json_file};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing::{debug, error, warn};

/// Outcome of reading one config file.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadResult {
    /// The file exists and holds a JSON object
    Loaded(ConfigDocument),
    /// The file does not exist
    NotFound,
    /// The file could not be read or parsed
    Invalid {
        /// Description of the failure
        reason: String,
    },
}

impl ReadResult {
    /// Read and parse `path`.
    ///
    /// Only a missing file counts as [`ReadResult::NotFound`]; any other IO
    /// failure, such as a permission error, is [`ReadResult::Invalid`].
    pub fn read(path: &Path) -> Self {
        let content = match read_text_file(path) {
            Ok(content) => content,
            Err(e)
                if e.downcast_ref::<io::Error>()
                    .is_some_and(|io_error| io_error.kind() == io::ErrorKind::NotFound) =>
            {
                return Self::NotFound;
            }
            Err(e) => {
                return Self::Invalid {
                    reason: format!("{e:#}"),
                };
            }
        };

        match serde_json::from_str::<ConfigDocument>(&content) {
            Ok(document) => Self::Loaded(document),
            Err(e) => Self::Invalid {
                reason: format!("Failed to parse JSON from file: {}: {e}", path.display()),
            },
        }
    }

    /// Collapse to a document, using `{}` for missing or invalid files.
    ///
    /// Invalid files are reported with a warning naming `label`.
    pub fn into_document(self, label: &str) -> ConfigDocument {
        match self {
            Self::Loaded(document) => document,
            Self::NotFound => {
                debug!("{label} does not exist, using an empty document");
                ConfigDocument::new()
            }
            Self::Invalid { reason } => {
                warn!("Failed to read {label}: {reason}");
                ConfigDocument::new()
            }
        }
    }
}

/// Access to the two config documents.
///
/// Reads never fail: missing or malformed files become empty documents.
/// Writes are fatal on failure and report [`ClaudeExtError::WriteFailed`].
#[derive(Debug)]
pub struct ConfigStore {
    resolver: ActiveStoreResolver,
}

impl ConfigStore {
    /// Create a store over the given paths. The active-store is resolved
    /// lazily, once.
    #[must_use]
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            resolver: ActiveStoreResolver::new(paths),
        }
    }

    /// Create a store over the config files in `home`.
    #[must_use]
    pub fn from_home(home: &Path) -> Self {
        Self::new(ConfigPaths::from_home(home))
    }

    /// Full path of the active-store.
    pub fn active_path(&self) -> &Path {
        self.resolver.active_path()
    }

    /// Display label of the active-store.
    pub fn active_label(&self) -> &'static str {
        self.resolver.active_label()
    }

    /// Full path of the disabled-store.
    #[must_use]
    pub fn disabled_path(&self) -> &Path {
        &self.resolver.paths().disabled
    }

    /// Display label of the disabled-store.
    #[must_use]
    pub fn disabled_label(&self) -> &'static str {
        DISABLED_LABEL
    }

    /// Read the active-store without collapsing failures.
    pub fn try_read_active(&self) -> ReadResult {
        ReadResult::read(self.active_path())
    }

    /// Read the disabled-store without collapsing failures.
    pub fn try_read_disabled(&self) -> ReadResult {
        ReadResult::read(self.disabled_path())
    }

    /// Read the active-store, `{}` if missing or malformed.
    pub fn read_active(&self) -> ConfigDocument {
        self.try_read_active().into_document(self.active_label())
    }

    /// Read the disabled-store, `{}` if missing or malformed.
    pub fn read_disabled(&self) -> ConfigDocument {
        self.try_read_disabled().into_document(self.disabled_label())
    }

    /// Overwrite the active-store with `document`, creating its parent
    /// directory if needed.
    pub fn write_active(&self, document: &ConfigDocument) -> Result<()> {
        let path = self.active_path();
        let label = self.active_label();
        let result = match path.parent() {
            Some(parent) => ensure_dir(parent),
            None => Ok(()),
        }
        .and_then(|()| write_json_file(path, document, true));
        Self::check_write(result, label, path)
    }

    /// Overwrite the disabled-store with `document`.
    ///
    /// The parent directory (normally the home directory) must exist.
    pub fn write_disabled(&self, document: &ConfigDocument) -> Result<()> {
        let path = self.disabled_path();
        let result = write_json_file(path, document, true);
        Self::check_write(result, self.disabled_label(), path)
    }

    /// Snapshot of the entries in both files.
    pub fn all_mcp_servers(&self) -> MergedView {
        MergedView {
            active: self.read_active().mcp_servers(),
            disabled: self.read_disabled().mcp_servers(),
        }
    }

    fn check_write(result: Result<()>, label: &str, path: &Path) -> Result<()> {
        match result {
            Ok(()) => {
                debug!("Wrote {label} ({})", path.display());
                Ok(())
            }
            Err(e) => {
                error!("Failed to write {label}: {e:#}");
                Err(e).context(ClaudeExtError::WriteFailed {
                    label: label.to_string(),
                    path: path.display().to_string(),
                })
            }
        }
    }
}
