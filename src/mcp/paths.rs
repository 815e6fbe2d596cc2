//! Config file locations and active-store resolution.
//!
//! Claude reads its MCP servers from `~/.claude/settings.json` (current
//! releases) or `~/.claude.json` (legacy). Disabled servers are parked in
//! `~/.claude-ext.json`, which is never resolved dynamically.

use crate::mcp::models::ConfigDocument;
use crate::utils::read_json_file;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Label of the primary settings file.
pub const SETTINGS_LABEL: &str = "~/.claude/settings.json";
/// Label of the legacy config file.
pub const LEGACY_LABEL: &str = "~/.claude.json";
/// Label of the disabled-store.
pub const DISABLED_LABEL: &str = "~/.claude-ext.json";

/// The three config file locations under one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// `~/.claude/settings.json`, checked first
    pub settings: PathBuf,
    /// `~/.claude.json`, checked second
    pub legacy: PathBuf,
    /// `~/.claude-ext.json`, always the disabled-store
    pub disabled: PathBuf,
}

impl ConfigPaths {
    /// Build the paths relative to `home`.
    #[must_use]
    pub fn from_home(home: &Path) -> Self {
        Self {
            settings: home.join(".claude").join("settings.json"),
            legacy: home.join(".claude.json"),
            disabled: home.join(".claude-ext.json"),
        }
    }
}

/// Which candidate file was selected as the active-store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveStore {
    /// `~/.claude/settings.json`
    Settings,
    /// `~/.claude.json`
    Legacy,
}

impl ActiveStore {
    /// Display label, e.g. `~/.claude.json`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Settings => SETTINGS_LABEL,
            Self::Legacy => LEGACY_LABEL,
        }
    }

    /// Full path of this store under `paths`.
    #[must_use]
    pub fn path(self, paths: &ConfigPaths) -> &Path {
        match self {
            Self::Settings => &paths.settings,
            Self::Legacy => &paths.legacy,
        }
    }
}

/// Resolves the active-store once and remembers the answer.
///
/// Construct one per command invocation and pass it to whatever needs the
/// active-store path. Resolution order:
///
/// 1. `~/.claude/settings.json` if it parses and has a non-empty `mcpServers`
/// 2. `~/.claude.json` under the same condition
/// 3. `~/.claude/settings.json` otherwise (it is created on first write)
///
/// Unreadable or malformed candidates simply do not qualify.
#[derive(Debug)]
pub struct ActiveStoreResolver {
    paths: ConfigPaths,
    resolved: OnceCell<ActiveStore>,
}

impl ActiveStoreResolver {
    /// Create a resolver that has not looked at the disk yet.
    #[must_use]
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            paths,
            resolved: OnceCell::new(),
        }
    }

    /// The candidate paths this resolver chooses between.
    #[must_use]
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// The active-store, resolving it on first use.
    pub fn active_store(&self) -> ActiveStore {
        *self.resolved.get_or_init(|| {
            let store = detect_active_store(&self.paths);
            debug!("Resolved active MCP config to {}", store.label());
            store
        })
    }

    /// Full path of the resolved active-store.
    pub fn active_path(&self) -> &Path {
        self.active_store().path(&self.paths)
    }

    /// Display label of the resolved active-store.
    pub fn active_label(&self) -> &'static str {
        self.active_store().label()
    }
}

fn detect_active_store(paths: &ConfigPaths) -> ActiveStore {
    if qualifies(&paths.settings) {
        ActiveStore::Settings
    } else if qualifies(&paths.legacy) {
        ActiveStore::Legacy
    } else {
        ActiveStore::Settings
    }
}

fn qualifies(path: &Path) -> bool {
    match read_json_file::<ConfigDocument>(path) {
        Ok(document) => document.has_mcp_servers(),
        Err(e) => {
            debug!("Skipping {} during config detection: {e:#}", path.display());
            false
        }
    }
}
