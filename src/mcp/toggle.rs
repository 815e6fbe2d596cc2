//! Redistributing entries between the active-store and the disabled-store.

use crate::mcp::models::{McpServers, MergedView};
use crate::mcp::store::ConfigStore;
use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Result of a successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Names now in the active-store, sorted
    pub enabled: Vec<String>,
    /// Names now in the disabled-store, sorted
    pub disabled: Vec<String>,
    /// Label of the active-store that was written
    pub active_label: &'static str,
    /// Path of the active-store that was written
    pub active_path: PathBuf,
    /// Label of the disabled-store that was written
    pub disabled_label: &'static str,
}

/// Move every entry of `snapshot` into the active-store if its name is in
/// `selected`, otherwise into the disabled-store, then write both files.
///
/// Both documents are re-read so their other fields are current, but the
/// entries themselves come from `snapshot`: any entry that appeared on disk
/// after the snapshot was taken is dropped. Names in `selected` that are not
/// part of the snapshot are ignored.
///
/// The active-store is written first. If the disabled-store write then fails
/// the two files are left inconsistent; nothing is rolled back.
pub fn toggle_mcp_servers(
    store: &ConfigStore,
    snapshot: &MergedView,
    selected: &HashSet<String>,
) -> Result<ToggleOutcome> {
    let mut active_doc = store.read_active();
    let mut disabled_doc = store.read_disabled();

    let mut active_servers = McpServers::new();
    let mut disabled_servers = McpServers::new();
    let mut enabled = Vec::new();
    let mut disabled = Vec::new();

    for (name, value) in snapshot.union() {
        if selected.contains(&name) {
            enabled.push(name.clone());
            active_servers.insert(name, value);
        } else {
            disabled.push(name.clone());
            disabled_servers.insert(name, value);
        }
    }

    debug!("Partitioned servers: {} active, {} disabled", enabled.len(), disabled.len());

    active_doc.set_mcp_servers(active_servers);
    disabled_doc.set_mcp_servers(disabled_servers);

    store.write_active(&active_doc)?;
    store.write_disabled(&disabled_doc)?;

    Ok(ToggleOutcome {
        enabled,
        disabled,
        active_label: store.active_label(),
        active_path: store.active_path().to_path_buf(),
        disabled_label: store.disabled_label(),
    })
}
