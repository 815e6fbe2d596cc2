//! Data model for the MCP config documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level key holding the server entries in every config file.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// Server entries keyed by name. Values are opaque and never interpreted.
pub type McpServers = Map<String, Value>;

/// One JSON config file: a top-level object with an optional `mcpServers`
/// field and any number of other fields.
///
/// Fields other than `mcpServers` are kept exactly as read and written back
/// in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Map<String, Value>);

impl ConfigDocument {
    /// Create an empty document (`{}`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The server entries of this document.
    ///
    /// A missing `mcpServers` field, or one that is not an object, yields an
    /// empty mapping.
    #[must_use]
    pub fn mcp_servers(&self) -> McpServers {
        match self.0.get(MCP_SERVERS_KEY) {
            Some(Value::Object(servers)) => servers.clone(),
            _ => McpServers::new(),
        }
    }

    /// True if the document has at least one server entry.
    ///
    /// An empty `mcpServers` object does not count. If every server is
    /// disabled while `~/.claude.json` is the active-store, the next run
    /// resolves to `~/.claude/settings.json` and re-enabled servers are
    /// written there instead.
    #[must_use]
    pub fn has_mcp_servers(&self) -> bool {
        matches!(self.0.get(MCP_SERVERS_KEY), Some(Value::Object(servers)) if !servers.is_empty())
    }

    /// Replace the `mcpServers` field, keeping its position if it already
    /// exists.
    pub fn set_mcp_servers(&mut self, servers: McpServers) {
        self.0.insert(MCP_SERVERS_KEY.to_string(), Value::Object(servers));
    }

    /// Access a top-level field other than `mcpServers`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Consume the document and return the raw JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ConfigDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Snapshot of all known entries, split by the file they currently live in.
///
/// The two maps come from disjoint files. A name present in both is treated
/// as active: [`MergedView::statuses`] reports it as active and
/// [`MergedView::union`] carries the active value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedView {
    /// Entries from the active-store
    pub active: McpServers,
    /// Entries from the disabled-store
    pub disabled: McpServers,
}

/// Whether an entry currently lives in the active-store or the disabled-store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    /// Present in the active-store
    Active,
    /// Present only in the disabled-store
    Disabled,
}

impl MergedView {
    /// True if neither file holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.disabled.is_empty()
    }

    /// Every entry name with its current status, sorted by name.
    #[must_use]
    pub fn statuses(&self) -> Vec<(String, ServerStatus)> {
        let mut statuses: Vec<(String, ServerStatus)> = self
            .active
            .keys()
            .map(|name| (name.clone(), ServerStatus::Active))
            .chain(
                self.disabled
                    .keys()
                    .filter(|name| !self.active.contains_key(*name))
                    .map(|name| (name.clone(), ServerStatus::Disabled)),
            )
            .collect();
        statuses.sort_by(|a, b| a.0.cmp(&b.0));
        statuses
    }

    /// All entries from both files, sorted by name. Active values win over
    /// disabled values with the same name.
    #[must_use]
    pub fn union(&self) -> Vec<(String, Value)> {
        let mut merged = self.disabled.clone();
        for (name, value) in &self.active {
            merged.insert(name.clone(), value.clone());
        }
        let mut entries: Vec<(String, Value)> = merged.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
