//! MCP server config store for Claude.
//!
//! Claude loads MCP servers from the `mcpServers` object of its config file
//! (the *active-store*). Servers switched off with claude-ext are parked in
//! `~/.claude-ext.json` (the *disabled-store*) with their configuration
//! untouched, so they can be switched back on later.
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "filesystem": {
//!       "command": "npx",
//!       "args": ["-y", "@modelcontextprotocol/server-filesystem"]
//!     }
//!   }
//! }
//! ```
//!
//! Every entry lives in exactly one of the two files after a toggle. Server
//! values are opaque JSON and are moved as-is; all other top-level fields of
//! both files are preserved.
//!
//! There is no locking. Another process editing either file between the
//! snapshot and the write loses its changes.

pub mod models;
pub mod paths;
pub mod store;
pub mod toggle;


pub use models::{ConfigDocument, MCP_SERVERS_KEY, McpServers, MergedView, ServerStatus};
pub use paths::{ActiveStore, ActiveStoreResolver, ConfigPaths, DISABLED_LABEL};
pub use store::{ConfigStore, ReadResult};
pub use toggle::{ToggleOutcome, toggle_mcp_servers};
