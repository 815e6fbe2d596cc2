//! claude-ext - Claude MCP Server Manager
//!
//! Toggles which MCP (Model Context Protocol) servers Claude loads by moving
//! server entries between Claude's own config file and a side file,
//! `~/.claude-ext.json`, that holds the disabled ones.
//!
//! # Config files
//!
//! | Path | Role |
//! |------|------|
//! | `~/.claude/settings.json` | active servers, checked first |
//! | `~/.claude.json` | active servers (legacy), checked second |
//! | `~/.claude-ext.json` | disabled servers |
//!
//! The first of the two Claude files that has a non-empty `mcpServers` object
//! becomes the active-store; with neither, `~/.claude/settings.json` is used.
//!
//! # Modules
//!
//! - [`mcp`] - config file resolution, reading, writing and repartitioning
//! - [`cli`] - command-line parsing and the interactive `mcp` command
//! - [`core`] - error types and user-facing error display
//! - [`utils`] - file helpers

pub mod cli;
pub mod core;
pub mod mcp;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
