//! Integration test suite for claude-ext
//!
//! These tests run the compiled binary with `HOME` pointed at a temporary
//! directory, so the user's real Claude config is never touched.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! The interactive prompt cannot be driven from here; the selection flow is
//! covered by unit tests with a scripted prompt.

mod cli;
