//! Core types shared by the command and the config store.

pub mod error;

pub use error::{ClaudeExtError, ErrorContext, user_friendly_error};
