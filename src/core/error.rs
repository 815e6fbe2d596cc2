//! Error handling for claude-ext.
//!
//! Errors fall into three groups:
//!
//! - **Soft read failures**: a missing or malformed config file. These never
//!   reach this module; the config store turns them into an empty document
//!   and logs a warning.
//! - **Fatal failures**: a config file that cannot be written, a missing home
//!   directory, or a prompt that cannot run. These are represented by
//!   [`ClaudeExtError`] and end the process with exit code 1.
//! - **No servers**: not an error at all, just an informational message.
//!
//! [`user_friendly_error`] converts any [`anyhow::Error`] into an
//! [`ErrorContext`] which `main` prints to stderr with colors.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Fatal error conditions surfaced to the user.
#[derive(Error, Debug, Clone)]
pub enum ClaudeExtError {
    /// The user's home directory could not be determined
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// A config file could not be written
    #[error("Failed to write {label} ({path})")]
    WriteFailed {
        /// Display label of the file, e.g. `~/.claude.json`
        label: String,
        /// Full path of the file
        path: String,
    },

    /// The user dismissed the selection prompt
    #[error("Server selection was cancelled")]
    SelectionCancelled,

    /// The selection prompt failed to run
    #[error("Selection prompt failed: {message}")]
    Prompt {
        /// Reason reported by the prompt backend
        message: String,
    },

    /// Generic error for anything without a dedicated variant
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// An error together with optional details and a suggestion for the user.
///
/// # Examples
///
/// ```rust,no_run
/// use claude_ext::core::{ClaudeExtError, ErrorContext};
///
/// let context = ErrorContext::new(ClaudeExtError::HomeDirNotFound)
///     .with_suggestion("Set the HOME environment variable");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ClaudeExtError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ClaudeExtError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, displayed in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, displayed in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
///
/// [`ClaudeExtError`] and IO failures get a tailored suggestion. The full `anyhow` context
/// chain is kept in the details so the failing file is always named.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain = format!("{error:#}");

    if let Some(ext_error) = error.downcast_ref::<ClaudeExtError>() {
        return create_error_context(ext_error.clone(), &error);
    }

    if let Some(io_error) = error.chain().find_map(|e| e.downcast_ref::<std::io::Error>()) {
        let context = ErrorContext::new(ClaudeExtError::Other {
            message: error.to_string(),
        })
        .with_details(chain);

        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => context.with_suggestion(
                "Check the ownership and permissions of the file in your home directory",
            ),
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the parent directory of the config file exists"),
            _ => context,
        };
    }

    let context = ErrorContext::new(ClaudeExtError::Other {
        message: error.to_string(),
    });
    if chain == error.to_string() {
        context
    } else {
        context.with_details(chain)
    }
}

fn create_error_context(error: ClaudeExtError, source: &anyhow::Error) -> ErrorContext {
    let context = ErrorContext::new(error.clone());
    match error {
        ClaudeExtError::HomeDirNotFound => {
            context.with_suggestion("Set the HOME environment variable (USERPROFILE on Windows)")
        }
        ClaudeExtError::WriteFailed { .. } => {
            let context = context.with_details(
                "The active and disabled config files are written one after the other; \
                 if only one write succeeded they may now disagree",
            );
            match source.chain().nth(1) {
                Some(cause) => context.with_suggestion(format!(
                    "Resolve the underlying problem and re-run the command: {cause}"
                )),
                None => context,
            }
        }
        ClaudeExtError::SelectionCancelled => context.with_details("No config files were changed"),
        ClaudeExtError::Prompt { .. } => {
            context.with_suggestion("Run claude-ext from an interactive terminal")
        }
        ClaudeExtError::Other { .. } => context,
    }
}
