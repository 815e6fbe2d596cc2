//! Interactive selection of the active server set.

use crate::core::ClaudeExtError;
use crate::mcp::{MergedView, ServerStatus};
use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, MultiSelect};
use std::fmt;

/// Rows shown by the prompt before it starts scrolling.
pub const PAGE_SIZE: usize = 15;

/// One row of the selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    /// Text shown to the user
    pub label: String,
    /// Server name returned when the row is selected
    pub value: String,
    /// Whether the row starts checked
    pub checked: bool,
}

impl ToggleItem {
    /// Build the row for `name` with its current `status`.
    #[must_use]
    pub fn new(name: &str, status: ServerStatus) -> Self {
        let (label, checked) = match status {
            ServerStatus::Active => (
                format!("{} {} {}", "✓".green(), name, "(active)".bright_black()),
                true,
            ),
            ServerStatus::Disabled => (
                format!("{} {} {}", "✗".red(), name, "(disabled)".bright_black()),
                false,
            ),
        };
        Self {
            label,
            value: name.to_string(),
            checked,
        }
    }
}

impl fmt::Display for ToggleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One row per known server, sorted by name, active servers pre-checked.
#[must_use]
pub fn build_toggle_items(view: &MergedView) -> Vec<ToggleItem> {
    view.statuses().iter().map(|(name, status)| ToggleItem::new(name, *status)).collect()
}

/// Something that lets the user pick a subset of [`ToggleItem`]s.
pub trait SelectionPrompt {
    /// Show `items` under `message` and return the `value`s of the rows the
    /// user confirmed. Blocks until the user answers.
    fn select(&mut self, message: &str, items: &[ToggleItem], page_size: usize)
    -> Result<Vec<String>>;
}

/// Checkbox prompt on the terminal.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl SelectionPrompt for InquirePrompt {
    fn select(
        &mut self,
        message: &str,
        items: &[ToggleItem],
        page_size: usize,
    ) -> Result<Vec<String>> {
        let defaults: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.checked)
            .map(|(index, _)| index)
            .collect();

        let selected = MultiSelect::new(message, items.to_vec())
            .with_default(&defaults)
            .with_page_size(page_size)
            .prompt()
            .map_err(|e| match e {
                InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                    ClaudeExtError::SelectionCancelled
                }
                other => ClaudeExtError::Prompt {
                    message: other.to_string(),
                },
            })?;

        Ok(selected.into_iter().map(|item| item.value).collect())
    }
}
