//! The `mcp` command: choose which MCP servers Claude loads.
//!
//! Lists every server from the active-store and the disabled-store, lets the
//! user check the ones that should be active, then moves entries between the
//! two files to match.
//!
//! ```bash
//! claude-ext mcp
//! ```

use crate::cli::prompt::{InquirePrompt, PAGE_SIZE, SelectionPrompt, build_toggle_items};
use crate::core::ClaudeExtError;
use crate::mcp::{ConfigStore, ToggleOutcome, toggle_mcp_servers};
use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Toggle MCP servers between the active config and `~/.claude-ext.json`.
#[derive(Debug, Default, clap::Args)]
pub struct McpCommand {}

impl McpCommand {
    /// Run against the config files in the user's home directory with an
    /// interactive terminal prompt, printing to stdout.
    pub fn execute(self) -> Result<()> {
        let home = dirs::home_dir().ok_or(ClaudeExtError::HomeDirNotFound)?;
        debug!("Using home directory {}", home.display());

        let store = ConfigStore::from_home(&home);
        let mut stdout = std::io::stdout().lock();
        self.execute_with(&store, &mut InquirePrompt, &mut stdout)?;
        Ok(())
    }

    /// Run against `store` using `prompt` for the selection and writing
    /// progress to `out`.
    ///
    /// Returns `None` when there are no servers at all; in that case nothing
    /// is written.
    pub fn execute_with(
        &self,
        store: &ConfigStore,
        prompt: &mut dyn SelectionPrompt,
        out: &mut dyn Write,
    ) -> Result<Option<ToggleOutcome>> {
        let snapshot = store.all_mcp_servers();
        let items = build_toggle_items(&snapshot);
        let active_label = store.active_label();

        if items.is_empty() {
            writeln!(
                out,
                "{}",
                format!(
                    "No MCP servers found in {active_label} or {}",
                    store.disabled_label()
                )
                .yellow()
            )?;
            return Ok(None);
        }

        writeln!(out, "{}", "MCP Server Manager".blue())?;
        writeln!(out, "{}", "Select which MCP servers should be active in Claude:".bright_black())?;
        writeln!(out, "{}", format!("Config: {active_label}").bright_black())?;
        writeln!(out)?;
        out.flush()?;

        let message = format!("Toggle MCP servers (active servers will be in {active_label}):");
        let selected: HashSet<String> =
            prompt.select(&message, &items, PAGE_SIZE)?.into_iter().collect();
        debug!("User selected {} of {} servers", selected.len(), items.len());

        let outcome = toggle_mcp_servers(store, &snapshot, &selected)?;
        report(&outcome, out)?;

        Ok(Some(outcome))
    }
}

fn report(outcome: &ToggleOutcome, out: &mut dyn Write) -> Result<()> {
    let mut rows: Vec<(&str, bool)> = outcome
        .enabled
        .iter()
        .map(|name| (name.as_str(), true))
        .chain(outcome.disabled.iter().map(|name| (name.as_str(), false)))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    for (name, enabled) in rows {
        if enabled {
            writeln!(out, "{}", format!("✓ Enabled: {name}").green())?;
        } else {
            writeln!(out, "{}", format!("✗ Disabled: {name}").red())?;
        }
    }

    debug!("Active servers written to {}", outcome.active_path.display());

    writeln!(out)?;
    writeln!(out, "{}", "Configuration updated successfully!".blue())?;
    writeln!(
        out,
        "{}",
        format!("Active servers: {} (in {})", outcome.enabled.len(), outcome.active_label)
            .bright_black()
    )?;
    writeln!(
        out,
        "{}",
        format!("Disabled servers: {} (in {})", outcome.disabled.len(), outcome.disabled_label)
            .bright_black()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ToggleItem;
    use crate::test_utils::{TestHome, strip_ansi};
    use serde_json::json;

    /// Answers the prompt with a fixed selection and records what it was shown.
    #[derive(Default)]
    struct ScriptedPrompt {
        answer: Vec<String>,
        shown: Option<(String, Vec<ToggleItem>, usize)>,
    }

    impl ScriptedPrompt {
        fn answering(names: &[&str]) -> Self {
            Self {
                answer: names.iter().map(|name| (*name).to_string()).collect(),
                shown: None,
            }
        }
    }

    impl SelectionPrompt for ScriptedPrompt {
        fn select(
            &mut self,
            message: &str,
            items: &[ToggleItem],
            page_size: usize,
        ) -> Result<Vec<String>> {
            self.shown = Some((message.to_string(), items.to_vec(), page_size));
            Ok(self.answer.clone())
        }
    }

    struct CancellingPrompt;

    impl SelectionPrompt for CancellingPrompt {
        fn select(&mut self, _: &str, _: &[ToggleItem], _: usize) -> Result<Vec<String>> {
            Err(ClaudeExtError::SelectionCancelled.into())
        }
    }

    #[test]
    fn test_no_servers_writes_nothing() {
        let home = TestHome::new();
        let store = ConfigStore::from_home(home.path());
        let mut prompt = ScriptedPrompt::default();

        let mut out = Vec::new();
        let outcome = McpCommand::default().execute_with(&store, &mut prompt, &mut out).unwrap();

        assert!(outcome.is_none());
        assert_eq!(
            strip_ansi(&String::from_utf8(out).unwrap()),
            "No MCP servers found in ~/.claude/settings.json or ~/.claude-ext.json\n"
        );
        assert!(prompt.shown.is_none());
        assert!(!home.settings_path().exists());
        assert!(!home.legacy_path().exists());
        assert!(!home.disabled_path().exists());
    }

    #[test]
    fn test_selection_moves_servers() {
        let home = TestHome::new();
        home.write_settings(&json!({"mcpServers": {"a": {"cmd": "x"}}}));
        home.write_disabled(&json!({"mcpServers": {"b": {"cmd": "y"}}}));

        let store = ConfigStore::from_home(home.path());
        let mut prompt = ScriptedPrompt::answering(&["b"]);
        let outcome = McpCommand::default()
            .execute_with(&store, &mut prompt, &mut Vec::new())
            .unwrap()
            .unwrap();

        assert_eq!(home.read_json(&home.settings_path()), json!({"mcpServers": {"b": {"cmd": "y"}}}));
        assert_eq!(home.read_json(&home.disabled_path()), json!({"mcpServers": {"a": {"cmd": "x"}}}));
        assert_eq!(outcome.enabled, vec!["b"]);
        assert_eq!(outcome.disabled, vec!["a"]);
    }

    #[test]
    fn test_prompt_receives_sorted_items_and_label() {
        let home = TestHome::new();
        home.write_legacy(&json!({"mcpServers": {"zeta": {}, "alpha": {}}}));
        home.write_disabled(&json!({"mcpServers": {"beta": {}}}));

        let store = ConfigStore::from_home(home.path());
        let mut prompt = ScriptedPrompt::answering(&["alpha", "zeta"]);
        McpCommand::default().execute_with(&store, &mut prompt, &mut Vec::new()).unwrap();

        let (message, items, page_size) = prompt.shown.unwrap();
        assert_eq!(message, "Toggle MCP servers (active servers will be in ~/.claude.json):");
        assert_eq!(page_size, PAGE_SIZE);
        let rows: Vec<(&str, bool)> =
            items.iter().map(|item| (item.value.as_str(), item.checked)).collect();
        assert_eq!(rows, vec![("alpha", true), ("beta", false), ("zeta", true)]);
    }

    #[test]
    fn test_cancelled_prompt_writes_nothing() {
        let home = TestHome::new();
        home.write_settings(&json!({"mcpServers": {"a": {}}}));

        let store = ConfigStore::from_home(home.path());
        let mut out = Vec::new();
        let err = McpCommand::default()
            .execute_with(&store, &mut CancellingPrompt, &mut out)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ClaudeExtError>(),
            Some(ClaudeExtError::SelectionCancelled)
        ));
        assert!(!home.disabled_path().exists());
        assert_eq!(home.read_json(&home.settings_path()), json!({"mcpServers": {"a": {}}}));

        // Only the header was printed; no report follows a cancelled prompt
        let printed = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(printed.starts_with("MCP Server Manager\n"));
        assert!(!printed.contains("Configuration updated"));
    }

    #[test]
    fn test_output_lists_changes_and_counts() {
        let home = TestHome::new();
        home.write_legacy(&json!({"mcpServers": {"zeta": {}, "alpha": {}}}));
        home.write_disabled(&json!({"mcpServers": {"beta": {}}}));

        let store = ConfigStore::from_home(home.path());
        let mut prompt = ScriptedPrompt::answering(&["beta", "zeta"]);
        let mut out = Vec::new();
        McpCommand::default().execute_with(&store, &mut prompt, &mut out).unwrap();

        let printed = strip_ansi(&String::from_utf8(out).unwrap());
        let expected = [
            "MCP Server Manager",
            "Select which MCP servers should be active in Claude:",
            "Config: ~/.claude.json",
            "",
            "✗ Disabled: alpha",
            "✓ Enabled: beta",
            "✓ Enabled: zeta",
            "",
            "Configuration updated successfully!",
            "Active servers: 2 (in ~/.claude.json)",
            "Disabled servers: 1 (in ~/.claude-ext.json)",
        ];
        assert_eq!(printed.lines().collect::<Vec<_>>(), expected);
    }
}
