//! Transport-facing reply records.

use serde::{Deserialize, Serialize};

use game_core::BattleReport;

use super::command::Command;

/// An inline button. `command` is the textual form accepted by
/// `Command::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub command: String,
}

impl Button {
    pub fn new(label: impl Into<String>, command: &Command) -> Self {
        Self {
            label: label.into(),
            command: command.to_string(),
        }
    }
}

/// Result of one dispatched command. Rendering is the transport's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    /// Rows of buttons.
    pub buttons: Vec<Vec<Button>>,
    /// Full battle report, for transports that replay the log.
    pub battle: Option<BattleReport>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_row(mut self, row: Vec<Button>) -> Self {
        if !row.is_empty() {
            self.buttons.push(row);
        }
        self
    }

    pub fn with_battle(mut self, report: BattleReport) -> Self {
        self.battle = Some(report);
        self
    }

    /// Every button command, row by row.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.buttons
            .iter()
            .flatten()
            .map(|button| button.command.as_str())
    }
}
