// ⚙️ Session Configuration - policies as data
// Loaded from an optional JSON file, then overridden by command-line flags

use anyhow::{Context as AnyhowContext, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// POLICIES
// ============================================================================

/// What the delete flow does with the YES/NO answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DeleteConfirmation {
    /// Ask, then delete whatever the answer is
    #[default]
    Always,

    /// Only "yes" / "y" (any case) deletes
    RequireYes,
}

impl DeleteConfirmation {
    /// Whether `answer` allows the deletion to proceed
    pub fn permits(&self, answer: &str) -> bool {
        match self {
            DeleteConfirmation::Always => true,
            DeleteConfirmation::RequireYes => {
                let answer = answer.trim().to_lowercase();
                answer == "yes" || answer == "y"
            }
        }
    }
}

/// What the command loop does with a numeric choice outside 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum UnknownChoice {
    /// Report it and show the menu again
    #[default]
    Reprompt,

    /// Report it and end the session
    Exit,
}

// ============================================================================
// SESSION CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub delete_confirmation: DeleteConfirmation,

    pub unknown_choice: UnknownChoice,

    /// Colored output (only honored on a terminal)
    pub color: bool,

    /// Reprint the menu before every choice prompt
    pub show_menu: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            delete_confirmation: DeleteConfirmation::default(),
            unknown_choice: UnknownChoice::default(),
            color: true,
            show_menu: true,
        }
    }
}

impl SessionConfig {
    /// Load config from a JSON file; missing fields fall back to defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: SessionConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Plain output for non-terminal streams
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}
