//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Human (X) against the computer (O).
    SinglePlayer,
    /// Two humans sharing the terminal.
    TwoPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single player",
            GameMode::TwoPlayer => "Two players",
        }
    }

    /// Parses a menu answer: `1`, `2`, or the mode's kebab-case name.
    pub fn from_menu_choice(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(GameMode::SinglePlayer),
            "2" => Some(GameMode::TwoPlayer),
            other => other.parse().ok(),
        }
    }
}
