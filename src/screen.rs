// Screen selection for the presentation layer

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Placeholder entry screen, no credentials involved
    #[default]
    Login,
    Tasks,
    Completed,
    Removed,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Login, Screen::Tasks, Screen::Completed, Screen::Removed];
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Login => write!(f, "login"),
            Screen::Tasks => write!(f, "tasks"),
            Screen::Completed => write!(f, "completed"),
            Screen::Removed => write!(f, "removed"),
        }
    }
}

impl FromStr for Screen {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "login" => Ok(Screen::Login),
            "tasks" => Ok(Screen::Tasks),
            "completed" => Ok(Screen::Completed),
            "removed" => Ok(Screen::Removed),
            other => Err(eyre!(
                "Unknown screen '{}' (expected login, tasks, completed or removed)",
                other
            )),
        }
    }
}

/// Tracks which screen is showing
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new(start: Screen) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `screen`, returning the previous one
    pub fn go(&mut self, screen: Screen) -> Screen {
        let previous = std::mem::replace(&mut self.current, screen);
        debug!(from = %previous, to = %screen, "Navigated");
        previous
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}
