// Task identifier generation

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Source of fresh task ids
///
/// Every call must return an id never handed out before by the same generator.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Monotonic counter ids: "1", "2", "3", ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// UUID v7 ids, ordered by creation time
#[derive(Debug, Clone, Default)]
pub struct TimeOrderedIds;

impl IdGenerator for TimeOrderedIds {
    fn next_id(&mut self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Which generator a new store should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdScheme {
    #[default]
    Sequential,
    TimeOrdered,
}

impl IdScheme {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Sequential => Box::new(SequentialIds::new()),
            IdScheme::TimeOrdered => Box::new(TimeOrderedIds),
        }
    }
}

impl std::fmt::Display for IdScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdScheme::Sequential => write!(f, "sequential"),
            IdScheme::TimeOrdered => write!(f, "time-ordered"),
        }
    }
}

impl FromStr for IdScheme {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sequential" => Ok(IdScheme::Sequential),
            "time-ordered" => Ok(IdScheme::TimeOrdered),
            other => Err(eyre!(
                "Unknown id scheme '{}' (expected sequential or time-ordered)",
                other
            )),
        }
    }
}
