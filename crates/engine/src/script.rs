//! Scripted input for headless runs
//!
//! A script is a comma-separated list of intent names, e.g.
//! `"rotate,moveLeft,hardDrop"`. Names are case-insensitive; blank entries
//! are skipped. A session plays one intent per frame and cycles.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::Intent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown intent `{0}` (expected moveLeft, moveRight, softDrop, hardDrop or rotate)")]
    UnknownIntent(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    intents: Vec<Intent>,
}

impl Script {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Intent for `frame`, cycling through the script
    pub fn intent_at(&self, frame: u64) -> Option<Intent> {
        if self.intents.is_empty() {
            return None;
        }
        let index = (frame % self.intents.len() as u64) as usize;
        Some(self.intents[index])
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let intents = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                Intent::from_str(token).ok_or_else(|| ScriptError::UnknownIntent(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { intents })
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.intents.iter().map(Intent::as_str).collect();
        f.write_str(&names.join(","))
    }
}
