//! Completion status of a todo.
//!
//! `Status` is the enum view of a todo's done flag. It serializes as a
//! lowercase string and parses from the spellings accepted on the command line.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Whether a todo has been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Undone,
    Done,
}

impl Status {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undone => "undone",
            Self::Done => "done",
        }
    }

    /// Returns the status matching a done flag.
    pub fn from_done(done: bool) -> Self {
        if done { Self::Done } else { Self::Undone }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0} (expected done or undone)")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "done" | "x" => Ok(Self::Done),
            "undone" | "open" => Ok(Self::Undone),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
