//! Strongly-typed record identifier
//!
//! Every customer record gets a random ID at creation so that selecting and
//! editing never depends on the (non-unique) customer name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "rec-";

/// Identifier of a [`CustomerRecord`](super::CustomerRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from a full UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether user input refers to this ID
    ///
    /// Accepts the short display form (`rec-1a2b3c4d`) as well as the full
    /// UUID with or without the prefix.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input.eq_ignore_ascii_case(&self.to_string()) {
            return true;
        }
        input
            .parse::<RecordId>()
            .map(|parsed| parsed == *self)
            .unwrap_or(false)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
