//! Player name normalization.
//!
//! The stats API reports players as `<numeric id>-<display name>`, for example
//! `12345-PlayerOne`. Only the display part is ever shown or matched on.

use std::fmt;

/// A player's display name with any leading run of digits and hyphens removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalizes a raw player identifier.
    ///
    /// Finds the first character that is neither an ASCII digit nor a hyphen and
    /// keeps everything from there on, trimmed. Hyphens after that point are kept
    /// verbatim. If the identifier consists only of digits and hyphens it is
    /// returned trimmed but otherwise unchanged.
    ///
    /// # Arguments
    /// - `raw` - Identifier as reported by the stats API
    ///
    /// # Returns
    /// - `PlayerName` - The normalized name (never fails)
    pub fn parse(raw: &str) -> Self {
        match raw.find(|c: char| !(c.is_ascii_digit() || c == '-')) {
            Some(start) => Self(raw[start..].trim().to_string()),
            None => Self(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
