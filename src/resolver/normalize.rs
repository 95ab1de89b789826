//! Name normalization shared by roster construction and lookups

use crate::error::{RosterError, RosterResult};
use regex::Regex;

/// Honorifics stripped from the front of a name, at most once
pub const HONORIFICS: [&str; 5] = ["Dr.", "Prof.", "Ms.", "Mr.", "Mrs."];

/// Turns a raw faculty name into its comparison key.
///
/// 1. trim
/// 2. drop one leading honorific (case-insensitive) and the whitespace after it
/// 3. collapse whitespace runs to single spaces
/// 4. upper-case
#[derive(Debug, Clone)]
pub struct Normalizer {
    honorific: Regex,
}

impl Normalizer {
    pub fn new() -> RosterResult<Self> {
        let alternatives: Vec<String> = HONORIFICS.iter().map(|h| regex::escape(h)).collect();
        let pattern = format!(r"(?i)^(?:{})\s*", alternatives.join("|"));
        let honorific = Regex::new(&pattern)
            .map_err(|e| RosterError::Validation(format!("Regex error: {}", e)))?;
        Ok(Self { honorific })
    }

    pub fn normalize(&self, raw: &str) -> String {
        let stripped = self.honorific.replace(raw.trim(), "");
        stripped
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }
}
