//! Panel cells that already carry employee IDs
//!
//! Some review sheets write panel members with their IDs inline, e.g.
//! `"Dr. Asha Rao (50123) and Vikram N(51234)"`, instead of leaving them to
//! be looked up by name. [`PanelParser`] pulls the IDs back out and rewrites
//! the cell as `"50123 Dr. Asha Rao & 51234 Vikram N"`, the same shape the
//! BDS panel job builds from the faculty roster.

use crate::error::{RosterError, RosterResult};
use regex::Regex;

/// Joins members in a rewritten panel cell
pub const MEMBER_SEPARATOR: &str = " & ";

/// One panel member; either half may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelMember {
    pub employee_id: String,
    pub name: String,
}

impl PanelMember {
    /// `"ID NAME"`, or whichever half is present
    pub fn label(&self) -> String {
        clean(&format!("{} {}", self.employee_id, self.name))
    }
}

/// Whitespace runs (NBSP included) collapsed to one space, then trimmed
pub fn clean(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn compile(pattern: &str) -> RosterResult<Regex> {
    Regex::new(pattern).map_err(|e| RosterError::Validation(format!("Regex error: {}", e)))
}

#[derive(Debug, Clone)]
pub struct PanelParser {
    /// Tried in order; the first that yields exactly two parts wins
    separators: Vec<Regex>,
    paren_id: Regex,
    trailing_id: Regex,
    leading_id: Regex,
    tagged_pair: Regex,
    conjunction: Regex,
}

impl PanelParser {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            separators: vec![
                compile(r"(?i)\s+and\s+")?,
                compile(r"\s*&\s*")?,
                compile(r"\s*,\s*")?,
            ],
            paren_id: compile(r"\(([0-9]{3,})\)")?,
            trailing_id: compile(r"^(.*?)([0-9]{3,})$")?,
            leading_id: compile(r"^([0-9]{3,})(.*)$")?,
            tagged_pair: compile(r"([^()]+?)\s*\(([0-9]+)\)")?,
            conjunction: compile(r"(?i)\s*\band\b\s*")?,
        })
    }

    /// Split a cell into two members on " and ", "&" or ",".
    ///
    /// A cell that does not split into exactly two parts is one member.
    pub fn split_members(&self, raw: &str) -> Vec<String> {
        let text = clean(raw);
        for separator in &self.separators {
            let parts: Vec<&str> = separator.split(&text).collect();
            if parts.len() == 2 {
                return parts.into_iter().map(str::to_string).collect();
            }
        }
        vec![text]
    }

    /// Find a member's ID: `(digits)` anywhere, else trailing digits, else
    /// leading digits. IDs have at least three digits.
    pub fn parse_member(&self, raw: &str) -> PanelMember {
        let text = clean(raw);

        if let Some(caps) = self.paren_id.captures(&text) {
            return PanelMember {
                employee_id: caps[1].to_string(),
                name: clean(&self.paren_id.replace(&text, "")),
            };
        }
        if let Some(caps) = self.trailing_id.captures(&text) {
            return PanelMember {
                employee_id: caps[2].to_string(),
                name: clean(&caps[1]),
            };
        }
        if let Some(caps) = self.leading_id.captures(&text) {
            return PanelMember {
                employee_id: caps[1].to_string(),
                name: clean(&caps[2]),
            };
        }

        PanelMember {
            employee_id: String::new(),
            name: text,
        }
    }

    /// Rewrite a whole cell as `"ID NAME & ID NAME"`.
    ///
    /// Members that come out empty are dropped; a blank cell stays blank.
    pub fn format_panel(&self, raw: &str) -> String {
        let text = clean(raw);
        if text.is_empty() {
            return String::new();
        }
        self.split_members(&text)
            .iter()
            .map(|member| self.parse_member(member).label())
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
            .join(MEMBER_SEPARATOR)
    }

    /// Every `Name (digits)` pair in the cell, rewritten as `"ID NAME"` and
    /// joined with `" & "`. `None` when the cell has no such pair.
    ///
    /// A stray "and" between pairs is dropped from the following name.
    pub fn parse_tagged_pairs(&self, raw: &str) -> Option<String> {
        let labels: Vec<String> = self
            .tagged_pair
            .captures_iter(raw)
            .map(|caps| {
                let name = self.conjunction.replace_all(caps[1].trim(), " ");
                PanelMember {
                    employee_id: caps[2].to_string(),
                    name: clean(&name),
                }
                .label()
            })
            .collect();

        if labels.is_empty() {
            None
        } else {
            Some(labels.join(MEMBER_SEPARATOR))
        }
    }
}
