//! Faculty roster: normalized name keys mapped to employee IDs

use super::normalize::Normalizer;
use crate::error::RosterResult;
use crate::types::Sheet;
use std::collections::HashMap;

/// One roster key and the employee ID it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub key: String,
    pub employee_id: String,
}

/// Insertion-ordered map from normalized faculty name to employee ID.
///
/// A key keeps the position of its first insertion even when a later
/// faculty row overwrites its ID; the containment fallback in
/// [`MatchPolicy`](super::MatchPolicy) scans keys in this order.
#[derive(Debug, Clone)]
pub struct Roster {
    normalizer: Normalizer,
    entries: Vec<RosterEntry>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            entries: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Build a roster from (faculty name, employee ID) pairs
    pub fn from_faculty<I, N, E>(faculty: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        N: AsRef<str>,
        E: AsRef<str>,
    {
        let mut roster = Self::new()?;
        for (name, employee_id) in faculty {
            roster.add_faculty(name.as_ref(), employee_id.as_ref());
        }
        Ok(roster)
    }

    /// Build a roster from a faculty sheet.
    ///
    /// Both columns must exist; rows with a missing name or ID are skipped.
    pub fn from_sheet(sheet: &Sheet, name_column: &str, id_column: &str) -> RosterResult<Self> {
        let cols = sheet.require_columns(&[id_column, name_column])?;
        let (id_col, name_col) = (cols[0], cols[1]);

        let mut roster = Self::new()?;
        for row in 0..sheet.len() {
            let name = sheet.cell(row, name_col);
            let employee_id = sheet.cell(row, id_col);
            if name.is_missing() || employee_id.is_missing() {
                continue;
            }
            roster.add_faculty(&name.to_text(), employee_id.to_text().trim());
        }

        tracing::info!(
            sheet = %sheet.name,
            faculty = sheet.len(),
            keys = roster.len(),
            "built faculty roster"
        );
        Ok(roster)
    }

    /// Add one faculty member under its full key and its first+last key.
    ///
    /// The full key always takes the new ID. The abbreviated key is only
    /// added when no entry already owns it. Returns false when the row is
    /// skipped because the name or ID is blank.
    pub fn add_faculty(&mut self, name: &str, employee_id: &str) -> bool {
        let key = self.normalizer.normalize(name);
        if key.is_empty() || employee_id.trim().is_empty() {
            return false;
        }

        let parts: Vec<&str> = key.split(' ').collect();
        let short_key = if parts.len() >= 2 {
            Some(format!("{} {}", parts[0], parts[parts.len() - 1]))
        } else {
            None
        };

        self.upsert(&key, employee_id);
        if let Some(short_key) = short_key {
            if !self.index.contains_key(&short_key) {
                self.upsert(&short_key, employee_id);
            }
        }
        true
    }

    fn upsert(&mut self, key: &str, employee_id: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].employee_id = employee_id.to_string(),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(RosterEntry {
                    key: key.to_string(),
                    employee_id: employee_id.to_string(),
                });
            }
        }
    }

    /// Exact lookup of an already-normalized key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].employee_id.as_str())
    }

    /// Entries in roster order
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
