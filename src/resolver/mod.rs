//! Faculty name to employee ID resolution
//!
//! Panel sheets name reviewers in free text ("Dr. M. Jayasudha",
//! "jayasudha m") while downstream uploads need employee IDs. The resolver
//! normalizes both sides and looks the query up in a [`Roster`]:
//!
//! 1. blank query → sentinel
//! 2. exact key match
//! 3. fallback per [`MatchPolicy`]
//! 4. nothing found → sentinel
//!
//! The resolver never fails. Every miss collapses to the configured
//! sentinel so the output sheet is always complete.

mod normalize;
mod roster;

pub use normalize::{Normalizer, HONORIFICS};
pub use roster::{Roster, RosterEntry};

use crate::types::CellValue;

/// How to resolve a query that has no exact roster key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// First roster key, in roster order, that contains the query or is
    /// contained in it. Permissive: a bare surname matches the first
    /// faculty member carrying it.
    #[default]
    FirstContainment,
    /// No fallback; only exact keys resolve
    ExactOnly,
}

impl MatchPolicy {
    /// Apply the fallback to an already-normalized, non-empty query
    pub fn find<'r>(&self, roster: &'r Roster, query: &str) -> Option<&'r str> {
        match self {
            MatchPolicy::ExactOnly => None,
            MatchPolicy::FirstContainment => roster
                .entries()
                .iter()
                .find(|entry| entry.key.contains(query) || query.contains(entry.key.as_str()))
                .map(|entry| entry.employee_id.as_str()),
        }
    }
}

/// Outcome of a single lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'r> {
    Exact(&'r str),
    Partial(&'r str),
    Unresolved,
}

impl<'r> Resolution<'r> {
    pub fn employee_id(&self) -> Option<&'r str> {
        match *self {
            Resolution::Exact(id) | Resolution::Partial(id) => Some(id),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Resolves panel member names against a borrowed roster
#[derive(Debug, Clone)]
pub struct NameResolver<'r> {
    roster: &'r Roster,
    sentinel: String,
    policy: MatchPolicy,
}

impl<'r> NameResolver<'r> {
    /// Resolver with the default containment fallback
    pub fn new(roster: &'r Roster, sentinel: impl Into<String>) -> Self {
        Self {
            roster,
            sentinel: sentinel.into(),
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Normalize a name with the roster's rules
    pub fn normalize(&self, raw: &str) -> String {
        self.roster.normalizer().normalize(raw)
    }

    /// Classify a lookup without applying the sentinel
    ///
    /// A query that normalizes to nothing (blank, or a bare `"Dr."`) is
    /// `Unresolved`; it is never treated as a substring of every key.
    pub fn resolve(&self, query: &str) -> Resolution<'r> {
        let key = self.normalize(query);
        if key.is_empty() {
            return Resolution::Unresolved;
        }

        if let Some(id) = self.roster.get(&key) {
            return Resolution::Exact(id);
        }

        match self.policy.find(self.roster, &key) {
            Some(id) => {
                tracing::debug!(query, key = %key, employee_id = id, "partial name match");
                Resolution::Partial(id)
            }
            None => {
                tracing::debug!(query, key = %key, "unresolved panel member");
                Resolution::Unresolved
            }
        }
    }

    /// Employee ID for a name, or the sentinel
    pub fn lookup(&self, query: &str) -> String {
        match self.resolve(query).employee_id() {
            Some(id) => id.to_string(),
            None => self.sentinel.clone(),
        }
    }

    /// Employee ID for a cell; missing cells give the sentinel
    pub fn lookup_cell(&self, cell: &CellValue) -> String {
        if cell.is_missing() {
            return self.sentinel.clone();
        }
        self.lookup(&cell.to_text())
    }
}
