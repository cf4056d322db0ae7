//! Violation aggregation: failed rules collected into an ordered field -> message map.

use super::rules::{FieldOutcome, Outcome};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name -> message for every failed rule, in evaluation order.
///
/// Keys are unique. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    entries: Vec<(&'static str, &'static str)>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the failed outcomes, preserving their order.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = FieldOutcome>,
    {
        let mut violations = Self::new();
        for FieldOutcome { field, outcome } in outcomes {
            if let Outcome::Fail(message) = outcome {
                violations.insert(field, message);
            }
        }
        violations
    }

    /// Records a violation. The first message recorded for a field wins.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        if self.get(field).is_none() {
            self.entries.push((field, message));
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(field, _)| *field).collect()
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// A candidate record broke one or more field rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("client record failed validation on: {}", .violations.fields().join(", "))]
pub struct ValidationFailure {
    violations: Violations,
}

impl ValidationFailure {
    pub fn new(violations: Violations) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    pub fn into_violations(self) -> Violations {
        self.violations
    }
}
