use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A category drawn from a catalog together with one of its items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryPair {
    pub category: String,
    pub item: String,
}

impl fmt::Display for CategoryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.item)
    }
}

/// Independently drawn first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Distinct registration numbers plus what was asked for.
///
/// `numbers` holds no duplicates; its order is the order values were first
/// drawn and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationBatch {
    pub numbers: Vec<String>,
    /// Count requested by the caller.
    pub requested: usize,
    /// Set when `requested` exceeded the format's domain size.
    pub clamped_to: Option<usize>,
}

impl RegistrationBatch {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn is_clamped(&self) -> bool {
        self.clamped_to.is_some()
    }

    pub fn to_set(&self) -> HashSet<String> {
        self.numbers.iter().cloned().collect()
    }

    pub fn into_numbers(self) -> Vec<String> {
        self.numbers
    }
}
