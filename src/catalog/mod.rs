//! Static catalog of ACS variable codes and their human-readable labels.
//!
//! Every group lists its "total" denominator first; the remaining members are
//! sub-categories of that total.

mod vars;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One survey variable: opaque service code plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub code: &'static str,
    pub label: &'static str,
}

impl Variable {
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// Topics we know how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    Language,
    DetailedLanguage,
    PublicAssistance,
    PovertyLevel,
    TotalPopulation,
}

impl GroupId {
    pub const ALL: [GroupId; 5] = [
        GroupId::Language,
        GroupId::DetailedLanguage,
        GroupId::PublicAssistance,
        GroupId::PovertyLevel,
        GroupId::TotalPopulation,
    ];

    pub fn group(self) -> VariableGroup {
        let variables = match self {
            GroupId::Language => vars::LANGUAGE,
            GroupId::DetailedLanguage => vars::DETAILED_LANGUAGE,
            GroupId::PublicAssistance => vars::PUBLIC_ASSISTANCE,
            GroupId::PovertyLevel => vars::POVERTY_LEVEL,
            GroupId::TotalPopulation => vars::TOTAL_POPULATION,
        };
        VariableGroup::new(self.as_str(), variables)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Language => "language",
            GroupId::DetailedLanguage => "detailed_language",
            GroupId::PublicAssistance => "public_assistance",
            GroupId::PovertyLevel => "poverty_level",
            GroupId::TotalPopulation => "total_population",
        }
    }
}

/// An ordered set of variables sharing one topic. The first entry is the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableGroup {
    name: &'static str,
    variables: &'static [Variable],
}

impl VariableGroup {
    pub const fn new(name: &'static str, variables: &'static [Variable]) -> Self {
        Self { name, variables }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn variables(&self) -> &'static [Variable] {
        self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The denominator every other member is a share of.
    pub fn total(&self) -> Option<&'static Variable> {
        self.variables.first()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.variables.iter().map(|v| v.code).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.variables.iter().map(|v| v.label).collect()
    }

    pub fn label_of(&self, code: &str) -> Option<&'static str> {
        self.variables
            .iter()
            .find(|v| v.code == code)
            .map(|v| v.label)
    }

    /// Non-empty with unique codes and unique labels.
    pub fn is_well_formed(&self) -> bool {
        let codes: HashSet<_> = self.variables.iter().map(|v| v.code).collect();
        let labels: HashSet<_> = self.variables.iter().map(|v| v.label).collect();
        !self.is_empty() && codes.len() == self.len() && labels.len() == self.len()
    }
}

/// Ordered, de-duplicated union of the codes of `groups`.
pub fn union_codes(groups: &[VariableGroup]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|g| g.variables().iter().map(|v| v.code))
        .filter(|code| seen.insert(*code))
        .collect()
}
