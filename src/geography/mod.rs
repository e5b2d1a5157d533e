//! Geography scopes and the immutable state / tribal-area reference tables.

mod states;
mod tribal;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Granularity of a request to the statistical service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    State,
    County,
    TribalArea,
}

impl Scope {
    /// Geography level as the service names it.
    pub fn level(&self) -> &'static str {
        match self {
            Scope::State => "state",
            Scope::County => "county",
            Scope::TribalArea => "american indian area/alaska native area/hawaiian home land",
        }
    }

    /// `for=` predicate selecting every area of this level.
    pub fn predicate(&self) -> String {
        format!("{}:*", self.level())
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.level())
    }
}

static STANDARD: Lazy<GeographyReference> =
    Lazy::new(|| GeographyReference::from_tables(states::STATE_FIPS, tribal::TRIBAL_AREA_NAMES));

/// Name ↔ code lookups. Built once, shared by reference.
#[derive(Debug)]
pub struct GeographyReference {
    code_by_state: HashMap<&'static str, &'static str>,
    state_by_code: HashMap<&'static str, &'static str>,
    tribal_areas: HashMap<&'static str, &'static str>,
}

impl GeographyReference {
    /// The ACS 2019 reference shipped with the crate.
    pub fn standard() -> &'static GeographyReference {
        &STANDARD
    }

    pub fn from_tables(
        states: &'static [(&'static str, &'static str)],
        tribal_areas: &'static [&'static str],
    ) -> Self {
        Self {
            code_by_state: states.iter().copied().collect(),
            state_by_code: states.iter().map(|&(name, code)| (code, name)).collect(),
            tribal_areas: tribal_areas.iter().map(|&name| (name, name)).collect(),
        }
    }

    pub fn state_code(&self, name: &str) -> Option<&'static str> {
        self.code_by_state.get(name.trim()).copied()
    }

    pub fn state_name(&self, code: &str) -> Option<&'static str> {
        self.state_by_code.get(code.trim()).copied()
    }

    /// Accepts a display name or a two-digit FIPS code; returns (code, name).
    pub fn resolve_state(&self, name_or_code: &str) -> Option<(&'static str, &'static str)> {
        let key = name_or_code.trim();
        if let Some(name) = self.state_name(key) {
            let code = self.code_by_state.get(name).copied()?;
            return Some((code, name));
        }
        let (&name, &code) = self
            .code_by_state
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))?;
        Some((code, name))
    }

    /// Canonical name for a tribal-area identifier: exact match first, then
    /// ASCII case-insensitive.
    pub fn tribal_area(&self, identifier: &str) -> Option<&'static str> {
        let key = identifier.trim();
        if let Some(&name) = self.tribal_areas.get(key) {
            return Some(name);
        }
        self.tribal_areas
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(key))
            .map(|(_, name)| *name)
    }

    pub fn state_count(&self) -> usize {
        self.code_by_state.len()
    }

    pub fn tribal_area_count(&self) -> usize {
        self.tribal_areas.len()
    }
}
