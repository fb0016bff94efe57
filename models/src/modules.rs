use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Catalog entry for one onboarding module.
///
/// Completing a module grants exactly one key.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Module {
    /// Stable string id, e.g. "pre-arrival-1".
    pub id: String,

    pub title: String,

    pub description: String,

    /// Keys needed before this module itself can be started.
    #[serde(default)]
    pub keys_required: u32,
}

impl Module {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            keys_required: 0,
        }
    }

    pub fn keys_required(mut self, keys: u32) -> Self {
        self.keys_required = keys;
        self
    }
}

/// The onboarding journey: school insights, two pre-arrival checklists,
/// post-arrival paperwork, integration and finances.
pub fn default_catalog() -> Vec<Module> {
    vec![
        Module::new("school", "School & Local Insights"),
        Module::new("pre-arrival-1", "Pre-Arrival Checklist (Part 1)"),
        Module::new("pre-arrival-2", "Pre-Arrival Checklist (Part 2)"),
        Module::new("post-arrival", "Post-Arrival Checklist").keys_required(2),
        Module::new("integration", "French Integration").keys_required(3),
        Module::new("finance", "Tracking your Finances").keys_required(1),
    ]
}

/// Static table mapping feature ids to the keys needed to access them.
///
/// Features absent from the table require no keys.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct GateTable {
    pub required: HashMap<String, u32>,
}

impl GateTable {
    /// Table with no gated features.
    pub fn open() -> Self {
        Self {
            required: HashMap::new(),
        }
    }

    pub fn require(mut self, feature: impl Into<String>, keys: u32) -> Self {
        self.required.insert(feature.into(), keys);
        self
    }

    pub fn required_keys(&self, feature: &str) -> u32 {
        self.required.get(feature).copied().unwrap_or(0)
    }
}

impl Default for GateTable {
    /// Every community destination behind a single key.
    fn default() -> Self {
        let mut table = Self::open();

        for feature in [
            "qa",
            "hub",
            "news",
            "affiliation",
            "language",
            "translate",
            "contact",
            "profile",
            "notifications",
            "integration",
            "documents",
        ] {
            table = table.require(feature, 1);
        }

        table
    }
}
