use std::collections::HashSet;

use crate::errors::Error;

use passerelle_models::modules::{default_catalog, GateTable, Module};

use tracing::info;

/// Per-session record of completed modules and the keys they earned.
///
/// Keys only ever go up: one per module completion, counted once per
/// module id no matter how often completion is reported.
#[derive(PartialEq, Clone, Debug)]
pub struct ProgressLedger {
    catalog: Vec<Module>,
    gates: GateTable,
    completed: HashSet<String>,
    base_grant: u32,
}

impl Default for ProgressLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressLedger {
    /// Ledger over the default onboarding catalog and gate table.
    pub fn new() -> Self {
        Self::with_catalog(default_catalog(), GateTable::default())
    }

    pub fn with_catalog(catalog: Vec<Module>, gates: GateTable) -> Self {
        Self {
            catalog,
            gates,
            completed: HashSet::new(),
            base_grant: 0,
        }
    }

    /// Start the session with keys already in hand.
    pub fn with_base_grant(mut self, keys: u32) -> Self {
        self.base_grant = keys;
        self
    }

    pub fn catalog(&self) -> &[Module] {
        &self.catalog
    }

    /// Keys currently held. Never decremented by any operation.
    pub fn keys(&self) -> u32 {
        self.base_grant + self.completed.len() as u32
    }

    pub fn is_completed(&self, module_id: &str) -> bool {
        self.completed.contains(module_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Record a module completion and grant its key.
    ///
    /// Idempotent: a module already completed is a no-op returning
    /// `Ok(false)`. Ids outside the catalog are rejected so a stray id can
    /// never mint keys.
    pub fn complete_module(&mut self, module_id: &str) -> Result<bool, Error> {
        if !self.catalog.iter().any(|module| module.id == module_id) {
            return Err(Error::UnknownModule(module_id.to_owned()));
        }

        if !self.completed.insert(module_id.to_owned()) {
            return Ok(false);
        }

        info!(module = module_id, keys = self.keys(), "key granted");

        Ok(true)
    }

    /// Whether the held keys open the named feature.
    ///
    /// `false` is a normal answer, not an error; features absent from the
    /// gate table are always open.
    pub fn can_access(&self, feature_id: &str) -> bool {
        self.keys() >= self.gates.required_keys(feature_id)
    }

    pub fn required_keys(&self, feature_id: &str) -> u32 {
        self.gates.required_keys(feature_id)
    }

    /// Whether the held keys unlock the module itself.
    pub fn can_unlock(&self, module_id: &str) -> Result<bool, Error> {
        let module = self
            .catalog
            .iter()
            .find(|module| module.id == module_id)
            .ok_or_else(|| Error::UnknownModule(module_id.to_owned()))?;

        Ok(self.keys() >= module.keys_required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_idempotent() {
        let mut ledger = ProgressLedger::new();

        assert_eq!(ledger.complete_module("pre-arrival-1"), Ok(true));
        assert_eq!(ledger.complete_module("pre-arrival-1"), Ok(false));

        assert_eq!(ledger.keys(), 1);
        assert!(ledger.is_completed("pre-arrival-1"));
    }

    #[test]
    fn unknown_module_ids_never_mint_keys() {
        let mut ledger = ProgressLedger::new();

        assert_eq!(
            ledger.complete_module("week-end-in-nice"),
            Err(Error::UnknownModule("week-end-in-nice".to_owned()))
        );

        assert_eq!(ledger.keys(), 0);
        assert_eq!(ledger.completed_count(), 0);
    }

    #[test]
    fn gates_open_once_and_stay_open() {
        let mut ledger = ProgressLedger::new();

        assert!(!ledger.can_access("hub"));
        assert!(ledger.can_access("checklist"));

        ledger.complete_module("school").unwrap();

        assert!(ledger.can_access("hub"));

        // Completing more modules never closes a gate.
        ledger.complete_module("pre-arrival-1").unwrap();
        assert!(ledger.can_access("hub"));
    }

    #[test]
    fn module_unlock_thresholds_follow_the_catalog() {
        let mut ledger = ProgressLedger::new();

        assert_eq!(ledger.can_unlock("school"), Ok(true));
        assert_eq!(ledger.can_unlock("post-arrival"), Ok(false));

        ledger.complete_module("school").unwrap();
        ledger.complete_module("pre-arrival-1").unwrap();

        assert_eq!(ledger.can_unlock("post-arrival"), Ok(true));
        assert_eq!(ledger.can_unlock("integration"), Ok(false));
        assert!(ledger.can_unlock("nope").is_err());
    }

    #[test]
    fn base_grant_counts_toward_gates() {
        let ledger = ProgressLedger::new().with_base_grant(4);

        assert_eq!(ledger.keys(), 4);
        assert!(ledger.can_access("hub"));
    }
}
