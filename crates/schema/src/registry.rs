//! Schema registry: command type name → contract.

use std::collections::HashMap;

use crate::contract::Contract;
use crate::contracts;

/// Immutable lookup table of validation contracts.
///
/// Built once, then only read; share it freely across threads. Adding a command
/// type means adding a table entry, never editing an existing contract in place.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    contracts: HashMap<&'static str, Contract>,
    order: Vec<&'static str>,
}

impl SchemaRegistry {
    /// The registry with every built-in command type.
    pub fn builtin() -> Self {
        Self::from_entries(contracts::builtin())
    }

    /// Build a registry from explicit entries.
    ///
    /// If a type name appears more than once, the first entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, Contract)>) -> Self {
        let mut contracts = HashMap::new();
        let mut order = Vec::new();
        for (name, contract) in entries {
            if contracts.contains_key(name) {
                continue;
            }
            contracts.insert(name, contract);
            order.push(name);
        }
        Self { contracts, order }
    }

    /// Exact-match lookup.
    pub fn lookup(&self, type_name: &str) -> Option<&Contract> {
        self.contracts.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.contracts.contains_key(type_name)
    }

    /// Registered type names, in the order they were registered.
    pub fn command_types(&self) -> &[&'static str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
