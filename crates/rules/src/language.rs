//! Shared factory_bot vocabulary.
//!
//! The strategy names below mirror the method list factory_bot ships: the
//! canonical strategies plus their list, pair and attributes_for variants.
//! Rules hold the set as read-only configuration, so a host with its own
//! dialect can hand a rule a different set at construction time.

/// An immutable set of method names treated as hard-coded build strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySet {
    names: &'static [&'static str],
}

impl StrategySet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| *candidate == name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

/// Every factory_bot method that materializes or stubs records directly.
pub const FACTORY_CALLS: StrategySet = StrategySet::new(&[
    "attributes_for",
    "attributes_for_list",
    "attributes_for_pair",
    "build",
    "build_list",
    "build_pair",
    "build_stubbed",
    "build_stubbed_list",
    "build_stubbed_pair",
    "create",
    "create_list",
    "create_pair",
    "generate",
    "generate_list",
    "null",
    "pair",
]);
