//! Kojo Rules - factory_bot lint core
//!
//! Structural lint rules for factory_bot factories, built on tree-sitter's
//! Ruby grammar. Parsed sources come in through [`RubySource`], the scan
//! driver dispatches each [`Rule`] over block-attached calls in document
//! order, and offenses come back anchored to the exact node a diagnostic
//! should highlight.

pub mod core;
pub mod language;
pub mod ruby;
pub mod rules;

pub use crate::core::{scan_source, Location, Offense, Rule};
pub use crate::language::{StrategySet, FACTORY_CALLS};
pub use crate::ruby::{ParseError, RubySource};
pub use crate::rules::FactoryAssociationWithStrategy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_carries_the_shared_vocabulary() {
        let rule = FactoryAssociationWithStrategy::new();
        assert_eq!(rule.id(), "factory-association-with-strategy");
        assert!(FACTORY_CALLS.contains("create"));
    }
}
