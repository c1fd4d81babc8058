//! Flags factory_bot associations that hard code a build strategy.
//!
//! An attribute block that calls `create`, `build` or another strategy
//! method pins every use of the factory to that one strategy. Implicit,
//! explicit and inline associations follow whatever strategy the caller
//! picked, so those forms stay clean.
//!
//! ```ruby
//! # bad - only works for one strategy
//! factory :foo do
//!   profile { create(:profile) }
//! end
//!
//! # good - implicit
//! factory :foo do
//!   profile
//! end
//!
//! # good - explicit
//! factory :foo do
//!   association :profile
//! end
//!
//! # good - inline
//! factory :foo do
//!   profile { association :profile }
//! end
//! ```

use tree_sitter::Node;

use crate::core::{Offense, Rule};
use crate::language::{StrategySet, FACTORY_CALLS};
use crate::ruby::node::{
    attached_block, is_block_call, method_name, node_parts, receiver, trailing_expression,
    NodePart,
};
use crate::ruby::{descendants, RubySource};

pub const MSG: &str = "Prefer implicit, explicit or inline definition rather than hard coding a strategy for setting association within factory.";

const DEFINITION_METHOD: &str = "factory";

pub struct FactoryAssociationWithStrategy {
    strategies: StrategySet,
}

impl FactoryAssociationWithStrategy {
    pub fn new() -> Self {
        Self {
            strategies: FACTORY_CALLS,
        }
    }

    pub fn with_strategies(strategies: StrategySet) -> Self {
        Self { strategies }
    }

    /// A definition is a bare `factory` call carrying a block; arguments
    /// (factory name, `class:` options) are not constrained.
    fn match_factory_block<'tree>(
        &self,
        source: &RubySource,
        node: Node<'tree>,
    ) -> Option<Node<'tree>> {
        if node.kind() != "call" || receiver(node).is_some() {
            return None;
        }
        if method_name(source, node)? != DEFINITION_METHOD {
            return None;
        }
        attached_block(node)
    }

    fn check_used_strategy<'tree>(
        &self,
        source: &'tree RubySource,
        definition: Node<'tree>,
        offenses: &mut Vec<Offense<'tree>>,
    ) {
        // Skip the first block call the walk yields: that is the definition
        // itself, and its own body must not be read as an attribute block.
        let nested = descendants(definition)
            .filter(|node| is_block_call(*node))
            .skip(1);

        for block_call in nested {
            let body = match attached_block(block_call).and_then(trailing_expression) {
                Some(expression) => expression,
                None => continue,
            };

            if self.uses_strategy(source, body) {
                offenses.push(Offense::new(self.id(), body, MSG));
            }
        }
    }

    fn uses_strategy(&self, source: &RubySource, node: Node<'_>) -> bool {
        node_parts(source, node).iter().any(|part| match part {
            NodePart::Name(name) => self.strategies.contains(name),
            NodePart::Child(_) => false,
        })
    }
}

impl Default for FactoryAssociationWithStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for FactoryAssociationWithStrategy {
    fn id(&self) -> &'static str {
        "factory-association-with-strategy"
    }

    fn name(&self) -> &'static str {
        "Factory Association With Strategy"
    }

    fn description(&self) -> &'static str {
        "Detects factory_bot attribute blocks that pin an association to one build strategy"
    }

    fn check_block_call<'tree>(
        &self,
        source: &'tree RubySource,
        call: Node<'tree>,
        offenses: &mut Vec<Offense<'tree>>,
    ) {
        if self.match_factory_block(source, call).is_some() {
            self.check_used_strategy(source, call, offenses);
        }
    }
}
