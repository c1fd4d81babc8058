//! The lint rules themselves.

pub mod factory_association_with_strategy;

pub use factory_association_with_strategy::FactoryAssociationWithStrategy;
