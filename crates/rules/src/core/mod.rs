//! Core abstractions shared by every rule: the dispatch trait, the scan
//! driver and the offense values rules hand back to the host.

pub mod offense;
pub mod rule;

pub use offense::{Location, Offense};
pub use rule::{scan_source, Rule};
