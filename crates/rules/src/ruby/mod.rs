//! Ruby source facade and AST helpers built on tree-sitter.

pub mod node;
pub mod source;
pub mod walk;

pub use source::{ParseError, RubySource};
pub use walk::{descendants, Descendants};
