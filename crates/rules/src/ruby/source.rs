//! Parsed Ruby source handed to the rules.
//!
//! Thin facade over tree-sitter: owns the source text together with the tree
//! parsed from it, so rules can borrow nodes and slice their text without
//! going back to the parser.

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Ruby grammar rejected by the tree-sitter runtime: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse Ruby source")]
    Unparsable,
}

#[derive(Debug, Clone)]
pub struct RubySource {
    text: String,
    path: String,
    tree: Tree,
}

impl RubySource {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_ruby::LANGUAGE.into();
        parser.set_language(&language)?;

        let tree = parser.parse(source, None).ok_or(ParseError::Unparsable)?;

        Ok(Self {
            text: source.to_string(),
            path: "(string)".to_string(),
            tree,
        })
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.byte_range()]
    }
}
