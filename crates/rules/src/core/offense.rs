use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::ruby::RubySource;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
    pub snippet: Option<String>,
}

impl Location {
    pub fn new(file: String, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            end_line: None,
            end_column: None,
            snippet: None,
        }
    }

    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = Some(snippet);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Offense<'tree> {
    pub rule_id: &'static str,
    pub node: Node<'tree>,
    pub message: &'static str,
}

impl<'tree> Offense<'tree> {
    pub fn new(rule_id: &'static str, node: Node<'tree>, message: &'static str) -> Self {
        Self {
            rule_id,
            node,
            message,
        }
    }

    /// Resolves the anchor into a file/line/column span with its snippet.
    /// `source` must be the parsed file the offense was scanned from; the
    /// anchor's byte range is only meaningful against that text.
    pub fn location(&self, source: &RubySource) -> Location {
        debug_assert!(
            self.node.end_byte() <= source.text().len(),
            "offense anchored in a different source"
        );
        let start = self.node.start_position();
        let end = self.node.end_position();
        Location::new(source.path().to_string(), start.row + 1, start.column)
            .with_end(end.row + 1, end.column)
            .with_snippet(source.node_text(self.node).to_string())
    }
}
