//! Rule trait and the per-file scan driver.
//!
//! Rules are stateless hooks dispatched once per block-attached call while
//! the driver walks a parsed file in document order. They push offenses
//! into a shared vector instead of returning them, so one pass over the
//! file collects from every trigger node.

use std::collections::HashSet;
use std::sync::OnceLock;

use streaming_iterator::StreamingIterator;
use tracing::debug;
use tree_sitter::{Node, Query, QueryCursor};

use crate::core::Offense;
use crate::ruby::node::attached_block;
use crate::ruby::RubySource;

pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    fn check_block_call<'tree>(
        &self,
        source: &'tree RubySource,
        call: Node<'tree>,
        offenses: &mut Vec<Offense<'tree>>,
    );
}

const BLOCK_CALL_QUERY: &str = "(call) @call";

fn block_call_query() -> &'static Query {
    static QUERY: OnceLock<Query> = OnceLock::new();
    QUERY.get_or_init(|| {
        let language = tree_sitter_ruby::LANGUAGE.into();
        Query::new(&language, BLOCK_CALL_QUERY).expect("Failed to create block call query")
    })
}

/// Runs one rule over a parsed file, dispatching it on every call node
/// with an attached block, in document order.
pub fn scan_source<'tree>(rule: &dyn Rule, source: &'tree RubySource) -> Vec<Offense<'tree>> {
    let mut offenses = Vec::new();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(block_call_query(), source.root(), source.text().as_bytes());

    matches.advance();
    while let Some(match_) = matches.get() {
        for capture in match_.captures {
            let call = capture.node;
            if attached_block(call).is_some() {
                rule.check_block_call(source, call, &mut offenses);
            }
        }
        matches.advance();
    }

    // Nested trigger nodes can rediscover an anchor; keep the first report.
    let mut seen = HashSet::new();
    offenses.retain(|offense| seen.insert(offense.node.id()));

    debug!(
        "rule {} produced {} offenses for {}",
        rule.id(),
        offenses.len(),
        source.path()
    );

    offenses
}
