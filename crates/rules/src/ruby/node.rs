//! Kind checks and decomposition helpers for tree-sitter-ruby nodes.
//!
//! The grammar attaches blocks to `call` nodes (`block` for braces,
//! `do_block` for do/end), keeps block statements under a `body` field and
//! spells symbols with their leading colon. The helpers here absorb those
//! details so rules never touch grammar internals directly.

use tree_sitter::Node;

use crate::ruby::RubySource;

/// One constituent of a decomposed node: either a name the source spells
/// out directly (callee names, identifiers, symbol values) or an opaque
/// child node that only matters structurally.
#[derive(Debug, Clone, Copy)]
pub enum NodePart<'tree> {
    Name(&'tree str),
    Child(Node<'tree>),
}

pub fn is_block_call(node: Node<'_>) -> bool {
    node.kind() == "call" && attached_block(node).is_some()
}

pub fn attached_block(node: Node<'_>) -> Option<Node<'_>> {
    let block = node.child_by_field_name("block")?;
    if matches!(block.kind(), "block" | "do_block") {
        Some(block)
    } else {
        None
    }
}

pub fn receiver(call: Node<'_>) -> Option<Node<'_>> {
    call.child_by_field_name("receiver")
}

pub fn method_name<'s>(source: &'s RubySource, call: Node<'_>) -> Option<&'s str> {
    let method = call.child_by_field_name("method")?;
    Some(source.node_text(method))
}

/// Returns the last expression a block body evaluates, skipping comments.
/// Blocks without a body (empty braces, parameters only) have none.
pub fn trailing_expression(block: Node<'_>) -> Option<Node<'_>> {
    let body = block.child_by_field_name("body")?;
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .last()
}

/// Decomposes a node one level deep: a call flattens to its receiver,
/// callee name and arguments in that order; identifiers, constants and
/// plain symbols flatten to their own name; anything else is left as
/// opaque children.
pub fn node_parts<'s>(source: &'s RubySource, node: Node<'s>) -> Vec<NodePart<'s>> {
    match node.kind() {
        "call" => {
            let mut parts = Vec::new();
            if let Some(receiver) = node.child_by_field_name("receiver") {
                parts.push(NodePart::Child(receiver));
            }
            if let Some(method) = node.child_by_field_name("method") {
                parts.push(NodePart::Name(source.node_text(method)));
            }
            if let Some(arguments) = node.child_by_field_name("arguments") {
                let mut cursor = arguments.walk();
                for argument in arguments.named_children(&mut cursor) {
                    parts.push(NodePart::Child(argument));
                }
            }
            parts
        }
        "identifier" | "constant" => vec![NodePart::Name(source.node_text(node))],
        "simple_symbol" => vec![NodePart::Name(source.node_text(node).trim_start_matches(':'))],
        "delimited_symbol" => {
            let mut cursor = node.walk();
            let children: Vec<Node<'s>> = node.named_children(&mut cursor).collect();
            match children.as_slice() {
                [content] if content.kind() == "string_content" => {
                    vec![NodePart::Name(source.node_text(*content))]
                }
                _ => children.into_iter().map(NodePart::Child).collect(),
            }
        }
        _ => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .map(NodePart::Child)
                .collect()
        }
    }
}
