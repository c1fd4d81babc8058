use tree_sitter::{Node, TreeCursor};

/// Walks `node` and its whole subtree in document (pre-order) order,
/// starting with `node` itself.
pub fn descendants(node: Node<'_>) -> Descendants<'_> {
    Descendants {
        cursor: node.walk(),
        root_id: node.id(),
        done: false,
    }
}

pub struct Descendants<'tree> {
    cursor: TreeCursor<'tree>,
    root_id: usize,
    done: bool,
}

impl<'tree> Iterator for Descendants<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Node<'tree>> {
        if self.done {
            return None;
        }

        let current = self.cursor.node();
        if self.cursor.goto_first_child() {
            return Some(current);
        }

        // No children: climb until a sibling exists, stopping at the
        // starting node so the walk never escapes the subtree.
        loop {
            if self.cursor.node().id() == self.root_id {
                self.done = true;
                break;
            }
            if self.cursor.goto_next_sibling() {
                break;
            }
            if !self.cursor.goto_parent() {
                self.done = true;
                break;
            }
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruby::RubySource;

    fn count_nodes(node: Node<'_>) -> usize {
        let mut cursor = node.walk();
        1 + node.children(&mut cursor).map(count_nodes).sum::<usize>()
    }

    #[test]
    fn test_first_yield_is_the_starting_node() {
        let source = RubySource::parse("factory :user do\nend\n").unwrap();
        let first = descendants(source.root()).next().unwrap();
        assert_eq!(first.id(), source.root().id());
    }

    #[test]
    fn test_visits_every_node_exactly_once() {
        let source = RubySource::parse(
            "factory :user do\n  profile { create(:profile) }\n  account { build(:account) }\nend\n",
        )
        .unwrap();
        assert_eq!(
            descendants(source.root()).count(),
            count_nodes(source.root())
        );
    }

    #[test]
    fn test_pre_order_never_moves_backwards() {
        let source = RubySource::parse(
            "factory :user do\n  profile { create(:profile) }\nend\nfactory :admin do\nend\n",
        )
        .unwrap();
        let nodes: Vec<Node> = descendants(source.root()).collect();
        for window in nodes.windows(2) {
            assert!(window[0].start_byte() <= window[1].start_byte());
        }
    }

    #[test]
    fn test_single_token_subtree_yields_itself_once() {
        let source = RubySource::parse("factory :user do\nend\n").unwrap();
        let symbol = descendants(source.root())
            .find(|node| node.kind() == "simple_symbol")
            .unwrap();
        let yielded: Vec<Node> = descendants(symbol).collect();
        assert_eq!(yielded.len(), 1);
        assert_eq!(yielded[0].id(), symbol.id());
    }

    #[test]
    fn test_stays_within_the_subtree() {
        let source = RubySource::parse(
            "factory :user do\n  profile { create(:profile) }\n  account { build(:account) }\nend\n",
        )
        .unwrap();
        let profile = descendants(source.root())
            .find(|node| node.kind() == "call" && source.node_text(*node).starts_with("profile"))
            .unwrap();
        for node in descendants(profile) {
            assert!(node.start_byte() >= profile.start_byte());
            assert!(node.end_byte() <= profile.end_byte());
        }
    }
}
