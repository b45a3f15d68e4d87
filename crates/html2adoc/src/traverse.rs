//! Depth-first walk that drives the renderers.

use tracing::trace;

use crate::buffer::OutputBuffer;
use crate::node::{Node, NodeKind};
use crate::render::{NodeRenderer, Visit};
use crate::utilities::is_structural;

enum Step<'a> {
    Enter(&'a Node, usize),
    Leave(&'a Node, usize),
}

/// Walk `roots` in document order, dispatching enter and leave events.
///
/// Every renderer whose `can_render` accepts a node gets `enter` before the
/// node's children and `leave` after them. A node no renderer accepts is
/// written out as its original markup, subtree included, unless it is one
/// of the containers fragment parsing adds (document, `html`, `head`,
/// `body`), which emit nothing and have their children walked.
///
/// The walk keeps its own stack, so nesting depth is bounded by memory
/// rather than by the call stack.
pub fn traverse(roots: &[Node], renderers: &mut [&mut dyn NodeRenderer], out: &mut OutputBuffer) {
    let mut stack: Vec<Step> = roots.iter().rev().map(|root| Step::Enter(root, 0)).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, depth) => {
                let mut matched = false;
                let mut visit = Visit::Children;
                for renderer in renderers.iter_mut() {
                    if renderer.can_render(node) {
                        matched = true;
                        if renderer.enter(node, depth, out) == Visit::SkipChildren {
                            visit = Visit::SkipChildren;
                        }
                    }
                }

                if !matched && !is_container(node) {
                    let markup = node.outer_html();
                    trace!(depth, markup = %markup, "no renderer matched, keeping markup");
                    out.push_str(&markup);
                    continue;
                }

                stack.push(Step::Leave(node, depth));
                if visit == Visit::Children {
                    for child in node.children.iter().rev() {
                        stack.push(Step::Enter(child, depth + 1));
                    }
                }
            }
            Step::Leave(node, depth) => {
                for renderer in renderers.iter_mut() {
                    if renderer.can_render(node) {
                        renderer.leave(node, depth, out);
                    }
                }
            }
        }
    }
}

fn is_container(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Document => true,
        NodeKind::Element { name, .. } => is_structural(name),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Records every event it sees as `+tag@depth` / `-tag@depth`.
    struct Recorder {
        tags: &'static [&'static str],
    }

    impl NodeRenderer for Recorder {
        fn can_render(&self, node: &Node) -> bool {
            node.tag_name().is_some_and(|tag| self.tags.contains(&tag))
        }

        fn enter(&mut self, node: &Node, depth: usize, out: &mut OutputBuffer) -> Visit {
            out.push_str(&format!("+{}@{depth} ", node.tag_name().unwrap_or("?")));
            Visit::Children
        }

        fn leave(&mut self, node: &Node, depth: usize, out: &mut OutputBuffer) {
            out.push_str(&format!("-{}@{depth} ", node.tag_name().unwrap_or("?")));
        }
    }

    struct Skipper;

    impl NodeRenderer for Skipper {
        fn can_render(&self, node: &Node) -> bool {
            node.tag_name() == Some("pre")
        }

        fn enter(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
            out.push_str("[pre]");
            Visit::SkipChildren
        }
    }

    fn walk(roots: &[Node], renderers: &mut [&mut dyn NodeRenderer]) -> String {
        let mut out = OutputBuffer::new();
        traverse(roots, renderers, &mut out);
        out.into_string()
    }

    #[test]
    fn test_enter_children_leave_order() {
        let tree = Node::element("a")
            .with_child(Node::element("b"))
            .with_child(Node::element("a").with_child(Node::element("b")));

        let mut recorder = Recorder { tags: &["a", "b"] };
        assert_eq!(
            walk(&[tree], &mut [&mut recorder]),
            "+a@0 +b@1 -b@1 +a@1 +b@2 -b@2 -a@1 -a@0 "
        );
    }

    #[test]
    fn test_unmatched_node_keeps_markup() {
        let tree = Node::element("p")
            .with_child(Node::element("marquee").with_child(Node::text("hi")))
            .with_child(Node::comment("c"));

        let mut recorder = Recorder { tags: &["p"] };
        assert_eq!(
            walk(&[tree], &mut [&mut recorder]),
            "+p@0 <marquee>hi</marquee><!--c-->-p@0 "
        );
    }

    #[test]
    fn test_structural_containers_are_transparent() {
        let tree = Node::document().with_child(
            Node::element("html")
                .with_child(Node::element("head"))
                .with_child(Node::element("body").with_child(Node::element("p"))),
        );

        let mut recorder = Recorder { tags: &["p"] };
        assert_eq!(walk(&[tree], &mut [&mut recorder]), "+p@3 -p@3 ");
    }

    #[test]
    fn test_skip_children() {
        let tree = Node::element("pre").with_child(Node::element("p"));

        let mut skipper = Skipper;
        let mut recorder = Recorder { tags: &["p", "pre"] };
        let mut renderers: [&mut dyn NodeRenderer; 2] = [&mut skipper, &mut recorder];
        assert_eq!(walk(&[tree], &mut renderers), "[pre]+pre@0 -pre@0 ");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut tree = Node::text("leaf");
        for _ in 0..100_000 {
            tree = Node::element("span").with_child(tree);
        }

        let mut recorder = Recorder { tags: &["span"] };
        let out = walk(std::slice::from_ref(&tree), &mut [&mut recorder]);
        assert!(out.starts_with("+span@0 +span@1 "));
        assert!(out.ends_with("-span@1 -span@0 "));
    }
}
