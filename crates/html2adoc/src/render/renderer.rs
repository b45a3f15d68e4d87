//! The contract every element renderer implements.

use crate::buffer::OutputBuffer;
use crate::node::Node;
use crate::service::FormatOptions;

/// What the traversal should do with a node's children after `enter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Walk the children as usual
    #[default]
    Children,
    /// The renderer already emitted the whole subtree
    SkipChildren,
}

/// Renders one kind of node into AsciiDoc.
///
/// `can_render` is evaluated for every node both before `enter` and before
/// `leave`, so it must be a pure function of the node. Renderers registered
/// together must match disjoint sets of nodes.
///
/// A renderer instance lives for exactly one conversion call, so it may
/// keep private state between `enter` and `leave`.
pub trait NodeRenderer {
    /// Check if this renderer applies to `node`
    fn can_render(&self, node: &Node) -> bool;

    /// Called when the walk reaches `node`, before its children
    fn enter(&mut self, node: &Node, depth: usize, out: &mut OutputBuffer) -> Visit;

    /// Called after the children of `node` were walked
    fn leave(&mut self, _node: &Node, _depth: usize, _out: &mut OutputBuffer) {}
}

/// Builds a fresh renderer for each conversion call
pub type RendererFactory = Box<dyn Fn(&FormatOptions) -> Box<dyn NodeRenderer> + Send + Sync>;
