//! Tree traversal protocol.
//!
//! A pass implements [`Traverser`], choosing which of the pre / in /
//! post visitation points it wants, and walks a tree with [`traverse`].
//! Returning `false` from a pre-visit hook prunes that node's subtree.

use alloc::vec::Vec;

use crate::{
    AggregateNode, BinaryNode, BranchNode, ConstantNode, LoopNode, MethodNode, Node, NodeArena,
    NodeId, SelectionNode, SwitchNode, SymbolNode, UnaryNode,
};

/// Which visitation point a hook is being called at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Pre,
    In,
    Post,
}

/// Traversal state visible to hooks: current depth and the stack of
/// ancestor nodes, so a hook can ask for its parent.
#[derive(Debug, Default)]
pub struct Walk {
    depth: usize,
    max_depth: usize,
    path: Vec<NodeId>,
}

impl Walk {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The parent of the node currently being visited, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Ancestors of the current node, root first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    fn descend(&mut self, current: NodeId) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.path.push(current);
    }

    fn ascend(&mut self) {
        self.depth -= 1;
        self.path.pop();
    }
}

/// Hooks for walking a tree. Only fill in what the pass needs; the
/// `*_visit` flags choose whether interior hooks fire before, between,
/// or after a node's children. Interior hooks return `false` to stop
/// descending into (or continuing across) the node's children.
pub trait Traverser {
    fn pre_visit(&self) -> bool {
        true
    }

    fn in_visit(&self) -> bool {
        false
    }

    fn post_visit(&self) -> bool {
        false
    }

    fn right_to_left(&self) -> bool {
        false
    }

    fn visit_symbol(&mut self, _walk: &Walk, _id: NodeId, _node: &SymbolNode) {}

    fn visit_constant(&mut self, _walk: &Walk, _id: NodeId, _node: &ConstantNode) {}

    fn visit_unary(&mut self, _visit: Visit, _walk: &Walk, _id: NodeId, _node: &UnaryNode) -> bool {
        true
    }

    fn visit_binary(
        &mut self,
        _visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        _node: &BinaryNode,
    ) -> bool {
        true
    }

    fn visit_aggregate(
        &mut self,
        _visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        _node: &AggregateNode,
    ) -> bool {
        true
    }

    fn visit_selection(
        &mut self,
        _visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        _node: &SelectionNode,
    ) -> bool {
        true
    }

    fn visit_switch(
        &mut self,
        _visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        _node: &SwitchNode,
    ) -> bool {
        true
    }

    fn visit_branch(
        &mut self,
        _visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        _node: &BranchNode,
    ) -> bool {
        true
    }

    fn visit_loop(&mut self, _visit: Visit, _walk: &Walk, _id: NodeId, _node: &LoopNode) -> bool {
        true
    }
}

/// Walk the tree rooted at `root`, dispatching into `traverser`'s
/// hooks. Returns the maximum depth reached.
pub fn traverse(arena: &NodeArena, root: NodeId, traverser: &mut dyn Traverser) -> usize {
    let mut walk = Walk::default();
    visit(arena, root, traverser, &mut walk);
    walk.max_depth
}

fn visit(arena: &NodeArena, id: NodeId, t: &mut dyn Traverser, walk: &mut Walk) {
    match arena.get(id) {
        Node::Symbol(node) => t.visit_symbol(walk, id, node),
        Node::Constant(node) => t.visit_constant(walk, id, node),
        Node::Unary(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_unary(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                visit(arena, node.operand, t, walk);
                walk.ascend();
                if t.post_visit() {
                    t.visit_unary(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Binary(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_binary(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                let (first, second) = if t.right_to_left() {
                    (node.right, node.left)
                } else {
                    (node.left, node.right)
                };
                visit(arena, first, t, walk);
                let mut keep_going = true;
                if t.in_visit() {
                    keep_going = t.visit_binary(Visit::In, walk, id, node);
                }
                if keep_going {
                    visit(arena, second, t, walk);
                }
                walk.ascend();
                if keep_going && t.post_visit() {
                    t.visit_binary(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Aggregate(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_aggregate(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                let mut keep_going = true;
                let count = node.children.len();
                for i in 0..count {
                    let child = if t.right_to_left() {
                        node.children[count - 1 - i]
                    } else {
                        node.children[i]
                    };
                    visit(arena, child, t, walk);
                    if i + 1 < count && t.in_visit() {
                        keep_going = t.visit_aggregate(Visit::In, walk, id, node);
                        if !keep_going {
                            break;
                        }
                    }
                }
                walk.ascend();
                if keep_going && t.post_visit() {
                    t.visit_aggregate(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Selection(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_selection(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                visit(arena, node.condition, t, walk);
                if let Some(true_block) = node.true_block {
                    visit(arena, true_block, t, walk);
                }
                if let Some(false_block) = node.false_block {
                    visit(arena, false_block, t, walk);
                }
                walk.ascend();
                if t.post_visit() {
                    t.visit_selection(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Switch(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_switch(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                visit(arena, node.condition, t, walk);
                let mut keep_going = true;
                if t.in_visit() {
                    keep_going = t.visit_switch(Visit::In, walk, id, node);
                }
                if keep_going {
                    visit(arena, node.body, t, walk);
                }
                walk.ascend();
                if keep_going && t.post_visit() {
                    t.visit_switch(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Branch(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_branch(Visit::Pre, walk, id, node);
            }
            if descend {
                if let Some(expression) = node.expression {
                    walk.descend(id);
                    visit(arena, expression, t, walk);
                    walk.ascend();
                }
                if t.post_visit() {
                    t.visit_branch(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Loop(node) => {
            let mut descend = true;
            if t.pre_visit() {
                descend = t.visit_loop(Visit::Pre, walk, id, node);
            }
            if descend {
                walk.descend(id);
                if node.test_first {
                    if let Some(test) = node.test {
                        visit(arena, test, t, walk);
                    }
                    if let Some(body) = node.body {
                        visit(arena, body, t, walk);
                    }
                    if let Some(terminal) = node.terminal {
                        visit(arena, terminal, t, walk);
                    }
                } else {
                    if let Some(body) = node.body {
                        visit(arena, body, t, walk);
                    }
                    if let Some(test) = node.test {
                        visit(arena, test, t, walk);
                    }
                }
                walk.ascend();
                if t.post_visit() {
                    t.visit_loop(Visit::Post, walk, id, node);
                }
            }
        }
        Node::Method(node) => {
            // a method has no hook of its own; its object is still walked
            walk.descend(id);
            visit(arena, node.object, t, walk);
            walk.ascend();
        }
    }
}
