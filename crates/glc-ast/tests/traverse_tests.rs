//! Tests for the traverser protocol: visitation order, subtree pruning,
//! depth tracking and parent queries.

use glc_ast::{
    traverse, AggregateNode, BinaryNode, Node, NodeArena, NodeId, Operator, SymbolNode, Traverser,
    Visit, Walk,
};
use glc_types::{BasicType, StorageQualifier, Type};

fn float_type() -> Type {
    Type::new(BasicType::Float, StorageQualifier::Temporary)
}

fn symbol(arena: &mut NodeArena, id: u32, name: &str) -> NodeId {
    arena.push(Node::Symbol(SymbolNode::new(id, name, float_type())))
}

/// (a + b) * c under a sequence aggregate.
fn build_tree(arena: &mut NodeArena) -> (NodeId, NodeId) {
    let a = symbol(arena, 1, "a");
    let b = symbol(arena, 2, "b");
    let c = symbol(arena, 3, "c");
    let add = arena.push(Node::Binary(BinaryNode::new(
        Operator::Add,
        float_type(),
        a,
        b,
    )));
    let mul = arena.push(Node::Binary(BinaryNode::new(
        Operator::Mul,
        float_type(),
        add,
        c,
    )));
    let mut seq = AggregateNode::new(Operator::Sequence, float_type());
    seq.children.push(mul);
    let root = arena.push(Node::Aggregate(seq));
    (root, add)
}

#[derive(Default)]
struct Collector {
    symbols: Vec<String>,
    binaries: Vec<(Visit, Operator)>,
    prune_op: Option<Operator>,
    parent_of_a: Option<NodeId>,
    depth_of_a: usize,
}

impl Traverser for Collector {
    fn post_visit(&self) -> bool {
        true
    }

    fn visit_symbol(&mut self, walk: &Walk, _id: NodeId, node: &SymbolNode) {
        self.symbols.push(node.name.clone());
        if node.name == "a" {
            self.parent_of_a = walk.parent();
            self.depth_of_a = walk.depth();
        }
    }

    fn visit_binary(
        &mut self,
        visit: Visit,
        _walk: &Walk,
        _id: NodeId,
        node: &BinaryNode,
    ) -> bool {
        self.binaries.push((visit, node.op));
        Some(node.op) != self.prune_op
    }
}

#[test]
fn test_left_to_right_symbol_order() {
    let mut arena = NodeArena::new();
    let (root, _) = build_tree(&mut arena);
    let mut collector = Collector::default();
    traverse(&arena, root, &mut collector);
    assert_eq!(collector.symbols, vec!["a", "b", "c"]);
}

#[test]
fn test_pre_and_post_visits_fire() {
    let mut arena = NodeArena::new();
    let (root, _) = build_tree(&mut arena);
    let mut collector = Collector::default();
    traverse(&arena, root, &mut collector);
    assert_eq!(
        collector.binaries,
        vec![
            (Visit::Pre, Operator::Mul),
            (Visit::Pre, Operator::Add),
            (Visit::Post, Operator::Add),
            (Visit::Post, Operator::Mul),
        ]
    );
}

#[test]
fn test_pre_visit_false_prunes_subtree() {
    let mut arena = NodeArena::new();
    let (root, _) = build_tree(&mut arena);
    let mut collector = Collector {
        prune_op: Some(Operator::Add),
        ..Collector::default()
    };
    traverse(&arena, root, &mut collector);
    // the pruned add's operands never appear, and neither does its post
    assert_eq!(collector.symbols, vec!["c"]);
    assert_eq!(
        collector.binaries,
        vec![
            (Visit::Pre, Operator::Mul),
            (Visit::Pre, Operator::Add),
            (Visit::Post, Operator::Mul),
        ]
    );
}

#[test]
fn test_depth_and_parent_tracking() {
    let mut arena = NodeArena::new();
    let (root, add) = build_tree(&mut arena);
    let mut collector = Collector::default();
    let max_depth = traverse(&arena, root, &mut collector);
    // root aggregate -> mul -> add -> a
    assert_eq!(collector.depth_of_a, 3);
    assert_eq!(collector.parent_of_a, Some(add));
    assert_eq!(max_depth, 3);
}

struct RightToLeft {
    symbols: Vec<String>,
}

impl Traverser for RightToLeft {
    fn right_to_left(&self) -> bool {
        true
    }

    fn visit_symbol(&mut self, _walk: &Walk, _id: NodeId, node: &SymbolNode) {
        self.symbols.push(node.name.clone());
    }
}

#[test]
fn test_right_to_left_order() {
    let mut arena = NodeArena::new();
    let (root, _) = build_tree(&mut arena);
    let mut collector = RightToLeft {
        symbols: Vec::new(),
    };
    traverse(&arena, root, &mut collector);
    assert_eq!(collector.symbols, vec!["c", "b", "a"]);
}
