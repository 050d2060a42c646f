//! Parse-tree nodes.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use glc_types::{entity_id, Pool, Precision, StorageQualifier, Type};

use crate::{Constant, Operator};

entity_id! {
    /// Id of a node in a [`NodeArena`].
    pub struct NodeId
}

/// Owns every node of one compilation's parse trees.
///
/// Nodes reference their children by [`NodeId`]; nothing is freed
/// individually, the arena is dropped in bulk with the compilation.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Pool<NodeId, Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A reference to a symbol-table entry.
#[derive(Debug, Clone)]
pub struct SymbolNode {
    /// Unique id of the symbol this node refers to.
    pub symbol_id: u32,
    pub name: String,
    pub ty: Type,
    /// Folded value when the symbol is a front-end constant.
    pub const_value: Option<Constant>,
    /// Folded subtree for specialization-constant expressions.
    pub const_subtree: Option<NodeId>,
}

impl SymbolNode {
    pub fn new(symbol_id: u32, name: &str, ty: Type) -> SymbolNode {
        SymbolNode {
            symbol_id,
            name: name.to_string(),
            ty,
            const_value: None,
            const_subtree: None,
        }
    }
}

/// A constant, either a literal or a folded expression.
#[derive(Debug, Clone)]
pub struct ConstantNode {
    pub ty: Type,
    pub value: Constant,
}

/// A unary operation.
#[derive(Debug, Clone)]
pub struct UnaryNode {
    pub op: Operator,
    pub ty: Type,
    /// See [`UnaryNode::operation_precision`].
    pub op_precision: Precision,
    pub operand: NodeId,
}

impl UnaryNode {
    pub fn new(op: Operator, ty: Type, operand: NodeId) -> UnaryNode {
        UnaryNode {
            op,
            ty,
            op_precision: Precision::None,
            operand,
        }
    }

    /// Precision the operation runs at. Usually the result precision,
    /// but built-in functions may specify the two independently.
    pub fn operation_precision(&self) -> Precision {
        if self.op_precision != Precision::None {
            self.op_precision
        } else {
            self.ty.qualifier().precision
        }
    }
}

/// A binary operation.
#[derive(Debug, Clone)]
pub struct BinaryNode {
    pub op: Operator,
    pub ty: Type,
    pub op_precision: Precision,
    pub left: NodeId,
    pub right: NodeId,
}

impl BinaryNode {
    pub fn new(op: Operator, ty: Type, left: NodeId, right: NodeId) -> BinaryNode {
        BinaryNode {
            op,
            ty,
            op_precision: Precision::None,
            left,
            right,
        }
    }

    pub fn operation_precision(&self) -> Precision {
        if self.op_precision != Precision::None {
            self.op_precision
        } else {
            self.ty.qualifier().precision
        }
    }
}

/// An operation over an arbitrary number of children: call argument
/// lists, statement sequences, constructors, linker objects.
#[derive(Debug, Clone)]
pub struct AggregateNode {
    pub op: Operator,
    pub ty: Type,
    pub op_precision: Precision,
    pub children: Vec<NodeId>,
    /// Call target for user-defined function calls.
    pub name: String,
    /// Distinguishes calls to user functions from library calls.
    pub user_defined: bool,
    /// Parameter passing convention per child, for call nodes.
    pub param_qualifiers: Vec<StorageQualifier>,
}

impl AggregateNode {
    pub fn new(op: Operator, ty: Type) -> AggregateNode {
        AggregateNode {
            op,
            ty,
            op_precision: Precision::None,
            children: Vec::new(),
            name: String::new(),
            user_defined: false,
            param_qualifiers: Vec::new(),
        }
    }

    pub fn operation_precision(&self) -> Precision {
        if self.op_precision != Precision::None {
            self.op_precision
        } else {
            self.ty.qualifier().precision
        }
    }
}

/// An `if`, or a `?:` when it carries a non-void type.
#[derive(Debug, Clone)]
pub struct SelectionNode {
    pub ty: Type,
    pub condition: NodeId,
    pub true_block: Option<NodeId>,
    pub false_block: Option<NodeId>,
}

/// A `switch`. The body is an aggregate whose children alternate
/// between case/default branch nodes and the code between them.
#[derive(Debug, Clone)]
pub struct SwitchNode {
    pub condition: NodeId,
    pub body: NodeId,
}

/// Return, break, continue, case, default, or discard. The operator is
/// the flow op; only `Return` and `Case` carry an expression.
#[derive(Debug, Clone)]
pub struct BranchNode {
    pub flow_op: Operator,
    pub expression: Option<NodeId>,
}

/// Loop unrolling hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopControl {
    #[default]
    None,
    Unroll,
    DontUnroll,
}

/// for, while and do-while loops.
#[derive(Debug, Clone)]
pub struct LoopNode {
    pub body: Option<NodeId>,
    /// Exit condition; absent for `for(;;)`.
    pub test: Option<NodeId>,
    /// The per-iteration expression of a `for`.
    pub terminal: Option<NodeId>,
    /// True for while and for; false for do-while.
    pub test_first: bool,
    pub control: LoopControl,
}

/// A method name applied to an object, before the call signature is
/// seen and resolved into an operation.
#[derive(Debug, Clone)]
pub struct MethodNode {
    pub ty: Type,
    pub object: NodeId,
    pub name: String,
}

/// A parse-tree node. Use the `as_*` accessors for safe down-casts;
/// they return `None` instead of failing when the variant differs.
#[derive(Debug, Clone)]
pub enum Node {
    Symbol(SymbolNode),
    Constant(ConstantNode),
    Unary(UnaryNode),
    Binary(BinaryNode),
    Aggregate(AggregateNode),
    Selection(SelectionNode),
    Switch(SwitchNode),
    Branch(BranchNode),
    Loop(LoopNode),
    Method(MethodNode),
}

impl Node {
    pub fn as_symbol(&self) -> Option<&SymbolNode> {
        match self {
            Node::Symbol(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&ConstantNode> {
        match self {
            Node::Constant(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryNode> {
        match self {
            Node::Unary(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryNode> {
        match self {
            Node::Binary(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<&AggregateNode> {
        match self {
            Node::Aggregate(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_aggregate_mut(&mut self) -> Option<&mut AggregateNode> {
        match self {
            Node::Aggregate(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&SelectionNode> {
        match self {
            Node::Selection(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_switch(&self) -> Option<&SwitchNode> {
        match self {
            Node::Switch(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_branch(&self) -> Option<&BranchNode> {
        match self {
            Node::Branch(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_loop(&self) -> Option<&LoopNode> {
        match self {
            Node::Loop(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodNode> {
        match self {
            Node::Method(n) => Some(n),
            _ => None,
        }
    }

    /// The node's type, when the variant is typed.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Node::Symbol(n) => Some(&n.ty),
            Node::Constant(n) => Some(&n.ty),
            Node::Unary(n) => Some(&n.ty),
            Node::Binary(n) => Some(&n.ty),
            Node::Aggregate(n) => Some(&n.ty),
            Node::Selection(n) => Some(&n.ty),
            Node::Method(n) => Some(&n.ty),
            Node::Switch(_) | Node::Branch(_) | Node::Loop(_) => None,
        }
    }

    pub fn ty_mut(&mut self) -> Option<&mut Type> {
        match self {
            Node::Symbol(n) => Some(&mut n.ty),
            Node::Constant(n) => Some(&mut n.ty),
            Node::Unary(n) => Some(&mut n.ty),
            Node::Binary(n) => Some(&mut n.ty),
            Node::Aggregate(n) => Some(&mut n.ty),
            Node::Selection(n) => Some(&mut n.ty),
            Node::Method(n) => Some(&mut n.ty),
            Node::Switch(_) | Node::Branch(_) | Node::Loop(_) => None,
        }
    }

    /// The node's operator, for the operator-bearing variants.
    pub fn op(&self) -> Option<Operator> {
        match self {
            Node::Unary(n) => Some(n.op),
            Node::Binary(n) => Some(n.op),
            Node::Aggregate(n) => Some(n.op),
            Node::Branch(n) => Some(n.flow_op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glc_types::BasicType;

    fn float_type() -> Type {
        Type::new(BasicType::Float, StorageQualifier::Temporary)
    }

    #[test]
    fn test_accessors_return_none_on_wrong_variant() {
        let mut arena = NodeArena::new();
        let sym = arena.push(Node::Symbol(SymbolNode::new(1, "x", float_type())));
        let node = arena.get(sym);
        assert!(node.as_symbol().is_some());
        assert!(node.as_binary().is_none());
        assert!(node.as_aggregate().is_none());
        assert!(node.as_branch().is_none());
    }

    #[test]
    fn test_typed_and_untyped_variants() {
        let mut arena = NodeArena::new();
        let sym = arena.push(Node::Symbol(SymbolNode::new(1, "x", float_type())));
        assert!(arena.get(sym).ty().is_some());

        let branch = arena.push(Node::Branch(BranchNode {
            flow_op: Operator::Break,
            expression: None,
        }));
        assert!(arena.get(branch).ty().is_none());
        assert_eq!(arena.get(branch).op(), Some(Operator::Break));
    }

    #[test]
    fn test_operation_precision_falls_back_to_result() {
        let mut arena = NodeArena::new();
        let mut ty = float_type();
        ty.qualifier_mut().precision = Precision::Medium;
        let a = arena.push(Node::Symbol(SymbolNode::new(1, "a", float_type())));
        let b = arena.push(Node::Symbol(SymbolNode::new(2, "b", float_type())));

        let mut bin = BinaryNode::new(Operator::Add, ty, a, b);
        assert_eq!(bin.operation_precision(), Precision::Medium);
        bin.op_precision = Precision::High;
        assert_eq!(bin.operation_precision(), Precision::High);
    }
}
