//! Written-syntax model the checker walks
//!
//! A minimal view of the host's syntax tree: written generic type
//! applications with their annotations, the expression forms the assignment
//! check distinguishes, and the statement forms the return collector
//! descends. All nodes carry a unique id and a source span; spans are owned
//! by the host and flow into diagnostics unchanged.

use crate::diagnostics::Span;
use crate::typegraph::{Nullability, TypeUse};
use std::sync::atomic::{AtomicU64, Ordering};


/// Unique identifier for syntax nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A written type, e.g. `Box<@Nullable Text>`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub id: NodeId,
    pub span: Span,
    /// Written base name
    pub name: String,
    /// Written type arguments; empty for a non-generic or raw use
    pub args: Vec<TypeArgNode>,
}

impl TypeNode {
    /// Create a written type with no arguments
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            id: NodeId::new(),
            span,
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append a written type argument
    pub fn with_arg(mut self, arg: TypeArgNode) -> Self {
        self.args.push(arg);
        self
    }

    /// This node plus every nested written generic application, outermost
    /// first. Hosts feed each site to the instantiation check separately;
    /// the check itself never recurses.
    pub fn generic_sites(&self) -> Vec<&TypeNode> {
        let mut sites = Vec::new();
        self.collect_sites(&mut sites);
        sites
    }

    fn collect_sites<'a>(&'a self, out: &mut Vec<&'a TypeNode>) {
        if !self.args.is_empty() {
            out.push(self);
        }
        for arg in &self.args {
            arg.ty.collect_sites(out);
        }
    }
}

/// One written type argument: a type plus the qualifier annotation written
/// at that position, if any
#[derive(Debug, Clone, PartialEq)]
pub struct TypeArgNode {
    /// Explicitly written qualifier, `None` when the position is unannotated
    pub annotation: Option<Nullability>,
    /// The written argument type
    pub ty: TypeNode,
}

impl TypeArgNode {
    /// An unannotated written argument
    pub fn new(ty: TypeNode) -> Self {
        Self {
            annotation: None,
            ty,
        }
    }

    /// Mark the argument with a written nullable annotation
    pub fn nullable(mut self) -> Self {
        self.annotation = Some(Nullability::Nullable);
        self
    }

    /// Mark the argument with a written non-null annotation
    pub fn non_null(mut self) -> Self {
        self.annotation = Some(Nullability::NonNull);
        self
    }
}

/// An expression appearing on the value side of an assignment or return
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind,
}

/// The expression forms the assignment check distinguishes
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Constructor-style instantiation carrying its written type
    New(TypeNode),
    /// Any other expression, with the type the host resolved for it
    Typed(TypeUse),
    /// Conditional expression; each arm is checked independently
    Conditional {
        then_arm: Box<Expr>,
        else_arm: Box<Expr>,
    },
}

impl Expr {
    /// A constructor expression with the given written type
    pub fn new_instance(ty: TypeNode, span: Span) -> Self {
        Self {
            id: NodeId::new(),
            span,
            kind: ExprKind::New(ty),
        }
    }

    /// An expression whose type the host already resolved
    pub fn typed(ty: TypeUse, span: Span) -> Self {
        Self {
            id: NodeId::new(),
            span,
            kind: ExprKind::Typed(ty),
        }
    }

    /// A conditional expression with two arms
    pub fn conditional(then_arm: Expr, else_arm: Expr, span: Span) -> Self {
        Self {
            id: NodeId::new(),
            span,
            kind: ExprKind::Conditional {
                then_arm: Box::new(then_arm),
                else_arm: Box::new(else_arm),
            },
        }
    }
}

/// Statement forms the return collector walks.
///
/// The walk is syntactic: straight-line statements, both arms of `If`, and
/// the three loop bodies are descended; `Switch` and `Try` blocks are not,
/// and statically unreachable branches are not accounted for.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A return statement, with its value expression if present
    Return(Option<Expr>),
    /// A conditional with a then block and an optional else block
    If {
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    /// Count-controlled loop body
    For { body: Vec<Stmt> },
    /// Condition-controlled loop body
    While { body: Vec<Stmt> },
    /// Post-condition loop body
    DoWhile { body: Vec<Stmt> },
    /// Branch-style dispatch; not descended
    Switch { cases: Vec<Vec<Stmt>> },
    /// Exception-handling block; not descended
    Try {
        body: Vec<Stmt>,
        handler: Vec<Stmt>,
    },
    /// Any other statement
    Expr(Expr),
}
