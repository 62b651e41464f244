//! Type-graph model for nullability checking
//!
//! Holds the value types the checker operates on (nullability qualifiers,
//! qualified type uses, type-parameter declarations, inheritance edges) and
//! the [`TypeGraph`] registry that answers the host's type queries. All
//! values are transient, read-only views; requalified types are always newly
//! constructed, never patched in place.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::syntax::{Expr, ExprKind, TypeNode};


/// Nullability qualifier attached to one type-argument position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// The position may hold an absent value
    Nullable,
    /// The position must hold a present value
    NonNull,
}

impl Nullability {
    /// Whether this qualifier marks the position nullable
    pub fn is_nullable(self) -> bool {
        matches!(self, Nullability::Nullable)
    }
}

/// A reference to a nominal type together with its type-argument list.
///
/// An empty argument list is a non-generic use; every check skips those.
/// Once resolved against a declaration, the list length equals the
/// declaration's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUse {
    /// Name of the base declaration
    pub decl: String,
    /// Ordered type arguments
    pub args: Vec<TypeArg>,
}

impl TypeUse {
    /// A generic type use with the given arguments
    pub fn new(decl: impl Into<String>, args: Vec<TypeArg>) -> Self {
        Self {
            decl: decl.into(),
            args,
        }
    }

    /// A use of a type without type arguments
    pub fn non_generic(decl: impl Into<String>) -> Self {
        Self {
            decl: decl.into(),
            args: Vec::new(),
        }
    }

    /// Whether this use carries type arguments
    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

impl fmt::Display for TypeUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decl)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// One type-argument slot: a qualifier plus the argument's own type use.
///
/// Nested generic structure lives in `ty.args`; a non-generic argument has
/// an empty nested list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeArg {
    /// Qualifier at this position
    pub nullability: Nullability,
    /// The argument type itself
    pub ty: TypeUse,
}

impl TypeArg {
    /// Create an argument slot with an explicit qualifier
    pub fn new(nullability: Nullability, ty: TypeUse) -> Self {
        Self { nullability, ty }
    }

    /// A non-null argument
    pub fn non_null(ty: TypeUse) -> Self {
        Self::new(Nullability::NonNull, ty)
    }

    /// A nullable argument
    pub fn nullable(ty: TypeUse) -> Self {
        Self::new(Nullability::Nullable, ty)
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullability.is_nullable() {
            write!(f, "@Nullable ")?;
        }
        write!(f, "{}", self.ty)
    }
}

/// A declared type parameter: its name and whether its upper bound permits
/// a nullable argument. The position is the index in the declaration's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    /// Parameter name as declared
    pub name: String,
    /// Whether the parameter's upper bound is itself nullable-qualified
    pub nullable_bound: bool,
}

impl TypeParam {
    /// A parameter whose bound does not permit nullable arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable_bound: false,
        }
    }

    /// Mark the parameter's bound as permitting nullable arguments
    pub fn with_nullable_bound(mut self) -> Self {
        self.nullable_bound = true;
        self
    }
}

/// Argument expression on an inheritance edge.
///
/// Substitution through an edge is positional: a parameter reference picks
/// the subtype's argument at that index, and qualifiers pass through
/// unchanged. An explicit qualifier written on the edge itself forces the
/// substituted position nullable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeArgExpr {
    /// Qualifier written on the edge's argument, if any
    pub nullability: Option<Nullability>,
    /// The argument expression shape
    pub kind: TypeArgExprKind,
}

/// Shape of an inheritance-edge argument expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgExprKind {
    /// Positional reference to one of the subtype's own parameters
    Param(usize),
    /// A concrete type application, possibly nesting further expressions
    Concrete { name: String, args: Vec<TypeArgExpr> },
}

impl TypeArgExpr {
    /// Reference to the subtype's parameter at `index`
    pub fn param(index: usize) -> Self {
        Self {
            nullability: None,
            kind: TypeArgExprKind::Param(index),
        }
    }

    /// A concrete, non-generic type argument
    pub fn concrete(name: impl Into<String>) -> Self {
        Self {
            nullability: None,
            kind: TypeArgExprKind::Concrete {
                name: name.into(),
                args: Vec::new(),
            },
        }
    }

    /// A concrete generic type argument with nested expressions
    pub fn concrete_with(name: impl Into<String>, args: Vec<TypeArgExpr>) -> Self {
        Self {
            nullability: None,
            kind: TypeArgExprKind::Concrete {
                name: name.into(),
                args,
            },
        }
    }

    /// Attach an explicit nullable qualifier to this argument expression
    pub fn nullable(mut self) -> Self {
        self.nullability = Some(Nullability::Nullable);
        self
    }
}

/// One inheritance edge from a subtype declaration to a supertype,
/// carrying the supertype's argument expressions in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceEdge {
    /// Name of the supertype declaration
    pub supertype: String,
    /// Argument expressions supplied to the supertype
    pub args: Vec<TypeArgExpr>,
}

/// A nominal type declaration: parameters and outgoing inheritance edges.
///
/// Edges form a DAG at the declaration level; a declaration may carry
/// several (superclass plus interfaces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Declaration name
    pub name: String,
    /// Declared type parameters, in order
    pub params: Vec<TypeParam>,
    /// Outgoing inheritance edges
    pub supertypes: Vec<InheritanceEdge>,
}

impl TypeDecl {
    /// A declaration with no parameters and no supertypes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Append a declared type parameter
    pub fn with_param(mut self, param: TypeParam) -> Self {
        self.params.push(param);
        self
    }

    /// Add an inheritance edge to `supertype` with the given argument
    /// expressions
    pub fn extending(mut self, supertype: impl Into<String>, args: Vec<TypeArgExpr>) -> Self {
        self.supertypes.push(InheritanceEdge {
            supertype: supertype.into(),
            args,
        });
        self
    }

    /// Arity of the declaration's parameter list
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Errors raised while resolving written syntax against the type graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The named declaration is not registered
    #[error("unknown type `{name}`")]
    UnknownType {
        /// The unresolved name
        name: String,
    },
    /// The written argument list does not match the declaration's arity
    #[error("type `{name}` expects {expected} type argument(s), found {found}")]
    ArityMismatch {
        /// Declaration name
        name: String,
        /// Declared arity
        expected: usize,
        /// Written argument count
        found: usize,
    },
}

/// Registry of type declarations plus the host's resolution queries.
///
/// The checker borrows the graph read-only for the duration of a check and
/// never mutates it.
#[derive(Debug, Default)]
pub struct TypeGraph {
    decls: HashMap<String, TypeDecl>,
}

impl TypeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type declaration
    pub fn register(&mut self, decl: TypeDecl) {
        self.decls.insert(decl.name.clone(), decl);
    }

    /// Look up a declaration by name
    pub fn lookup(&self, name: &str) -> Option<&TypeDecl> {
        self.decls.get(name)
    }

    /// Resolve a written type to its type use, preserving the qualifiers
    /// written on its arguments. This is how declared types (variables,
    /// parameters, return types) resolve.
    pub fn resolve_type(&self, node: &TypeNode) -> Result<TypeUse, ResolveError> {
        self.resolve_node(node, true)
    }

    /// Resolve a constructor expression's written type the way the
    /// semantic model records it: structure kept, written argument
    /// qualifiers dropped.
    pub fn resolve_constructed(&self, node: &TypeNode) -> Result<TypeUse, ResolveError> {
        self.resolve_node(node, false)
    }

    /// Resolve an expression to the type the semantic model records for it.
    ///
    /// For constructor expressions the recorded type drops the qualifiers
    /// written on the type arguments; the checker's reconstruction pass
    /// recovers them from syntax. Conditional expressions resolve through
    /// their first arm.
    pub fn resolve_expr(&self, expr: &Expr) -> Result<TypeUse, ResolveError> {
        match &expr.kind {
            ExprKind::New(node) => self.resolve_constructed(node),
            ExprKind::Typed(ty) => Ok(ty.clone()),
            ExprKind::Conditional { then_arm, .. } => self.resolve_expr(then_arm),
        }
    }

    fn resolve_node(&self, node: &TypeNode, keep_qualifiers: bool) -> Result<TypeUse, ResolveError> {
        let decl = self
            .decls
            .get(&node.name)
            .ok_or_else(|| ResolveError::UnknownType {
                name: node.name.clone(),
            })?;
        if node.args.is_empty() {
            // Raw or non-generic use
            return Ok(TypeUse::non_generic(&node.name));
        }
        if node.args.len() != decl.arity() {
            return Err(ResolveError::ArityMismatch {
                name: node.name.clone(),
                expected: decl.arity(),
                found: node.args.len(),
            });
        }
        let args = node
            .args
            .iter()
            .map(|arg| {
                let nullability = if keep_qualifiers {
                    arg.annotation.unwrap_or(Nullability::NonNull)
                } else {
                    Nullability::NonNull
                };
                Ok(TypeArg {
                    nullability,
                    ty: self.resolve_node(&arg.ty, keep_qualifiers)?,
                })
            })
            .collect::<Result<Vec<_>, ResolveError>>()?;
        Ok(TypeUse::new(&node.name, args))
    }
}
