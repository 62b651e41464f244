//! nullcheck
//!
//! Nullability consistency checking for generic type instantiations and
//! assignments. Given a host's type graph (nominal generic declarations
//! with type-parameter bounds and inheritance edges) and the nullability
//! qualifiers attached to type-argument positions, the checker validates
//! that instantiations respect parameter bounds and that assignments and
//! function returns preserve per-argument nullability across subtyping,
//! recursing into nested arguments and adapting across inheritance.

pub mod checker;
pub mod config;
pub mod diagnostics;
pub mod syntax;
pub mod typegraph;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::checker::GenericsChecker;
    pub use crate::config::CheckerConfig;
    pub use crate::diagnostics::{Diagnostic, DiagnosticBag, Severity, Span};
    pub use crate::syntax::{Expr, Stmt, TypeArgNode, TypeNode};
    pub use crate::typegraph::{
        Nullability, TypeArg, TypeArgExpr, TypeDecl, TypeGraph, TypeParam, TypeUse,
    };
}
