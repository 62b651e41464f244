//! Annotation-preserving reconstruction
//!
//! The semantic model's resolved type for a constructor expression drops
//! the qualifiers written on its type arguments. This pass rebuilds a fully
//! qualified type use from the written syntax: the resolved view supplies
//! the structure, and written annotations are laid over it position by
//! position, recursing into nested instantiation arguments. Positions with
//! no written annotation keep the resolved qualifier.

use crate::syntax::TypeNode;
use crate::typegraph::{ResolveError, TypeArg, TypeGraph, TypeUse};

/// Rebuild the fully qualified type use for a written instantiation node.
///
/// Fails when the written node does not resolve against the graph (unknown
/// declaration, arity mismatch); callers abort the current check on failure.
pub(crate) fn reconstruct(graph: &TypeGraph, node: &TypeNode) -> Result<TypeUse, ResolveError> {
    let resolved = graph.resolve_constructed(node)?;
    Ok(overlay(node, resolved))
}

/// Construct a new qualified value from the resolved structure and the
/// written annotations. The resolved type is never patched in place.
fn overlay(node: &TypeNode, resolved: TypeUse) -> TypeUse {
    let args = node
        .args
        .iter()
        .zip(resolved.args)
        .map(|(arg_node, resolved_arg)| TypeArg {
            nullability: arg_node.annotation.unwrap_or(resolved_arg.nullability),
            ty: overlay(&arg_node.ty, resolved_arg.ty),
        })
        .collect();
    TypeUse {
        decl: resolved.decl,
        args,
    }
}
