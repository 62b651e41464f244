//! Supertype adaptation
//!
//! Rewrites a type use in terms of an ancestor declaration by walking the
//! inheritance closure and substituting the source's argument bindings
//! through each edge. Substitution is positional on the edge's expressions,
//! never name-based, so permuted parameter orders come out right.

use std::collections::{HashSet, VecDeque};

use crate::typegraph::{
    InheritanceEdge, Nullability, TypeArg, TypeArgExpr, TypeArgExprKind, TypeGraph, TypeUse,
};

/// Compute the instantiation of `target` implied by `source`'s inheritance
/// chain, or `None` when `target` is not among `source`'s supertypes.
///
/// Inheritance edges form a DAG at the declaration level; the visited set
/// keeps shared ancestors from being rewalked, and well-formed graphs make
/// every path to `target` agree, so the first match is returned.
pub(crate) fn adapt_to_supertype(
    graph: &TypeGraph,
    source: &TypeUse,
    target: &str,
) -> Option<TypeUse> {
    if source.decl == target {
        return Some(source.clone());
    }
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(source.decl.clone());
    let mut queue: VecDeque<TypeUse> = VecDeque::new();
    queue.push_back(source.clone());
    while let Some(current) = queue.pop_front() {
        let Some(decl) = graph.lookup(&current.decl) else {
            continue;
        };
        for edge in &decl.supertypes {
            let Some(adapted) = substitute_edge(edge, &current.args) else {
                continue;
            };
            if adapted.decl == target {
                return Some(adapted);
            }
            if visited.insert(adapted.decl.clone()) {
                queue.push_back(adapted);
            }
        }
    }
    None
}

fn substitute_edge(edge: &InheritanceEdge, args: &[TypeArg]) -> Option<TypeUse> {
    let substituted = edge
        .args
        .iter()
        .map(|expr| substitute_expr(expr, args))
        .collect::<Option<Vec<_>>>()?;
    Some(TypeUse::new(&edge.supertype, substituted))
}

/// Substitute one edge expression against the source's arguments. A
/// parameter reference picks the argument at that index with its qualifier
/// intact; an explicit nullable qualifier on the edge forces the position
/// nullable.
fn substitute_expr(expr: &TypeArgExpr, args: &[TypeArg]) -> Option<TypeArg> {
    match &expr.kind {
        TypeArgExprKind::Param(index) => {
            let mut arg = args.get(*index)?.clone();
            if expr.nullability == Some(Nullability::Nullable) {
                arg.nullability = Nullability::Nullable;
            }
            Some(arg)
        }
        TypeArgExprKind::Concrete { name, args: nested } => {
            let substituted = nested
                .iter()
                .map(|e| substitute_expr(e, args))
                .collect::<Option<Vec<_>>>()?;
            Some(TypeArg::new(
                expr.nullability.unwrap_or(Nullability::NonNull),
                TypeUse::new(name, substituted),
            ))
        }
    }
}
