//! Type-argument extraction
//!
//! Two sources of truth exist for "what qualifier does this argument
//! have": the resolved semantic type and the written annotation syntax.
//! Both sit behind one strategy trait so call sites pick a provider
//! instead of special-casing.

use std::collections::BTreeSet;

use crate::syntax::TypeNode;
use crate::typegraph::{Nullability, TypeUse};

/// Where the nullability qualifiers of a type use's arguments are read from
pub trait QualifierSource {
    /// Number of argument positions carried by this source
    fn len(&self) -> usize;

    /// Whether the source carries no argument positions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Qualifier recorded at the given position; unannotated positions are
    /// non-null
    fn qualifier(&self, index: usize) -> Nullability;

    /// Indices whose argument is qualified nullable
    fn nullable_indices(&self) -> BTreeSet<usize> {
        (0..self.len())
            .filter(|&i| self.qualifier(i).is_nullable())
            .collect()
    }
}

/// Reads qualifiers off a resolved type use
pub struct ResolvedQualifiers<'a>(pub &'a TypeUse);

impl QualifierSource for ResolvedQualifiers<'_> {
    fn len(&self) -> usize {
        self.0.args.len()
    }

    fn qualifier(&self, index: usize) -> Nullability {
        self.0
            .args
            .get(index)
            .map(|arg| arg.nullability)
            .unwrap_or(Nullability::NonNull)
    }
}

/// Reads qualifiers off the annotations written at each argument position
pub struct SyntaxQualifiers<'a>(pub &'a TypeNode);

impl QualifierSource for SyntaxQualifiers<'_> {
    fn len(&self) -> usize {
        self.0.args.len()
    }

    fn qualifier(&self, index: usize) -> Nullability {
        self.0
            .args
            .get(index)
            .and_then(|arg| arg.annotation)
            .unwrap_or(Nullability::NonNull)
    }
}
