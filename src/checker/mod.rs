//! Generic-type nullability checks
//!
//! The checks the host invokes inline during its semantic traversal:
//! instantiation validity at each written generic site ([`GenericsChecker::check_instantiation`]),
//! assignment compatibility at each assignment or initialization site
//! ([`GenericsChecker::check_assignment`]), and the return-site driver
//! ([`GenericsChecker::check_function_returns`]). Every check runs to
//! completion or abandons only itself; no state carries over between sites.

use crate::config::CheckerConfig;
use crate::diagnostics::{error_codes, Diagnostic, DiagnosticBag, Span};
use crate::syntax::{Expr, ExprKind, Stmt, TypeNode};
use crate::typegraph::{TypeGraph, TypeUse};

mod adapt;
mod extract;
mod reconstruct;
mod returns;


pub use extract::{QualifierSource, ResolvedQualifiers, SyntaxQualifiers};

use adapt::adapt_to_supertype;
use reconstruct::reconstruct;
use returns::collect_returns;

/// Checks generic type uses for nullability consistency.
///
/// Borrows the host's type graph read-only and owns only its configuration
/// and the diagnostic bag it fills. One instance may serve any number of
/// sites.
pub struct GenericsChecker<'g> {
    graph: &'g TypeGraph,
    config: CheckerConfig,
    diagnostics: DiagnosticBag,
}

impl<'g> GenericsChecker<'g> {
    /// Create a checker over the given graph and configuration
    pub fn new(graph: &'g TypeGraph, config: CheckerConfig) -> Self {
        Self {
            graph,
            config,
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Diagnostics collected so far
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Consume the checker, yielding its diagnostics
    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.diagnostics
    }

    /// Check one written instantiation site: a nullable argument is only
    /// valid where the declared parameter's bound permits it.
    ///
    /// Qualifiers are read from the written annotations. Nested written
    /// sites are not recursed into here; hosts visit them as their own
    /// sites (see [`TypeNode::generic_sites`]). Unknown declarations and
    /// arity mismatches abandon the check without reporting.
    pub fn check_instantiation(&mut self, node: &TypeNode) {
        if !self.config.strict_generics_nullability {
            return;
        }
        if node.args.is_empty() {
            return;
        }
        let Some(decl) = self.graph.lookup(&node.name) else {
            return;
        };
        if node.args.len() != decl.arity() {
            return;
        }
        for index in SyntaxQualifiers(node).nullable_indices() {
            let param = &decl.params[index];
            if !param.nullable_bound {
                self.diagnostics.push(
                    Diagnostic::error(error_codes::nullability::TYPE_PARAMETER_CANNOT_BE_NULLABLE)
                        .message(format!(
                            "Generic type argument cannot be nullable: type parameter `{}` of type `{}` does not have a nullable upper bound",
                            param.name, decl.name
                        ))
                        .span(node.args[index].ty.span.clone())
                        .build(),
                );
            }
        }
    }

    /// Check an assignment-shaped site: the declared target type on the
    /// left, the value expression on the right.
    ///
    /// When the value is an explicit instantiation, the written syntax is
    /// reconstructed and used as the actual operand, since the resolved
    /// type may have dropped written qualifiers. Conditional values check
    /// each arm independently.
    pub fn check_assignment(&mut self, expected: &TypeUse, value: &Expr) {
        if !self.config.strict_generics_nullability {
            return;
        }
        self.check_value(expected, value);
    }

    /// Check every return expression of a function body against the
    /// declared return type, attributing reports to each return's own
    /// expression.
    pub fn check_function_returns(&mut self, declared: &TypeUse, body: &[Stmt]) {
        if !self.config.strict_generics_nullability {
            return;
        }
        for expr in collect_returns(body) {
            self.check_value(declared, expr);
        }
    }

    fn check_value(&mut self, expected: &TypeUse, value: &Expr) {
        match &value.kind {
            ExprKind::Conditional { then_arm, else_arm } => {
                self.check_value(expected, then_arm);
                self.check_value(expected, else_arm);
            }
            ExprKind::New(node) => {
                // Raw and diamond forms supply nothing to compare
                if node.args.is_empty() {
                    return;
                }
                let Ok(actual) = reconstruct(self.graph, node) else {
                    return;
                };
                self.compare(expected, &actual, &value.span, 0);
            }
            ExprKind::Typed(actual) => {
                self.compare(expected, actual, &value.span, 0);
            }
        }
    }

    /// Positional comparison of nullable-index sets, recursing into nested
    /// arguments. Reports at most one divergence per call; nested levels
    /// are compared only when the current level agrees, each carrying its
    /// own report.
    fn compare(&mut self, expected: &TypeUse, actual: &TypeUse, span: &Span, depth: usize) {
        if depth > self.config.max_nesting_depth {
            self.diagnostics.push(
                Diagnostic::info(error_codes::internal::NESTING_DEPTH_EXCEEDED)
                    .message(format!(
                        "nested type arguments in `{}` exceed the depth limit of {}; check abandoned",
                        expected, self.config.max_nesting_depth
                    ))
                    .span(span.clone())
                    .build(),
            );
            return;
        }
        if !expected.is_generic() {
            return;
        }
        let adapted;
        let actual = if actual.decl != expected.decl {
            // Align the value's type with the target's declaration. A
            // missing relationship means raw or unchecked usage; this one
            // check is abandoned.
            match adapt_to_supertype(self.graph, actual, &expected.decl) {
                Some(supertype_use) => {
                    adapted = supertype_use;
                    &adapted
                }
                None => return,
            }
        } else {
            actual
        };
        if expected.args.len() != actual.args.len() {
            return;
        }
        let expected_nullable = ResolvedQualifiers(expected).nullable_indices();
        let actual_nullable = ResolvedQualifiers(actual).nullable_indices();
        if expected_nullable != actual_nullable {
            self.diagnostics.push(
                Diagnostic::error(error_codes::nullability::ASSIGN_GENERIC_NULLABLE)
                    .message(format!(
                        "Cannot assign from type `{}` to type `{}`: mismatched nullability of type arguments",
                        actual, expected
                    ))
                    .span(span.clone())
                    .build(),
            );
            return;
        }
        for (expected_arg, actual_arg) in expected.args.iter().zip(&actual.args) {
            if expected_arg.ty.is_generic() && actual_arg.ty.is_generic() {
                self.compare(&expected_arg.ty, &actual_arg.ty, span, depth + 1);
            }
        }
    }
}
