//! Return-statement collection
//!
//! A syntactic walk of a function body that finds every return expression
//! reachable through straight-line statements, both arms of conditionals,
//! and the bodies of the three loop forms. Switch dispatch, exception
//! handlers, and nested function bodies are not descended, and statically
//! unreachable branches are not accounted for.

use crate::syntax::{Expr, Stmt};

/// Collect every return expression the walk reaches, in source order
pub(crate) fn collect_returns(body: &[Stmt]) -> Vec<&Expr> {
    let mut out = Vec::new();
    walk(body, &mut out);
    out
}

fn walk<'a>(stmts: &'a [Stmt], out: &mut Vec<&'a Expr>) {
    for stmt in stmts {
        match stmt {
            Stmt::Return(value) => {
                if let Some(expr) = value {
                    out.push(expr);
                }
            }
            Stmt::If {
                then_branch,
                else_branch,
            } => {
                walk(then_branch, out);
                if let Some(else_branch) = else_branch {
                    walk(else_branch, out);
                }
            }
            Stmt::For { body } | Stmt::While { body } | Stmt::DoWhile { body } => {
                walk(body, out);
            }
            // Branch dispatch and exception handling stay un-walked
            Stmt::Switch { .. } | Stmt::Try { .. } | Stmt::Expr(_) => {}
        }
    }
}
