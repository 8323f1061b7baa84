//! Evaluation of formulas under variable assignments.

use std::collections::BTreeMap;

use crate::ast::Expr;
use crate::error::EvalError;
use crate::types::Var;

/// A truth value for every variable in scope.
///
/// Keys iterate in ascending name order, matching the canonical column
/// order used by the truth-table engine.
pub type Assignment = BTreeMap<Var, bool>;

impl Expr {
    /// Evaluates the formula under the given assignment.
    ///
    /// Both operands of a binary node are always evaluated, so a
    /// `MissingVariable` error does not depend on the values of
    /// sibling subformulas. Evaluation is pure: the same tree and
    /// assignment always produce the same result.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Expr::Const(b) => Ok(*b),
            Expr::Var(v) => assignment
                .get(v)
                .copied()
                .ok_or(EvalError::MissingVariable(*v)),
            Expr::Not(e) => Ok(!e.eval(assignment)?),
            Expr::And(l, r) => {
                let l = l.eval(assignment)?;
                let r = r.eval(assignment)?;
                Ok(l && r)
            }
            Expr::Or(l, r) => {
                let l = l.eval(assignment)?;
                let r = r.eval(assignment)?;
                Ok(l || r)
            }
            Expr::Implies(l, r) => {
                let l = l.eval(assignment)?;
                let r = r.eval(assignment)?;
                Ok(!l || r)
            }
            Expr::Iff(l, r) => {
                let l = l.eval(assignment)?;
                let r = r.eval(assignment)?;
                Ok(l == r)
            }
        }
    }
}
