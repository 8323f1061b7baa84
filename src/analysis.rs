//! Text-level analysis of formulas.
//!
//! These functions are the crate's outward contract: each takes raw
//! formula text, runs it through the tokenizer, parser, variable
//! collector, and truth-table engine, and fails with the first error
//! encountered. They hold no state and are safe to call in a loop; a
//! bad formula returns an error, it never aborts anything.
//!
//! # Example
//!
//! ```
//! use proplogic_rs::analysis::{are_equivalent, is_tautology};
//!
//! assert!(is_tautology("(a and b) implies a").unwrap());
//! assert!(are_equivalent("not (a and b)", "not a or not b").unwrap());
//! ```

use log::debug;

use crate::error::Error;
use crate::limits::Limits;
use crate::parser::parse;
use crate::table::{assignments, check_limit, TruthTable};
use crate::types::Var;

/// All assignments that give a formula a requested truth value.
///
/// `variables` names the columns of each entry in `assignments`, in
/// canonical (ascending) order; entries appear in truth-table row
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub variables: Vec<Var>,
    pub assignments: Vec<Vec<bool>>,
}

/// Enumerates the full truth table of `expr`.
pub fn truth_table(expr: &str) -> Result<TruthTable, Error> {
    truth_table_with_limits(expr, &Limits::default())
}

/// [`truth_table`] with a caller-chosen variable limit.
pub fn truth_table_with_limits(expr: &str, limits: &Limits) -> Result<TruthTable, Error> {
    let parsed = parse(expr)?;
    debug!("truth_table: {}", parsed);
    TruthTable::build(&parsed, limits)
}

/// Whether `expr` is true under every assignment.
///
/// A formula with no variables is evaluated as a single-row table, so
/// `is_tautology("1")` holds.
pub fn is_tautology(expr: &str) -> Result<bool, Error> {
    is_tautology_with_limits(expr, &Limits::default())
}

/// [`is_tautology`] with a caller-chosen variable limit.
pub fn is_tautology_with_limits(expr: &str, limits: &Limits) -> Result<bool, Error> {
    let table = truth_table_with_limits(expr, limits)?;
    Ok(table.rows().iter().all(|row| row.result))
}

/// Whether two formulas agree under every assignment.
///
/// Formulas over different variable sets are non-equivalent by
/// definition: the result is `Ok(false)` without any evaluation.
/// Otherwise both formulas are evaluated against the same enumeration
/// over their shared variables and must agree on every row.
pub fn are_equivalent(lhs: &str, rhs: &str) -> Result<bool, Error> {
    are_equivalent_with_limits(lhs, rhs, &Limits::default())
}

/// [`are_equivalent`] with a caller-chosen variable limit.
pub fn are_equivalent_with_limits(lhs: &str, rhs: &str, limits: &Limits) -> Result<bool, Error> {
    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;

    let lhs_vars = lhs.variables();
    let rhs_vars = rhs.variables();
    if lhs_vars != rhs_vars {
        debug!("are_equivalent: variable sets differ, {} vs {}", lhs, rhs);
        return Ok(false);
    }

    let variables: Vec<Var> = lhs_vars.into_iter().collect();
    check_limit(variables.len(), limits)?;
    debug!(
        "are_equivalent: comparing {} rows over {} variables",
        1usize << variables.len(),
        variables.len()
    );
    for assignment in assignments(&variables) {
        if lhs.eval(&assignment)? != rhs.eval(&assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Enumerates the assignments giving a formula a target value.
///
/// The query is `<formula> = <target>` with exactly one `=`; the
/// target must be `0` or `1` after trimming whitespace. The result
/// lists, in truth-table row order, the variable-value prefix of every
/// row whose result equals the target.
pub fn infer(query: &str) -> Result<Inference, Error> {
    infer_with_limits(query, &Limits::default())
}

/// [`infer`] with a caller-chosen variable limit.
pub fn infer_with_limits(query: &str, limits: &Limits) -> Result<Inference, Error> {
    let (formula, target) = query
        .split_once('=')
        .ok_or_else(|| Error::InvalidTarget("missing `=` delimiter".to_string()))?;
    let target = match target.trim() {
        "0" => false,
        "1" => true,
        other => {
            return Err(Error::InvalidTarget(format!(
                "expected 0 or 1 after `=`, got {:?}",
                other
            )))
        }
    };

    let table = truth_table_with_limits(formula, limits)?;
    let matching = table
        .rows()
        .iter()
        .filter(|row| row.result == target)
        .map(|row| row.values.clone())
        .collect();
    Ok(Inference {
        variables: table.variables().to_vec(),
        assignments: matching,
    })
}
