//! Truth-table enumeration in canonical order.
//!
//! Rows are enumerated as a binary counter over the sorted variable
//! list: the first (lexicographically smallest) variable is the most
//! significant bit, `false` is 0, `true` is 1, and the counter runs
//! from all-`false` to all-`true`. This is the same order produced by
//! nested loops with the first variable varying slowest, and it is the
//! single source of truth for column meaning across the crate.
//!
//! Note: a formula over `n` variables has `2^n` rows, so enumeration
//! is exponential in the variable count. The [`Limits`] check runs
//! before any rows are produced.

use std::fmt;

use log::debug;

use crate::ast::Expr;
use crate::error::Error;
use crate::eval::Assignment;
use crate::limits::Limits;
use crate::types::Var;

/// One row of a truth table: the per-variable values in canonical
/// variable order, followed by the formula's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub values: Vec<bool>,
    pub result: bool,
}

/// A complete truth table: the sorted variable list and exactly
/// `2^n` rows in canonical enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Var>,
    rows: Vec<Row>,
}

/// Returns an iterator over all `2^n` assignments for `variables`,
/// in canonical enumeration order.
///
/// `variables` must be sorted ascending and free of duplicates; the
/// variable collector produces exactly that shape.
pub fn assignments(variables: &[Var]) -> impl Iterator<Item = Assignment> + '_ {
    (0..1usize << variables.len()).map(move |index| row_assignment(variables, index))
}

/// Value of each variable in row `index`: bit `n-1-j` of the counter,
/// so the first variable is the most significant bit.
fn row_values(n: usize, index: usize) -> impl Iterator<Item = bool> {
    (0..n).map(move |j| (index >> (n - 1 - j)) & 1 == 1)
}

fn row_assignment(variables: &[Var], index: usize) -> Assignment {
    variables
        .iter()
        .copied()
        .zip(row_values(variables.len(), index))
        .collect()
}

pub(crate) fn check_limit(count: usize, limits: &Limits) -> Result<(), Error> {
    if count > limits.max_variables {
        return Err(Error::VariableLimitExceeded {
            count,
            max: limits.max_variables,
        });
    }
    Ok(())
}

impl TruthTable {
    /// Enumerates the full truth table of `expr`.
    ///
    /// A formula with no variables yields a single row with an empty
    /// value prefix.
    pub fn build(expr: &Expr, limits: &Limits) -> Result<Self, Error> {
        let variables: Vec<Var> = expr.variables().into_iter().collect();
        check_limit(variables.len(), limits)?;
        let count = 1usize << variables.len();
        debug!(
            "enumerating {} rows over {} variables",
            count,
            variables.len()
        );

        let mut rows = Vec::with_capacity(count);
        for index in 0..count {
            let values: Vec<bool> = row_values(variables.len(), index).collect();
            let assignment: Assignment = variables
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect();
            let result = expr.eval(&assignment)?;
            rows.push(Row { values, result });
        }

        Ok(TruthTable { variables, rows })
    }

    /// The variables, ascending; one column per entry.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// The rows in canonical enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, always `2^n` for `n` variables.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| result")?;
        for row in &self.rows {
            for &value in &row.values {
                write!(f, "{} ", value as u8)?;
            }
            writeln!(f, "| {}", row.result as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    fn rows_of(expr: &str) -> Vec<Vec<bool>> {
        let table = TruthTable::build(&parse(expr).unwrap(), &Limits::default()).unwrap();
        table
            .rows()
            .iter()
            .map(|row| {
                let mut full = row.values.clone();
                full.push(row.result);
                full
            })
            .collect()
    }

    #[test]
    fn test_canonical_order_two_variables() {
        assert_eq!(
            rows_of("a and b"),
            vec![
                vec![false, false, false],
                vec![false, true, false],
                vec![true, false, false],
                vec![true, true, true],
            ]
        );
    }

    #[test]
    fn test_first_variable_is_most_significant() {
        // Column a flips once, column c flips every row.
        let table = TruthTable::build(&parse("a or b or c").unwrap(), &Limits::default()).unwrap();
        assert_eq!(table.len(), 8);
        assert!(table.rows()[..4].iter().all(|row| !row.values[0]));
        assert!(table.rows()[4..].iter().all(|row| row.values[0]));
        for (index, row) in table.rows().iter().enumerate() {
            assert_eq!(row.values[2], index % 2 == 1);
        }
    }

    #[test]
    fn test_row_count_and_width() {
        for (expr, n) in [("a", 1), ("a and b", 2), ("a or b or c or d", 4)] {
            let table = TruthTable::build(&parse(expr).unwrap(), &Limits::default()).unwrap();
            assert_eq!(table.len(), 1 << n);
            assert!(table.rows().iter().all(|row| row.values.len() == n));
        }
    }

    #[test]
    fn test_zero_variable_formula_has_one_row() {
        let table = TruthTable::build(&parse("1").unwrap(), &Limits::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].values.is_empty());
        assert!(table.rows()[0].result);
    }

    #[test]
    fn test_variable_columns_are_sorted() {
        // Written b-first, columns still come out a, b.
        let table = TruthTable::build(&parse("b implies a").unwrap(), &Limits::default()).unwrap();
        let names: Vec<char> = table.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!['a', 'b']);
    }

    #[test]
    fn test_variable_limit_enforced() {
        let expr = parse("a and b and c").unwrap();
        let err = TruthTable::build(&expr, &Limits::new(2)).unwrap_err();
        assert_eq!(err, Error::VariableLimitExceeded { count: 3, max: 2 });
    }

    #[test]
    fn test_display_rendering() {
        let table = TruthTable::build(&parse("a and b").unwrap(), &Limits::default()).unwrap();
        let rendered = table.to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("a b | result"));
        assert_eq!(lines.next(), Some("0 0 | 0"));
        assert_eq!(lines.last(), Some("1 1 | 1"));
    }
}
