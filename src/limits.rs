//! Resource limits for truth-table enumeration.

/// Enumeration limits.
///
/// A formula over `n` distinct variables has a truth table of `2^n`
/// rows, so enumeration cost doubles with every variable. The limit
/// caps how many distinct variables a formula may reference before the
/// engine refuses to enumerate, keeping table sizes bounded instead of
/// leaving the failure mode to resource exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct variables to enumerate over.
    pub max_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        // 2^20 rows, about a million, is still instantaneous to build.
        Self { max_variables: 20 }
    }
}

impl Limits {
    /// Create limits with a custom variable cap.
    pub fn new(max_variables: usize) -> Self {
        Self { max_variables }
    }

    /// The full variable universe, `a` through `z`.
    ///
    /// 2^26 rows take noticeable time and memory; opt in deliberately.
    pub fn permissive() -> Self {
        Self { max_variables: 26 }
    }
}
