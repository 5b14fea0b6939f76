//! Comparison strategies.

use std::fmt;

/// The algorithm class used to compare two values of a type.
///
/// Exactly one strategy is selected per type, from its declared shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonStrategy {
    /// Native value equality.
    Primitive,
    /// Forwarded to the type's own `PartialEq`.
    Delegated,
    /// Elementwise, order-sensitive comparison of an iterable.
    Sequence,
    /// Pairwise comparison of the included members.
    Memberwise,
}

impl ComparisonStrategy {
    /// Returns the lowercase name used in trace events.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonStrategy::Primitive => "primitive",
            ComparisonStrategy::Delegated => "delegated",
            ComparisonStrategy::Sequence => "sequence",
            ComparisonStrategy::Memberwise => "memberwise",
        }
    }
}

impl fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
