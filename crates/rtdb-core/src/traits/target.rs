//! Request descriptor trait.

/// A named request that resolves to a database path.
///
/// Implementors are usually small enums, one variant per request shape.
/// `path` must be pure and total: the same descriptor always yields the same
/// path and never fails.
pub trait DatabaseTarget {
    /// The slash-separated path this request reads.
    fn path(&self) -> String;
}
