//! Parser configuration.

/// Tunables for a [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting of expressions, subqueries and compound blocks.
    ///
    /// Every parenthesised expression, subquery, derived table or
    /// compound block is one level. Left-associative chains (`a + b + c`,
    /// `t1 JOIN t2 JOIN t3`, `db.t.col`) deepen the tree without nesting,
    /// so every eight chained operators also count as one level. Parsing
    /// past the limit fails with "maximum nesting depth exceeded".
    pub max_depth: usize,
}

impl ParserOptions {
    /// Default nesting limit. Input at this depth parses on a 2 MiB
    /// thread stack in an unoptimised build.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Creates options with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}
