//! Source location tracking for tokens and diagnostics.

/// A half-open byte range in the statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns a span covering both `self` and `other`.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Computes the 1-based line and column of the span start in `source`.
    #[must_use]
    pub fn line_column(&self, source: &str) -> (usize, usize) {
        let upto = source.get(..self.start).unwrap_or(source);
        let line = upto.matches('\n').count() + 1;
        let column = upto
            .rfind('\n')
            .map_or(upto.chars().count(), |nl| upto[nl + 1..].chars().count())
            + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_to() {
        let merged = Span::new(5, 10).to(Span::new(8, 15));
        assert_eq!(merged, Span::new(5, 15));
        assert_eq!(merged.len(), 10);
    }

    #[test]
    fn test_line_column() {
        let src = "SELECT 1\nFROM t\nWHERE";
        assert_eq!(Span::new(0, 6).line_column(src), (1, 1));
        assert_eq!(Span::new(9, 13).line_column(src), (2, 1));
        assert_eq!(Span::new(14, 15).line_column(src), (2, 6));
    }
}
