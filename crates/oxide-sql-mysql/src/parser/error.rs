//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A syntax error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// Description of the token found.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &TokenKind, span: Span) -> Self {
        if matches!(found, TokenKind::Eof) {
            return Self::unexpected_eof(expected, span);
        }
        if let TokenKind::Error(msg) = found {
            return Self::new(format!("Invalid token: {msg}"), span);
        }
        let expected: String = expected.into();
        let found = found.describe();
        Self {
            message: format!("Unexpected token: expected {expected}, found {found}"),
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected}"),
            span,
            expected: Some(expected),
            found: Some(TokenKind::Eof.describe()),
        }
    }

    /// Closing label differs from the opening label, or a closing label
    /// was given for an unlabelled block.
    #[must_use]
    pub fn label_mismatch(opening: Option<&str>, closing: &str, span: Span) -> Self {
        let message = match opening {
            Some(opening) => {
                format!("End label {closing} does not match begin label {opening}")
            }
            None => format!("End label {closing} without matching begin label"),
        };
        Self {
            message,
            span,
            expected: opening.map(String::from),
            found: Some(closing.to_string()),
        }
    }

    /// Referencing and referenced column lists of a foreign key differ in
    /// length.
    #[must_use]
    pub fn foreign_key_arity(
        name: Option<&str>,
        referencing: usize,
        referenced: usize,
        span: Span,
    ) -> Self {
        let key = name.map_or_else(
            || String::from("foreign key without name"),
            |name| format!("foreign key {name}"),
        );
        Self::new(
            format!(
                "Incorrect {key}: {referencing} referencing columns but {referenced} referenced columns"
            ),
            span,
        )
    }

    /// A word that is not in the closed set accepted at this position.
    #[must_use]
    pub fn unknown_word(context: &str, word: &str, span: Span) -> Self {
        Self {
            message: format!("Unknown {context}: {word}"),
            span,
            expected: Some(context.to_string()),
            found: Some(word.to_string()),
        }
    }

    /// ORDER BY or LIMIT on an unparenthesised UNION branch that is not
    /// the last one.
    #[must_use]
    pub fn union_order_by(span: Span) -> Self {
        Self::new(
            "Incorrect usage of UNION and ORDER BY or LIMIT: parenthesise the branch",
            span,
        )
    }

    /// Unrecognized data type or CAST target.
    #[must_use]
    pub fn unknown_data_type(name: &str, span: Span) -> Self {
        Self {
            message: format!("Unknown data type: {name}"),
            span,
            expected: Some(String::from("data type")),
            found: Some(name.to_string()),
        }
    }

    /// CASE without any WHEN arm.
    #[must_use]
    pub fn empty_case(span: Span) -> Self {
        Self {
            message: String::from("CASE requires at least one WHEN branch"),
            span,
            expected: Some(String::from("WHEN")),
            found: None,
        }
    }

    /// Nesting exceeded [`ParserOptions::max_depth`](super::ParserOptions).
    #[must_use]
    pub fn too_deep(span: Span) -> Self {
        Self::new("maximum nesting depth exceeded", span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    #[test]
    fn test_unexpected_message() {
        let err = ParseError::unexpected(
            "FROM",
            &TokenKind::Keyword(Keyword::Where),
            Span::new(9, 14),
        );
        assert_eq!(err.message, "Unexpected token: expected FROM, found WHERE");
        assert_eq!(err.to_string(), "Unexpected token: expected FROM, found WHERE at position 9..14");
    }

    #[test]
    fn test_unexpected_eof_redirect() {
        let err = ParseError::unexpected("')'", &TokenKind::Eof, Span::new(3, 3));
        assert!(err.message.starts_with("Unexpected end of input"));
    }

    #[test]
    fn test_foreign_key_messages() {
        let unnamed = ParseError::foreign_key_arity(None, 2, 1, Span::default());
        assert!(unnamed.message.contains("foreign key without name"));
        let named = ParseError::foreign_key_arity(Some("fk_a"), 2, 1, Span::default());
        assert!(named.message.contains("foreign key fk_a"));
    }
}
