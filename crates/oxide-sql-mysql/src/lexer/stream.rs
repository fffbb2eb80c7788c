//! Pull-based token stream with a single pushback slot.

use super::{Lexer, Span, Token, TokenKind};

/// Token cursor consumed by the parser.
///
/// Holds the current token and the one before it. [`TokenStream::push_back`]
/// restores the previous token as current; the displaced token is replayed
/// by the next [`TokenStream::advance`]. Only one token can be pushed back
/// between two advances.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    current: Token,
    previous: Option<Token>,
    pushed: Option<Token>,
    last_end: usize,
    param_index: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned on the first token of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            previous: None,
            pushed: None,
            last_end: 0,
            param_index: 0,
        }
    }

    /// The current token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Kind of the current token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Span of the current token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.current.span
    }

    /// End offset of the most recently consumed token.
    #[must_use]
    pub const fn last_end(&self) -> usize {
        self.last_end
    }

    /// Moves to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Token {
        let next = self.pushed.take().unwrap_or_else(|| self.lexer.next_token());
        let consumed = core::mem::replace(&mut self.current, next);
        self.last_end = consumed.span.end;
        self.previous = Some(consumed.clone());
        consumed
    }

    /// Restores the previously consumed token as the current one.
    ///
    /// Returns `false` when there is nothing to push back, either at the
    /// start of input or because a pushback already happened since the
    /// last advance.
    pub fn push_back(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.last_end = previous.span.start;
                let displaced = core::mem::replace(&mut self.current, previous);
                self.pushed = Some(displaced);
                true
            }
            None => false,
        }
    }

    /// Allocates the next `?` marker index (1-based).
    pub fn next_param_index(&mut self) -> usize {
        self.param_index += 1;
        self.param_index
    }

    /// The statement text the stream reads from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.lexer.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    #[test]
    fn test_advance_and_push_back() {
        let mut stream = TokenStream::new("SELECT a FROM");
        assert_eq!(stream.kind(), &TokenKind::Keyword(Keyword::Select));
        stream.advance();
        let a = stream.advance();
        assert_eq!(a.kind, TokenKind::Identifier(String::from("a")));
        assert_eq!(stream.kind(), &TokenKind::Keyword(Keyword::From));

        assert!(stream.push_back());
        assert_eq!(stream.kind(), &TokenKind::Identifier(String::from("a")));
        assert!(!stream.push_back());

        stream.advance();
        assert_eq!(stream.kind(), &TokenKind::Keyword(Keyword::From));
        stream.advance();
        assert!(stream.current().is_eof());
    }

    #[test]
    fn test_param_index() {
        let mut stream = TokenStream::new("? ?");
        assert_eq!(stream.next_param_index(), 1);
        assert_eq!(stream.next_param_index(), 2);
    }
}
