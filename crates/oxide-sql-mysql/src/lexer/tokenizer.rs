//! MySQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes MySQL statement text.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Inside a `/*! ... */` block whose body is lexed as code.
    in_versioned_comment: bool,
    /// The previous token was a name, so `.5` after it is a qualifier dot.
    after_name: bool,
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            in_versioned_comment: false,
            after_name: false,
        }
    }

    /// Returns the full input text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` positions ahead without advancing.
    fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    ///
    /// `-- ` only starts a comment when followed by whitespace or end of
    /// input, so `1--1` still lexes as `1 - -1`.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            match (self.peek(), self.peek_at(1)) {
                (Some('#'), _) => self.skip_line(),
                (Some('-'), Some('-'))
                    if self.peek_at(2).is_none_or(char::is_whitespace) =>
                {
                    self.skip_line();
                }
                (Some('/'), Some('*')) if self.peek_at(2) == Some('!') => {
                    self.pos += 3;
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.advance();
                    }
                    self.in_versioned_comment = true;
                }
                (Some('/'), Some('*')) => {
                    self.pos += 2;
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            None => break,
                            _ => {}
                        }
                    }
                }
                (Some('*'), Some('/')) if self.in_versioned_comment => {
                    self.pos += 2;
                    self.in_versioned_comment = false;
                }
                _ => break,
            }
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans a word: keyword, identifier, or a prefixed literal such as
    /// `_utf8'x'`, `N'x'`, `X'0F'`, `B'01'`.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(is_word_char) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];

        if self.peek() == Some('\'') {
            if text.eq_ignore_ascii_case("x") {
                return self.scan_prefixed_digits(16);
            }
            if text.eq_ignore_ascii_case("b") {
                return self.scan_prefixed_digits(2);
            }
            if text.eq_ignore_ascii_case("n") {
                return match self.scan_string() {
                    Ok(value) => self.make_token(TokenKind::NationalString(value)),
                    Err(msg) => self.error(msg),
                };
            }
            if text.len() > 1 && text.starts_with('_') {
                let charset = text[1..].to_string();
                return match self.scan_string() {
                    Ok(value) => self.make_token(TokenKind::IntroducedString { charset, value }),
                    Err(msg) => self.error(msg),
                };
            }
        }

        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(text.to_string())),
        }
    }

    /// Scans the quoted part of `X'..'` or `B'..'`.
    fn scan_prefixed_digits(&mut self, radix: u32) -> Token {
        self.advance(); // opening quote
        let digits_start = self.pos;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) if c.is_digit(radix) => {}
                Some(c) => return self.error(format!("invalid digit '{c}' in literal")),
                None => return self.error("unterminated literal"),
            }
        }
        let digits = self.input[digits_start..self.pos - 1].to_string();
        if radix == 16 {
            if digits.len() % 2 != 0 {
                return self.error("odd number of hex digits");
            }
            self.make_token(TokenKind::HexString(digits))
        } else {
            self.make_token(TokenKind::BitString(digits))
        }
    }

    /// Scans a backtick-quoted identifier.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // opening backtick
        let mut name = String::new();
        loop {
            match self.advance() {
                Some('`') if self.peek() == Some('`') => {
                    self.advance();
                    name.push('`');
                }
                Some('`') => break,
                Some(c) => name.push(c),
                None => return self.error("unterminated quoted identifier"),
            }
        }
        self.after_name = true;
        self.make_token(TokenKind::QuotedIdentifier(name))
    }

    /// Scans a number, including `0x..`/`0b..` forms and identifiers that
    /// merely start with digits (`1st_col`).
    fn scan_number(&mut self) -> Token {
        if self.peek() == Some('0') {
            let radix = match self.peek_at(1) {
                Some('x') => Some(16),
                Some('b') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                if self.peek_at(2).is_some_and(|c| c.is_digit(radix)) {
                    self.pos += 2;
                    let digits_start = self.pos;
                    while self.peek().is_some_and(|c| c.is_digit(radix)) {
                        self.advance();
                    }
                    if !self.peek().is_some_and(is_word_char) {
                        let digits = self.input[digits_start..self.pos].to_string();
                        return if radix == 16 {
                            self.make_token(TokenKind::HexString(digits))
                        } else {
                            self.make_token(TokenKind::BitString(digits))
                        };
                    }
                    self.pos = self.start;
                    return self.scan_word();
                }
            }
        }

        let mut decimal = false;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        // `1.5`, and `1.` with no fraction digits
        if self.peek() == Some('.')
            && (self.peek_at(1).is_some_and(|c| c.is_ascii_digit())
                || !self.peek_at(1).is_some_and(is_word_char))
        {
            decimal = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let signed = self.peek_at(1).is_some_and(|c| c == '+' || c == '-');
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                decimal = true;
                self.pos += digit_at;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        if !decimal && self.peek().is_some_and(is_word_char) {
            self.pos = self.start;
            return self.scan_word();
        }

        let text = &self.input[self.start..self.pos];
        if !decimal {
            if let Ok(n) = text.parse::<u64>() {
                return self.make_token(TokenKind::Integer(n));
            }
        }
        self.make_token(TokenKind::Decimal(text.to_string()))
    }

    /// Scans one or more adjacent quoted strings starting at the current
    /// quote character and returns the decoded, concatenated value.
    fn scan_string(&mut self) -> Result<String, String> {
        let mut value = String::new();
        loop {
            let Some(quote) = self.advance() else {
                return Err(String::from("unterminated string literal"));
            };
            loop {
                match self.advance() {
                    Some(c) if c == quote => {
                        if self.peek() == Some(quote) {
                            self.advance();
                            value.push(quote);
                        } else {
                            break;
                        }
                    }
                    Some('\\') => match self.advance() {
                        Some('0') => value.push('\0'),
                        Some('b') => value.push('\u{8}'),
                        Some('n') => value.push('\n'),
                        Some('r') => value.push('\r'),
                        Some('t') => value.push('\t'),
                        Some('Z') => value.push('\u{1a}'),
                        // kept escaped so LIKE patterns see the backslash
                        Some(c @ ('%' | '_')) => {
                            value.push('\\');
                            value.push(c);
                        }
                        Some(c) => value.push(c),
                        None => return Err(String::from("unterminated string literal")),
                    },
                    Some(c) => value.push(c),
                    None => return Err(String::from("unterminated string literal")),
                }
            }

            let resume = self.pos;
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            if !matches!(self.peek(), Some('\'' | '"')) {
                self.pos = resume;
                return Ok(value);
            }
        }
    }

    /// Scans `@name`, `@'quoted'` or `@@[scope.]name`.
    fn scan_variable(&mut self) -> Token {
        self.advance(); // @
        if self.peek() == Some('@') {
            self.advance();
            let name_start = self.pos;
            while self.peek().is_some_and(|c| is_word_char(c) || c == '.') {
                self.advance();
            }
            if self.pos == name_start {
                return self.error("expected system variable name after @@");
            }
            let name = self.input[name_start..self.pos].to_string();
            return self.make_token(TokenKind::SystemVariable(name));
        }

        let name_start = self.pos;
        match self.peek() {
            Some(quote @ ('\'' | '"' | '`')) => {
                self.advance();
                loop {
                    match self.advance() {
                        Some(c) if c == quote && self.peek() == Some(quote) => {
                            self.advance();
                        }
                        Some(c) if c == quote => break,
                        Some(_) => {}
                        None => return self.error("unterminated user variable"),
                    }
                }
            }
            _ => {
                while self.peek().is_some_and(|c| is_word_char(c) || c == '.') {
                    self.advance();
                }
            }
        }
        if self.pos == name_start {
            return self.error("expected user variable name after @");
        }
        let name = self.input[name_start..self.pos].to_string();
        self.make_token(TokenKind::UserVariable(name))
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind)
    }

    fn double(&mut self, kind: TokenKind) -> Token {
        self.pos += 2;
        self.make_token(kind)
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;
        let after_name = core::mem::replace(&mut self.after_name, false);

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };
        let next = self.peek_at(1);

        match c {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '%' => self.single(TokenKind::Percent),
            '~' => self.single(TokenKind::BitNot),
            '^' => self.single(TokenKind::BitXor),
            '?' => self.single(TokenKind::Question),
            '=' => self.single(TokenKind::Eq),
            '.' if !after_name && next.is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            '.' => self.single(TokenKind::Dot),
            ':' if next == Some('=') => self.double(TokenKind::Assign),
            ':' => self.single(TokenKind::Colon),
            '<' => match next {
                Some('=') if self.peek_at(2) == Some('>') => {
                    self.pos += 3;
                    self.make_token(TokenKind::NullSafeEq)
                }
                Some('=') => self.double(TokenKind::LtEq),
                Some('>') => self.double(TokenKind::NotEq),
                Some('<') => self.double(TokenKind::LeftShift),
                _ => self.single(TokenKind::Lt),
            },
            '>' => match next {
                Some('=') => self.double(TokenKind::GtEq),
                Some('>') => self.double(TokenKind::RightShift),
                _ => self.single(TokenKind::Gt),
            },
            '!' if next == Some('=') => self.double(TokenKind::NotEq),
            '!' => self.single(TokenKind::Bang),
            '|' if next == Some('|') => self.double(TokenKind::LogicalOr),
            '|' => self.single(TokenKind::BitOr),
            '&' if next == Some('&') => self.double(TokenKind::LogicalAnd),
            '&' => self.single(TokenKind::BitAnd),
            '@' => self.scan_variable(),
            '\'' | '"' => match self.scan_string() {
                Ok(value) => self.make_token(TokenKind::String(value)),
                Err(msg) => self.error(msg),
            },
            '`' => self.scan_quoted_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_word_char(c) => {
                let token = self.scan_word();
                self.after_name = matches!(token.kind, TokenKind::Identifier(_));
                token
            }
            c => {
                self.advance();
                self.error(format!("unexpected character: {c}"))
            }
        }
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn ident(s: &str) -> TokenKind {
        TokenKind::Identifier(String::from(s))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds("  \n\t "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT # hash\n -- dash\n /* block */ 1"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer(1),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_double_dash_needs_space() {
        assert_eq!(
            token_kinds("1--1"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Integer(1),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_versioned_comment_is_code() {
        assert_eq!(
            token_kinds("SELECT /*!40001 SQL_NO_CACHE */ a"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                ident("SQL_NO_CACHE"),
                ident("a"),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_words_and_keywords() {
        assert_eq!(
            token_kinds("select Engine `from` 1abc"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                ident("Engine"),
                TokenKind::QuotedIdentifier(String::from("from")),
                ident("1abc"),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 1.50 .5 2e10 18446744073709551616"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Decimal(String::from("1.50")),
                TokenKind::Decimal(String::from(".5")),
                TokenKind::Decimal(String::from("2e10")),
                TokenKind::Decimal(String::from("18446744073709551616")),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_decimal_without_fraction_digits() {
        assert_eq!(
            token_kinds("1. 2.)"),
            vec![
                TokenKind::Decimal(String::from("1.")),
                TokenKind::Decimal(String::from("2.")),
                TokenKind::RightParen,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            token_kinds("3.x"),
            vec![TokenKind::Integer(3), TokenKind::Dot, ident("x"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_qualified_name_dot() {
        assert_eq!(
            token_kinds("t.5"),
            vec![ident("t"), TokenKind::Dot, TokenKind::Integer(5), TokenKind::Eof]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            token_kinds(r#"'it''s' "a\nb" 'x' 'y'"#),
            vec![
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("a\nbxy")),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_prefixed_literals() {
        assert_eq!(
            token_kinds("_utf8'abc' N'n' X'0aFF' 0x1f b'101' 0b11"),
            vec![
                TokenKind::IntroducedString {
                    charset: String::from("utf8"),
                    value: String::from("abc")
                },
                TokenKind::NationalString(String::from("n")),
                TokenKind::HexString(String::from("0aFF")),
                TokenKind::HexString(String::from("1f")),
                TokenKind::BitString(String::from("101")),
                TokenKind::BitString(String::from("11")),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            token_kinds("@a @'localhost' @@global.autocommit ?"),
            vec![
                TokenKind::UserVariable(String::from("a")),
                TokenKind::UserVariable(String::from("'localhost'")),
                TokenKind::SystemVariable(String::from("global.autocommit")),
                TokenKind::Question,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds(":= <=> <> != <= >= << >> && || ! ~ ^ & |"),
            vec![
                TokenKind::Assign,
                TokenKind::NullSafeEq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::LeftShift,
                TokenKind::RightShift,
                TokenKind::LogicalAnd,
                TokenKind::LogicalOr,
                TokenKind::Bang,
                TokenKind::BitNot,
                TokenKind::BitXor,
                TokenKind::BitAnd,
                TokenKind::BitOr,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let kinds = token_kinds("'abc");
        assert!(matches!(kinds[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("SELECT id").tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
    }
}
