//! Parser state, token utilities and the statement dispatcher.

use tracing::{debug, trace};

use super::{ParseError, ParserOptions, Result};
use crate::ast::{Expr, Identifier, Limit, LimitValue, Statement, VariableScope};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind, TokenStream};

/// Depth units charged per nesting level. Each operator of a
/// left-associative chain charges one.
const LEVEL_UNITS: usize = 8;

/// MySQL statement parser.
///
/// A parser owns one token cursor over one input text. Use a separate
/// parser per thread.
pub struct Parser<'a> {
    pub(super) tokens: TokenStream<'a>,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser with explicit options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Self {
            tokens: TokenStream::new(input),
            options,
            depth: 0,
        }
    }

    /// Parses exactly one statement, optionally terminated by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first syntax error, or if anything
    /// other than a single `;` follows the statement.
    pub fn parse_statement(&mut self) -> Result<Statement> {
        let result = self.parse_nested_statement().and_then(|statement| {
            self.consume(&TokenKind::Semicolon);
            if self.current().is_eof() {
                Ok(statement)
            } else {
                Err(self.error_expected("end of statement"))
            }
        });
        if let Err(err) = &result {
            let (line, column) = err.span.line_column(self.tokens.source());
            debug!(error = %err, line, column, "statement rejected");
        }
        result
    }

    /// Parses a `;`-separated script. Empty statements are skipped.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first syntax error. Statements before
    /// the failing one are discarded.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.consume(&TokenKind::Semicolon) {}
            if self.current().is_eof() {
                break;
            }
            match self.parse_nested_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    let (line, column) = err.span.line_column(self.tokens.source());
                    debug!(
                        error = %err,
                        line,
                        column,
                        parsed = statements.len(),
                        "script rejected"
                    );
                    return Err(err);
                }
            }
            if !self.current().is_eof() {
                self.expect(&TokenKind::Semicolon)?;
            }
        }
        Ok(statements)
    }

    /// Parses one statement starting at the current token, without
    /// consuming a terminator. Routine bodies recurse through here.
    pub(crate) fn parse_nested_statement(&mut self) -> Result<Statement> {
        self.nested(Self::dispatch)
    }

    fn dispatch(&mut self) -> Result<Statement> {
        trace!(token = ?self.kind(), "dispatch statement");
        if self.check(&TokenKind::LeftParen) {
            return Ok(Statement::Query(self.parse_query()?));
        }
        if let Some(keyword) = self.current().as_keyword() {
            return match keyword {
                Keyword::Select => Ok(Statement::Query(self.parse_query()?)),
                Keyword::Insert | Keyword::Replace => self.parse_insert(),
                Keyword::Update => self.parse_update(),
                Keyword::Delete => self.parse_delete(),
                Keyword::Call => self.parse_call(),
                Keyword::Create => self.parse_create(),
                Keyword::Alter => self.parse_alter(),
                Keyword::Drop => self.parse_drop(),
                Keyword::Rename => self.parse_rename(),
                Keyword::Show => self.parse_show(),
                Keyword::Set => self.parse_set(),
                Keyword::Explain | Keyword::Describe | Keyword::Desc => self.parse_explain(),
                Keyword::Use => self.parse_use(),
                Keyword::Declare => self.parse_declare(),
                Keyword::Signal | Keyword::Resignal => self.parse_signal(),
                Keyword::Get => self.parse_get_diagnostics(),
                Keyword::Fetch => self.parse_fetch(),
                Keyword::If => self.parse_if(),
                Keyword::Case => self.parse_case_statement(),
                Keyword::Loop | Keyword::While | Keyword::Repeat => self.parse_labelled(None),
                Keyword::Leave | Keyword::Iterate => self.parse_leave_iterate(),
                Keyword::Return => self.parse_return(),
                Keyword::Release => self.parse_release_savepoint(),
                _ => Err(self.error_expected("statement")),
            };
        }
        match self.current_word().as_deref() {
            Some("TRUNCATE") => self.parse_truncate(),
            Some("START") => self.parse_start_transaction(),
            Some("BEGIN") => self.parse_begin(),
            Some("COMMIT") => self.parse_commit(),
            Some("ROLLBACK") => self.parse_rollback(),
            Some("SAVEPOINT") => self.parse_savepoint(),
            Some("PREPARE") => self.parse_prepare(),
            Some("EXECUTE") => self.parse_execute(),
            Some("DEALLOCATE") => self.parse_deallocate(),
            Some("OPEN" | "CLOSE") => self.parse_open_close(),
            Some(_) => self.parse_label_prefix(),
            None if matches!(self.kind(), TokenKind::QuotedIdentifier(_)) => {
                self.parse_label_prefix()
            }
            None => Err(self.error_expected("statement")),
        }
    }

    /// `label: {BEGIN | LOOP | WHILE | REPEAT}`; anything else is not a
    /// statement.
    fn parse_label_prefix(&mut self) -> Result<Statement> {
        let token = self.advance();
        if self.consume(&TokenKind::Colon) {
            if let Some(label) = Self::token_identifier(&token) {
                return self.parse_labelled(Some(label));
            }
        }
        self.tokens.push_back();
        Err(self.error_expected("statement"))
    }

    // ===================================================================
    // Nesting guard
    // ===================================================================

    /// Runs `f` one nesting level deeper, failing once the configured
    /// depth is exceeded.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.charge(LEVEL_UNITS)?;
        let result = f(self);
        self.depth -= LEVEL_UNITS;
        result
    }

    /// Runs a left-associative chain. Operators charged inside it with
    /// [`Parser::chain_operator`] are released when it returns.
    pub(super) fn chained<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mark = self.depth;
        let result = f(self);
        self.depth = mark;
        result
    }

    /// Charges one unit for an operator folded into the current chain,
    /// which deepens the tree without recursing.
    pub(super) fn chain_operator(&mut self) -> Result<()> {
        self.charge(1)
    }

    fn charge(&mut self, units: usize) -> Result<()> {
        let budget = self.options.max_depth.saturating_mul(LEVEL_UNITS);
        if self.depth.saturating_add(units) > budget {
            return Err(ParseError::too_deep(self.span()));
        }
        self.depth += units;
        Ok(())
    }

    // ===================================================================
    // Token utilities
    // ===================================================================

    /// The current token.
    pub(super) const fn current(&self) -> &Token {
        self.tokens.current()
    }

    /// Kind of the current token.
    pub(super) const fn kind(&self) -> &TokenKind {
        self.tokens.kind()
    }

    /// Span of the current token.
    pub(super) const fn span(&self) -> Span {
        self.tokens.span()
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    /// Error describing what was expected at the current token.
    pub(super) fn error_expected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, self.kind(), self.span())
    }

    /// Whether the `(` at the current token opens a query that goes on
    /// after its closing parenthesis, as in `((SELECT 1) UNION SELECT 2)`.
    ///
    /// The run of `(` must end in SELECT, and the matching `)` must be
    /// followed by UNION, ORDER, LIMIT or another `)`. Scans ahead on a
    /// separate lexer; the token stream is not moved.
    pub(super) fn parenthesized_query_ahead(&self) -> bool {
        if !self.check(&TokenKind::LeftParen) {
            return false;
        }
        let Some(rest) = self.tokens.source().get(self.span().start..) else {
            return false;
        };
        let mut lexer = Lexer::new(rest);
        let mut depth = 0usize;
        let mut token = lexer.next_token();
        while matches!(token.kind, TokenKind::LeftParen) {
            // deeper runs fail on the depth limit whichever way they parse
            if depth > self.options.max_depth {
                return false;
            }
            depth += 1;
            token = lexer.next_token();
        }
        if !matches!(token.kind, TokenKind::Keyword(Keyword::Select)) {
            return false;
        }
        while depth > 0 {
            match lexer.next_token().kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                TokenKind::Eof | TokenKind::Error(_) => return false,
                _ => {}
            }
        }
        matches!(
            lexer.next_token().kind,
            TokenKind::RightParen
                | TokenKind::Keyword(Keyword::Union | Keyword::Order | Keyword::Limit)
        )
    }

    /// Whether a query starts at the current token, just inside an opening
    /// parenthesis.
    pub(super) fn query_ahead(&self) -> bool {
        self.check_keyword(Keyword::Select) || self.parenthesized_query_ahead()
    }

    /// Checks the current token against a punctuation or operator kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(self.kind()) == core::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches `kind`.
    pub(super) fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or fails.
    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(&format!("'{}'", kind.punctuation())))
        }
    }

    /// Checks whether the current token is the given reserved word.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind(), TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Consumes the reserved word if present.
    pub(super) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the reserved word or fails.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error_expected(keyword.as_str()))
        }
    }

    /// Upper-cased text of the current token if it is an unquoted word.
    pub(super) fn current_word(&self) -> Option<String> {
        self.current().upper_word()
    }

    /// Checks whether the current token is the unquoted word `word`
    /// (upper case), reserved or not.
    pub(super) fn check_word(&self, word: &str) -> bool {
        match self.kind() {
            TokenKind::Identifier(text) => text.eq_ignore_ascii_case(word),
            TokenKind::Keyword(kw) => kw.as_str() == word,
            _ => false,
        }
    }

    /// Consumes the word if present.
    pub(super) fn consume_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the word or fails.
    pub(super) fn expect_word(&mut self, word: &str) -> Result<()> {
        if self.consume_word(word) {
            Ok(())
        } else {
            Err(self.error_expected(word))
        }
    }

    /// Consumes an optional `=`.
    pub(super) fn consume_equals(&mut self) {
        self.consume(&TokenKind::Eq);
    }

    /// Consumes `IF EXISTS` if present.
    pub(super) fn parse_if_exists(&mut self) -> Result<bool> {
        if self.consume_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes `IF NOT EXISTS` if present.
    pub(super) fn parse_if_not_exists(&mut self) -> Result<bool> {
        if self.consume_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ===================================================================
    // Names and literals
    // ===================================================================

    /// Converts a name token to an identifier.
    pub(super) fn token_identifier(token: &Token) -> Option<Identifier> {
        match &token.kind {
            TokenKind::Identifier(name) => Some(Identifier::new(name.clone())),
            TokenKind::QuotedIdentifier(name) => Some(Identifier::quoted(name.clone())),
            _ => None,
        }
    }

    /// Parses a single unqualified name.
    pub(super) fn expect_identifier(&mut self) -> Result<Identifier> {
        match Self::token_identifier(self.current()) {
            Some(id) => {
                self.advance();
                Ok(id)
            }
            None => Err(self.error_expected("identifier")),
        }
    }

    /// Parses a name, a string, or a reserved word used as a value
    /// (`ENGINE = InnoDB`, `CHARSET 'utf8'`, `CHARACTER SET binary`).
    pub(super) fn parse_name_text(&mut self) -> Result<String> {
        let text = match self.kind() {
            TokenKind::Identifier(s) | TokenKind::QuotedIdentifier(s) | TokenKind::String(s) => {
                s.clone()
            }
            TokenKind::Keyword(kw) => kw.as_str().to_ascii_lowercase(),
            _ => return Err(self.error_expected("name")),
        };
        self.advance();
        Ok(text)
    }

    /// Parses a dotted name chain such as `db.t.col`.
    ///
    /// After a dot any word is accepted, reserved or not.
    pub(super) fn parse_qualified_identifier(&mut self) -> Result<Identifier> {
        self.chained(|p| {
            let mut id = p.expect_identifier()?;
            while p.consume(&TokenKind::Dot) {
                p.chain_operator()?;
                id = id.child(p.expect_name_after_dot()?);
            }
            Ok(id)
        })
    }

    /// Parses a dotted name chain that may end in `*`.
    pub(super) fn parse_qualified_wildcard(&mut self) -> Result<Identifier> {
        if self.consume(&TokenKind::Star) {
            return Ok(Identifier::wildcard(None));
        }
        self.chained(|p| {
            let mut id = p.expect_identifier()?;
            while p.consume(&TokenKind::Dot) {
                p.chain_operator()?;
                if p.consume(&TokenKind::Star) {
                    return Ok(Identifier::wildcard(Some(id)));
                }
                id = id.child(p.expect_name_after_dot()?);
            }
            Ok(id)
        })
    }

    pub(super) fn expect_name_after_dot(&mut self) -> Result<Identifier> {
        if let TokenKind::Keyword(kw) = self.kind() {
            let id = Identifier::new(kw.as_str().to_ascii_lowercase());
            self.advance();
            return Ok(id);
        }
        self.expect_identifier()
    }

    /// Parses `(name, name, ..)`.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<Identifier>> {
        self.expect(&TokenKind::LeftParen)?;
        let names = self.parse_comma_separated(Self::expect_identifier)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(names)
    }

    /// Parses one or more items separated by commas.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = vec![item(self)?];
        while self.consume(&TokenKind::Comma) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Parses a string literal and returns its decoded value.
    pub(super) fn parse_string(&mut self) -> Result<String> {
        match self.kind() {
            TokenKind::String(s)
            | TokenKind::NationalString(s)
            | TokenKind::IntroducedString { value: s, .. } => {
                let value = s.clone();
                self.advance();
                Ok(value)
            }
            _ => Err(self.error_expected("string literal")),
        }
    }

    /// Parses an unsigned integer literal.
    pub(super) fn parse_u64(&mut self) -> Result<u64> {
        if let TokenKind::Integer(n) = self.kind() {
            let n = *n;
            self.advance();
            Ok(n)
        } else {
            Err(self.error_expected("integer"))
        }
    }

    /// Parses an optional `(n)` length.
    pub(super) fn parse_optional_length(&mut self) -> Result<Option<u64>> {
        if self.consume(&TokenKind::LeftParen) {
            let n = self.parse_u64()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    // ===================================================================
    // Shared clauses
    // ===================================================================

    /// Parses the operands of LIMIT; the keyword is already consumed.
    ///
    /// Accepts `n`, `offset, n` and `n OFFSET offset`.
    pub(super) fn parse_limit(&mut self) -> Result<Limit> {
        let first = self.parse_limit_value()?;
        if self.consume(&TokenKind::Comma) {
            let count = self.parse_limit_value()?;
            Ok(Limit {
                offset: Some(first),
                count,
            })
        } else if self.consume_word("OFFSET") {
            let offset = self.parse_limit_value()?;
            Ok(Limit {
                offset: Some(offset),
                count: first,
            })
        } else {
            Ok(Limit {
                offset: None,
                count: first,
            })
        }
    }

    fn parse_limit_value(&mut self) -> Result<LimitValue> {
        match self.kind() {
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance();
                Ok(LimitValue::Number(n))
            }
            TokenKind::Question => {
                self.advance();
                Ok(LimitValue::Parameter(self.tokens.next_param_index()))
            }
            _ => Err(self.error_expected("row count or '?'")),
        }
    }

    /// Parses `LIMIT ..` if present.
    pub(super) fn parse_optional_limit(&mut self) -> Result<Option<Limit>> {
        if self.consume_keyword(Keyword::Limit) {
            Ok(Some(self.parse_limit()?))
        } else {
            Ok(None)
        }
    }

    /// Splits the text of an `@@` token into scope and name.
    pub(super) fn system_variable(raw: &str) -> Expr {
        if let Some((prefix, name)) = raw.split_once('.') {
            if let Some(scope) = VariableScope::from_word(prefix) {
                return Expr::SystemVariable {
                    scope: Some(scope),
                    name: name.to_string(),
                };
            }
        }
        Expr::SystemVariable {
            scope: None,
            name: raw.to_string(),
        }
    }

    // ===================================================================
    // Verbatim capture
    // ===================================================================

    /// Consumes tokens up to the end of the statement, or up to a
    /// top-level token for which `stop` holds, and returns the source
    /// text they cover.
    pub(super) fn capture_until(&mut self, stop: impl Fn(&TokenKind) -> bool) -> String {
        let start = self.span().start;
        let mut end = start;
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => break,
                kind if depth == 0 && stop(kind) => break,
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            end = self.span().end;
            self.advance();
        }
        self.source_text(start, end)
    }

    /// Consumes a balanced `( .. )` group and returns its source text.
    pub(super) fn capture_parenthesized(&mut self) -> Result<String> {
        let start = self.expect(&TokenKind::LeftParen)?.span.start;
        let mut depth = 1usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return Err(self.error_expected("')'")),
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        let end = self.advance().span.end;
                        return Ok(self.source_text(start, end));
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn source_text(&self, start: usize, end: usize) -> String {
        self.tokens
            .source()
            .get(start..end)
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}
