//! Compound statements of stored-routine bodies.
//!
//! Blocks collect statements until their terminator word. `END` is not a
//! reserved word, so terminators are matched by text. Each nested
//! statement must be followed by `;`.

use super::{ParseError, Parser, Result};
use crate::ast::{
    Block, CaseStatement, ConditionItem, ConditionValue, ConditionalBranch, Declare,
    DiagnosticsArea, DiagnosticsInfo, Expr, Fetch, GetDiagnostics, HandlerAction, Identifier, If,
    Literal, Loop, Repeat, Signal, SignalItem, Statement, StatementInfoItem, While,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses statements up to (not including) one of the `terminators`.
    fn parse_statement_list(&mut self, terminators: &[&str]) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            if let Some(word) = self.current_word() {
                if terminators.contains(&word.as_str()) {
                    return Ok(statements);
                }
            }
            statements.push(self.parse_nested_statement()?);
            self.expect(&TokenKind::Semicolon)?;
        }
    }

    /// Consumes an optional closing label, which must repeat the opening
    /// one.
    fn parse_end_label(&mut self, label: Option<&Identifier>) -> Result<()> {
        let Some(closing) = Self::token_identifier(self.current()) else {
            return Ok(());
        };
        let span = self.span();
        match label {
            Some(opening) if opening.text.eq_ignore_ascii_case(&closing.text) => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::label_mismatch(
                label.map(|id| id.text.as_str()),
                &closing.text,
                span,
            )),
        }
    }

    /// `[label:] {BEGIN | LOOP | WHILE | REPEAT} .. END .. [label]`.
    pub(super) fn parse_labelled(&mut self, label: Option<Identifier>) -> Result<Statement> {
        if self.consume_word("BEGIN") {
            let statements = self.parse_statement_list(&["END"])?;
            self.expect_word("END")?;
            self.parse_end_label(label.as_ref())?;
            return Ok(Statement::Block(Block { label, statements }));
        }
        if self.consume_keyword(Keyword::Loop) {
            let statements = self.parse_statement_list(&["END"])?;
            self.expect_word("END")?;
            self.expect_keyword(Keyword::Loop)?;
            self.parse_end_label(label.as_ref())?;
            return Ok(Statement::Loop(Loop { label, statements }));
        }
        if self.consume_keyword(Keyword::While) {
            let condition = self.parse_expression()?;
            self.expect_word("DO")?;
            let statements = self.parse_statement_list(&["END"])?;
            self.expect_word("END")?;
            self.expect_keyword(Keyword::While)?;
            self.parse_end_label(label.as_ref())?;
            return Ok(Statement::While(While {
                label,
                condition,
                statements,
            }));
        }
        if self.consume_keyword(Keyword::Repeat) {
            let statements = self.parse_statement_list(&["UNTIL"])?;
            self.expect_word("UNTIL")?;
            let until = self.parse_expression()?;
            self.expect_word("END")?;
            self.expect_keyword(Keyword::Repeat)?;
            self.parse_end_label(label.as_ref())?;
            return Ok(Statement::Repeat(Repeat {
                label,
                statements,
                until,
            }));
        }
        Err(self.error_expected("BEGIN, LOOP, WHILE or REPEAT"))
    }

    pub(super) fn parse_if(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::If)?;
        let mut branches = vec![self.parse_conditional_branch(&["ELSEIF", "ELSE", "END"])?];
        while self.consume_keyword(Keyword::Elseif) {
            branches.push(self.parse_conditional_branch(&["ELSEIF", "ELSE", "END"])?);
        }
        let else_statements = if self.consume_keyword(Keyword::Else) {
            Some(self.parse_statement_list(&["END"])?)
        } else {
            None
        };
        self.expect_word("END")?;
        self.expect_keyword(Keyword::If)?;
        Ok(Statement::If(If {
            branches,
            else_statements,
        }))
    }

    /// `condition THEN statements`.
    fn parse_conditional_branch(&mut self, terminators: &[&str]) -> Result<ConditionalBranch> {
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Then)?;
        let statements = self.parse_statement_list(terminators)?;
        Ok(ConditionalBranch {
            condition,
            statements,
        })
    }

    pub(super) fn parse_case_statement(&mut self) -> Result<Statement> {
        let span = self.span();
        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let mut branches = Vec::new();
        while self.consume_keyword(Keyword::When) {
            branches.push(self.parse_conditional_branch(&["WHEN", "ELSE", "END"])?);
        }
        if branches.is_empty() {
            return Err(ParseError::empty_case(span.to(self.span())));
        }
        let else_statements = if self.consume_keyword(Keyword::Else) {
            Some(self.parse_statement_list(&["END"])?)
        } else {
            None
        };
        self.expect_word("END")?;
        self.expect_keyword(Keyword::Case)?;
        Ok(Statement::Case(CaseStatement {
            operand,
            branches,
            else_statements,
        }))
    }

    pub(super) fn parse_leave_iterate(&mut self) -> Result<Statement> {
        if self.consume_keyword(Keyword::Leave) {
            return Ok(Statement::Leave(self.expect_identifier()?));
        }
        self.expect_keyword(Keyword::Iterate)?;
        Ok(Statement::Iterate(self.expect_identifier()?))
    }

    pub(super) fn parse_return(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Return)?;
        Ok(Statement::Return(self.parse_expression()?))
    }

    // ===================================================================
    // DECLARE
    // ===================================================================

    pub(super) fn parse_declare(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Declare)?;

        let action = match self.current().as_keyword() {
            Some(Keyword::Continue) => Some(HandlerAction::Continue),
            Some(Keyword::Exit) => Some(HandlerAction::Exit),
            Some(Keyword::Undo) => Some(HandlerAction::Undo),
            _ => None,
        };
        if let Some(action) = action {
            self.advance();
            self.expect_word("HANDLER")?;
            self.expect_keyword(Keyword::For)?;
            let conditions = self.parse_comma_separated(Self::parse_condition_value)?;
            let body = self.parse_nested_statement()?;
            return Ok(Statement::Declare(Declare::Handler {
                action,
                conditions,
                body: Box::new(body),
            }));
        }

        let name = self.expect_identifier()?;
        if self.consume_keyword(Keyword::Condition) {
            self.expect_keyword(Keyword::For)?;
            let value = match self.kind() {
                TokenKind::Integer(code) => {
                    let code = *code;
                    self.advance();
                    ConditionValue::ErrorCode(code)
                }
                _ => ConditionValue::SqlState(self.parse_sqlstate()?),
            };
            return Ok(Statement::Declare(Declare::Condition { name, value }));
        }
        if self.consume_keyword(Keyword::Cursor) {
            self.expect_keyword(Keyword::For)?;
            let query = self.parse_query()?;
            return Ok(Statement::Declare(Declare::Cursor {
                name,
                query: Box::new(query),
            }));
        }

        let mut names = vec![name];
        while self.consume(&TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }
        let data_type = self.parse_data_type()?;
        let default = if self.consume_keyword(Keyword::Default) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Statement::Declare(Declare::Variables {
            names,
            data_type,
            default,
        }))
    }

    /// `SQLSTATE [VALUE] 'xxxxx'`.
    fn parse_sqlstate(&mut self) -> Result<String> {
        self.expect_keyword(Keyword::Sqlstate)?;
        self.consume_word("VALUE");
        self.parse_string()
    }

    fn parse_condition_value(&mut self) -> Result<ConditionValue> {
        if let TokenKind::Integer(code) = self.kind() {
            let code = *code;
            self.advance();
            return Ok(ConditionValue::ErrorCode(code));
        }
        if self.check_keyword(Keyword::Sqlstate) {
            return Ok(ConditionValue::SqlState(self.parse_sqlstate()?));
        }
        if self.consume_keyword(Keyword::Sqlwarning) {
            return Ok(ConditionValue::SqlWarning);
        }
        if self.consume_keyword(Keyword::Sqlexception) {
            return Ok(ConditionValue::SqlException);
        }
        if self.consume_keyword(Keyword::Not) {
            self.expect_word("FOUND")?;
            return Ok(ConditionValue::NotFound);
        }
        match Self::token_identifier(self.current()) {
            Some(name) => {
                self.advance();
                Ok(ConditionValue::Name(name))
            }
            None => Err(self.error_expected("condition value")),
        }
    }

    // ===================================================================
    // SIGNAL / RESIGNAL / GET DIAGNOSTICS
    // ===================================================================

    pub(super) fn parse_signal(&mut self) -> Result<Statement> {
        let resignal = self.consume_keyword(Keyword::Resignal);
        if !resignal {
            self.expect_keyword(Keyword::Signal)?;
        }

        let at_end = self.at_statement_end() || self.check_keyword(Keyword::Set);
        let condition = if at_end {
            if !resignal {
                return Err(self.error_expected("SQLSTATE or condition name"));
            }
            None
        } else {
            Some(self.parse_condition_value()?)
        };

        let items = if self.consume_keyword(Keyword::Set) {
            self.parse_comma_separated(|p| {
                let item = p.parse_condition_item()?;
                p.expect(&TokenKind::Eq)?;
                let value = p.parse_signal_value()?;
                Ok(SignalItem { item, value })
            })?
        } else {
            Vec::new()
        };
        Ok(Statement::Signal(Signal {
            resignal,
            condition,
            items,
        }))
    }

    fn parse_condition_item(&mut self) -> Result<ConditionItem> {
        let span = self.span();
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("condition information item"))?;
        let item = ConditionItem::from_word(&word).ok_or_else(|| {
            ParseError::unknown_word("condition information item", &word, span)
        })?;
        self.advance();
        Ok(item)
    }

    fn parse_signal_value(&mut self) -> Result<Literal> {
        let span = self.span();
        match self.parse_expression()? {
            Expr::Literal(literal) => Ok(literal),
            _ => Err(ParseError::new("SIGNAL items require a literal value", span)),
        }
    }

    pub(super) fn parse_get_diagnostics(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Get)?;
        let area = if self.consume_word("CURRENT") {
            Some(DiagnosticsArea::Current)
        } else if self.consume_word("STACKED") {
            Some(DiagnosticsArea::Stacked)
        } else {
            None
        };
        self.expect_word("DIAGNOSTICS")?;

        let info = if self.consume_keyword(Keyword::Condition) {
            let number = self.parse_expression()?;
            let items = self.parse_comma_separated(|p| {
                let target = p.parse_diagnostics_target()?;
                p.expect(&TokenKind::Eq)?;
                Ok((target, p.parse_condition_item()?))
            })?;
            DiagnosticsInfo::Condition { number, items }
        } else {
            let items = self.parse_comma_separated(|p| {
                let target = p.parse_diagnostics_target()?;
                p.expect(&TokenKind::Eq)?;
                let item = if p.consume_word("NUMBER") {
                    StatementInfoItem::Number
                } else if p.consume_word("ROW_COUNT") {
                    StatementInfoItem::RowCount
                } else {
                    return Err(p.error_expected("NUMBER or ROW_COUNT"));
                };
                Ok((target, item))
            })?;
            DiagnosticsInfo::Statement(items)
        };
        Ok(Statement::GetDiagnostics(GetDiagnostics { area, info }))
    }

    /// A local or user variable receiving a diagnostics item.
    fn parse_diagnostics_target(&mut self) -> Result<Expr> {
        if let TokenKind::UserVariable(name) = self.kind() {
            let name = name.clone();
            self.advance();
            return Ok(Expr::UserVariable(name));
        }
        Ok(Expr::Identifier(self.expect_identifier()?))
    }

    // ===================================================================
    // Cursors
    // ===================================================================

    pub(super) fn parse_fetch(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Fetch)?;
        if self.consume_word("NEXT") {
            self.expect_keyword(Keyword::From)?;
        } else {
            self.consume_keyword(Keyword::From);
        }
        let cursor = self.expect_identifier()?;
        self.expect_keyword(Keyword::Into)?;
        let targets = self.parse_comma_separated(Self::expect_identifier)?;
        Ok(Statement::Fetch(Fetch { cursor, targets }))
    }

    pub(super) fn parse_open_close(&mut self) -> Result<Statement> {
        if self.consume_word("OPEN") {
            return Ok(Statement::Open(self.expect_identifier()?));
        }
        self.expect_word("CLOSE")?;
        Ok(Statement::Close(self.expect_identifier()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    fn parse_err(sql: &str) -> ParseError {
        Parser::new(sql).parse_statement().unwrap_err()
    }

    #[test]
    fn test_label_matching() {
        let Statement::Block(block) = parse("lbl: BEGIN SELECT 1; END lbl") else {
            panic!("expected block");
        };
        assert_eq!(block.label, Some(Identifier::new("lbl")));
        assert_eq!(block.statements.len(), 1);

        parse("lbl: BEGIN SELECT 1; END");

        let err = parse_err("lbl: BEGIN SELECT 1; END lbl2");
        assert_eq!(err.message, "End label lbl2 does not match begin label lbl");

        let err = parse_err("BEGIN SELECT 1; END lbl");
        assert_eq!(err.message, "End label lbl without matching begin label");
    }

    #[test]
    fn test_loops() {
        let Statement::While(w) = parse("w: WHILE i < 10 DO SET i = i + 1; END WHILE w") else {
            panic!("expected WHILE");
        };
        assert_eq!(w.statements.len(), 1);

        let Statement::Repeat(r) = parse("REPEAT FETCH c INTO x; UNTIL done END REPEAT") else {
            panic!("expected REPEAT");
        };
        assert_eq!(r.until, Expr::Identifier(Identifier::new("done")));

        let Statement::Loop(l) = parse("l: LOOP LEAVE l; END LOOP l") else {
            panic!("expected LOOP");
        };
        assert_eq!(l.statements, vec![Statement::Leave(Identifier::new("l"))]);
    }

    #[test]
    fn test_wrong_terminator() {
        assert!(Parser::new("WHILE 1 DO SELECT 1; END LOOP")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_if_branches() {
        let Statement::If(stmt) = parse(
            "IF a THEN SELECT 1; ELSEIF b THEN SELECT 2; SELECT 3; ELSE SELECT 4; END IF",
        ) else {
            panic!("expected IF");
        };
        assert_eq!(stmt.branches.len(), 2);
        assert_eq!(stmt.branches[1].statements.len(), 2);
        assert_eq!(stmt.else_statements.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_case_statement() {
        let Statement::Case(stmt) =
            parse("CASE x WHEN 1 THEN SELECT 'a'; ELSE SELECT 'b'; END CASE")
        else {
            panic!("expected CASE");
        };
        assert!(stmt.operand.is_some());
        assert_eq!(stmt.branches.len(), 1);

        let err = parse_err("CASE x ELSE SELECT 1; END CASE");
        assert_eq!(err.message, "CASE requires at least one WHEN branch");
    }

    #[test]
    fn test_declare_forms() {
        assert!(matches!(
            parse("DECLARE a, b INT DEFAULT 0"),
            Statement::Declare(Declare::Variables { ref names, default: Some(_), .. }) if names.len() == 2
        ));
        assert!(matches!(
            parse("DECLARE no_table CONDITION FOR SQLSTATE '42S02'"),
            Statement::Declare(Declare::Condition {
                value: ConditionValue::SqlState(_),
                ..
            })
        ));
        assert!(matches!(
            parse("DECLARE cur CURSOR FOR SELECT id FROM t"),
            Statement::Declare(Declare::Cursor { .. })
        ));
        let Statement::Declare(Declare::Handler {
            action, conditions, ..
        }) = parse("DECLARE CONTINUE HANDLER FOR NOT FOUND, 1062 SET done = 1")
        else {
            panic!("expected handler");
        };
        assert_eq!(action, HandlerAction::Continue);
        assert_eq!(
            conditions,
            vec![ConditionValue::NotFound, ConditionValue::ErrorCode(1062)]
        );
    }

    #[test]
    fn test_signal_items() {
        let Statement::Signal(signal) =
            parse("SIGNAL SQLSTATE '45000' SET MESSAGE_TEXT = 'bad', MYSQL_ERRNO = 1644")
        else {
            panic!("expected SIGNAL");
        };
        assert_eq!(signal.items.len(), 2);
        assert_eq!(signal.items[1].item, ConditionItem::MysqlErrno);

        let err = parse_err("SIGNAL SQLSTATE '45000' SET FROBNICATE = 1");
        assert_eq!(
            err.message,
            "Unknown condition information item: FROBNICATE"
        );
        assert!(Parser::new("SIGNAL SQLSTATE '45000' SET MESSAGE_TEXT = CONCAT('a', 'b')")
            .parse_statement()
            .is_err());
        assert!(Parser::new("SIGNAL").parse_statement().is_err());
        parse("RESIGNAL");
    }

    #[test]
    fn test_get_diagnostics() {
        let Statement::GetDiagnostics(diag) =
            parse("GET STACKED DIAGNOSTICS CONDITION 1 @msg = MESSAGE_TEXT, code = MYSQL_ERRNO")
        else {
            panic!("expected GET DIAGNOSTICS");
        };
        assert_eq!(diag.area, Some(DiagnosticsArea::Stacked));
        assert!(matches!(diag.info, DiagnosticsInfo::Condition { ref items, .. } if items.len() == 2));

        let Statement::GetDiagnostics(diag) = parse("GET DIAGNOSTICS @n = NUMBER") else {
            panic!("expected GET DIAGNOSTICS");
        };
        assert_eq!(
            diag.info,
            DiagnosticsInfo::Statement(vec![(
                Expr::UserVariable(String::from("n")),
                StatementInfoItem::Number
            )])
        );
    }

    #[test]
    fn test_cursor_statements() {
        assert_eq!(
            parse("FETCH NEXT FROM cur INTO a, b"),
            Statement::Fetch(Fetch {
                cursor: Identifier::new("cur"),
                targets: vec![Identifier::new("a"), Identifier::new("b")],
            })
        );
        assert_eq!(parse("OPEN cur"), Statement::Open(Identifier::new("cur")));
        assert_eq!(parse("CLOSE cur"), Statement::Close(Identifier::new("cur")));
    }
}
