//! Transaction control and prepared statements.

use super::{ParseError, Parser, Result};
use crate::ast::{
    Completion, CompletionType, Deallocate, Execute, Prepare, PrepareSource, Statement,
    TransactionMode,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_start_transaction(&mut self) -> Result<Statement> {
        self.expect_word("START")?;
        self.expect_word("TRANSACTION")?;
        if self.at_statement_end() {
            return Ok(Statement::StartTransaction(Vec::new()));
        }
        let modes = self.parse_comma_separated(|p| {
            if p.consume_keyword(Keyword::With) {
                p.expect_word("CONSISTENT")?;
                p.expect_word("SNAPSHOT")?;
                return Ok(TransactionMode::WithConsistentSnapshot);
            }
            p.expect_keyword(Keyword::Read)?;
            if p.consume_keyword(Keyword::Write) {
                Ok(TransactionMode::ReadWrite)
            } else {
                p.expect_word("ONLY")?;
                Ok(TransactionMode::ReadOnly)
            }
        })?;
        Ok(Statement::StartTransaction(modes))
    }

    /// `BEGIN [WORK]` ends the statement; any other `BEGIN` opens a block.
    pub(super) fn parse_begin(&mut self) -> Result<Statement> {
        self.expect_word("BEGIN")?;
        let work = self.consume_word("WORK");
        if work || self.at_statement_end() {
            return Ok(Statement::Begin { work });
        }
        self.tokens.push_back();
        self.parse_labelled(None)
    }

    pub(super) fn parse_commit(&mut self) -> Result<Statement> {
        self.expect_word("COMMIT")?;
        let work = self.consume_word("WORK");
        Ok(Statement::Commit(self.parse_completion(work)?))
    }

    pub(super) fn parse_rollback(&mut self) -> Result<Statement> {
        self.expect_word("ROLLBACK")?;
        let work = self.consume_word("WORK");
        if self.consume_keyword(Keyword::To) {
            self.consume_word("SAVEPOINT");
            let name = self.expect_identifier()?;
            return Ok(Statement::RollbackToSavepoint { work, name });
        }
        Ok(Statement::Rollback(self.parse_completion(work)?))
    }

    /// `[AND [NO] CHAIN] [[NO] RELEASE]`.
    fn parse_completion(&mut self, work: bool) -> Result<Completion> {
        let span = self.span();
        let chain = if self.consume_keyword(Keyword::And) {
            let no = self.consume_word("NO");
            self.expect_word("CHAIN")?;
            Some(!no)
        } else {
            None
        };
        let release = if self.consume_keyword(Keyword::Release) {
            Some(true)
        } else if self.consume_word("NO") {
            self.expect_keyword(Keyword::Release)?;
            Some(false)
        } else {
            None
        };

        let completion = match (chain, release) {
            (None, None) => CompletionType::Default,
            (Some(true), None) => CompletionType::Chain,
            (Some(true), Some(false)) => CompletionType::ChainNoRelease,
            (Some(true), Some(true)) => {
                return Err(ParseError::new(
                    "AND CHAIN cannot be combined with RELEASE",
                    span.to(self.span()),
                ));
            }
            (Some(false), None) => CompletionType::NoChain,
            (Some(false), Some(true)) => CompletionType::NoChainRelease,
            (Some(false), Some(false)) => CompletionType::NoChainNoRelease,
            (None, Some(true)) => CompletionType::Release,
            (None, Some(false)) => CompletionType::NoRelease,
        };
        Ok(Completion { work, completion })
    }

    pub(super) fn parse_savepoint(&mut self) -> Result<Statement> {
        self.expect_word("SAVEPOINT")?;
        Ok(Statement::Savepoint(self.expect_identifier()?))
    }

    pub(super) fn parse_release_savepoint(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Release)?;
        self.expect_word("SAVEPOINT")?;
        Ok(Statement::ReleaseSavepoint(self.expect_identifier()?))
    }

    // ===================================================================
    // Prepared statements
    // ===================================================================

    pub(super) fn parse_prepare(&mut self) -> Result<Statement> {
        self.expect_word("PREPARE")?;
        let name = self.expect_identifier()?;
        self.expect_keyword(Keyword::From)?;
        let source = match self.kind() {
            TokenKind::UserVariable(var) => {
                let var = var.clone();
                self.advance();
                PrepareSource::Variable(var)
            }
            _ => PrepareSource::Text(self.parse_string()?),
        };
        Ok(Statement::Prepare(Prepare { name, source }))
    }

    pub(super) fn parse_execute(&mut self) -> Result<Statement> {
        self.expect_word("EXECUTE")?;
        let name = self.expect_identifier()?;
        let using = if self.consume_keyword(Keyword::Using) {
            self.parse_expression_list()?
        } else {
            Vec::new()
        };
        Ok(Statement::Execute(Execute { name, using }))
    }

    /// `DEALLOCATE [PREPARE] name`. The DROP spelling is handled with the
    /// other DROP statements.
    pub(super) fn parse_deallocate(&mut self) -> Result<Statement> {
        self.expect_word("DEALLOCATE")?;
        self.consume_word("PREPARE");
        let name = self.expect_identifier()?;
        Ok(Statement::Deallocate(Deallocate { drop: false, name }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Identifier};

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    fn completion(sql: &str) -> CompletionType {
        match parse(sql) {
            Statement::Commit(c) | Statement::Rollback(c) => c.completion,
            other => panic!("expected COMMIT or ROLLBACK, got {other:?}"),
        }
    }

    #[test]
    fn test_completion_combinations() {
        assert_eq!(completion("COMMIT"), CompletionType::Default);
        assert_eq!(completion("COMMIT AND CHAIN"), CompletionType::Chain);
        assert_eq!(
            completion("COMMIT WORK AND CHAIN NO RELEASE"),
            CompletionType::ChainNoRelease
        );
        assert_eq!(
            completion("ROLLBACK AND NO CHAIN RELEASE"),
            CompletionType::NoChainRelease
        );
        assert_eq!(completion("ROLLBACK NO RELEASE"), CompletionType::NoRelease);
        assert!(Parser::new("COMMIT AND CHAIN RELEASE")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_begin_statement_or_block() {
        assert_eq!(parse("BEGIN"), Statement::Begin { work: false });
        assert_eq!(parse("BEGIN WORK;"), Statement::Begin { work: true });
        assert!(matches!(parse("BEGIN SELECT 1; END"), Statement::Block(_)));
    }

    #[test]
    fn test_savepoints() {
        assert_eq!(
            parse("ROLLBACK WORK TO SAVEPOINT sp"),
            Statement::RollbackToSavepoint {
                work: true,
                name: Identifier::new("sp"),
            }
        );
        assert_eq!(
            parse("RELEASE SAVEPOINT sp"),
            Statement::ReleaseSavepoint(Identifier::new("sp"))
        );
    }

    #[test]
    fn test_start_transaction_modes() {
        assert_eq!(
            parse("START TRANSACTION WITH CONSISTENT SNAPSHOT, READ ONLY"),
            Statement::StartTransaction(vec![
                TransactionMode::WithConsistentSnapshot,
                TransactionMode::ReadOnly,
            ])
        );
    }

    #[test]
    fn test_prepared_statements() {
        assert_eq!(
            parse("PREPARE s FROM 'SELECT ?'"),
            Statement::Prepare(Prepare {
                name: Identifier::new("s"),
                source: PrepareSource::Text(String::from("SELECT ?")),
            })
        );
        assert_eq!(
            parse("EXECUTE s USING @a, @b"),
            Statement::Execute(Execute {
                name: Identifier::new("s"),
                using: vec![
                    Expr::UserVariable(String::from("a")),
                    Expr::UserVariable(String::from("b")),
                ],
            })
        );
        assert_eq!(
            parse("DEALLOCATE PREPARE s"),
            Statement::Deallocate(Deallocate {
                drop: false,
                name: Identifier::new("s"),
            })
        );
    }
}
