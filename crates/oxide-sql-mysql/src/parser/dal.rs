//! SHOW, SET, EXPLAIN / DESCRIBE and USE.

use super::{ParseError, Parser, Result};
use crate::ast::{
    Describe, DescribeColumn, Explain, ExplainFormat, Expr, Identifier, IsolationLevel,
    ProfileType, Set, SetVariable, Show, ShowCreateKind, ShowFilter, Statement,
    TransactionCharacteristic, VariableScope,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    // ===================================================================
    // SHOW
    // ===================================================================

    pub(super) fn parse_show(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Show)?;
        let span = self.span();
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("SHOW target"))?;
        self.advance();

        let show = match word.as_str() {
            "AUTHORS" => Show::Authors,
            "CONTRIBUTORS" => Show::Contributors,
            "PLUGINS" => Show::Plugins,
            "PRIVILEGES" => Show::Privileges,
            "PROFILES" => Show::Profiles,
            "ENGINES" => Show::Engines,
            "STORAGE" => {
                self.expect_word("ENGINES")?;
                Show::Engines
            }
            "BINARY" => {
                self.expect_word("LOGS")?;
                Show::BinaryLogs
            }
            "MASTER" => {
                if self.consume_word("LOGS") {
                    Show::BinaryLogs
                } else {
                    self.expect_word("STATUS")?;
                    Show::MasterStatus
                }
            }
            "BINLOG" => self.parse_show_binlog_events()?,
            "CHARACTER" => {
                self.expect_keyword(Keyword::Set)?;
                Show::CharacterSet(self.parse_show_filter()?)
            }
            "CHARSET" => Show::CharacterSet(self.parse_show_filter()?),
            "COLLATION" => Show::Collation(self.parse_show_filter()?),
            "DATABASES" | "SCHEMAS" => Show::Databases(self.parse_show_filter()?),
            "FULL" => {
                let word = self
                    .current_word()
                    .ok_or_else(|| self.error_expected("COLUMNS, TABLES or PROCESSLIST"))?;
                self.advance();
                match word.as_str() {
                    "COLUMNS" | "FIELDS" => self.parse_show_columns(true)?,
                    "TABLES" => self.parse_show_tables(true)?,
                    "PROCESSLIST" => Show::Processlist { full: true },
                    _ => return Err(ParseError::unknown_word("SHOW FULL target", &word, span)),
                }
            }
            "COLUMNS" | "FIELDS" => self.parse_show_columns(false)?,
            "TABLES" => self.parse_show_tables(false)?,
            "PROCESSLIST" => Show::Processlist { full: false },
            "CREATE" => self.parse_show_create()?,
            "ENGINE" => {
                let name = self.parse_option_identifier()?;
                let mutex = if self.consume_word("MUTEX") {
                    true
                } else {
                    self.expect_word("STATUS")?;
                    false
                };
                Show::Engine { name, mutex }
            }
            "ERRORS" => Show::Errors(self.parse_optional_limit()?),
            "WARNINGS" => Show::Warnings(self.parse_optional_limit()?),
            "COUNT" => {
                self.expect(&TokenKind::LeftParen)?;
                self.expect(&TokenKind::Star)?;
                self.expect(&TokenKind::RightParen)?;
                if self.consume_word("ERRORS") {
                    Show::ErrorCount
                } else {
                    self.expect_word("WARNINGS")?;
                    Show::WarningCount
                }
            }
            "EVENTS" => Show::Events {
                database: self.parse_show_database()?,
                filter: self.parse_show_filter()?,
            },
            "FUNCTION" | "PROCEDURE" => {
                let function = word == "FUNCTION";
                if self.consume_word("CODE") {
                    let name = self.parse_qualified_identifier()?;
                    if function {
                        Show::FunctionCode(name)
                    } else {
                        Show::ProcedureCode(name)
                    }
                } else {
                    self.expect_word("STATUS")?;
                    let filter = self.parse_show_filter()?;
                    if function {
                        Show::FunctionStatus(filter)
                    } else {
                        Show::ProcedureStatus(filter)
                    }
                }
            }
            "GRANTS" => {
                let user = if self.consume_keyword(Keyword::For) {
                    Some(self.parse_user()?)
                } else {
                    None
                };
                Show::Grants(user)
            }
            "INDEX" | "INDEXES" | "KEYS" => {
                let table = self.parse_show_table_name()?;
                let database = self.parse_show_database()?;
                let filter = if self.consume_keyword(Keyword::Where) {
                    Some(self.parse_expression()?)
                } else {
                    None
                };
                Show::Index {
                    table,
                    database,
                    filter,
                }
            }
            "OPEN" => {
                self.expect_word("TABLES")?;
                Show::OpenTables {
                    database: self.parse_show_database()?,
                    filter: self.parse_show_filter()?,
                }
            }
            "PROFILE" => self.parse_show_profile()?,
            "SLAVE" => {
                if self.consume_word("HOSTS") {
                    Show::SlaveHosts
                } else {
                    self.expect_word("STATUS")?;
                    Show::SlaveStatus
                }
            }
            "GLOBAL" | "SESSION" | "LOCAL" => {
                let scope = VariableScope::from_word(&word);
                if self.consume_word("STATUS") {
                    Show::Status {
                        scope,
                        filter: self.parse_show_filter()?,
                    }
                } else {
                    self.expect_word("VARIABLES")?;
                    Show::Variables {
                        scope,
                        filter: self.parse_show_filter()?,
                    }
                }
            }
            "STATUS" => Show::Status {
                scope: None,
                filter: self.parse_show_filter()?,
            },
            "VARIABLES" => Show::Variables {
                scope: None,
                filter: self.parse_show_filter()?,
            },
            "TABLE" => {
                self.expect_word("STATUS")?;
                Show::TableStatus {
                    database: self.parse_show_database()?,
                    filter: self.parse_show_filter()?,
                }
            }
            "TRIGGERS" => Show::Triggers {
                database: self.parse_show_database()?,
                filter: self.parse_show_filter()?,
            },
            other => return Err(ParseError::unknown_word("SHOW target", other, span)),
        };
        Ok(Statement::Show(show))
    }

    /// The `[LIKE 'pattern' | WHERE expr]` tail shared by most SHOW forms.
    fn parse_show_filter(&mut self) -> Result<Option<ShowFilter>> {
        if self.consume_keyword(Keyword::Like) {
            return Ok(Some(ShowFilter::Like(self.parse_string()?)));
        }
        if self.consume_keyword(Keyword::Where) {
            return Ok(Some(ShowFilter::Where(self.parse_expression()?)));
        }
        Ok(None)
    }

    /// `{FROM | IN} db`, if present.
    fn parse_show_database(&mut self) -> Result<Option<Identifier>> {
        if self.consume_keyword(Keyword::From) || self.consume_keyword(Keyword::In) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// `{FROM | IN} table`.
    fn parse_show_table_name(&mut self) -> Result<Identifier> {
        if !self.consume_keyword(Keyword::From) {
            self.expect_keyword(Keyword::In)?;
        }
        self.parse_qualified_identifier()
    }

    fn parse_show_columns(&mut self, full: bool) -> Result<Show> {
        let table = self.parse_show_table_name()?;
        let database = self.parse_show_database()?;
        let filter = self.parse_show_filter()?;
        Ok(Show::Columns {
            full,
            table,
            database,
            filter,
        })
    }

    fn parse_show_tables(&mut self, full: bool) -> Result<Show> {
        Ok(Show::Tables {
            full,
            database: self.parse_show_database()?,
            filter: self.parse_show_filter()?,
        })
    }

    fn parse_show_create(&mut self) -> Result<Show> {
        let span = self.span();
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("object kind"))?;
        let kind = match word.as_str() {
            "DATABASE" | "SCHEMA" => ShowCreateKind::Database,
            "EVENT" => ShowCreateKind::Event,
            "FUNCTION" => ShowCreateKind::Function,
            "PROCEDURE" => ShowCreateKind::Procedure,
            "TABLE" => ShowCreateKind::Table,
            "TRIGGER" => ShowCreateKind::Trigger,
            "VIEW" => ShowCreateKind::View,
            other => return Err(ParseError::unknown_word("SHOW CREATE target", other, span)),
        };
        self.advance();
        let if_not_exists = kind == ShowCreateKind::Database && self.parse_if_not_exists()?;
        let name = self.parse_qualified_identifier()?;
        Ok(Show::Create {
            kind,
            if_not_exists,
            name,
        })
    }

    fn parse_show_binlog_events(&mut self) -> Result<Show> {
        self.expect_word("EVENTS")?;
        let log_name = if self.consume_keyword(Keyword::In) {
            Some(self.parse_string()?)
        } else {
            None
        };
        let position = if self.consume_keyword(Keyword::From) {
            Some(self.parse_u64()?)
        } else {
            None
        };
        let limit = self.parse_optional_limit()?;
        Ok(Show::BinlogEvents {
            log_name,
            position,
            limit,
        })
    }

    fn parse_show_profile(&mut self) -> Result<Show> {
        let mut types = Vec::new();
        if !self.check_keyword(Keyword::For)
            && !self.check_keyword(Keyword::Limit)
            && !self.at_statement_end()
        {
            types = self.parse_comma_separated(Self::parse_profile_type)?;
        }
        let query = if self.consume_keyword(Keyword::For) {
            self.expect_word("QUERY")?;
            Some(self.parse_u64()?)
        } else {
            None
        };
        let limit = self.parse_optional_limit()?;
        Ok(Show::Profile {
            types,
            query,
            limit,
        })
    }

    fn parse_profile_type(&mut self) -> Result<ProfileType> {
        let span = self.span();
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("profile type"))?;
        self.advance();
        let profile_type = match word.as_str() {
            "ALL" => ProfileType::All,
            "BLOCK" => {
                self.expect_word("IO")?;
                ProfileType::BlockIo
            }
            "CONTEXT" => {
                self.expect_word("SWITCHES")?;
                ProfileType::ContextSwitches
            }
            "CPU" => ProfileType::Cpu,
            "IPC" => ProfileType::Ipc,
            "MEMORY" => ProfileType::Memory,
            "PAGE" => {
                self.expect_word("FAULTS")?;
                ProfileType::PageFaults
            }
            "SOURCE" => ProfileType::Source,
            "SWAPS" => ProfileType::Swaps,
            other => return Err(ParseError::unknown_word("profile type", other, span)),
        };
        Ok(profile_type)
    }

    // ===================================================================
    // SET
    // ===================================================================

    pub(super) fn parse_set(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Set)?;

        match self.current_word().as_deref() {
            Some("NAMES") => {
                self.advance();
                let charset = if self.consume_keyword(Keyword::Default) {
                    None
                } else {
                    Some(self.parse_name_text()?)
                };
                let collation = if self.consume_keyword(Keyword::Collate) {
                    Some(self.parse_name_text()?)
                } else {
                    None
                };
                return Ok(Statement::Set(Set::Names { charset, collation }));
            }
            Some("CHARACTER") => {
                self.advance();
                self.expect_keyword(Keyword::Set)?;
                return Ok(Statement::Set(Set::CharacterSet(self.parse_set_charset()?)));
            }
            Some("CHARSET") => {
                self.advance();
                if !self.at_assignment() {
                    return Ok(Statement::Set(Set::CharacterSet(self.parse_set_charset()?)));
                }
                self.tokens.push_back();
            }
            Some("TRANSACTION") => {
                self.advance();
                return self.parse_set_transaction(None);
            }
            Some(word @ ("GLOBAL" | "SESSION" | "LOCAL")) => {
                let scope = VariableScope::from_word(word);
                self.advance();
                if self.consume_word("TRANSACTION") {
                    return self.parse_set_transaction(scope);
                }
                self.tokens.push_back();
            }
            _ => {}
        }

        let variables = self.parse_comma_separated(Self::parse_set_variable)?;
        Ok(Statement::Set(Set::Variables(variables)))
    }

    fn at_assignment(&self) -> bool {
        matches!(self.kind(), TokenKind::Eq | TokenKind::Assign)
    }

    fn parse_set_charset(&mut self) -> Result<Option<String>> {
        if self.consume_keyword(Keyword::Default) {
            Ok(None)
        } else {
            self.parse_name_text().map(Some)
        }
    }

    fn parse_set_transaction(&mut self, scope: Option<VariableScope>) -> Result<Statement> {
        let characteristics = self.parse_comma_separated(|p| {
            if p.consume_word("ISOLATION") {
                p.expect_word("LEVEL")?;
                return Ok(TransactionCharacteristic::IsolationLevel(
                    p.parse_isolation_level()?,
                ));
            }
            p.expect_keyword(Keyword::Read)?;
            if p.consume_keyword(Keyword::Write) {
                Ok(TransactionCharacteristic::ReadWrite)
            } else {
                p.expect_word("ONLY")?;
                Ok(TransactionCharacteristic::ReadOnly)
            }
        })?;
        Ok(Statement::Set(Set::Transaction {
            scope,
            characteristics,
        }))
    }

    fn parse_isolation_level(&mut self) -> Result<IsolationLevel> {
        if self.consume_keyword(Keyword::Read) {
            if self.consume_word("UNCOMMITTED") {
                return Ok(IsolationLevel::ReadUncommitted);
            }
            self.expect_word("COMMITTED")?;
            return Ok(IsolationLevel::ReadCommitted);
        }
        if self.consume_word("REPEATABLE") {
            self.expect_keyword(Keyword::Read)?;
            return Ok(IsolationLevel::RepeatableRead);
        }
        if self.consume_word("SERIALIZABLE") {
            return Ok(IsolationLevel::Serializable);
        }
        Err(self.error_expected("isolation level"))
    }

    /// `[scope] target {= | :=} value`. A scope word applies to the target
    /// that directly follows it.
    fn parse_set_variable(&mut self) -> Result<SetVariable> {
        let target = match self.kind().clone() {
            TokenKind::UserVariable(name) => {
                self.advance();
                Expr::UserVariable(name)
            }
            TokenKind::SystemVariable(raw) => {
                self.advance();
                Self::system_variable(&raw)
            }
            _ => {
                let scope = self
                    .current_word()
                    .as_deref()
                    .and_then(VariableScope::from_word);
                if let Some(scope) = scope {
                    self.advance();
                    if self.at_assignment() {
                        // a variable literally named GLOBAL, SESSION or LOCAL
                        self.tokens.push_back();
                        Expr::Identifier(self.parse_qualified_identifier()?)
                    } else {
                        Expr::SystemVariable {
                            scope: Some(scope),
                            name: self.parse_variable_name()?,
                        }
                    }
                } else {
                    // also covers NEW.col and OLD.col in trigger bodies
                    Expr::Identifier(self.parse_qualified_identifier()?)
                }
            }
        };

        if !self.consume(&TokenKind::Eq) {
            self.expect(&TokenKind::Assign)?;
        }
        let value = self.parse_set_value()?;
        Ok(SetVariable { target, value })
    }

    /// Dotted variable name, reserved words allowed.
    fn parse_variable_name(&mut self) -> Result<String> {
        let mut name = self.parse_name_text()?;
        while self.consume(&TokenKind::Dot) {
            name.push('.');
            name.push_str(&self.expect_name_after_dot()?.text);
        }
        Ok(name)
    }

    /// `ON` is accepted as a value word, as in `SET autocommit = ON`.
    fn parse_set_value(&mut self) -> Result<Expr> {
        if self.consume_keyword(Keyword::On) {
            return Ok(Expr::Identifier(Identifier::new("ON")));
        }
        self.parse_expression()
    }

    // ===================================================================
    // EXPLAIN / DESCRIBE / USE
    // ===================================================================

    pub(super) fn parse_explain(&mut self) -> Result<Statement> {
        self.advance();

        let format = if self.consume_word("EXTENDED") {
            Some(ExplainFormat::Extended)
        } else if self.consume_word("PARTITIONS") {
            Some(ExplainFormat::Partitions)
        } else if self.consume_word("FORMAT") {
            self.expect(&TokenKind::Eq)?;
            let format = match self.current_word().as_deref() {
                Some("TRADITIONAL") => ExplainFormat::Traditional,
                Some("JSON") => ExplainFormat::Json,
                _ => return Err(self.error_expected("TRADITIONAL or JSON")),
            };
            self.advance();
            Some(format)
        } else {
            None
        };

        let explainable = self.check(&TokenKind::LeftParen)
            || matches!(
                self.current().as_keyword(),
                Some(
                    Keyword::Select
                        | Keyword::Insert
                        | Keyword::Replace
                        | Keyword::Update
                        | Keyword::Delete
                )
            );
        if explainable {
            let statement = self.parse_nested_statement()?;
            return Ok(Statement::Explain(Explain {
                format,
                statement: Box::new(statement),
            }));
        }
        if format.is_some() {
            return Err(self.error_expected("SELECT, INSERT, REPLACE, UPDATE or DELETE"));
        }

        let table = self.parse_qualified_identifier()?;
        let column = match self.kind() {
            TokenKind::String(pattern) => {
                let pattern = pattern.clone();
                self.advance();
                Some(DescribeColumn::Pattern(pattern))
            }
            _ => match Self::token_identifier(self.current()) {
                Some(name) => {
                    self.advance();
                    Some(DescribeColumn::Name(name))
                }
                None => None,
            },
        };
        Ok(Statement::Describe(Describe { table, column }))
    }

    pub(super) fn parse_use(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Use)?;
        Ok(Statement::Use(self.expect_identifier()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    fn show(sql: &str) -> Show {
        match parse(sql) {
            Statement::Show(show) => show,
            other => panic!("expected SHOW, got {other:?}"),
        }
    }

    #[test]
    fn test_show_filters() {
        assert_eq!(
            show("SHOW DATABASES LIKE 'app%'"),
            Show::Databases(Some(ShowFilter::Like(String::from("app%"))))
        );
        assert!(matches!(
            show("SHOW FULL TABLES FROM db WHERE Table_type = 'VIEW'"),
            Show::Tables {
                full: true,
                database: Some(_),
                filter: Some(ShowFilter::Where(_)),
            }
        ));
        assert!(matches!(
            show("SHOW GLOBAL VARIABLES LIKE 'max%'"),
            Show::Variables {
                scope: Some(VariableScope::Global),
                ..
            }
        ));
    }

    #[test]
    fn test_show_misc_forms() {
        assert_eq!(show("SHOW COUNT(*) WARNINGS"), Show::WarningCount);
        assert_eq!(show("show master status"), Show::MasterStatus);
        assert!(matches!(
            show("SHOW CREATE TABLE db.t"),
            Show::Create {
                kind: ShowCreateKind::Table,
                ..
            }
        ));
        assert!(matches!(
            show("SHOW INDEX FROM t IN db"),
            Show::Index {
                database: Some(_),
                ..
            }
        ));
        assert_eq!(
            show("SHOW PROFILE CPU, BLOCK IO FOR QUERY 3"),
            Show::Profile {
                types: vec![ProfileType::Cpu, ProfileType::BlockIo],
                query: Some(3),
                limit: None,
            }
        );
    }

    #[test]
    fn test_show_unknown_target() {
        let err = Parser::new("SHOW WIDGETS").parse_statement().unwrap_err();
        assert_eq!(err.message, "Unknown SHOW target: WIDGETS");
    }

    #[test]
    fn test_set_scope_applies_to_next_variable() {
        let Statement::Set(Set::Variables(vars)) =
            parse("SET GLOBAL max_connections = 10, sort_buffer_size = 5, @x := 1")
        else {
            panic!("expected SET");
        };
        assert_eq!(
            vars[0].target,
            Expr::SystemVariable {
                scope: Some(VariableScope::Global),
                name: String::from("max_connections"),
            }
        );
        assert_eq!(
            vars[1].target,
            Expr::Identifier(Identifier::new("sort_buffer_size"))
        );
        assert_eq!(vars[2].target, Expr::UserVariable(String::from("x")));
    }

    #[test]
    fn test_set_special_forms() {
        assert_eq!(
            parse("SET NAMES utf8mb4 COLLATE utf8mb4_bin"),
            Statement::Set(Set::Names {
                charset: Some(String::from("utf8mb4")),
                collation: Some(String::from("utf8mb4_bin")),
            })
        );
        assert_eq!(
            parse("SET CHARACTER SET DEFAULT"),
            Statement::Set(Set::CharacterSet(None))
        );
        assert_eq!(
            parse("SET SESSION TRANSACTION ISOLATION LEVEL READ COMMITTED, READ ONLY"),
            Statement::Set(Set::Transaction {
                scope: Some(VariableScope::Session),
                characteristics: vec![
                    TransactionCharacteristic::IsolationLevel(IsolationLevel::ReadCommitted),
                    TransactionCharacteristic::ReadOnly,
                ],
            })
        );
    }

    #[test]
    fn test_set_trigger_row_reference() {
        let Statement::Set(Set::Variables(vars)) = parse("SET NEW.total = OLD.total + 1") else {
            panic!("expected SET");
        };
        assert_eq!(vars[0].target.to_string(), "NEW.total");
    }

    #[test]
    fn test_explain_and_describe() {
        assert!(matches!(
            parse("EXPLAIN FORMAT=JSON SELECT 1"),
            Statement::Explain(Explain {
                format: Some(ExplainFormat::Json),
                ..
            })
        ));
        assert_eq!(
            parse("DESC t 'na%'"),
            Statement::Describe(Describe {
                table: Identifier::new("t"),
                column: Some(DescribeColumn::Pattern(String::from("na%"))),
            })
        );
        assert!(Parser::new("EXPLAIN EXTENDED t").parse_statement().is_err());
    }
}
