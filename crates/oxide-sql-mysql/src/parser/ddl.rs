//! CREATE, ALTER, DROP, RENAME and TRUNCATE.
//!
//! Most option names in this grammar are not reserved words. They arrive
//! as identifiers and are matched by text against the closed set valid at
//! the current position.

use tracing::debug;

use super::{ParseError, Parser, Result};
use crate::ast::{
    AlterEvent, AlterRoutine, AlterSpecification, AlterTable, AlterView, ColumnDefinition,
    ColumnFormat, ColumnKey, ColumnStorage, CreateDatabase, CreateEvent, CreateIndex,
    CreateRoutine, CreateTable, CreateTrigger, CreateView, Deallocate, DropBehavior,
    DropDatabase, DropEvent, DropIndex, DropRoutine, DropTable, DropTrigger, DropView,
    DuplicateHandling, EventSchedule, EventStatus, Expr, ForeignKeyDefinition, GeneratedColumn,
    Identifier, IndexColumn, IndexDefinition, IndexKind, IndexOption, IndexType, InsertMethod,
    OptionFlag, ParamMode, PartitionNames, PartitionOperation, QueryExpr, Reference,
    ReferenceAction, ReferenceMatch, RoutineCharacteristic, RoutineKind, RoutineParam,
    RowFormat, SortDirection, SqlDataAccess, SqlSecurity, Statement, TableElement,
    TableOptions, TableRename, TriggerEvent, TriggerOrder, TriggerTiming, ViewAlgorithm,
    ViewCheckOption,
};
use crate::lexer::{Keyword, TokenKind};

/// Words that open a table option.
const TABLE_OPTION_WORDS: &[&str] = &[
    "ENGINE",
    "TYPE",
    "AUTO_INCREMENT",
    "AVG_ROW_LENGTH",
    "CHARACTER",
    "CHARSET",
    "COLLATE",
    "CHECKSUM",
    "COMMENT",
    "CONNECTION",
    "DATA",
    "DEFAULT",
    "DELAY_KEY_WRITE",
    "INSERT_METHOD",
    "KEY_BLOCK_SIZE",
    "MAX_ROWS",
    "MIN_ROWS",
    "PACK_KEYS",
    "PASSWORD",
    "ROW_FORMAT",
    "STATS_AUTO_RECALC",
    "STATS_PERSISTENT",
    "TABLESPACE",
    "UNION",
];

/// Prefix clauses shared by CREATE and ALTER for views, routines,
/// triggers and events.
#[derive(Default)]
struct ObjectPrefix {
    or_replace: bool,
    algorithm: Option<ViewAlgorithm>,
    definer: Option<Expr>,
    sql_security: Option<SqlSecurity>,
}

impl ObjectPrefix {
    const fn is_view_only(&self) -> bool {
        self.or_replace || self.algorithm.is_some() || self.sql_security.is_some()
    }
}

/// Collects the sections of CREATE TABLE as they are parsed. The node is
/// assembled once every optional trailing section has been consumed.
struct CreateTableBuilder {
    temporary: bool,
    if_not_exists: bool,
    name: Identifier,
    elements: Vec<TableElement>,
    like: Option<Identifier>,
    options: TableOptions,
    partition: Option<String>,
    duplicate: Option<DuplicateHandling>,
    query: Option<Box<QueryExpr>>,
}

impl CreateTableBuilder {
    fn new(temporary: bool, if_not_exists: bool, name: Identifier) -> Self {
        Self {
            temporary,
            if_not_exists,
            name,
            elements: Vec::new(),
            like: None,
            options: TableOptions::default(),
            partition: None,
            duplicate: None,
            query: None,
        }
    }

    fn build(self) -> CreateTable {
        CreateTable {
            temporary: self.temporary,
            if_not_exists: self.if_not_exists,
            name: self.name,
            elements: self.elements,
            like: self.like,
            options: self.options,
            partition: self.partition,
            duplicate: self.duplicate,
            query: self.query,
        }
    }
}

/// Placement of a column in ADD, CHANGE and MODIFY.
struct ColumnPosition {
    first: bool,
    after_column: Option<Identifier>,
}

impl Parser<'_> {
    // ===================================================================
    // CREATE
    // ===================================================================

    pub(super) fn parse_create(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Create)?;
        let mut prefix = self.parse_object_prefix(true)?;
        let temporary = self.consume_word("TEMPORARY");

        if temporary && !self.check_keyword(Keyword::Table) {
            return Err(self.error_expected("TABLE"));
        }
        if prefix.is_view_only() && !self.check_word("VIEW") {
            return Err(self.error_expected("VIEW"));
        }

        if let Some(keyword) = self.current().as_keyword() {
            match keyword {
                Keyword::Table => return self.parse_create_table(temporary),
                Keyword::Unique
                | Keyword::Fulltext
                | Keyword::Spatial
                | Keyword::Index => return self.parse_create_index(),
                Keyword::Database | Keyword::Schema => return self.parse_create_database(),
                Keyword::Trigger => return self.parse_create_trigger(prefix.definer.take()),
                Keyword::Procedure => {
                    return self.parse_create_routine(prefix.definer.take());
                }
                _ => {}
            }
        }
        match self.current_word().as_deref() {
            Some("FUNCTION") => self.parse_create_routine(prefix.definer.take()),
            Some("VIEW") => self.parse_create_view(prefix),
            Some("EVENT") => self.parse_create_event(prefix.definer.take()),
            _ => Err(self.error_expected(
                "TABLE, INDEX, DATABASE, VIEW, TRIGGER, PROCEDURE, FUNCTION or EVENT",
            )),
        }
    }

    /// `[OR REPLACE] [ALGORITHM = ..] [DEFINER = ..] [SQL SECURITY ..]`.
    fn parse_object_prefix(&mut self, allow_or_replace: bool) -> Result<ObjectPrefix> {
        let mut prefix = ObjectPrefix::default();
        if allow_or_replace && self.consume_keyword(Keyword::Or) {
            self.expect_keyword(Keyword::Replace)?;
            prefix.or_replace = true;
        }
        if self.consume_word("ALGORITHM") {
            self.consume_equals();
            prefix.algorithm = Some(match self.current_word().as_deref() {
                Some("UNDEFINED") => ViewAlgorithm::Undefined,
                Some("MERGE") => ViewAlgorithm::Merge,
                Some("TEMPTABLE") => ViewAlgorithm::TempTable,
                _ => return Err(self.error_expected("UNDEFINED, MERGE or TEMPTABLE")),
            });
            self.advance();
        }
        if self.consume_word("DEFINER") {
            self.consume_equals();
            prefix.definer = Some(self.parse_user()?);
        }
        if self.consume_keyword(Keyword::Sql) {
            self.expect_word("SECURITY")?;
            prefix.sql_security = Some(self.parse_sql_security()?);
        }
        Ok(prefix)
    }

    /// An account: `CURRENT_USER[()]`, `'user'@'host'` or `user@host`.
    pub(super) fn parse_user(&mut self) -> Result<Expr> {
        let name = match self.kind() {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => name.clone(),
            _ => return self.parse_expression(),
        };
        self.advance();
        if let TokenKind::UserVariable(host) = self.kind() {
            let host = host.clone();
            self.advance();
            return Ok(Expr::UserName { user: name, host });
        }
        self.tokens.push_back();
        self.parse_expression()
    }

    fn parse_sql_security(&mut self) -> Result<SqlSecurity> {
        let security = match self.current_word().as_deref() {
            Some("DEFINER") => SqlSecurity::Definer,
            Some("INVOKER") => SqlSecurity::Invoker,
            _ => return Err(self.error_expected("DEFINER or INVOKER")),
        };
        self.advance();
        Ok(security)
    }

    fn parse_create_table(&mut self, temporary: bool) -> Result<Statement> {
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_identifier()?;
        let mut builder = CreateTableBuilder::new(temporary, if_not_exists, name);

        if self.consume_keyword(Keyword::Like) {
            builder.like = Some(self.parse_qualified_identifier()?);
            return Ok(Statement::CreateTable(builder.build()));
        }

        if self.consume(&TokenKind::LeftParen) {
            if self.consume_keyword(Keyword::Like) {
                builder.like = Some(self.parse_qualified_identifier()?);
                self.expect(&TokenKind::RightParen)?;
                return Ok(Statement::CreateTable(builder.build()));
            }
            if self.query_ahead() {
                // `CREATE TABLE t (SELECT ..)`
                self.tokens.push_back();
            } else {
                builder.elements = self.parse_comma_separated(Self::parse_table_element)?;
                self.expect(&TokenKind::RightParen)?;
            }
        }

        self.parse_table_options(&mut builder.options, true)?;
        if self.check_keyword(Keyword::Partition) {
            builder.partition = Some(self.parse_partition_clause());
        }

        if self.consume_keyword(Keyword::Ignore) {
            builder.duplicate = Some(DuplicateHandling::Ignore);
        } else if self.consume_keyword(Keyword::Replace) {
            builder.duplicate = Some(DuplicateHandling::Replace);
        }
        let has_as = self.consume_keyword(Keyword::As);
        if self.check_keyword(Keyword::Select) || self.check(&TokenKind::LeftParen) {
            builder.query = Some(Box::new(self.parse_query()?));
        } else if has_as || builder.duplicate.is_some() {
            return Err(self.error_expected("SELECT"));
        }

        if builder.elements.is_empty() && builder.query.is_none() {
            return Err(self.error_expected("'(' or SELECT"));
        }
        Ok(Statement::CreateTable(builder.build()))
    }

    /// `PARTITION BY ..`, kept verbatim.
    fn parse_partition_clause(&mut self) -> String {
        self.capture_until(|kind| {
            matches!(
                kind,
                TokenKind::Keyword(
                    Keyword::Select | Keyword::Ignore | Keyword::Replace | Keyword::As
                )
            )
        })
    }

    fn parse_table_element(&mut self) -> Result<TableElement> {
        let constraint = if self.consume_keyword(Keyword::Constraint) {
            match Self::token_identifier(self.current()) {
                Some(symbol) => {
                    self.advance();
                    Some(symbol)
                }
                None => None,
            }
        } else {
            None
        };

        match self.current().as_keyword() {
            Some(Keyword::Foreign) => Ok(TableElement::ForeignKey(
                self.parse_foreign_key(constraint)?,
            )),
            Some(Keyword::Check) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(TableElement::Check { constraint, expr })
            }
            Some(Keyword::Primary | Keyword::Unique) => {
                Ok(TableElement::Index(self.parse_index_definition(constraint)?))
            }
            Some(Keyword::Index | Keyword::Key | Keyword::Fulltext | Keyword::Spatial)
                if constraint.is_none() =>
            {
                Ok(TableElement::Index(self.parse_index_definition(None)?))
            }
            _ if constraint.is_some() => {
                Err(self.error_expected("PRIMARY, UNIQUE, FOREIGN or CHECK"))
            }
            _ => {
                let name = self.expect_identifier()?;
                let definition = self.parse_column_definition()?;
                Ok(TableElement::Column { name, definition })
            }
        }
    }

    /// Parses a data type and its attributes. Attributes may come in any
    /// order and may repeat.
    pub(super) fn parse_column_definition(&mut self) -> Result<ColumnDefinition> {
        let data_type = self.parse_data_type()?;
        let mut definition = ColumnDefinition::new(data_type);
        loop {
            if let Some(keyword) = self.current().as_keyword() {
                match keyword {
                    Keyword::Not => {
                        self.advance();
                        self.expect_keyword(Keyword::Null)?;
                        definition.nullable = Some(false);
                    }
                    Keyword::Null => {
                        self.advance();
                        definition.nullable = Some(true);
                    }
                    Keyword::Default => {
                        self.advance();
                        definition.default = Some(self.parse_expression()?);
                    }
                    Keyword::On => {
                        self.advance();
                        self.expect_keyword(Keyword::Update)?;
                        definition.on_update = Some(self.parse_expression()?);
                    }
                    Keyword::Unique => {
                        self.advance();
                        self.consume_keyword(Keyword::Key);
                        definition.key = Some(ColumnKey::Unique);
                    }
                    Keyword::Primary => {
                        self.advance();
                        self.expect_keyword(Keyword::Key)?;
                        definition.key = Some(ColumnKey::Primary);
                    }
                    Keyword::Key => {
                        self.advance();
                        definition.key = Some(ColumnKey::Primary);
                    }
                    Keyword::As => {
                        self.advance();
                        definition.generated = Some(self.parse_generated_expr()?);
                    }
                    Keyword::References => {
                        definition.reference = Some(self.parse_reference()?);
                    }
                    _ => break,
                }
                continue;
            }

            match self.current_word().as_deref() {
                Some("AUTO_INCREMENT") => {
                    self.advance();
                    definition.auto_increment = true;
                }
                Some("COMMENT") => {
                    self.advance();
                    definition.comment = Some(self.parse_string()?);
                }
                Some("COLUMN_FORMAT") => {
                    self.advance();
                    definition.column_format = Some(match self.current_word().as_deref() {
                        Some("FIXED") => ColumnFormat::Fixed,
                        Some("DYNAMIC") => ColumnFormat::Dynamic,
                        Some("DEFAULT") => ColumnFormat::Default,
                        _ => return Err(self.error_expected("FIXED, DYNAMIC or DEFAULT")),
                    });
                    self.advance();
                }
                Some("STORAGE") => {
                    self.advance();
                    definition.storage = Some(match self.current_word().as_deref() {
                        Some("DISK") => ColumnStorage::Disk,
                        Some("MEMORY") => ColumnStorage::Memory,
                        Some("DEFAULT") => ColumnStorage::Default,
                        _ => return Err(self.error_expected("DISK, MEMORY or DEFAULT")),
                    });
                    self.advance();
                }
                Some("GENERATED") => {
                    self.advance();
                    self.expect_word("ALWAYS")?;
                    self.expect_keyword(Keyword::As)?;
                    definition.generated = Some(self.parse_generated_expr()?);
                }
                Some(word @ ("VIRTUAL" | "STORED")) => {
                    let stored = word == "STORED";
                    match definition.generated.as_mut() {
                        Some(generated) => generated.stored = Some(stored),
                        None => return Err(self.error_expected("AS")),
                    }
                    self.advance();
                }
                _ => break,
            }
        }
        Ok(definition)
    }

    fn parse_generated_expr(&mut self) -> Result<GeneratedColumn> {
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let stored = if self.consume_word("STORED") {
            Some(true)
        } else if self.consume_word("VIRTUAL") {
            Some(false)
        } else {
            None
        };
        Ok(GeneratedColumn { expr, stored })
    }

    fn parse_index_definition(&mut self, constraint: Option<Identifier>) -> Result<IndexDefinition> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                IndexKind::Primary
            }
            Some(Keyword::Unique) => {
                self.advance();
                self.consume_index_or_key();
                IndexKind::Unique
            }
            Some(Keyword::Fulltext) => {
                self.advance();
                self.consume_index_or_key();
                IndexKind::Fulltext
            }
            Some(Keyword::Spatial) => {
                self.advance();
                self.consume_index_or_key();
                IndexKind::Spatial
            }
            Some(Keyword::Index | Keyword::Key) => {
                self.advance();
                IndexKind::Index
            }
            _ => return Err(self.error_expected("index definition")),
        };

        let name = if kind == IndexKind::Primary {
            None
        } else {
            match Self::token_identifier(self.current()) {
                Some(name) => {
                    self.advance();
                    Some(name)
                }
                None => None,
            }
        };
        let index_type = self.parse_optional_index_type()?;
        let columns = self.parse_key_parts()?;
        let options = self.parse_index_options()?;
        Ok(IndexDefinition {
            kind,
            constraint,
            name,
            index_type,
            columns,
            options,
        })
    }

    fn consume_index_or_key(&mut self) -> bool {
        self.consume_keyword(Keyword::Index) || self.consume_keyword(Keyword::Key)
    }

    fn parse_optional_index_type(&mut self) -> Result<Option<IndexType>> {
        if !self.consume_keyword(Keyword::Using) {
            return Ok(None);
        }
        let index_type = match self.current_word().as_deref() {
            Some("BTREE") => IndexType::BTree,
            Some("HASH") => IndexType::Hash,
            Some("RTREE") => IndexType::RTree,
            Some(other) => {
                return Err(ParseError::unknown_word("index type", other, self.span()));
            }
            None => return Err(self.error_expected("BTREE, HASH or RTREE")),
        };
        self.advance();
        Ok(Some(index_type))
    }

    /// `(col [(len)] [ASC | DESC], ..)`.
    fn parse_key_parts(&mut self) -> Result<Vec<IndexColumn>> {
        self.expect(&TokenKind::LeftParen)?;
        let columns = self.parse_comma_separated(|p| {
            let name = p.expect_identifier()?;
            let length = p.parse_optional_length()?;
            let direction = if p.consume_keyword(Keyword::Asc) {
                Some(SortDirection::Asc)
            } else if p.consume_keyword(Keyword::Desc) {
                Some(SortDirection::Desc)
            } else {
                None
            };
            Ok(IndexColumn {
                name,
                length,
                direction,
            })
        })?;
        self.expect(&TokenKind::RightParen)?;
        Ok(columns)
    }

    /// Index options from a closed set; parsing stops at the first word
    /// outside it.
    fn parse_index_options(&mut self) -> Result<Vec<IndexOption>> {
        let mut options = Vec::new();
        loop {
            if self.consume_word("KEY_BLOCK_SIZE") {
                self.consume_equals();
                options.push(IndexOption::KeyBlockSize(self.parse_u64()?));
            } else if self.check_keyword(Keyword::Using) {
                if let Some(index_type) = self.parse_optional_index_type()? {
                    options.push(IndexOption::Using(index_type));
                }
            } else if self.consume_keyword(Keyword::With) {
                self.expect_word("PARSER")?;
                options.push(IndexOption::WithParser(self.expect_identifier()?));
            } else if self.consume_word("COMMENT") {
                options.push(IndexOption::Comment(self.parse_string()?));
            } else {
                break;
            }
        }
        Ok(options)
    }

    fn parse_foreign_key(&mut self, constraint: Option<Identifier>) -> Result<ForeignKeyDefinition> {
        let span = self.span();
        self.expect_keyword(Keyword::Foreign)?;
        self.expect_keyword(Keyword::Key)?;
        let name = match Self::token_identifier(self.current()) {
            Some(name) => {
                self.advance();
                Some(name)
            }
            None => None,
        };
        let columns = self.parse_identifier_list()?;
        let reference = self.parse_reference()?;
        if columns.len() != reference.columns.len() {
            let key = constraint.as_ref().or(name.as_ref()).map(|id| id.text.as_str());
            return Err(ParseError::foreign_key_arity(
                key,
                columns.len(),
                reference.columns.len(),
                span.to(self.span()),
            ));
        }
        Ok(ForeignKeyDefinition {
            constraint,
            name,
            columns,
            reference,
        })
    }

    fn parse_reference(&mut self) -> Result<Reference> {
        self.expect_keyword(Keyword::References)?;
        let table = self.parse_qualified_identifier()?;
        let columns = self.parse_identifier_list()?;
        let match_type = if self.consume_keyword(Keyword::Match) {
            let match_type = match self.current_word().as_deref() {
                Some("FULL") => ReferenceMatch::Full,
                Some("PARTIAL") => ReferenceMatch::Partial,
                Some("SIMPLE") => ReferenceMatch::Simple,
                _ => return Err(self.error_expected("FULL, PARTIAL or SIMPLE")),
            };
            self.advance();
            Some(match_type)
        } else {
            None
        };

        let mut reference = Reference {
            table,
            columns,
            match_type,
            on_delete: None,
            on_update: None,
        };
        while self.check_keyword(Keyword::On) {
            self.advance();
            if self.consume_keyword(Keyword::Delete) {
                reference.on_delete = Some(self.parse_reference_action()?);
            } else if self.consume_keyword(Keyword::Update) {
                reference.on_update = Some(self.parse_reference_action()?);
            } else {
                self.tokens.push_back();
                break;
            }
        }
        Ok(reference)
    }

    fn parse_reference_action(&mut self) -> Result<ReferenceAction> {
        if self.consume_keyword(Keyword::Restrict) {
            return Ok(ReferenceAction::Restrict);
        }
        if self.consume_keyword(Keyword::Cascade) {
            return Ok(ReferenceAction::Cascade);
        }
        if self.consume_keyword(Keyword::Set) {
            if self.consume_keyword(Keyword::Null) {
                return Ok(ReferenceAction::SetNull);
            }
            self.expect_keyword(Keyword::Default)?;
            return Ok(ReferenceAction::SetDefault);
        }
        if self.consume_word("NO") {
            self.expect_word("ACTION")?;
            return Ok(ReferenceAction::NoAction);
        }
        Err(self.error_expected("RESTRICT, CASCADE, SET NULL, SET DEFAULT or NO ACTION"))
    }

    // ===================================================================
    // Table options
    // ===================================================================

    /// Returns true if the current word opens a table option.
    fn at_table_option(&self) -> bool {
        self.current_word()
            .is_some_and(|word| TABLE_OPTION_WORDS.contains(&word.as_str()))
    }

    /// Parses table options into `options`, each optionally followed by a
    /// comma when `allow_commas` is set.
    fn parse_table_options(&mut self, options: &mut TableOptions, allow_commas: bool) -> Result<()> {
        while self.parse_table_option(options)? {
            if allow_commas && self.consume(&TokenKind::Comma) && !self.at_table_option() {
                self.tokens.push_back();
                break;
            }
        }
        Ok(())
    }

    /// Parses one table option. Returns false if none starts here.
    fn parse_table_option(&mut self, options: &mut TableOptions) -> Result<bool> {
        let Some(word) = self.current_word() else {
            return Ok(false);
        };
        match word.as_str() {
            "DEFAULT" => {
                self.advance();
                if let Some(charset) = self.parse_charset_option()? {
                    options.charset = Some(charset);
                } else if self.consume_keyword(Keyword::Collate) {
                    self.consume_equals();
                    options.collation = Some(self.parse_name_text()?);
                } else {
                    return Err(self.error_expected("CHARACTER SET or COLLATE"));
                }
            }
            "CHARACTER" | "CHARSET" => {
                options.charset = self.parse_charset_option()?;
            }
            "COLLATE" => {
                self.advance();
                self.consume_equals();
                options.collation = Some(self.parse_name_text()?);
            }
            "ENGINE" | "TYPE" => {
                self.advance();
                self.consume_equals();
                options.engine = Some(self.parse_option_identifier()?);
            }
            "TABLESPACE" => {
                self.advance();
                self.consume_equals();
                options.tablespace = Some(self.parse_option_identifier()?);
            }
            "AUTO_INCREMENT" => options.auto_increment = Some(self.parse_numeric_option()?),
            "AVG_ROW_LENGTH" => options.avg_row_length = Some(self.parse_numeric_option()?),
            "KEY_BLOCK_SIZE" => options.key_block_size = Some(self.parse_numeric_option()?),
            "MAX_ROWS" => options.max_rows = Some(self.parse_numeric_option()?),
            "MIN_ROWS" => options.min_rows = Some(self.parse_numeric_option()?),
            "CHECKSUM" => options.checksum = Some(self.parse_numeric_option()? != 0),
            "DELAY_KEY_WRITE" => options.delay_key_write = Some(self.parse_numeric_option()? != 0),
            "COMMENT" => options.comment = Some(self.parse_string_option()?),
            "CONNECTION" => options.connection = Some(self.parse_string_option()?),
            "PASSWORD" => options.password = Some(self.parse_string_option()?),
            "DATA" => {
                self.advance();
                self.expect_word("DIRECTORY")?;
                self.consume_equals();
                options.data_directory = Some(self.parse_string()?);
            }
            "INDEX" => {
                self.advance();
                if !self.check_word("DIRECTORY") {
                    self.tokens.push_back();
                    return Ok(false);
                }
                self.advance();
                self.consume_equals();
                options.index_directory = Some(self.parse_string()?);
            }
            "INSERT_METHOD" => {
                self.advance();
                self.consume_equals();
                options.insert_method = Some(match self.current_word().as_deref() {
                    Some("NO") => InsertMethod::No,
                    Some("FIRST") => InsertMethod::First,
                    Some("LAST") => InsertMethod::Last,
                    _ => return Err(self.error_expected("NO, FIRST or LAST")),
                });
                self.advance();
            }
            "PACK_KEYS" => options.pack_keys = Some(self.parse_flag_option()?),
            "STATS_AUTO_RECALC" => options.stats_auto_recalc = Some(self.parse_flag_option()?),
            "STATS_PERSISTENT" => options.stats_persistent = Some(self.parse_flag_option()?),
            "ROW_FORMAT" => {
                self.advance();
                self.consume_equals();
                options.row_format = Some(match self.current_word().as_deref() {
                    Some("DEFAULT") => RowFormat::Default,
                    Some("DYNAMIC") => RowFormat::Dynamic,
                    Some("FIXED") => RowFormat::Fixed,
                    Some("COMPRESSED") => RowFormat::Compressed,
                    Some("REDUNDANT") => RowFormat::Redundant,
                    Some("COMPACT") => RowFormat::Compact,
                    Some(other) => {
                        return Err(ParseError::unknown_word("row format", other, self.span()));
                    }
                    None => return Err(self.error_expected("row format")),
                });
                self.advance();
            }
            "UNION" => {
                self.advance();
                self.consume_equals();
                self.expect(&TokenKind::LeftParen)?;
                options.union = self.parse_comma_separated(Self::parse_qualified_identifier)?;
                self.expect(&TokenKind::RightParen)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// `{CHARACTER SET | CHARSET} [=] name`.
    fn parse_charset_option(&mut self) -> Result<Option<String>> {
        if self.consume_keyword(Keyword::Character) {
            self.expect_keyword(Keyword::Set)?;
        } else if !self.consume_word("CHARSET") {
            return Ok(None);
        }
        self.consume_equals();
        self.parse_name_text().map(Some)
    }

    /// A name used as an option value: identifier, string or reserved
    /// word.
    pub(super) fn parse_option_identifier(&mut self) -> Result<Identifier> {
        if let Some(id) = Self::token_identifier(self.current()) {
            self.advance();
            return Ok(id);
        }
        self.parse_name_text().map(Identifier::new)
    }

    fn parse_numeric_option(&mut self) -> Result<u64> {
        self.advance();
        self.consume_equals();
        self.parse_u64()
    }

    fn parse_string_option(&mut self) -> Result<String> {
        self.advance();
        self.consume_equals();
        self.parse_string()
    }

    fn parse_flag_option(&mut self) -> Result<OptionFlag> {
        self.advance();
        self.consume_equals();
        if self.consume_keyword(Keyword::Default) {
            return Ok(OptionFlag::Default);
        }
        match self.parse_u64()? {
            0 => Ok(OptionFlag::Off),
            _ => Ok(OptionFlag::On),
        }
    }

    // ===================================================================
    // Other CREATE forms
    // ===================================================================

    fn parse_create_index(&mut self) -> Result<Statement> {
        let kind = if self.consume_keyword(Keyword::Unique) {
            IndexKind::Unique
        } else if self.consume_keyword(Keyword::Fulltext) {
            IndexKind::Fulltext
        } else if self.consume_keyword(Keyword::Spatial) {
            IndexKind::Spatial
        } else {
            IndexKind::Index
        };
        self.expect_keyword(Keyword::Index)?;
        let name = self.expect_identifier()?;
        let index_type = self.parse_optional_index_type()?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_qualified_identifier()?;
        let columns = self.parse_key_parts()?;
        let options = self.parse_index_options()?;
        let (algorithm, lock) = self.parse_algorithm_lock()?;
        Ok(Statement::CreateIndex(CreateIndex {
            index: IndexDefinition {
                kind,
                constraint: None,
                name: Some(name),
                index_type,
                columns,
                options,
            },
            table,
            algorithm,
            lock,
        }))
    }

    /// `[ALGORITHM [=] x] [LOCK [=] y]` in either order.
    fn parse_algorithm_lock(&mut self) -> Result<(Option<Identifier>, Option<Identifier>)> {
        let mut algorithm = None;
        let mut lock = None;
        loop {
            if self.consume_word("ALGORITHM") {
                self.consume_equals();
                algorithm = Some(self.parse_option_identifier()?);
            } else if self.consume_keyword(Keyword::Lock) {
                self.consume_equals();
                lock = Some(self.parse_option_identifier()?);
            } else {
                return Ok((algorithm, lock));
            }
        }
    }

    fn parse_create_database(&mut self) -> Result<Statement> {
        self.advance();
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.expect_identifier()?;
        let mut charset = None;
        let mut collation = None;
        loop {
            self.consume_keyword(Keyword::Default);
            if let Some(value) = self.parse_charset_option()? {
                charset = Some(value);
            } else if self.consume_keyword(Keyword::Collate) {
                self.consume_equals();
                collation = Some(self.parse_name_text()?);
            } else {
                break;
            }
        }
        Ok(Statement::CreateDatabase(CreateDatabase {
            if_not_exists,
            name,
            charset,
            collation,
        }))
    }

    fn parse_create_trigger(&mut self, definer: Option<Expr>) -> Result<Statement> {
        self.expect_keyword(Keyword::Trigger)?;
        let name = self.parse_qualified_identifier()?;
        let timing = if self.consume_keyword(Keyword::Before) {
            TriggerTiming::Before
        } else if self.consume_word("AFTER") {
            TriggerTiming::After
        } else {
            return Err(self.error_expected("BEFORE or AFTER"));
        };
        let event = if self.consume_keyword(Keyword::Insert) {
            TriggerEvent::Insert
        } else if self.consume_keyword(Keyword::Update) {
            TriggerEvent::Update
        } else if self.consume_keyword(Keyword::Delete) {
            TriggerEvent::Delete
        } else {
            return Err(self.error_expected("INSERT, UPDATE or DELETE"));
        };
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_qualified_identifier()?;
        self.expect_keyword(Keyword::For)?;
        self.expect_keyword(Keyword::Each)?;
        self.expect_word("ROW")?;
        let order = if self.consume_word("FOLLOWS") {
            Some(TriggerOrder::Follows(self.expect_identifier()?))
        } else if self.consume_word("PRECEDES") {
            Some(TriggerOrder::Precedes(self.expect_identifier()?))
        } else {
            None
        };
        let body = self.parse_nested_statement()?;
        Ok(Statement::CreateTrigger(CreateTrigger {
            definer,
            name,
            timing,
            event,
            table,
            order,
            body: Box::new(body),
        }))
    }

    fn parse_routine_kind(&mut self) -> Result<RoutineKind> {
        if self.consume_keyword(Keyword::Procedure) {
            Ok(RoutineKind::Procedure)
        } else if self.consume_word("FUNCTION") {
            Ok(RoutineKind::Function)
        } else {
            Err(self.error_expected("PROCEDURE or FUNCTION"))
        }
    }

    fn parse_create_routine(&mut self, definer: Option<Expr>) -> Result<Statement> {
        let kind = self.parse_routine_kind()?;
        let name = self.parse_qualified_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let params = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(|p| p.parse_routine_param(kind))?
        };
        self.expect(&TokenKind::RightParen)?;

        let returns = if kind == RoutineKind::Function {
            self.expect_word("RETURNS")?;
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let characteristics = self.parse_routine_characteristics()?;
        let body = self.parse_nested_statement()?;
        Ok(Statement::CreateRoutine(CreateRoutine {
            definer,
            kind,
            name,
            params,
            returns,
            characteristics,
            body: Box::new(body),
        }))
    }

    fn parse_routine_param(&mut self, kind: RoutineKind) -> Result<RoutineParam> {
        let mode = if kind == RoutineKind::Procedure {
            if self.consume_keyword(Keyword::In) {
                Some(ParamMode::In)
            } else if self.consume_keyword(Keyword::Out) {
                Some(ParamMode::Out)
            } else if self.consume_keyword(Keyword::Inout) {
                Some(ParamMode::InOut)
            } else {
                None
            }
        } else {
            None
        };
        let name = self.expect_identifier()?;
        let data_type = self.parse_data_type()?;
        Ok(RoutineParam {
            mode,
            name,
            data_type,
        })
    }

    fn parse_routine_characteristics(&mut self) -> Result<Vec<RoutineCharacteristic>> {
        let mut characteristics = Vec::new();
        loop {
            let characteristic = if self.consume_word("COMMENT") {
                RoutineCharacteristic::Comment(self.parse_string()?)
            } else if self.consume_word("LANGUAGE") {
                self.expect_keyword(Keyword::Sql)?;
                RoutineCharacteristic::LanguageSql
            } else if self.consume_keyword(Keyword::Deterministic) {
                RoutineCharacteristic::Deterministic(true)
            } else if self.check_keyword(Keyword::Not) {
                self.advance();
                if !self.consume_keyword(Keyword::Deterministic) {
                    self.tokens.push_back();
                    break;
                }
                RoutineCharacteristic::Deterministic(false)
            } else if self.consume_word("CONTAINS") {
                self.expect_keyword(Keyword::Sql)?;
                RoutineCharacteristic::DataAccess(SqlDataAccess::ContainsSql)
            } else if self.check_word("NO") {
                self.advance();
                self.expect_keyword(Keyword::Sql)?;
                RoutineCharacteristic::DataAccess(SqlDataAccess::NoSql)
            } else if self.consume_keyword(Keyword::Reads) {
                self.expect_keyword(Keyword::Sql)?;
                self.expect_word("DATA")?;
                RoutineCharacteristic::DataAccess(SqlDataAccess::ReadsSqlData)
            } else if self.consume_keyword(Keyword::Modifies) {
                self.expect_keyword(Keyword::Sql)?;
                self.expect_word("DATA")?;
                RoutineCharacteristic::DataAccess(SqlDataAccess::ModifiesSqlData)
            } else if self.check_keyword(Keyword::Sql) {
                self.advance();
                if !self.consume_word("SECURITY") {
                    self.tokens.push_back();
                    break;
                }
                RoutineCharacteristic::SqlSecurity(self.parse_sql_security()?)
            } else {
                break;
            };
            characteristics.push(characteristic);
        }
        Ok(characteristics)
    }

    fn parse_create_view(&mut self, prefix: ObjectPrefix) -> Result<Statement> {
        self.expect_word("VIEW")?;
        let name = self.parse_qualified_identifier()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        let query = self.parse_query()?;
        let check_option = if self.consume_keyword(Keyword::With) {
            let option = if self.consume_word("CASCADED") {
                ViewCheckOption::Cascaded
            } else if self.consume_word("LOCAL") {
                ViewCheckOption::Local
            } else {
                ViewCheckOption::Default
            };
            self.expect_keyword(Keyword::Check)?;
            self.expect_keyword(Keyword::Option)?;
            Some(option)
        } else {
            None
        };
        Ok(Statement::CreateView(CreateView {
            or_replace: prefix.or_replace,
            algorithm: prefix.algorithm,
            definer: prefix.definer,
            sql_security: prefix.sql_security,
            name,
            columns,
            query: Box::new(query),
            check_option,
        }))
    }

    fn parse_create_event(&mut self, definer: Option<Expr>) -> Result<Statement> {
        self.expect_word("EVENT")?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_identifier()?;
        self.expect_keyword(Keyword::On)?;
        self.expect_word("SCHEDULE")?;

        let schedule = if self.consume_word("AT") {
            EventSchedule::At(self.parse_expression()?)
        } else if self.consume_word("EVERY") {
            let value = self.parse_expression()?;
            let unit = self.parse_interval_unit()?;
            let starts = if self.consume_word("STARTS") {
                Some(self.parse_expression()?)
            } else {
                None
            };
            let ends = if self.consume_word("ENDS") {
                Some(self.parse_expression()?)
            } else {
                None
            };
            EventSchedule::Every {
                value,
                unit,
                starts,
                ends,
            }
        } else {
            return Err(self.error_expected("AT or EVERY"));
        };

        let preserve = if self.consume_keyword(Keyword::On) {
            self.expect_word("COMPLETION")?;
            let negated = self.consume_keyword(Keyword::Not);
            self.expect_word("PRESERVE")?;
            Some(!negated)
        } else {
            None
        };

        let status = if self.consume_word("ENABLE") {
            Some(EventStatus::Enable)
        } else if self.consume_word("DISABLE") {
            if self.consume_keyword(Keyword::On) {
                self.expect_word("SLAVE")?;
                Some(EventStatus::DisableOnSlave)
            } else {
                Some(EventStatus::Disable)
            }
        } else {
            None
        };

        let comment = if self.consume_word("COMMENT") {
            Some(self.parse_string()?)
        } else {
            None
        };

        self.expect_word("DO")?;
        let body = self.parse_nested_statement()?;
        Ok(Statement::CreateEvent(CreateEvent {
            definer,
            if_not_exists,
            name,
            schedule,
            preserve,
            status,
            comment,
            body: Box::new(body),
        }))
    }

    // ===================================================================
    // ALTER
    // ===================================================================

    pub(super) fn parse_alter(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Alter)?;
        if self.check_keyword(Keyword::Ignore) || self.check_keyword(Keyword::Table) {
            return self.parse_alter_table();
        }
        if self.check_keyword(Keyword::Procedure) || self.check_word("FUNCTION") {
            let kind = self.parse_routine_kind()?;
            let name = self.parse_qualified_identifier()?;
            let characteristics = self.parse_routine_characteristics()?;
            return Ok(Statement::AlterRoutine(AlterRoutine {
                kind,
                name,
                characteristics,
            }));
        }

        let prefix = self.parse_object_prefix(false)?;
        if self.consume_word("VIEW") {
            let name = self.parse_qualified_identifier()?;
            let remainder = self.capture_until(|_| false);
            debug!(view = %name.text, "ALTER VIEW kept verbatim after the view name");
            return Ok(Statement::AlterView(AlterView {
                algorithm: prefix.algorithm,
                definer: prefix.definer,
                sql_security: prefix.sql_security,
                name,
                remainder,
            }));
        }
        if !prefix.is_view_only() && self.consume_word("EVENT") {
            let name = self.parse_qualified_identifier()?;
            let remainder = self.capture_until(|_| false);
            debug!(event = %name.text, "ALTER EVENT kept verbatim after the event name");
            return Ok(Statement::AlterEvent(AlterEvent {
                definer: prefix.definer,
                name,
                remainder,
            }));
        }
        Err(self.error_expected("TABLE, VIEW, EVENT, PROCEDURE or FUNCTION"))
    }

    fn parse_alter_table(&mut self) -> Result<Statement> {
        let ignore = self.consume_keyword(Keyword::Ignore);
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_qualified_identifier()?;

        let mut specifications = Vec::new();
        let mut options = TableOptions::default();
        let mut partition = None;

        if !self.at_statement_end() {
            loop {
                if self.at_table_option() {
                    self.parse_table_options(&mut options, false)?;
                } else if self.check_keyword(Keyword::Partition) {
                    partition = Some(self.parse_partition_clause());
                } else {
                    specifications.push(self.parse_alter_specification()?);
                }
                if !self.consume(&TokenKind::Comma) {
                    break;
                }
            }
            self.parse_table_options(&mut options, false)?;
            if self.check_keyword(Keyword::Partition) {
                partition = Some(self.parse_partition_clause());
            }
        }

        Ok(Statement::AlterTable(AlterTable {
            ignore,
            name,
            specifications,
            options,
            partition,
        }))
    }

    pub(super) fn at_statement_end(&self) -> bool {
        matches!(self.kind(), TokenKind::Eof | TokenKind::Semicolon)
    }

    /// `FIRST` or `AFTER col`, if present.
    fn parse_column_position(&mut self) -> Result<ColumnPosition> {
        if self.consume_word("FIRST") {
            return Ok(ColumnPosition {
                first: true,
                after_column: None,
            });
        }
        if self.consume_word("AFTER") {
            return Ok(ColumnPosition {
                first: false,
                after_column: Some(self.expect_identifier()?),
            });
        }
        Ok(ColumnPosition {
            first: false,
            after_column: None,
        })
    }

    /// Parses one ALTER TABLE clause, resolved by its leading word.
    pub(super) fn parse_alter_specification(&mut self) -> Result<AlterSpecification> {
        let span = self.span();
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("ALTER TABLE specification"))?;
        self.advance();
        match word.as_str() {
            "ADD" => self.parse_alter_add(),
            "ALTER" => {
                self.consume_keyword(Keyword::Column);
                let column = self.expect_identifier()?;
                if self.consume_keyword(Keyword::Set) {
                    self.expect_keyword(Keyword::Default)?;
                    let default = self.parse_expression()?;
                    Ok(AlterSpecification::AlterColumnDefault {
                        column,
                        default: Some(default),
                    })
                } else {
                    self.expect_keyword(Keyword::Drop)?;
                    self.expect_keyword(Keyword::Default)?;
                    Ok(AlterSpecification::AlterColumnDefault {
                        column,
                        default: None,
                    })
                }
            }
            "CHANGE" => {
                self.consume_keyword(Keyword::Column);
                let old_name = self.expect_identifier()?;
                let new_name = self.expect_identifier()?;
                let definition = self.parse_column_definition()?;
                let position = self.parse_column_position()?;
                Ok(AlterSpecification::ChangeColumn {
                    old_name,
                    new_name,
                    definition,
                    first: position.first,
                    after_column: position.after_column,
                })
            }
            "MODIFY" => {
                self.consume_keyword(Keyword::Column);
                let column = self.expect_identifier()?;
                let definition = self.parse_column_definition()?;
                let position = self.parse_column_position()?;
                Ok(AlterSpecification::ModifyColumn {
                    column,
                    definition,
                    first: position.first,
                    after_column: position.after_column,
                })
            }
            "DROP" => self.parse_alter_drop(),
            "DISABLE" => {
                self.expect_keyword(Keyword::Keys)?;
                Ok(AlterSpecification::DisableKeys)
            }
            "ENABLE" => {
                self.expect_keyword(Keyword::Keys)?;
                Ok(AlterSpecification::EnableKeys)
            }
            "RENAME" => {
                if self.consume_keyword(Keyword::Index) || self.consume_keyword(Keyword::Key) {
                    let old_name = self.expect_identifier()?;
                    self.expect_keyword(Keyword::To)?;
                    let new_name = self.expect_identifier()?;
                    return Ok(AlterSpecification::RenameIndex { old_name, new_name });
                }
                if !self.consume_keyword(Keyword::To) {
                    self.consume_keyword(Keyword::As);
                }
                Ok(AlterSpecification::RenameTable(
                    self.parse_qualified_identifier()?,
                ))
            }
            "ORDER" => {
                self.expect_keyword(Keyword::By)?;
                Ok(AlterSpecification::OrderBy(
                    self.parse_comma_separated(Self::expect_identifier)?,
                ))
            }
            "CONVERT" => {
                self.expect_keyword(Keyword::To)?;
                let charset = self
                    .parse_charset_option()?
                    .ok_or_else(|| self.error_expected("CHARACTER SET"))?;
                let collation = if self.consume_keyword(Keyword::Collate) {
                    Some(self.parse_name_text()?)
                } else {
                    None
                };
                Ok(AlterSpecification::ConvertToCharset { charset, collation })
            }
            "DISCARD" => {
                self.expect_word("TABLESPACE")?;
                Ok(AlterSpecification::DiscardTablespace)
            }
            "IMPORT" => {
                self.expect_word("TABLESPACE")?;
                Ok(AlterSpecification::ImportTablespace)
            }
            "FORCE" => Ok(AlterSpecification::Force),
            "ALGORITHM" => {
                self.consume_equals();
                Ok(AlterSpecification::Algorithm(self.parse_option_identifier()?))
            }
            "LOCK" => {
                self.consume_equals();
                Ok(AlterSpecification::Lock(self.parse_option_identifier()?))
            }
            "COALESCE" => {
                self.expect_keyword(Keyword::Partition)?;
                Ok(AlterSpecification::CoalescePartition(self.parse_u64()?))
            }
            "REORGANIZE" => {
                self.expect_keyword(Keyword::Partition)?;
                if self.at_statement_end() || self.check(&TokenKind::Comma) {
                    return Ok(AlterSpecification::ReorganizePartition {
                        names: Vec::new(),
                        into: None,
                    });
                }
                let names = self.parse_comma_separated(Self::expect_identifier)?;
                self.expect_keyword(Keyword::Into)?;
                let into = self.capture_parenthesized()?;
                Ok(AlterSpecification::ReorganizePartition {
                    names,
                    into: Some(into),
                })
            }
            "EXCHANGE" => {
                self.expect_keyword(Keyword::Partition)?;
                let partition = self.expect_identifier()?;
                self.expect_keyword(Keyword::With)?;
                self.expect_keyword(Keyword::Table)?;
                let table = self.parse_qualified_identifier()?;
                Ok(AlterSpecification::ExchangePartition { partition, table })
            }
            "ANALYZE" | "CHECK" | "OPTIMIZE" | "REBUILD" | "REPAIR" | "TRUNCATE" => {
                let operation = match word.as_str() {
                    "ANALYZE" => PartitionOperation::Analyze,
                    "CHECK" => PartitionOperation::Check,
                    "OPTIMIZE" => PartitionOperation::Optimize,
                    "REBUILD" => PartitionOperation::Rebuild,
                    "REPAIR" => PartitionOperation::Repair,
                    _ => PartitionOperation::Truncate,
                };
                self.expect_keyword(Keyword::Partition)?;
                let partitions = if self.consume_keyword(Keyword::All) {
                    PartitionNames::All
                } else {
                    PartitionNames::Names(self.parse_comma_separated(Self::expect_identifier)?)
                };
                Ok(AlterSpecification::PartitionMaintenance {
                    operation,
                    partitions,
                })
            }
            "REMOVE" => {
                self.expect_word("PARTITIONING")?;
                Ok(AlterSpecification::RemovePartitioning)
            }
            other => Err(ParseError::unknown_word(
                "ALTER TABLE specification",
                other,
                span,
            )),
        }
    }

    fn parse_alter_add(&mut self) -> Result<AlterSpecification> {
        if self.check_keyword(Keyword::Partition) {
            self.advance();
            return Ok(AlterSpecification::AddPartition(
                self.capture_parenthesized()?,
            ));
        }
        let explicit_column = self.consume_keyword(Keyword::Column);
        if !explicit_column {
            match self.current().as_keyword() {
                Some(
                    Keyword::Constraint
                    | Keyword::Primary
                    | Keyword::Unique
                    | Keyword::Index
                    | Keyword::Key
                    | Keyword::Fulltext
                    | Keyword::Spatial
                    | Keyword::Foreign,
                ) => {
                    return match self.parse_table_element()? {
                        TableElement::Index(index) => Ok(AlterSpecification::AddIndex(index)),
                        TableElement::ForeignKey(fk) => {
                            Ok(AlterSpecification::AddForeignKey(fk))
                        }
                        TableElement::Column { .. } | TableElement::Check { .. } => {
                            Err(self.error_expected("index or foreign key"))
                        }
                    };
                }
                _ => {}
            }
        }

        if self.consume(&TokenKind::LeftParen) {
            let columns = self.parse_comma_separated(|p| {
                let name = p.expect_identifier()?;
                let definition = p.parse_column_definition()?;
                Ok((name, definition))
            })?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(AlterSpecification::AddColumns(columns));
        }

        let column = self.expect_identifier()?;
        let definition = self.parse_column_definition()?;
        let position = self.parse_column_position()?;
        Ok(AlterSpecification::AddColumn {
            column,
            definition,
            first: position.first,
            after_column: position.after_column,
        })
    }

    fn parse_alter_drop(&mut self) -> Result<AlterSpecification> {
        match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                Ok(AlterSpecification::DropPrimaryKey)
            }
            Some(Keyword::Index | Keyword::Key) => {
                self.advance();
                Ok(AlterSpecification::DropIndex(self.expect_identifier()?))
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                Ok(AlterSpecification::DropForeignKey(self.expect_identifier()?))
            }
            Some(Keyword::Partition) => {
                self.advance();
                Ok(AlterSpecification::DropPartition(
                    self.parse_comma_separated(Self::expect_identifier)?,
                ))
            }
            _ => {
                self.consume_keyword(Keyword::Column);
                Ok(AlterSpecification::DropColumn(self.expect_identifier()?))
            }
        }
    }

    // ===================================================================
    // DROP / RENAME / TRUNCATE
    // ===================================================================

    pub(super) fn parse_drop(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Drop)?;
        let temporary = self.consume_word("TEMPORARY");
        if temporary && !(self.check_keyword(Keyword::Table) || self.check_word("TABLES")) {
            return Err(self.error_expected("TABLE"));
        }

        if self.consume_keyword(Keyword::Table) || self.consume_word("TABLES") {
            let if_exists = self.parse_if_exists()?;
            let names = self.parse_comma_separated(Self::parse_qualified_identifier)?;
            let behavior = self.parse_drop_behavior();
            return Ok(Statement::DropTable(DropTable {
                temporary,
                if_exists,
                names,
                behavior,
            }));
        }
        if self.consume_keyword(Keyword::Index) {
            let name = self.parse_index_name()?;
            self.expect_keyword(Keyword::On)?;
            let table = self.parse_qualified_identifier()?;
            let (algorithm, lock) = self.parse_algorithm_lock()?;
            return Ok(Statement::DropIndex(DropIndex {
                name,
                table,
                algorithm,
                lock,
            }));
        }
        if self.consume_keyword(Keyword::Database) || self.consume_keyword(Keyword::Schema) {
            let if_exists = self.parse_if_exists()?;
            let name = self.expect_identifier()?;
            return Ok(Statement::DropDatabase(DropDatabase { if_exists, name }));
        }
        if self.consume_keyword(Keyword::Trigger) {
            let if_exists = self.parse_if_exists()?;
            let name = self.parse_qualified_identifier()?;
            return Ok(Statement::DropTrigger(DropTrigger { if_exists, name }));
        }
        if self.check_keyword(Keyword::Procedure) || self.check_word("FUNCTION") {
            let kind = self.parse_routine_kind()?;
            let if_exists = self.parse_if_exists()?;
            let name = self.parse_qualified_identifier()?;
            return Ok(Statement::DropRoutine(DropRoutine {
                kind,
                if_exists,
                name,
            }));
        }
        if self.consume_word("VIEW") {
            let if_exists = self.parse_if_exists()?;
            let names = self.parse_comma_separated(Self::parse_qualified_identifier)?;
            let behavior = self.parse_drop_behavior();
            return Ok(Statement::DropView(DropView {
                if_exists,
                names,
                behavior,
            }));
        }
        if self.consume_word("EVENT") {
            let if_exists = self.parse_if_exists()?;
            let name = self.parse_qualified_identifier()?;
            return Ok(Statement::DropEvent(DropEvent { if_exists, name }));
        }
        if self.consume_word("PREPARE") {
            let name = self.expect_identifier()?;
            return Ok(Statement::Deallocate(Deallocate { drop: true, name }));
        }
        Err(self.error_expected(
            "TABLE, INDEX, DATABASE, VIEW, TRIGGER, PROCEDURE, FUNCTION, EVENT or PREPARE",
        ))
    }

    fn parse_drop_behavior(&mut self) -> Option<DropBehavior> {
        if self.consume_keyword(Keyword::Restrict) {
            Some(DropBehavior::Restrict)
        } else if self.consume_keyword(Keyword::Cascade) {
            Some(DropBehavior::Cascade)
        } else {
            None
        }
    }

    pub(super) fn parse_rename(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Rename)?;
        if !self.consume_keyword(Keyword::Table) {
            self.expect_word("TABLES")?;
        }
        let renames = self.parse_comma_separated(|p| {
            let from = p.parse_qualified_identifier()?;
            p.expect_keyword(Keyword::To)?;
            let to = p.parse_qualified_identifier()?;
            Ok(TableRename { from, to })
        })?;
        Ok(Statement::RenameTable(renames))
    }

    pub(super) fn parse_truncate(&mut self) -> Result<Statement> {
        self.expect_word("TRUNCATE")?;
        self.consume_keyword(Keyword::Table);
        Ok(Statement::TruncateTable(self.parse_qualified_identifier()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeName;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    fn alter_specs(sql: &str) -> Vec<AlterSpecification> {
        match parse(sql) {
            Statement::AlterTable(alter) => alter.specifications,
            other => panic!("expected ALTER TABLE, got {other:?}"),
        }
    }

    #[test]
    fn test_column_attributes_any_order() {
        let Statement::CreateTable(table) = parse(
            "CREATE TABLE t (id INT UNSIGNED AUTO_INCREMENT NOT NULL PRIMARY KEY COMMENT 'pk', \
             ts TIMESTAMP ON UPDATE CURRENT_TIMESTAMP DEFAULT CURRENT_TIMESTAMP NULL)",
        ) else {
            panic!("expected CREATE TABLE");
        };
        let TableElement::Column { definition, .. } = &table.elements[0] else {
            panic!("expected column");
        };
        assert!(definition.auto_increment);
        assert_eq!(definition.nullable, Some(false));
        assert_eq!(definition.key, Some(ColumnKey::Primary));
        assert_eq!(definition.comment.as_deref(), Some("pk"));
        let TableElement::Column { definition, .. } = &table.elements[1] else {
            panic!("expected column");
        };
        assert!(definition.on_update.is_some());
        assert!(definition.default.is_some());
        assert_eq!(definition.nullable, Some(true));
    }

    #[test]
    fn test_table_options_and_like() {
        let Statement::CreateTable(table) = parse(
            "CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4, COMMENT 'x' AUTO_INCREMENT = 5",
        ) else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(table.options.engine, Some(Identifier::new("InnoDB")));
        assert_eq!(table.options.charset.as_deref(), Some("utf8mb4"));
        assert_eq!(table.options.comment.as_deref(), Some("x"));
        assert_eq!(table.options.auto_increment, Some(5));

        let Statement::CreateTable(copy) = parse("CREATE TEMPORARY TABLE IF NOT EXISTS c LIKE t")
        else {
            panic!("expected CREATE TABLE");
        };
        assert!(copy.temporary && copy.if_not_exists);
        assert_eq!(copy.like, Some(Identifier::new("t")));
    }

    #[test]
    fn test_create_table_select() {
        let Statement::CreateTable(table) = parse("CREATE TABLE t IGNORE SELECT * FROM s") else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(table.duplicate, Some(DuplicateHandling::Ignore));
        assert!(table.query.is_some());
    }

    #[test]
    fn test_foreign_key_arity() {
        let err = Parser::new("CREATE TABLE t (a INT, b INT, FOREIGN KEY (a, b) REFERENCES p (x))")
            .parse_statement()
            .unwrap_err();
        assert!(err.message.contains("foreign key without name"));

        let err = Parser::new(
            "CREATE TABLE t (a INT, CONSTRAINT fk_p FOREIGN KEY (a) REFERENCES p (x, y))",
        )
        .parse_statement()
        .unwrap_err();
        assert!(err.message.contains("foreign key fk_p"));

        parse("CREATE TABLE t (a INT, FOREIGN KEY (a) REFERENCES p (x) ON DELETE SET NULL)");
    }

    #[test]
    fn test_add_column_position() {
        let specs = alter_specs("ALTER TABLE t ADD COLUMN c INT FIRST");
        assert!(matches!(
            &specs[0],
            AlterSpecification::AddColumn {
                first: true,
                after_column: None,
                ..
            }
        ));
        let specs = alter_specs("ALTER TABLE t ADD COLUMN c INT AFTER d");
        let AlterSpecification::AddColumn {
            first,
            after_column,
            ..
        } = &specs[0]
        else {
            panic!("expected ADD COLUMN");
        };
        assert!(!first);
        assert_eq!(after_column, &Some(Identifier::new("d")));
    }

    #[test]
    fn test_alter_many_specifications() {
        let specs = alter_specs(
            "ALTER TABLE t DROP COLUMN a, ADD INDEX idx (b(10) DESC), MODIFY c VARCHAR(20) NOT NULL, \
             CHANGE d e BIGINT, RENAME TO u, ALGORITHM = INPLACE, DROP FOREIGN KEY fk",
        );
        assert_eq!(specs.len(), 7);
        assert!(matches!(specs[1], AlterSpecification::AddIndex(_)));
        let AlterSpecification::ModifyColumn { definition, .. } = &specs[2] else {
            panic!("expected MODIFY");
        };
        assert_eq!(definition.data_type.name, TypeName::VarChar);
    }

    #[test]
    fn test_alter_options_only() {
        let Statement::AlterTable(alter) = parse("ALTER TABLE t ENGINE = MyISAM COMMENT = 'c'")
        else {
            panic!("expected ALTER TABLE");
        };
        assert!(alter.specifications.is_empty());
        assert_eq!(alter.options.engine, Some(Identifier::new("MyISAM")));
    }

    #[test]
    fn test_alter_unknown_specification() {
        let err = Parser::new("ALTER TABLE t FROBNICATE")
            .parse_statement()
            .unwrap_err();
        assert_eq!(
            err.message,
            "Unknown ALTER TABLE specification: FROBNICATE"
        );
    }

    #[test]
    fn test_alter_event_keeps_remainder() {
        let Statement::AlterEvent(event) = parse("ALTER EVENT e ON SCHEDULE EVERY 2 DAY") else {
            panic!("expected ALTER EVENT");
        };
        assert_eq!(event.remainder, "ON SCHEDULE EVERY 2 DAY");
    }

    #[test]
    fn test_create_routine() {
        let Statement::CreateRoutine(routine) = parse(
            "CREATE DEFINER = 'admin'@'%' FUNCTION f(x INT) RETURNS INT DETERMINISTIC RETURN x + 1",
        ) else {
            panic!("expected routine");
        };
        assert_eq!(routine.kind, RoutineKind::Function);
        assert_eq!(routine.params.len(), 1);
        assert_eq!(
            routine.characteristics,
            vec![RoutineCharacteristic::Deterministic(true)]
        );
        assert!(matches!(*routine.body, Statement::Return(_)));
    }

    #[test]
    fn test_create_event_schedule() {
        let Statement::CreateEvent(event) = parse(
            "CREATE EVENT e ON SCHEDULE EVERY 1 HOUR STARTS '2024-01-01' ON COMPLETION NOT PRESERVE DISABLE DO DELETE FROM log",
        ) else {
            panic!("expected event");
        };
        assert!(matches!(event.schedule, EventSchedule::Every { starts: Some(_), .. }));
        assert_eq!(event.preserve, Some(false));
        assert_eq!(event.status, Some(EventStatus::Disable));
    }

    #[test]
    fn test_or_replace_requires_view() {
        assert!(Parser::new("CREATE OR REPLACE TABLE t (a INT)")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_drop_forms() {
        assert!(matches!(
            parse("DROP TEMPORARY TABLE IF EXISTS a, b CASCADE"),
            Statement::DropTable(DropTable {
                temporary: true,
                if_exists: true,
                behavior: Some(DropBehavior::Cascade),
                ..
            })
        ));
        assert!(matches!(
            parse("DROP PREPARE stmt"),
            Statement::Deallocate(Deallocate { drop: true, .. })
        ));
    }
}
