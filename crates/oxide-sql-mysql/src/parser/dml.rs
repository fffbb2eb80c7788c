//! SELECT, UNION, INSERT, REPLACE, UPDATE, DELETE and CALL.

use super::{ParseError, Parser, Result};
use crate::ast::{
    Assignment, Call, Delete, Expr, FromClause, GroupBy, Identifier, IndexHint,
    IndexHintAction, IndexHintScope, Insert, InsertPriority, InsertSource, Join, JoinCondition,
    JoinKind, Limit, LockClause, OrderByItem, QueryExpr, Select, SelectItem, SelectOptions,
    SetQuantifier, SortDirection, Statement, TableReference, Union, UnionBranch, Update,
};
use crate::lexer::{Keyword, TokenKind};

/// One operand of a UNION chain as written.
struct QueryTerm {
    query: QueryExpr,
    parenthesized: bool,
}

impl Parser<'_> {
    // ===================================================================
    // Queries
    // ===================================================================

    /// Parses a SELECT or UNION chain, possibly parenthesised. The current
    /// token is `SELECT` or `(`.
    pub(super) fn parse_query(&mut self) -> Result<QueryExpr> {
        self.nested(Self::parse_query_chain)
    }

    fn parse_query_chain(&mut self) -> Result<QueryExpr> {
        let first = self.parse_query_term()?;
        if !self.check_keyword(Keyword::Union) {
            if !first.parenthesized
                || !(self.check_keyword(Keyword::Order) || self.check_keyword(Keyword::Limit))
            {
                return Ok(first.query);
            }
            // `(SELECT ..) ORDER BY ..`: the clauses belong to a one-branch union
            let first = self.into_branch(first)?;
            let (order_by, limit) = self.parse_union_tail()?;
            return Ok(QueryExpr::Union(Box::new(Union {
                first,
                rest: Vec::new(),
                order_by,
                limit,
            })));
        }

        let mut last_parenthesized = first.parenthesized;
        let first = self.into_branch(first)?;
        if !last_parenthesized && (!first.order_by.is_empty() || first.limit.is_some()) {
            return Err(ParseError::union_order_by(self.span()));
        }

        let mut rest: Vec<UnionBranch> = Vec::new();
        while self.consume_keyword(Keyword::Union) {
            if let Some(previous) = rest.last() {
                if !last_parenthesized
                    && (!previous.select.order_by.is_empty() || previous.select.limit.is_some())
                {
                    return Err(ParseError::union_order_by(self.span()));
                }
            }
            let all = if self.consume_keyword(Keyword::All) {
                true
            } else {
                self.consume_keyword(Keyword::Distinct);
                false
            };
            let term = self.parse_query_term()?;
            last_parenthesized = term.parenthesized;
            let select = self.into_branch(term)?;
            rest.push(UnionBranch { all, select });
        }

        let (order_by, limit) = if last_parenthesized {
            self.parse_union_tail()?
        } else {
            // clauses after an unparenthesised last branch apply to the union
            let last = rest
                .last_mut()
                .map(|branch| &mut branch.select)
                .ok_or_else(|| self.error_expected("SELECT"))?;
            (core::mem::take(&mut last.order_by), last.limit.take())
        };

        Ok(QueryExpr::Union(Box::new(Union {
            first,
            rest,
            order_by,
            limit,
        })))
    }

    fn parse_query_term(&mut self) -> Result<QueryTerm> {
        if self.consume(&TokenKind::LeftParen) {
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(QueryTerm {
                query,
                parenthesized: true,
            });
        }
        let select = self.parse_select()?;
        Ok(QueryTerm {
            query: QueryExpr::Select(Box::new(select)),
            parenthesized: false,
        })
    }

    fn into_branch(&self, term: QueryTerm) -> Result<Select> {
        match term.query {
            QueryExpr::Select(select) => Ok(*select),
            QueryExpr::Union(_) => Err(ParseError::new(
                "Incorrect usage of UNION: a parenthesised union cannot be combined further",
                self.span(),
            )),
        }
    }

    fn parse_union_tail(&mut self) -> Result<(Vec<OrderByItem>, Option<Limit>)> {
        let order_by = self.parse_optional_order_by()?;
        let limit = self.parse_optional_limit()?;
        Ok((order_by, limit))
    }

    /// Parses one SELECT block including its ORDER BY, LIMIT and locking
    /// clauses.
    pub(super) fn parse_select(&mut self) -> Result<Select> {
        self.expect_keyword(Keyword::Select)?;
        let options = self.parse_select_options();
        let items = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.consume_keyword(Keyword::From) {
            if self.consume_keyword(Keyword::Dual) {
                Some(FromClause::Dual)
            } else {
                Some(FromClause::Tables(self.parse_table_references()?))
            }
        } else {
            None
        };

        let where_clause = self.parse_optional_where()?;

        let group_by = if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            let items = self.parse_order_by_items()?;
            let with_rollup = if self.consume_keyword(Keyword::With) {
                self.expect_word("ROLLUP")?;
                true
            } else {
                false
            };
            Some(GroupBy { items, with_rollup })
        } else {
            None
        };

        let having = if self.consume_keyword(Keyword::Having) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let order_by = self.parse_optional_order_by()?;
        let limit = self.parse_optional_limit()?;

        let lock = if self.consume_keyword(Keyword::For) {
            self.expect_keyword(Keyword::Update)?;
            Some(LockClause::ForUpdate)
        } else if self.consume_keyword(Keyword::Lock) {
            self.expect_keyword(Keyword::In)?;
            self.expect_word("SHARE")?;
            self.expect_word("MODE")?;
            Some(LockClause::ShareMode)
        } else {
            None
        };

        Ok(Select {
            options,
            items,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            lock,
        })
    }

    fn parse_select_options(&mut self) -> SelectOptions {
        let mut options = SelectOptions::default();
        loop {
            match self.current().as_keyword() {
                Some(Keyword::All) => options.quantifier = Some(SetQuantifier::All),
                Some(Keyword::Distinct) => options.quantifier = Some(SetQuantifier::Distinct),
                Some(Keyword::Distinctrow) => {
                    options.quantifier = Some(SetQuantifier::DistinctRow);
                }
                Some(Keyword::HighPriority) => options.high_priority = true,
                Some(Keyword::StraightJoin) => options.straight_join = true,
                Some(Keyword::SqlSmallResult) => options.sql_small_result = true,
                Some(Keyword::SqlBigResult) => options.sql_big_result = true,
                Some(Keyword::SqlCalcFoundRows) => options.sql_calc_found_rows = true,
                _ => match self.current_word().as_deref() {
                    Some("SQL_BUFFER_RESULT") => options.sql_buffer_result = true,
                    Some("SQL_CACHE") => options.sql_cache = Some(true),
                    Some("SQL_NO_CACHE") => options.sql_cache = Some(false),
                    _ => break,
                },
            }
            self.advance();
        }
        options
    }

    fn parse_select_item(&mut self) -> Result<SelectItem> {
        if self.consume(&TokenKind::Star) {
            return Ok(SelectItem {
                expr: Expr::Identifier(Identifier::wildcard(None)),
                alias: None,
            });
        }
        let expr = self.parse_expression()?;
        let alias = self.parse_alias()?;
        Ok(SelectItem { expr, alias })
    }

    /// `[AS] alias` after a select item or table reference.
    fn parse_alias(&mut self) -> Result<Option<Identifier>> {
        if self.consume_keyword(Keyword::As) {
            if let TokenKind::String(text) = self.kind() {
                let alias = Identifier::new(text.clone());
                self.advance();
                return Ok(Some(alias));
            }
            return self.expect_identifier().map(Some);
        }
        match self.kind() {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => {
                self.expect_identifier().map(Some)
            }
            TokenKind::String(text) => {
                let alias = Identifier::new(text.clone());
                self.advance();
                Ok(Some(alias))
            }
            _ => Ok(None),
        }
    }

    pub(super) fn parse_optional_where(&mut self) -> Result<Option<Expr>> {
        if self.consume_keyword(Keyword::Where) {
            Ok(Some(self.parse_expression()?))
        } else {
            Ok(None)
        }
    }

    fn parse_optional_order_by(&mut self) -> Result<Vec<OrderByItem>> {
        if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_items()
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses `expr [ASC | DESC], ..`.
    pub(super) fn parse_order_by_items(&mut self) -> Result<Vec<OrderByItem>> {
        self.parse_comma_separated(|p| {
            let expr = p.parse_expression()?;
            let direction = if p.consume_keyword(Keyword::Asc) {
                Some(SortDirection::Asc)
            } else if p.consume_keyword(Keyword::Desc) {
                Some(SortDirection::Desc)
            } else {
                None
            };
            Ok(OrderByItem { expr, direction })
        })
    }

    // ===================================================================
    // Table references
    // ===================================================================

    /// Parses a comma-separated FROM list.
    pub(super) fn parse_table_references(&mut self) -> Result<Vec<TableReference>> {
        self.parse_comma_separated(Self::parse_table_reference)
    }

    /// Parses one table reference with its left-associative join chain.
    fn parse_table_reference(&mut self) -> Result<TableReference> {
        self.chained(Self::parse_join_chain)
    }

    fn parse_join_chain(&mut self) -> Result<TableReference> {
        let mut left = self.parse_table_factor()?;
        while let Some(kind) = self.parse_join_kind()? {
            self.chain_operator()?;
            let (right, condition) = match kind {
                JoinKind::Left | JoinKind::Right => self.parse_outer_join_rhs()?,
                JoinKind::Natural | JoinKind::NaturalLeft | JoinKind::NaturalRight => {
                    (self.parse_table_factor()?, None)
                }
                JoinKind::Inner | JoinKind::Cross | JoinKind::Straight => {
                    let right = self.parse_table_factor()?;
                    (right, self.parse_join_condition()?)
                }
            };
            left = TableReference::Join(Box::new(Join {
                left,
                kind,
                right,
                condition,
            }));
        }
        Ok(left)
    }

    /// Consumes a join operator if one follows.
    fn parse_join_kind(&mut self) -> Result<Option<JoinKind>> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Join) => JoinKind::Inner,
            Some(Keyword::Inner) => {
                self.advance();
                JoinKind::Inner
            }
            Some(Keyword::Cross) => {
                self.advance();
                JoinKind::Cross
            }
            Some(Keyword::StraightJoin) => {
                self.advance();
                return Ok(Some(JoinKind::Straight));
            }
            Some(Keyword::Left) => {
                self.advance();
                self.consume_keyword(Keyword::Outer);
                JoinKind::Left
            }
            Some(Keyword::Right) => {
                self.advance();
                self.consume_keyword(Keyword::Outer);
                JoinKind::Right
            }
            Some(Keyword::Natural) => {
                self.advance();
                let kind = if self.consume_keyword(Keyword::Left) {
                    JoinKind::NaturalLeft
                } else if self.consume_keyword(Keyword::Right) {
                    JoinKind::NaturalRight
                } else {
                    JoinKind::Natural
                };
                if kind != JoinKind::Natural {
                    self.consume_keyword(Keyword::Outer);
                }
                kind
            }
            _ => return Ok(None),
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(kind))
    }

    /// Right operand of `LEFT|RIGHT JOIN`: a factor followed by any inner
    /// joins, then a mandatory condition. When the condition was consumed
    /// by the last inner join it is moved up to the outer join.
    fn parse_outer_join_rhs(&mut self) -> Result<(TableReference, Option<JoinCondition>)> {
        let mut right = self.parse_table_factor()?;
        while matches!(
            self.current().as_keyword(),
            Some(Keyword::Join | Keyword::Inner | Keyword::Cross | Keyword::StraightJoin)
        ) {
            let Some(kind) = self.parse_join_kind()? else {
                break;
            };
            self.chain_operator()?;
            let factor = self.parse_table_factor()?;
            let condition = self.parse_join_condition()?;
            right = TableReference::Join(Box::new(Join {
                left: right,
                kind,
                right: factor,
                condition,
            }));
        }

        if let Some(condition) = self.parse_join_condition()? {
            return Ok((right, Some(condition)));
        }
        if let TableReference::Join(join) = &mut right {
            if let Some(condition) = join.condition.take() {
                return Ok((right, Some(condition)));
            }
        }
        Err(self.error_expected("ON or USING"))
    }

    fn parse_join_condition(&mut self) -> Result<Option<JoinCondition>> {
        if self.consume_keyword(Keyword::On) {
            Ok(Some(JoinCondition::On(self.parse_expression()?)))
        } else if self.consume_keyword(Keyword::Using) {
            Ok(Some(JoinCondition::Using(self.parse_identifier_list()?)))
        } else {
            Ok(None)
        }
    }

    fn parse_table_factor(&mut self) -> Result<TableReference> {
        if self.consume(&TokenKind::LeftParen) {
            if self.query_ahead() {
                let subquery = self.parse_query()?;
                self.expect(&TokenKind::RightParen)?;
                let alias = self.parse_alias()?;
                return Ok(TableReference::Derived {
                    subquery: Box::new(subquery),
                    alias,
                });
            }
            let mut references = self.nested(Self::parse_table_references)?;
            self.expect(&TokenKind::RightParen)?;
            if references.len() == 1 {
                if let Some(reference) = references.pop() {
                    return Ok(reference);
                }
            }
            return Ok(TableReference::Nested(references));
        }

        let name = self.parse_qualified_identifier()?;
        let alias = self.parse_alias()?;
        let hints = self.parse_index_hints()?;
        Ok(TableReference::Table { name, alias, hints })
    }

    fn parse_index_hints(&mut self) -> Result<Vec<IndexHint>> {
        let mut hints = Vec::new();
        loop {
            let action = match self.current().as_keyword() {
                Some(Keyword::Use) => IndexHintAction::Use,
                Some(Keyword::Ignore) => IndexHintAction::Ignore,
                Some(Keyword::Force) => IndexHintAction::Force,
                _ => break,
            };
            self.advance();
            if !(self.consume_keyword(Keyword::Index) || self.consume_keyword(Keyword::Key)) {
                self.tokens.push_back();
                break;
            }
            let scope = if self.consume_keyword(Keyword::For) {
                if self.consume_keyword(Keyword::Join) {
                    Some(IndexHintScope::Join)
                } else if self.consume_keyword(Keyword::Order) {
                    self.expect_keyword(Keyword::By)?;
                    Some(IndexHintScope::OrderBy)
                } else {
                    self.expect_keyword(Keyword::Group)?;
                    self.expect_keyword(Keyword::By)?;
                    Some(IndexHintScope::GroupBy)
                }
            } else {
                None
            };
            self.expect(&TokenKind::LeftParen)?;
            let indexes = if self.check(&TokenKind::RightParen) {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_index_name)?
            };
            self.expect(&TokenKind::RightParen)?;
            hints.push(IndexHint {
                action,
                scope,
                indexes,
            });
        }
        Ok(hints)
    }

    /// An index name; `PRIMARY` is accepted.
    pub(super) fn parse_index_name(&mut self) -> Result<Identifier> {
        if self.consume_keyword(Keyword::Primary) {
            return Ok(Identifier::new("PRIMARY"));
        }
        self.expect_identifier()
    }

    // ===================================================================
    // INSERT / REPLACE
    // ===================================================================

    pub(super) fn parse_insert(&mut self) -> Result<Statement> {
        let replace = if self.consume_keyword(Keyword::Replace) {
            true
        } else {
            self.expect_keyword(Keyword::Insert)?;
            false
        };

        let priority = if self.consume_keyword(Keyword::LowPriority) {
            Some(InsertPriority::LowPriority)
        } else if self.consume_keyword(Keyword::Delayed) {
            Some(InsertPriority::Delayed)
        } else if self.consume_keyword(Keyword::HighPriority) {
            Some(InsertPriority::HighPriority)
        } else {
            None
        };
        let ignore = self.consume_keyword(Keyword::Ignore);
        self.consume_keyword(Keyword::Into);
        let table = self.parse_qualified_identifier()?;

        let mut columns = Vec::new();
        if self.consume(&TokenKind::LeftParen) {
            if self.check_keyword(Keyword::Select) || self.check(&TokenKind::LeftParen) {
                // `INSERT INTO t (SELECT ..)`
                self.tokens.push_back();
            } else if !self.consume(&TokenKind::RightParen) {
                columns = self.parse_comma_separated(Self::parse_qualified_identifier)?;
                self.expect(&TokenKind::RightParen)?;
            }
        }

        let source = if self.consume_keyword(Keyword::Values) || self.consume_word("VALUE") {
            InsertSource::Values(self.parse_comma_separated(Self::parse_value_row)?)
        } else if self.consume_keyword(Keyword::Set) {
            InsertSource::Set(self.parse_assignments()?)
        } else if self.check_keyword(Keyword::Select) || self.check(&TokenKind::LeftParen) {
            InsertSource::Query(Box::new(self.parse_query()?))
        } else {
            return Err(self.error_expected("VALUES, SET or SELECT"));
        };

        let on_duplicate = if self.consume_keyword(Keyword::On) {
            self.expect_word("DUPLICATE")?;
            self.expect_keyword(Keyword::Key)?;
            self.expect_keyword(Keyword::Update)?;
            self.parse_assignments()?
        } else {
            Vec::new()
        };

        Ok(Statement::Insert(Insert {
            replace,
            priority,
            ignore,
            table,
            columns,
            source,
            on_duplicate,
        }))
    }

    fn parse_value_row(&mut self) -> Result<Vec<Expr>> {
        self.expect(&TokenKind::LeftParen)?;
        if self.consume(&TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let row = self.parse_expression_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(row)
    }

    /// Parses `col = expr, ..`.
    pub(super) fn parse_assignments(&mut self) -> Result<Vec<Assignment>> {
        self.parse_comma_separated(|p| {
            let column = p.parse_qualified_identifier()?;
            if !(p.consume(&TokenKind::Eq) || p.consume(&TokenKind::Assign)) {
                return Err(p.error_expected("'='"));
            }
            let value = p.parse_expression()?;
            Ok(Assignment { column, value })
        })
    }

    // ===================================================================
    // UPDATE / DELETE / CALL
    // ===================================================================

    pub(super) fn parse_update(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Update)?;
        let low_priority = self.consume_keyword(Keyword::LowPriority);
        let ignore = self.consume_keyword(Keyword::Ignore);
        let tables = self.parse_table_references()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_assignments()?;
        let where_clause = self.parse_optional_where()?;
        let order_by = self.parse_optional_order_by()?;
        let limit = self.parse_optional_limit()?;
        Ok(Statement::Update(Update {
            low_priority,
            ignore,
            tables,
            assignments,
            where_clause,
            order_by,
            limit,
        }))
    }

    pub(super) fn parse_delete(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Delete)?;
        let low_priority = self.consume_keyword(Keyword::LowPriority);
        let quick = self.consume_word("QUICK");
        let ignore = self.consume_keyword(Keyword::Ignore);

        let (targets, using, tables) = if self.consume_keyword(Keyword::From) {
            let mut names = self.parse_comma_separated(Self::parse_qualified_wildcard)?;
            if self.consume_keyword(Keyword::Using) {
                let targets = self.delete_targets(names)?;
                (targets, true, self.parse_table_references()?)
            } else if names.len() == 1 {
                match names.pop() {
                    Some(name) if !name.is_wildcard() => {
                        (Vec::new(), false, vec![TableReference::table(name)])
                    }
                    _ => {
                        return Err(ParseError::new(
                            "Incorrect usage of table.*: only a multi-table DELETE names targets",
                            self.span(),
                        ))
                    }
                }
            } else {
                return Err(self.error_expected("USING"));
            }
        } else {
            let names = self.parse_comma_separated(Self::parse_qualified_wildcard)?;
            let targets = self.delete_targets(names)?;
            self.expect_keyword(Keyword::From)?;
            (targets, false, self.parse_table_references()?)
        };

        let where_clause = self.parse_optional_where()?;
        let order_by = self.parse_optional_order_by()?;
        let limit = self.parse_optional_limit()?;
        Ok(Statement::Delete(Delete {
            low_priority,
            quick,
            ignore,
            targets,
            using,
            tables,
            where_clause,
            order_by,
            limit,
        }))
    }

    /// Strips the `.*` of `t.*` targets in a multi-table DELETE.
    fn delete_targets(&self, names: Vec<Identifier>) -> Result<Vec<Identifier>> {
        names
            .into_iter()
            .map(|name| match name.parent {
                Some(parent) if name.is_wildcard() => Ok(*parent),
                _ if name.is_wildcard() => Err(self.error_expected("table name")),
                _ => Ok(name),
            })
            .collect()
    }

    pub(super) fn parse_call(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Call)?;
        let procedure = self.parse_qualified_identifier()?;
        let mut args = Vec::new();
        if self.consume(&TokenKind::LeftParen) {
            if !self.check(&TokenKind::RightParen) {
                args = self.parse_expression_list()?;
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(Statement::Call(Call { procedure, args }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LimitValue;

    fn query(sql: &str) -> QueryExpr {
        match Parser::new(sql).parse_statement().unwrap() {
            Statement::Query(query) => query,
            other => panic!("expected query, got {other:?}"),
        }
    }

    #[test]
    fn test_union_order_by_goes_to_union() {
        let QueryExpr::Union(union) = query("SELECT 1 UNION SELECT 2 ORDER BY 1") else {
            panic!("expected union");
        };
        assert_eq!(union.order_by.len(), 1);
        assert!(union.rest[0].select.order_by.is_empty());
    }

    #[test]
    fn test_parenthesised_branch_keeps_order_by() {
        let QueryExpr::Union(union) = query("(SELECT 1 ORDER BY 1) UNION SELECT 2") else {
            panic!("expected union");
        };
        assert_eq!(union.first.order_by.len(), 1);
        assert!(union.order_by.is_empty());
    }

    #[test]
    fn test_order_by_on_inner_branch_fails() {
        let err = Parser::new("SELECT 1 ORDER BY 1 UNION SELECT 2")
            .parse_statement()
            .unwrap_err();
        assert!(err.message.contains("UNION"));
    }

    #[test]
    fn test_limit_forms() {
        let q = query("SELECT a FROM t LIMIT 5, 10");
        assert_eq!(
            q.as_select().unwrap().limit,
            Some(Limit {
                offset: Some(LimitValue::Number(5)),
                count: LimitValue::Number(10)
            })
        );
        let q = query("SELECT a FROM t LIMIT ? OFFSET ?");
        assert_eq!(
            q.as_select().unwrap().limit,
            Some(Limit {
                offset: Some(LimitValue::Parameter(2)),
                count: LimitValue::Parameter(1)
            })
        );
    }

    #[test]
    fn test_left_join_condition_lifted() {
        let q = query("SELECT * FROM a LEFT JOIN b JOIN c ON b.id = c.id");
        let Some(FromClause::Tables(tables)) = &q.as_select().unwrap().from else {
            panic!("expected FROM");
        };
        let TableReference::Join(join) = &tables[0] else {
            panic!("expected join");
        };
        assert_eq!(join.kind, JoinKind::Left);
        assert!(join.condition.is_some());
        let TableReference::Join(inner) = &join.right else {
            panic!("expected inner join");
        };
        assert!(inner.condition.is_none());
    }

    #[test]
    fn test_left_join_without_condition_fails() {
        assert!(Parser::new("SELECT * FROM a LEFT JOIN b")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_index_hints() {
        let q = query("SELECT * FROM t USE INDEX FOR ORDER BY (i1, PRIMARY) WHERE a = 1");
        let Some(FromClause::Tables(tables)) = &q.as_select().unwrap().from else {
            panic!("expected FROM");
        };
        let TableReference::Table { hints, .. } = &tables[0] else {
            panic!("expected table");
        };
        assert_eq!(hints[0].scope, Some(IndexHintScope::OrderBy));
        assert_eq!(hints[0].indexes.len(), 2);
    }

    #[test]
    fn test_insert_on_duplicate() {
        let stmt = Parser::new("INSERT INTO t (a, b) VALUES (1, 2), (3, DEFAULT) ON DUPLICATE KEY UPDATE b = VALUES(b)")
            .parse_statement()
            .unwrap();
        let Statement::Insert(insert) = stmt else {
            panic!("expected insert");
        };
        assert_eq!(insert.columns.len(), 2);
        let InsertSource::Values(rows) = &insert.source else {
            panic!("expected VALUES");
        };
        assert_eq!(rows[1][1], Expr::Default(None));
        assert_eq!(insert.on_duplicate.len(), 1);
    }

    #[test]
    fn test_insert_select_in_parens() {
        let stmt = Parser::new("INSERT INTO t (SELECT * FROM s)")
            .parse_statement()
            .unwrap();
        let Statement::Insert(insert) = stmt else {
            panic!("expected insert");
        };
        assert!(insert.columns.is_empty());
        assert!(matches!(insert.source, InsertSource::Query(_)));
    }

    #[test]
    fn test_delete_forms() {
        let Statement::Delete(single) = Parser::new("DELETE FROM t WHERE a = 1 LIMIT 1")
            .parse_statement()
            .unwrap()
        else {
            panic!("expected delete");
        };
        assert!(single.targets.is_empty());

        let Statement::Delete(multi) = Parser::new("DELETE FROM t1.*, t2 USING t1 JOIN t2 ON t1.a = t2.a")
            .parse_statement()
            .unwrap()
        else {
            panic!("expected delete");
        };
        assert!(multi.using);
        assert_eq!(multi.targets, vec![Identifier::new("t1"), Identifier::new("t2")]);
    }
}
