//! Rendering syntax trees back to SQL text.
//!
//! [`SqlWriter`] is a [`Visitor`] that appends the text of every node it
//! visits. Parentheses are inserted only where the precedence ladder needs
//! them, so parsing the output yields a tree equal to the one rendered.
//! Keywords are written in upper case and lists are separated by `, `.

use core::fmt;

use super::{
    AlterSpecification, Assignment, Block, CaseStatement, ColumnDefinition, ColumnFormat,
    ColumnKey, ColumnStorage, Completion, CompletionType, ConditionValue, ConditionalBranch,
    ConvertTarget, DataType, Declare, DiagnosticsArea, DiagnosticsInfo, DropBehavior,
    DuplicateHandling, EventSchedule, EventStatus, ExplainFormat, Expr, ForeignKeyDefinition,
    FromClause, HandlerAction, Identifier, If, IndexColumn, IndexDefinition,
    IndexHint, IndexHintAction, IndexHintScope, IndexKind, IndexOption, InsertMethod,
    InsertPriority, InsertSource, IsTest, JoinCondition, Limit, LimitValue, Literal, LockClause,
    OptionFlag, OrderByItem, ParamMode, PartitionNames, PrepareSource, QueryExpr, Quantifier,
    Reference, ReferenceMatch, RoutineCharacteristic, Select, SelectOptions, Set, SetQuantifier,
    Show, ShowFilter, SqlDataAccess, SqlSecurity, Statement, TableElement, TableOptions,
    TableReference, TransactionCharacteristic, TriggerEvent, TriggerOrder, TriggerTiming,
    TrimMode, UnaryOp, Union, ViewCheckOption, Visitor,
};
use crate::dialect::{Dialect, MySqlDialect};
use crate::lexer::Keyword;

static MYSQL: MySqlDialect = MySqlDialect::new();

/// Regenerates SQL text from a syntax tree.
///
/// ```
/// use oxide_sql_mysql::ast::{SqlWriter, Visitor};
/// use oxide_sql_mysql::Parser;
///
/// let statement = Parser::new("select a+1 from t where b=2").parse_statement().unwrap();
/// let mut writer = SqlWriter::mysql();
/// writer.visit_statement(&statement);
/// assert_eq!(writer.finish(), "SELECT a + 1 FROM t WHERE b = 2");
/// ```
pub struct SqlWriter<'d> {
    out: String,
    dialect: &'d dyn Dialect,
}

impl SqlWriter<'static> {
    /// Creates a writer using the MySQL dialect.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new(&MYSQL)
    }
}

impl<'d> SqlWriter<'d> {
    /// Creates a writer that spells quoted names and strings the way
    /// `dialect` does.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            out: String::new(),
            dialect,
        }
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the writer and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn number(&mut self, value: u64) {
        self.out.push_str(&value.to_string());
    }

    fn string(&mut self, value: &str) {
        let quoted = self.dialect.quote_string(value);
        self.out.push_str(&quoted);
    }

    fn list<T>(&mut self, items: &[T], mut write: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            write(self, item);
        }
    }

    fn identifiers(&mut self, identifiers: &[Identifier]) {
        self.list(identifiers, |w, id| w.visit_identifier(id));
    }

    fn parenthesized_identifiers(&mut self, identifiers: &[Identifier]) {
        self.push("(");
        self.identifiers(identifiers);
        self.push(")");
    }

    fn exprs(&mut self, exprs: &[Expr]) {
        self.list(exprs, |w, expr| w.visit_expr(expr));
    }

    /// A charset, collation or similar name. Keywords read back lower
    /// cased, so only those spellings may stay bare.
    fn name(&mut self, text: &str) {
        let bare = is_plain_word(text)
            && !text.eq_ignore_ascii_case("default")
            && (Keyword::from_str(text).is_none()
                || !text.bytes().any(|b| b.is_ascii_uppercase()));
        if bare {
            self.push(text);
        } else {
            self.string(text);
        }
    }

    /// A name in option position, where strings and reserved words are
    /// accepted in place of an identifier.
    fn option_name(&mut self, name: &Identifier) {
        if name.quoted {
            self.visit_identifier(name);
        } else {
            self.name(&name.text);
        }
    }

    fn alias(&mut self, alias: &Identifier) {
        self.push(" AS ");
        if alias.quoted || (is_plain_word(&alias.text) && Keyword::from_str(&alias.text).is_none())
        {
            self.visit_identifier(alias);
        } else {
            self.string(&alias.text);
        }
    }

    /// Writes `expr`, parenthesized when it binds looser than `min`.
    fn operand(&mut self, expr: &Expr, min: u8) {
        if expr.precedence() < min {
            self.push("(");
            self.visit_expr(expr);
            self.push(")");
        } else {
            self.visit_expr(expr);
        }
    }

    fn subquery(&mut self, query: &QueryExpr) {
        self.push("(");
        self.visit_query(query);
        self.push(")");
    }

    fn where_clause(&mut self, condition: Option<&Expr>) {
        if let Some(condition) = condition {
            self.push(" WHERE ");
            self.visit_expr(condition);
        }
    }

    fn order_by_items(&mut self, items: &[OrderByItem]) {
        self.list(items, |w, item| {
            w.visit_expr(&item.expr);
            if let Some(direction) = item.direction {
                w.push(" ");
                w.push(direction.as_str());
            }
        });
    }

    fn order_by(&mut self, items: &[OrderByItem]) {
        if !items.is_empty() {
            self.push(" ORDER BY ");
            self.order_by_items(items);
        }
    }

    fn limit_value(&mut self, value: &LimitValue) {
        match value {
            LimitValue::Number(n) => self.number(*n),
            LimitValue::Parameter(_) => self.push(self.dialect.parameter_placeholder()),
        }
    }

    /// `LIMIT offset, count` keeps marker order for literal values; two
    /// markers written in `count OFFSET offset` order stay in that order.
    fn limit(&mut self, limit: Option<&Limit>) {
        let Some(limit) = limit else {
            return;
        };
        self.push(" LIMIT ");
        match &limit.offset {
            Some(offset @ LimitValue::Parameter(o))
                if matches!(limit.count, LimitValue::Parameter(c) if c < *o) =>
            {
                self.limit_value(&limit.count);
                self.push(" OFFSET ");
                self.limit_value(offset);
            }
            Some(offset) => {
                self.limit_value(offset);
                self.push(", ");
                self.limit_value(&limit.count);
            }
            None => self.limit_value(&limit.count),
        }
    }

    fn assignments(&mut self, assignments: &[Assignment]) {
        self.list(assignments, |w, assignment| {
            w.visit_identifier(&assignment.column);
            w.push(" = ");
            w.visit_expr(&assignment.value);
        });
    }

    fn label(&mut self, label: Option<&Identifier>) {
        if let Some(label) = label {
            self.visit_identifier(label);
            self.push(": ");
        }
    }

    fn end_label(&mut self, label: Option<&Identifier>) {
        if let Some(label) = label {
            self.push(" ");
            self.visit_identifier(label);
        }
    }

    // ===================================================================
    // Expressions
    // ===================================================================

    fn literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.push("NULL"),
            Literal::Boolean(true) => self.push("TRUE"),
            Literal::Boolean(false) => self.push("FALSE"),
            Literal::Integer(n) => self.number(*n),
            Literal::Decimal(text) => self.push(text),
            Literal::String(string) => {
                if string.national {
                    self.push("N");
                } else if let Some(charset) = &string.introducer {
                    self.push("_");
                    self.push(charset);
                }
                self.string(&string.value);
            }
            Literal::Hex(digits) if digits.len() % 2 == 0 => {
                self.push("X'");
                self.push(digits);
                self.push("'");
            }
            Literal::Hex(digits) => {
                self.push("0x");
                self.push(digits);
            }
            Literal::Bit(digits) => {
                self.push("b'");
                self.push(digits);
                self.push("'");
            }
        }
    }

    fn negation(&mut self, negated: bool) {
        if negated {
            self.push(" NOT");
        }
    }

    #[allow(clippy::too_many_lines)]
    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => self.literal(literal),
            Expr::Identifier(identifier) => self.visit_identifier(identifier),
            Expr::Parameter(_) => self.push(self.dialect.parameter_placeholder()),
            Expr::UserVariable(name) => {
                self.push("@");
                self.push(name);
            }
            Expr::SystemVariable { scope, name } => {
                self.push("@@");
                if let Some(scope) = scope {
                    self.push(scope.as_str());
                    self.push(".");
                }
                self.push(name);
            }
            Expr::UserName { user, host } => {
                self.string(user);
                self.push("@");
                self.push(host);
            }
            Expr::Default(column) => {
                self.push("DEFAULT");
                if let Some(column) = column {
                    self.push("(");
                    self.visit_identifier(column);
                    self.push(")");
                }
            }
            Expr::Assignment { target, value } => {
                self.operand(target, 2);
                self.push(" := ");
                self.visit_expr(value);
            }
            Expr::Binary { left, op, right } => {
                let precedence = op.precedence();
                self.operand(left, precedence);
                self.push(" ");
                self.push(op.as_str());
                self.push(" ");
                self.operand(right, precedence + 1);
            }
            Expr::Unary { op, expr } => {
                self.push(op.as_str());
                // `- -a`, never the comment opener `--`
                if is_sign(*op) && matches!(**expr, Expr::Unary { op: inner, .. } if is_sign(inner)) {
                    self.push(" ");
                }
                self.operand(expr, 13);
            }
            Expr::Not(operand) => {
                self.push("NOT ");
                self.operand(operand, 5);
            }
            Expr::Quantified {
                left,
                op,
                quantifier,
                subquery,
            } => {
                self.operand(left, 6);
                self.push(" ");
                self.push(op.as_str());
                self.push(match quantifier {
                    Quantifier::Any => " ANY ",
                    Quantifier::Some => " SOME ",
                    Quantifier::All => " ALL ",
                });
                self.subquery(subquery);
            }
            Expr::Is {
                expr,
                negated,
                test,
            } => {
                self.operand(expr, 6);
                self.push(" IS");
                self.negation(*negated);
                self.push(match test {
                    IsTest::Null => " NULL",
                    IsTest::True => " TRUE",
                    IsTest::False => " FALSE",
                    IsTest::Unknown => " UNKNOWN",
                });
            }
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                self.operand(expr, 6);
                self.negation(*negated);
                self.push(" BETWEEN ");
                self.operand(low, 7);
                self.push(" AND ");
                self.operand(high, 7);
            }
            Expr::Like {
                expr,
                negated,
                pattern,
                escape,
            } => {
                self.operand(expr, 6);
                self.negation(*negated);
                self.push(" LIKE ");
                self.operand(pattern, 7);
                if let Some(escape) = escape {
                    self.push(" ESCAPE ");
                    self.operand(escape, 7);
                }
            }
            Expr::Regexp {
                expr,
                negated,
                pattern,
            } => {
                self.operand(expr, 6);
                self.negation(*negated);
                self.push(" REGEXP ");
                self.operand(pattern, 7);
            }
            Expr::SoundsLike { left, right } => {
                self.operand(left, 6);
                self.push(" SOUNDS LIKE ");
                self.operand(right, 7);
            }
            Expr::InList {
                expr,
                negated,
                list,
            } => {
                self.operand(expr, 6);
                self.negation(*negated);
                self.push(" IN (");
                self.exprs(list);
                self.push(")");
            }
            Expr::InSubquery {
                expr,
                negated,
                subquery,
            } => {
                self.operand(expr, 6);
                self.negation(*negated);
                self.push(" IN ");
                self.subquery(subquery);
            }
            Expr::Exists(subquery) => {
                self.push("EXISTS ");
                self.subquery(subquery);
            }
            Expr::Subquery(subquery) => self.subquery(subquery),
            Expr::Row(items) => {
                if items.len() < 2 {
                    self.push("ROW");
                }
                self.push("(");
                self.exprs(items);
                self.push(")");
            }
            Expr::Case {
                operand,
                when_clauses,
                else_result,
            } => {
                self.push("CASE");
                if let Some(operand) = operand {
                    self.push(" ");
                    self.visit_expr(operand);
                }
                for clause in when_clauses {
                    self.push(" WHEN ");
                    self.visit_expr(&clause.condition);
                    self.push(" THEN ");
                    self.visit_expr(&clause.result);
                }
                if let Some(else_result) = else_result {
                    self.push(" ELSE ");
                    self.visit_expr(else_result);
                }
                self.push(" END");
            }
            Expr::Collate { expr, collation } => {
                self.operand(expr, 14);
                self.push(" COLLATE ");
                self.name(collation);
            }
            Expr::Interval { value, unit } => {
                self.push("INTERVAL ");
                // a leading parenthesis would read as the INTERVAL() function
                if value.precedence() < 13 || matches!(**value, Expr::Row(_) | Expr::Subquery(_))
                {
                    self.push("(");
                    self.visit_expr(value);
                    self.push(")");
                } else {
                    self.visit_expr(value);
                }
                self.push(" ");
                self.push(unit.as_str());
            }
            Expr::Function(call) => {
                self.visit_function_name(&call.name);
                self.push("(");
                self.exprs(&call.args);
                self.push(")");
            }
            Expr::Aggregate {
                func,
                distinct,
                args,
            } => {
                self.push(func.as_str());
                self.push("(");
                if *distinct {
                    self.push("DISTINCT ");
                }
                self.exprs(args);
                self.push(")");
            }
            Expr::GroupConcat {
                distinct,
                args,
                order_by,
                separator,
            } => {
                self.push("GROUP_CONCAT(");
                if *distinct {
                    self.push("DISTINCT ");
                }
                self.exprs(args);
                self.order_by(order_by);
                if let Some(separator) = separator {
                    self.push(" SEPARATOR ");
                    self.string(separator);
                }
                self.push(")");
            }
            Expr::Cast { expr, target } => {
                self.push("CAST(");
                self.visit_expr(expr);
                self.push(" AS ");
                self.cast_type(target);
                self.push(")");
            }
            Expr::Convert { expr, target } => {
                self.push("CONVERT(");
                self.visit_expr(expr);
                match target {
                    ConvertTarget::Type(target) => {
                        self.push(", ");
                        self.cast_type(target);
                    }
                    ConvertTarget::Charset(charset) => {
                        self.push(" USING ");
                        self.name(charset);
                    }
                }
                self.push(")");
            }
            Expr::Char { args, charset } => {
                self.push("CHAR(");
                self.exprs(args);
                if let Some(charset) = charset {
                    self.push(" USING ");
                    self.name(charset);
                }
                self.push(")");
            }
            Expr::Trim { mode, remove, expr } => {
                self.push("TRIM(");
                if let Some(mode) = mode {
                    self.push(match mode {
                        TrimMode::Both => "BOTH ",
                        TrimMode::Leading => "LEADING ",
                        TrimMode::Trailing => "TRAILING ",
                    });
                }
                if let Some(remove) = remove {
                    self.visit_expr(remove);
                    self.push(" ");
                }
                if mode.is_some() || remove.is_some() {
                    self.push("FROM ");
                }
                self.visit_expr(expr);
                self.push(")");
            }
            Expr::Substring { expr, from, length } => {
                self.push("SUBSTRING(");
                self.visit_expr(expr);
                self.push(", ");
                self.visit_expr(from);
                if let Some(length) = length {
                    self.push(", ");
                    self.visit_expr(length);
                }
                self.push(")");
            }
            Expr::Extract { unit, expr } => {
                self.push("EXTRACT(");
                self.push(unit.as_str());
                self.push(" FROM ");
                self.visit_expr(expr);
                self.push(")");
            }
            Expr::TimestampAdd {
                unit,
                interval,
                expr,
            } => {
                self.push("TIMESTAMPADD(");
                self.push(unit.as_str());
                self.push(", ");
                self.visit_expr(interval);
                self.push(", ");
                self.visit_expr(expr);
                self.push(")");
            }
            Expr::TimestampDiff { unit, start, end } => {
                self.push("TIMESTAMPDIFF(");
                self.push(unit.as_str());
                self.push(", ");
                self.visit_expr(start);
                self.push(", ");
                self.visit_expr(end);
                self.push(")");
            }
            Expr::Position { needle, haystack } => {
                self.push("POSITION(");
                self.visit_expr(needle);
                self.push(" IN ");
                self.visit_expr(haystack);
                self.push(")");
            }
            Expr::GetFormat { kind, format } => {
                self.push("GET_FORMAT(");
                self.push(kind);
                self.push(", ");
                self.visit_expr(format);
                self.push(")");
            }
            Expr::Temporal { func, precision } => {
                self.push(func.as_str());
                self.push("(");
                if let Some(precision) = precision {
                    self.number(*precision);
                }
                self.push(")");
            }
            Expr::Match {
                columns,
                against,
                modifier,
            } => {
                self.push("MATCH ");
                self.parenthesized_identifiers(columns);
                self.push(" AGAINST (");
                self.visit_expr(against);
                if let Some(modifier) = modifier {
                    self.push(" ");
                    self.push(modifier.as_str());
                }
                self.push(")");
            }
        }
    }

    fn cast_type(&mut self, target: &super::CastType) {
        self.push(target.kind.as_str());
        if let Some(length) = target.length {
            self.push("(");
            self.number(length);
            if let Some(scale) = target.scale {
                self.push(", ");
                self.number(scale);
            }
            self.push(")");
        }
        if let Some(charset) = &target.charset {
            self.push(" CHARACTER SET ");
            self.name(charset);
        }
    }

    // ===================================================================
    // Queries
    // ===================================================================

    fn select_options(&mut self, options: &SelectOptions) {
        if let Some(quantifier) = options.quantifier {
            self.push(match quantifier {
                SetQuantifier::All => " ALL",
                SetQuantifier::Distinct => " DISTINCT",
                SetQuantifier::DistinctRow => " DISTINCTROW",
            });
        }
        let flags = [
            (options.high_priority, " HIGH_PRIORITY"),
            (options.straight_join, " STRAIGHT_JOIN"),
            (options.sql_small_result, " SQL_SMALL_RESULT"),
            (options.sql_big_result, " SQL_BIG_RESULT"),
            (options.sql_buffer_result, " SQL_BUFFER_RESULT"),
            (options.sql_cache == Some(true), " SQL_CACHE"),
            (options.sql_cache == Some(false), " SQL_NO_CACHE"),
            (options.sql_calc_found_rows, " SQL_CALC_FOUND_ROWS"),
        ];
        for (set, text) in flags {
            if set {
                self.push(text);
            }
        }
    }

    fn union_branch(&mut self, select: &Select) {
        if select.has_trailing_clauses() {
            self.push("(");
            self.visit_select(select);
            self.push(")");
        } else {
            self.visit_select(select);
        }
    }

    fn union(&mut self, union: &Union) {
        if union.rest.is_empty() {
            self.push("(");
            self.visit_select(&union.first);
            self.push(")");
        } else {
            self.union_branch(&union.first);
        }
        for branch in &union.rest {
            self.push(if branch.all { " UNION ALL " } else { " UNION " });
            self.union_branch(&branch.select);
        }
        self.order_by(&union.order_by);
        self.limit(union.limit.as_ref());
    }

    fn index_hint(&mut self, hint: &IndexHint) {
        self.push(match hint.action {
            IndexHintAction::Use => " USE INDEX",
            IndexHintAction::Ignore => " IGNORE INDEX",
            IndexHintAction::Force => " FORCE INDEX",
        });
        if let Some(scope) = hint.scope {
            self.push(match scope {
                IndexHintScope::Join => " FOR JOIN",
                IndexHintScope::OrderBy => " FOR ORDER BY",
                IndexHintScope::GroupBy => " FOR GROUP BY",
            });
        }
        self.push(" ");
        self.parenthesized_identifiers(&hint.indexes);
    }

    fn table_references(&mut self, tables: &[TableReference]) {
        self.list(tables, |w, table| w.visit_table_reference(table));
    }

    // ===================================================================
    // DML
    // ===================================================================

    fn insert(&mut self, insert: &super::Insert) {
        self.push(if insert.replace { "REPLACE" } else { "INSERT" });
        if let Some(priority) = insert.priority {
            self.push(match priority {
                InsertPriority::LowPriority => " LOW_PRIORITY",
                InsertPriority::Delayed => " DELAYED",
                InsertPriority::HighPriority => " HIGH_PRIORITY",
            });
        }
        if insert.ignore {
            self.push(" IGNORE");
        }
        self.push(" INTO ");
        self.visit_identifier(&insert.table);
        if !insert.columns.is_empty() {
            self.push(" ");
            self.parenthesized_identifiers(&insert.columns);
        }
        match &insert.source {
            InsertSource::Values(rows) => {
                self.push(" VALUES ");
                self.list(rows, |w, row| {
                    w.push("(");
                    w.exprs(row);
                    w.push(")");
                });
            }
            InsertSource::Set(assignments) => {
                self.push(" SET ");
                self.assignments(assignments);
            }
            InsertSource::Query(query) => {
                self.push(" ");
                self.visit_query(query);
            }
        }
        if !insert.on_duplicate.is_empty() {
            self.push(" ON DUPLICATE KEY UPDATE ");
            self.assignments(&insert.on_duplicate);
        }
    }

    fn update(&mut self, update: &super::Update) {
        self.push("UPDATE ");
        if update.low_priority {
            self.push("LOW_PRIORITY ");
        }
        if update.ignore {
            self.push("IGNORE ");
        }
        self.table_references(&update.tables);
        self.push(" SET ");
        self.assignments(&update.assignments);
        self.where_clause(update.where_clause.as_ref());
        self.order_by(&update.order_by);
        self.limit(update.limit.as_ref());
    }

    fn delete(&mut self, delete: &super::Delete) {
        self.push("DELETE ");
        if delete.low_priority {
            self.push("LOW_PRIORITY ");
        }
        if delete.quick {
            self.push("QUICK ");
        }
        if delete.ignore {
            self.push("IGNORE ");
        }
        if delete.targets.is_empty() {
            self.push("FROM ");
        } else if delete.using {
            self.push("FROM ");
            self.identifiers(&delete.targets);
            self.push(" USING ");
        } else {
            self.identifiers(&delete.targets);
            self.push(" FROM ");
        }
        self.table_references(&delete.tables);
        self.where_clause(delete.where_clause.as_ref());
        self.order_by(&delete.order_by);
        self.limit(delete.limit.as_ref());
    }

    // ===================================================================
    // DDL
    // ===================================================================

    fn definer(&mut self, definer: Option<&Expr>) {
        if let Some(definer) = definer {
            self.push("DEFINER = ");
            self.visit_expr(definer);
            self.push(" ");
        }
    }

    fn if_exists(&mut self, if_exists: bool) {
        if if_exists {
            self.push("IF EXISTS ");
        }
    }

    fn if_not_exists(&mut self, if_not_exists: bool) {
        if if_not_exists {
            self.push("IF NOT EXISTS ");
        }
    }

    fn drop_behavior(&mut self, behavior: Option<DropBehavior>) {
        match behavior {
            Some(DropBehavior::Restrict) => self.push(" RESTRICT"),
            Some(DropBehavior::Cascade) => self.push(" CASCADE"),
            None => {}
        }
    }

    fn column_position(&mut self, first: bool, after: Option<&Identifier>) {
        if first {
            self.push(" FIRST");
        } else if let Some(after) = after {
            self.push(" AFTER ");
            self.visit_identifier(after);
        }
    }

    fn column(&mut self, name: &Identifier, definition: &ColumnDefinition) {
        self.visit_identifier(name);
        self.push(" ");
        self.visit_column_definition(definition);
    }

    fn key_parts(&mut self, columns: &[IndexColumn]) {
        self.push("(");
        self.list(columns, |w, column| {
            w.visit_identifier(&column.name);
            if let Some(length) = column.length {
                w.push("(");
                w.number(length);
                w.push(")");
            }
            if let Some(direction) = column.direction {
                w.push(" ");
                w.push(direction.as_str());
            }
        });
        self.push(")");
    }

    fn index_options(&mut self, options: &[IndexOption]) {
        for option in options {
            match option {
                IndexOption::KeyBlockSize(size) => {
                    self.push(" KEY_BLOCK_SIZE = ");
                    self.number(*size);
                }
                IndexOption::Using(index_type) => {
                    self.push(" USING ");
                    self.push(index_type.as_str());
                }
                IndexOption::WithParser(parser) => {
                    self.push(" WITH PARSER ");
                    self.visit_identifier(parser);
                }
                IndexOption::Comment(comment) => {
                    self.push(" COMMENT ");
                    self.string(comment);
                }
            }
        }
    }

    fn constraint(&mut self, constraint: Option<&Identifier>) {
        if let Some(symbol) = constraint {
            self.push("CONSTRAINT ");
            self.visit_identifier(symbol);
            self.push(" ");
        }
    }

    fn reference(&mut self, reference: &Reference) {
        self.push("REFERENCES ");
        self.visit_identifier(&reference.table);
        self.push(" ");
        self.parenthesized_identifiers(&reference.columns);
        if let Some(match_type) = reference.match_type {
            self.push(match match_type {
                ReferenceMatch::Full => " MATCH FULL",
                ReferenceMatch::Partial => " MATCH PARTIAL",
                ReferenceMatch::Simple => " MATCH SIMPLE",
            });
        }
        if let Some(action) = reference.on_delete {
            self.push(" ON DELETE ");
            self.push(action.as_str());
        }
        if let Some(action) = reference.on_update {
            self.push(" ON UPDATE ");
            self.push(action.as_str());
        }
    }

    fn foreign_key(&mut self, foreign_key: &ForeignKeyDefinition) {
        self.constraint(foreign_key.constraint.as_ref());
        self.push("FOREIGN KEY ");
        if let Some(name) = &foreign_key.name {
            self.visit_identifier(name);
            self.push(" ");
        }
        self.parenthesized_identifiers(&foreign_key.columns);
        self.push(" ");
        self.reference(&foreign_key.reference);
    }

    fn table_element(&mut self, element: &TableElement) {
        match element {
            TableElement::Column { name, definition } => self.column(name, definition),
            TableElement::Index(index) => self.visit_index_definition(index),
            TableElement::ForeignKey(foreign_key) => self.foreign_key(foreign_key),
            TableElement::Check { constraint, expr } => {
                self.constraint(constraint.as_ref());
                self.push("CHECK (");
                self.visit_expr(expr);
                self.push(")");
            }
        }
    }

    /// Space separated `NAME = value` pairs.
    #[allow(clippy::too_many_lines)]
    fn table_options(&mut self, options: &TableOptions) {
        let mut first = true;
        let mut key = |w: &mut Self, text: &str| {
            if !first {
                w.push(" ");
            }
            first = false;
            w.push(text);
            w.push(" = ");
        };
        if let Some(engine) = &options.engine {
            key(self, "ENGINE");
            self.option_name(engine);
        }
        if let Some(value) = options.auto_increment {
            key(self, "AUTO_INCREMENT");
            self.number(value);
        }
        if let Some(value) = options.avg_row_length {
            key(self, "AVG_ROW_LENGTH");
            self.number(value);
        }
        if let Some(charset) = &options.charset {
            key(self, "CHARACTER SET");
            self.name(charset);
        }
        if let Some(collation) = &options.collation {
            key(self, "COLLATE");
            self.name(collation);
        }
        if let Some(checksum) = options.checksum {
            key(self, "CHECKSUM");
            self.push(if checksum { "1" } else { "0" });
        }
        if let Some(comment) = &options.comment {
            key(self, "COMMENT");
            self.string(comment);
        }
        if let Some(connection) = &options.connection {
            key(self, "CONNECTION");
            self.string(connection);
        }
        if let Some(directory) = &options.data_directory {
            key(self, "DATA DIRECTORY");
            self.string(directory);
        }
        if let Some(directory) = &options.index_directory {
            key(self, "INDEX DIRECTORY");
            self.string(directory);
        }
        if let Some(delay) = options.delay_key_write {
            key(self, "DELAY_KEY_WRITE");
            self.push(if delay { "1" } else { "0" });
        }
        if let Some(method) = options.insert_method {
            key(self, "INSERT_METHOD");
            self.push(match method {
                InsertMethod::No => "NO",
                InsertMethod::First => "FIRST",
                InsertMethod::Last => "LAST",
            });
        }
        if let Some(value) = options.key_block_size {
            key(self, "KEY_BLOCK_SIZE");
            self.number(value);
        }
        if let Some(value) = options.max_rows {
            key(self, "MAX_ROWS");
            self.number(value);
        }
        if let Some(value) = options.min_rows {
            key(self, "MIN_ROWS");
            self.number(value);
        }
        let flags = [
            ("PACK_KEYS", options.pack_keys),
            ("STATS_AUTO_RECALC", options.stats_auto_recalc),
            ("STATS_PERSISTENT", options.stats_persistent),
        ];
        for (name, flag) in flags {
            if let Some(flag) = flag {
                key(self, name);
                self.push(match flag {
                    OptionFlag::Off => "0",
                    OptionFlag::On => "1",
                    OptionFlag::Default => "DEFAULT",
                });
            }
        }
        if let Some(password) = &options.password {
            key(self, "PASSWORD");
            self.string(password);
        }
        if let Some(format) = options.row_format {
            key(self, "ROW_FORMAT");
            self.push(format.as_str());
        }
        if let Some(tablespace) = &options.tablespace {
            key(self, "TABLESPACE");
            self.option_name(tablespace);
        }
        if !options.union.is_empty() {
            key(self, "UNION");
            self.parenthesized_identifiers(&options.union);
        }
    }

    fn create_table(&mut self, create: &super::CreateTable) {
        self.push("CREATE ");
        if create.temporary {
            self.push("TEMPORARY ");
        }
        self.push("TABLE ");
        self.if_not_exists(create.if_not_exists);
        self.visit_identifier(&create.name);
        if let Some(like) = &create.like {
            self.push(" LIKE ");
            self.visit_identifier(like);
            return;
        }
        if !create.elements.is_empty() {
            self.push(" (");
            self.list(&create.elements, Self::table_element);
            self.push(")");
        }
        if !create.options.is_empty() {
            self.push(" ");
            self.table_options(&create.options);
        }
        if let Some(partition) = &create.partition {
            self.push(" ");
            self.push(partition);
        }
        match create.duplicate {
            Some(DuplicateHandling::Ignore) => self.push(" IGNORE"),
            Some(DuplicateHandling::Replace) => self.push(" REPLACE"),
            None => {}
        }
        if let Some(query) = &create.query {
            self.push(" AS ");
            self.visit_query(query);
        }
    }

    fn alter_table(&mut self, alter: &super::AlterTable) {
        self.push("ALTER ");
        if alter.ignore {
            self.push("IGNORE ");
        }
        self.push("TABLE ");
        self.visit_identifier(&alter.name);
        if !alter.specifications.is_empty() {
            self.push(" ");
            self.list(&alter.specifications, |w, spec| w.visit_alter_specification(spec));
        }
        if !alter.options.is_empty() {
            self.push(if alter.specifications.is_empty() { " " } else { ", " });
            self.table_options(&alter.options);
        }
        if let Some(partition) = &alter.partition {
            self.push(" ");
            self.push(partition);
        }
    }

    fn routine_characteristics(&mut self, characteristics: &[RoutineCharacteristic]) {
        for characteristic in characteristics {
            self.push(" ");
            match characteristic {
                RoutineCharacteristic::Comment(comment) => {
                    self.push("COMMENT ");
                    self.string(comment);
                }
                RoutineCharacteristic::LanguageSql => self.push("LANGUAGE SQL"),
                RoutineCharacteristic::Deterministic(true) => self.push("DETERMINISTIC"),
                RoutineCharacteristic::Deterministic(false) => self.push("NOT DETERMINISTIC"),
                RoutineCharacteristic::DataAccess(access) => self.push(match access {
                    SqlDataAccess::ContainsSql => "CONTAINS SQL",
                    SqlDataAccess::NoSql => "NO SQL",
                    SqlDataAccess::ReadsSqlData => "READS SQL DATA",
                    SqlDataAccess::ModifiesSqlData => "MODIFIES SQL DATA",
                }),
                RoutineCharacteristic::SqlSecurity(security) => {
                    self.push("SQL SECURITY ");
                    self.sql_security(*security);
                }
            }
        }
    }

    fn sql_security(&mut self, security: SqlSecurity) {
        self.push(match security {
            SqlSecurity::Definer => "DEFINER",
            SqlSecurity::Invoker => "INVOKER",
        });
    }

    fn view_prefix(
        &mut self,
        algorithm: Option<super::ViewAlgorithm>,
        definer: Option<&Expr>,
        sql_security: Option<SqlSecurity>,
    ) {
        if let Some(algorithm) = algorithm {
            self.push("ALGORITHM = ");
            self.push(algorithm.as_str());
            self.push(" ");
        }
        self.definer(definer);
        if let Some(security) = sql_security {
            self.push("SQL SECURITY ");
            self.sql_security(security);
            self.push(" ");
        }
    }

    fn create_event(&mut self, event: &super::CreateEvent) {
        self.push("CREATE ");
        self.definer(event.definer.as_ref());
        self.push("EVENT ");
        self.if_not_exists(event.if_not_exists);
        self.visit_identifier(&event.name);
        self.push(" ON SCHEDULE ");
        match &event.schedule {
            EventSchedule::At(at) => {
                self.push("AT ");
                self.visit_expr(at);
            }
            EventSchedule::Every {
                value,
                unit,
                starts,
                ends,
            } => {
                self.push("EVERY ");
                self.visit_expr(value);
                self.push(" ");
                self.push(unit.as_str());
                if let Some(starts) = starts {
                    self.push(" STARTS ");
                    self.visit_expr(starts);
                }
                if let Some(ends) = ends {
                    self.push(" ENDS ");
                    self.visit_expr(ends);
                }
            }
        }
        match event.preserve {
            Some(true) => self.push(" ON COMPLETION PRESERVE"),
            Some(false) => self.push(" ON COMPLETION NOT PRESERVE"),
            None => {}
        }
        if let Some(status) = event.status {
            self.push(match status {
                EventStatus::Enable => " ENABLE",
                EventStatus::Disable => " DISABLE",
                EventStatus::DisableOnSlave => " DISABLE ON SLAVE",
            });
        }
        if let Some(comment) = &event.comment {
            self.push(" COMMENT ");
            self.string(comment);
        }
        self.push(" DO ");
        self.visit_statement(&event.body);
    }

    fn remainder(&mut self, remainder: &str) {
        if !remainder.is_empty() {
            self.push(" ");
            self.push(remainder);
        }
    }

    // ===================================================================
    // DAL
    // ===================================================================

    fn show_filter(&mut self, filter: Option<&ShowFilter>) {
        match filter {
            Some(ShowFilter::Like(pattern)) => {
                self.push(" LIKE ");
                self.string(pattern);
            }
            Some(ShowFilter::Where(condition)) => {
                self.push(" WHERE ");
                self.visit_expr(condition);
            }
            None => {}
        }
    }

    fn show_database(&mut self, database: Option<&Identifier>) {
        if let Some(database) = database {
            self.push(" FROM ");
            self.visit_identifier(database);
        }
    }

    fn full(&mut self, full: bool) {
        if full {
            self.push("FULL ");
        }
    }

    fn scope(&mut self, scope: Option<super::VariableScope>) {
        if let Some(scope) = scope {
            self.push(scope.as_str());
            self.push(" ");
        }
    }

    #[allow(clippy::too_many_lines)]
    fn show(&mut self, show: &Show) {
        self.push("SHOW ");
        match show {
            Show::Authors => self.push("AUTHORS"),
            Show::BinaryLogs => self.push("BINARY LOGS"),
            Show::BinlogEvents {
                log_name,
                position,
                limit,
            } => {
                self.push("BINLOG EVENTS");
                if let Some(log_name) = log_name {
                    self.push(" IN ");
                    self.string(log_name);
                }
                if let Some(position) = position {
                    self.push(" FROM ");
                    self.number(*position);
                }
                self.limit(limit.as_ref());
            }
            Show::CharacterSet(filter) => {
                self.push("CHARACTER SET");
                self.show_filter(filter.as_ref());
            }
            Show::Collation(filter) => {
                self.push("COLLATION");
                self.show_filter(filter.as_ref());
            }
            Show::Columns {
                full,
                table,
                database,
                filter,
            } => {
                self.full(*full);
                self.push("COLUMNS FROM ");
                self.visit_identifier(table);
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::Contributors => self.push("CONTRIBUTORS"),
            Show::Create {
                kind,
                if_not_exists,
                name,
            } => {
                self.push("CREATE ");
                self.push(kind.as_str());
                self.push(" ");
                self.if_not_exists(*if_not_exists);
                self.visit_identifier(name);
            }
            Show::Databases(filter) => {
                self.push("DATABASES");
                self.show_filter(filter.as_ref());
            }
            Show::Engine { name, mutex } => {
                self.push("ENGINE ");
                self.option_name(name);
                self.push(if *mutex { " MUTEX" } else { " STATUS" });
            }
            Show::Engines => self.push("ENGINES"),
            Show::Errors(limit) => {
                self.push("ERRORS");
                self.limit(limit.as_ref());
            }
            Show::Warnings(limit) => {
                self.push("WARNINGS");
                self.limit(limit.as_ref());
            }
            Show::ErrorCount => self.push("COUNT(*) ERRORS"),
            Show::WarningCount => self.push("COUNT(*) WARNINGS"),
            Show::Events { database, filter } => {
                self.push("EVENTS");
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::FunctionCode(name) => {
                self.push("FUNCTION CODE ");
                self.visit_identifier(name);
            }
            Show::FunctionStatus(filter) => {
                self.push("FUNCTION STATUS");
                self.show_filter(filter.as_ref());
            }
            Show::Grants(user) => {
                self.push("GRANTS");
                if let Some(user) = user {
                    self.push(" FOR ");
                    self.visit_expr(user);
                }
            }
            Show::Index {
                table,
                database,
                filter,
            } => {
                self.push("INDEX FROM ");
                self.visit_identifier(table);
                self.show_database(database.as_ref());
                self.where_clause(filter.as_ref());
            }
            Show::MasterStatus => self.push("MASTER STATUS"),
            Show::OpenTables { database, filter } => {
                self.push("OPEN TABLES");
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::Plugins => self.push("PLUGINS"),
            Show::Privileges => self.push("PRIVILEGES"),
            Show::ProcedureCode(name) => {
                self.push("PROCEDURE CODE ");
                self.visit_identifier(name);
            }
            Show::ProcedureStatus(filter) => {
                self.push("PROCEDURE STATUS");
                self.show_filter(filter.as_ref());
            }
            Show::Processlist { full } => {
                self.full(*full);
                self.push("PROCESSLIST");
            }
            Show::Profile {
                types,
                query,
                limit,
            } => {
                self.push("PROFILE");
                if !types.is_empty() {
                    self.push(" ");
                    self.list(types, |w, profile_type| w.push(profile_type.as_str()));
                }
                if let Some(query) = query {
                    self.push(" FOR QUERY ");
                    self.number(*query);
                }
                self.limit(limit.as_ref());
            }
            Show::Profiles => self.push("PROFILES"),
            Show::SlaveHosts => self.push("SLAVE HOSTS"),
            Show::SlaveStatus => self.push("SLAVE STATUS"),
            Show::Status { scope, filter } => {
                self.scope(*scope);
                self.push("STATUS");
                self.show_filter(filter.as_ref());
            }
            Show::TableStatus { database, filter } => {
                self.push("TABLE STATUS");
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::Tables {
                full,
                database,
                filter,
            } => {
                self.full(*full);
                self.push("TABLES");
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::Triggers { database, filter } => {
                self.push("TRIGGERS");
                self.show_database(database.as_ref());
                self.show_filter(filter.as_ref());
            }
            Show::Variables { scope, filter } => {
                self.scope(*scope);
                self.push("VARIABLES");
                self.show_filter(filter.as_ref());
            }
        }
    }

    fn set(&mut self, set: &Set) {
        self.push("SET ");
        match set {
            Set::Variables(variables) => self.list(variables, |w, variable| {
                w.visit_expr(&variable.target);
                w.push(" = ");
                w.visit_expr(&variable.value);
            }),
            Set::Names { charset, collation } => {
                self.push("NAMES ");
                match charset {
                    Some(charset) => self.name(charset),
                    None => self.push("DEFAULT"),
                }
                if let Some(collation) = collation {
                    self.push(" COLLATE ");
                    self.name(collation);
                }
            }
            Set::CharacterSet(charset) => {
                self.push("CHARACTER SET ");
                match charset {
                    Some(charset) => self.name(charset),
                    None => self.push("DEFAULT"),
                }
            }
            Set::Transaction {
                scope,
                characteristics,
            } => {
                self.scope(*scope);
                self.push("TRANSACTION ");
                self.list(characteristics, |w, characteristic| match characteristic {
                    TransactionCharacteristic::IsolationLevel(level) => {
                        w.push("ISOLATION LEVEL ");
                        w.push(level.as_str());
                    }
                    TransactionCharacteristic::ReadWrite => w.push("READ WRITE"),
                    TransactionCharacteristic::ReadOnly => w.push("READ ONLY"),
                });
            }
        }
    }

    // ===================================================================
    // Compound statements
    // ===================================================================

    fn branch(&mut self, branch: &ConditionalBranch) {
        self.visit_expr(&branch.condition);
        self.push(" THEN ");
        self.visit_compound_body(&branch.statements);
    }

    fn else_body(&mut self, statements: Option<&[Statement]>) {
        if let Some(statements) = statements {
            self.push("ELSE ");
            self.visit_compound_body(statements);
        }
    }

    fn if_statement(&mut self, statement: &If) {
        for (i, branch) in statement.branches.iter().enumerate() {
            self.push(if i == 0 { "IF " } else { "ELSEIF " });
            self.branch(branch);
        }
        self.else_body(statement.else_statements.as_deref());
        self.push("END IF");
    }

    fn case_statement(&mut self, statement: &CaseStatement) {
        self.push("CASE ");
        if let Some(operand) = &statement.operand {
            self.visit_expr(operand);
            self.push(" ");
        }
        for branch in &statement.branches {
            self.push("WHEN ");
            self.branch(branch);
        }
        self.else_body(statement.else_statements.as_deref());
        self.push("END CASE");
    }

    fn block(&mut self, block: &Block) {
        self.label(block.label.as_ref());
        self.push("BEGIN ");
        self.visit_compound_body(&block.statements);
        self.push("END");
        self.end_label(block.label.as_ref());
    }

    fn condition_value(&mut self, value: &ConditionValue) {
        match value {
            ConditionValue::ErrorCode(code) => self.number(*code),
            ConditionValue::SqlState(state) => {
                self.push("SQLSTATE ");
                self.string(state);
            }
            ConditionValue::Name(name) => self.visit_identifier(name),
            ConditionValue::SqlWarning => self.push("SQLWARNING"),
            ConditionValue::NotFound => self.push("NOT FOUND"),
            ConditionValue::SqlException => self.push("SQLEXCEPTION"),
        }
    }

    fn declare(&mut self, declare: &Declare) {
        self.push("DECLARE ");
        match declare {
            Declare::Variables {
                names,
                data_type,
                default,
            } => {
                self.identifiers(names);
                self.push(" ");
                self.visit_data_type(data_type);
                if let Some(default) = default {
                    self.push(" DEFAULT ");
                    self.visit_expr(default);
                }
            }
            Declare::Condition { name, value } => {
                self.visit_identifier(name);
                self.push(" CONDITION FOR ");
                self.condition_value(value);
            }
            Declare::Cursor { name, query } => {
                self.visit_identifier(name);
                self.push(" CURSOR FOR ");
                self.visit_query(query);
            }
            Declare::Handler {
                action,
                conditions,
                body,
            } => {
                self.push(match action {
                    HandlerAction::Continue => "CONTINUE",
                    HandlerAction::Exit => "EXIT",
                    HandlerAction::Undo => "UNDO",
                });
                self.push(" HANDLER FOR ");
                self.list(conditions, Self::condition_value);
                self.push(" ");
                self.visit_statement(body);
            }
        }
    }

    fn signal(&mut self, signal: &super::Signal) {
        self.push(if signal.resignal { "RESIGNAL" } else { "SIGNAL" });
        if let Some(condition) = &signal.condition {
            self.push(" ");
            self.condition_value(condition);
        }
        if !signal.items.is_empty() {
            self.push(" SET ");
            self.list(&signal.items, |w, item| {
                w.push(item.item.as_str());
                w.push(" = ");
                w.literal(&item.value);
            });
        }
    }

    fn get_diagnostics(&mut self, diagnostics: &super::GetDiagnostics) {
        self.push("GET ");
        match diagnostics.area {
            Some(DiagnosticsArea::Current) => self.push("CURRENT "),
            Some(DiagnosticsArea::Stacked) => self.push("STACKED "),
            None => {}
        }
        self.push("DIAGNOSTICS ");
        match &diagnostics.info {
            DiagnosticsInfo::Statement(items) => self.list(items, |w, (target, item)| {
                w.visit_expr(target);
                w.push(" = ");
                w.push(item.as_str());
            }),
            DiagnosticsInfo::Condition { number, items } => {
                self.push("CONDITION ");
                self.visit_expr(number);
                self.push(" ");
                self.list(items, |w, (target, item)| {
                    w.visit_expr(target);
                    w.push(" = ");
                    w.push(item.as_str());
                });
            }
        }
    }

    // ===================================================================
    // Transactions
    // ===================================================================

    fn completion(&mut self, keyword: &str, completion: &Completion) {
        self.push(keyword);
        if completion.work {
            self.push(" WORK");
        }
        if completion.completion != CompletionType::Default {
            self.push(" ");
            self.push(completion.completion.as_str());
        }
    }
}

impl Visitor for SqlWriter<'_> {
    #[allow(clippy::too_many_lines)]
    fn visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Query(query) => self.visit_query(query),
            Statement::Insert(insert) => self.insert(insert),
            Statement::Update(update) => self.update(update),
            Statement::Delete(delete) => self.delete(delete),
            Statement::Call(call) => {
                self.push("CALL ");
                self.visit_identifier(&call.procedure);
                self.push("(");
                self.exprs(&call.args);
                self.push(")");
            }
            Statement::CreateTable(create) => self.create_table(create),
            Statement::AlterTable(alter) => self.alter_table(alter),
            Statement::DropTable(drop) => {
                self.push("DROP ");
                if drop.temporary {
                    self.push("TEMPORARY ");
                }
                self.push("TABLE ");
                self.if_exists(drop.if_exists);
                self.identifiers(&drop.names);
                self.drop_behavior(drop.behavior);
            }
            Statement::RenameTable(renames) => {
                self.push("RENAME TABLE ");
                self.list(renames, |w, rename| {
                    w.visit_identifier(&rename.from);
                    w.push(" TO ");
                    w.visit_identifier(&rename.to);
                });
            }
            Statement::TruncateTable(table) => {
                self.push("TRUNCATE TABLE ");
                self.visit_identifier(table);
            }
            Statement::CreateIndex(create) => {
                self.push("CREATE ");
                self.push(match create.index.kind {
                    IndexKind::Unique => "UNIQUE ",
                    IndexKind::Fulltext => "FULLTEXT ",
                    IndexKind::Spatial => "SPATIAL ",
                    IndexKind::Primary | IndexKind::Index => "",
                });
                self.push("INDEX ");
                if let Some(name) = &create.index.name {
                    self.visit_identifier(name);
                }
                if let Some(index_type) = create.index.index_type {
                    self.push(" USING ");
                    self.push(index_type.as_str());
                }
                self.push(" ON ");
                self.visit_identifier(&create.table);
                self.push(" ");
                self.key_parts(&create.index.columns);
                self.index_options(&create.index.options);
                if let Some(algorithm) = &create.algorithm {
                    self.push(" ALGORITHM = ");
                    self.option_name(algorithm);
                }
                if let Some(lock) = &create.lock {
                    self.push(" LOCK = ");
                    self.option_name(lock);
                }
            }
            Statement::DropIndex(drop) => {
                self.push("DROP INDEX ");
                self.visit_identifier(&drop.name);
                self.push(" ON ");
                self.visit_identifier(&drop.table);
                if let Some(algorithm) = &drop.algorithm {
                    self.push(" ALGORITHM = ");
                    self.option_name(algorithm);
                }
                if let Some(lock) = &drop.lock {
                    self.push(" LOCK = ");
                    self.option_name(lock);
                }
            }
            Statement::CreateDatabase(create) => {
                self.push("CREATE DATABASE ");
                self.if_not_exists(create.if_not_exists);
                self.visit_identifier(&create.name);
                if let Some(charset) = &create.charset {
                    self.push(" CHARACTER SET = ");
                    self.name(charset);
                }
                if let Some(collation) = &create.collation {
                    self.push(" COLLATE = ");
                    self.name(collation);
                }
            }
            Statement::DropDatabase(drop) => {
                self.push("DROP DATABASE ");
                self.if_exists(drop.if_exists);
                self.visit_identifier(&drop.name);
            }
            Statement::CreateTrigger(trigger) => {
                self.push("CREATE ");
                self.definer(trigger.definer.as_ref());
                self.push("TRIGGER ");
                self.visit_identifier(&trigger.name);
                self.push(match trigger.timing {
                    TriggerTiming::Before => " BEFORE",
                    TriggerTiming::After => " AFTER",
                });
                self.push(match trigger.event {
                    TriggerEvent::Insert => " INSERT",
                    TriggerEvent::Update => " UPDATE",
                    TriggerEvent::Delete => " DELETE",
                });
                self.push(" ON ");
                self.visit_identifier(&trigger.table);
                self.push(" FOR EACH ROW");
                match &trigger.order {
                    Some(TriggerOrder::Follows(other)) => {
                        self.push(" FOLLOWS ");
                        self.visit_identifier(other);
                    }
                    Some(TriggerOrder::Precedes(other)) => {
                        self.push(" PRECEDES ");
                        self.visit_identifier(other);
                    }
                    None => {}
                }
                self.push(" ");
                self.visit_statement(&trigger.body);
            }
            Statement::DropTrigger(drop) => {
                self.push("DROP TRIGGER ");
                self.if_exists(drop.if_exists);
                self.visit_identifier(&drop.name);
            }
            Statement::CreateRoutine(routine) => {
                self.push("CREATE ");
                self.definer(routine.definer.as_ref());
                self.push(routine.kind.as_str());
                self.push(" ");
                self.visit_identifier(&routine.name);
                self.push(" (");
                self.list(&routine.params, |w, param| {
                    match param.mode {
                        Some(ParamMode::In) => w.push("IN "),
                        Some(ParamMode::Out) => w.push("OUT "),
                        Some(ParamMode::InOut) => w.push("INOUT "),
                        None => {}
                    }
                    w.visit_identifier(&param.name);
                    w.push(" ");
                    w.visit_data_type(&param.data_type);
                });
                self.push(")");
                if let Some(returns) = &routine.returns {
                    self.push(" RETURNS ");
                    self.visit_data_type(returns);
                }
                self.routine_characteristics(&routine.characteristics);
                self.push(" ");
                self.visit_statement(&routine.body);
            }
            Statement::AlterRoutine(alter) => {
                self.push("ALTER ");
                self.push(alter.kind.as_str());
                self.push(" ");
                self.visit_identifier(&alter.name);
                self.routine_characteristics(&alter.characteristics);
            }
            Statement::DropRoutine(drop) => {
                self.push("DROP ");
                self.push(drop.kind.as_str());
                self.push(" ");
                self.if_exists(drop.if_exists);
                self.visit_identifier(&drop.name);
            }
            Statement::CreateView(view) => {
                self.push("CREATE ");
                if view.or_replace {
                    self.push("OR REPLACE ");
                }
                self.view_prefix(view.algorithm, view.definer.as_ref(), view.sql_security);
                self.push("VIEW ");
                self.visit_identifier(&view.name);
                if !view.columns.is_empty() {
                    self.push(" ");
                    self.parenthesized_identifiers(&view.columns);
                }
                self.push(" AS ");
                self.visit_query(&view.query);
                if let Some(option) = view.check_option {
                    self.push(match option {
                        ViewCheckOption::Default => " WITH CHECK OPTION",
                        ViewCheckOption::Cascaded => " WITH CASCADED CHECK OPTION",
                        ViewCheckOption::Local => " WITH LOCAL CHECK OPTION",
                    });
                }
            }
            Statement::AlterView(view) => {
                self.push("ALTER ");
                self.view_prefix(view.algorithm, view.definer.as_ref(), view.sql_security);
                self.push("VIEW ");
                self.visit_identifier(&view.name);
                self.remainder(&view.remainder);
            }
            Statement::DropView(drop) => {
                self.push("DROP VIEW ");
                self.if_exists(drop.if_exists);
                self.identifiers(&drop.names);
                self.drop_behavior(drop.behavior);
            }
            Statement::CreateEvent(event) => self.create_event(event),
            Statement::AlterEvent(event) => {
                self.push("ALTER ");
                self.definer(event.definer.as_ref());
                self.push("EVENT ");
                self.visit_identifier(&event.name);
                self.remainder(&event.remainder);
            }
            Statement::DropEvent(drop) => {
                self.push("DROP EVENT ");
                self.if_exists(drop.if_exists);
                self.visit_identifier(&drop.name);
            }
            Statement::Show(show) => self.show(show),
            Statement::Set(set) => self.set(set),
            Statement::Explain(explain) => {
                self.push("EXPLAIN ");
                if let Some(format) = explain.format {
                    self.push(match format {
                        ExplainFormat::Extended => "EXTENDED ",
                        ExplainFormat::Partitions => "PARTITIONS ",
                        ExplainFormat::Traditional => "FORMAT = TRADITIONAL ",
                        ExplainFormat::Json => "FORMAT = JSON ",
                    });
                }
                self.visit_statement(&explain.statement);
            }
            Statement::Describe(describe) => {
                self.push("DESCRIBE ");
                self.visit_identifier(&describe.table);
                match &describe.column {
                    Some(super::DescribeColumn::Name(column)) => {
                        self.push(" ");
                        self.visit_identifier(column);
                    }
                    Some(super::DescribeColumn::Pattern(pattern)) => {
                        self.push(" ");
                        self.string(pattern);
                    }
                    None => {}
                }
            }
            Statement::Use(database) => {
                self.push("USE ");
                self.visit_identifier(database);
            }
            Statement::Block(block) => self.block(block),
            Statement::If(statement) => self.if_statement(statement),
            Statement::Case(statement) => self.case_statement(statement),
            Statement::Loop(statement) => {
                self.label(statement.label.as_ref());
                self.push("LOOP ");
                self.visit_compound_body(&statement.statements);
                self.push("END LOOP");
                self.end_label(statement.label.as_ref());
            }
            Statement::While(statement) => {
                self.label(statement.label.as_ref());
                self.push("WHILE ");
                self.visit_expr(&statement.condition);
                self.push(" DO ");
                self.visit_compound_body(&statement.statements);
                self.push("END WHILE");
                self.end_label(statement.label.as_ref());
            }
            Statement::Repeat(statement) => {
                self.label(statement.label.as_ref());
                self.push("REPEAT ");
                self.visit_compound_body(&statement.statements);
                self.push("UNTIL ");
                self.visit_expr(&statement.until);
                self.push(" END REPEAT");
                self.end_label(statement.label.as_ref());
            }
            Statement::Leave(label) => {
                self.push("LEAVE ");
                self.visit_identifier(label);
            }
            Statement::Iterate(label) => {
                self.push("ITERATE ");
                self.visit_identifier(label);
            }
            Statement::Return(value) => {
                self.push("RETURN ");
                self.visit_expr(value);
            }
            Statement::Declare(declare) => self.declare(declare),
            Statement::Signal(signal) => self.signal(signal),
            Statement::GetDiagnostics(diagnostics) => self.get_diagnostics(diagnostics),
            Statement::Open(cursor) => {
                self.push("OPEN ");
                self.visit_identifier(cursor);
            }
            Statement::Fetch(fetch) => {
                self.push("FETCH ");
                self.visit_identifier(&fetch.cursor);
                self.push(" INTO ");
                self.identifiers(&fetch.targets);
            }
            Statement::Close(cursor) => {
                self.push("CLOSE ");
                self.visit_identifier(cursor);
            }
            Statement::StartTransaction(modes) => {
                self.push("START TRANSACTION");
                if !modes.is_empty() {
                    self.push(" ");
                    self.list(modes, |w, mode| w.push(mode.as_str()));
                }
            }
            Statement::Begin { work } => {
                self.push(if *work { "BEGIN WORK" } else { "BEGIN" });
            }
            Statement::Commit(completion) => self.completion("COMMIT", completion),
            Statement::Rollback(completion) => self.completion("ROLLBACK", completion),
            Statement::Savepoint(name) => {
                self.push("SAVEPOINT ");
                self.visit_identifier(name);
            }
            Statement::ReleaseSavepoint(name) => {
                self.push("RELEASE SAVEPOINT ");
                self.visit_identifier(name);
            }
            Statement::RollbackToSavepoint { work, name } => {
                self.push(if *work { "ROLLBACK WORK" } else { "ROLLBACK" });
                self.push(" TO SAVEPOINT ");
                self.visit_identifier(name);
            }
            Statement::Prepare(prepare) => {
                self.push("PREPARE ");
                self.visit_identifier(&prepare.name);
                self.push(" FROM ");
                match &prepare.source {
                    PrepareSource::Text(text) => self.string(text),
                    PrepareSource::Variable(name) => {
                        self.push("@");
                        self.push(name);
                    }
                }
            }
            Statement::Execute(execute) => {
                self.push("EXECUTE ");
                self.visit_identifier(&execute.name);
                if !execute.using.is_empty() {
                    self.push(" USING ");
                    self.exprs(&execute.using);
                }
            }
            Statement::Deallocate(deallocate) => {
                self.push(if deallocate.drop {
                    "DROP PREPARE "
                } else {
                    "DEALLOCATE PREPARE "
                });
                self.visit_identifier(&deallocate.name);
            }
        }
    }

    fn visit_query(&mut self, query: &QueryExpr) {
        match query {
            QueryExpr::Select(select) => self.visit_select(select),
            QueryExpr::Union(union) => self.union(union),
        }
    }

    fn visit_select(&mut self, select: &Select) {
        self.push("SELECT");
        self.select_options(&select.options);
        self.push(" ");
        self.list(&select.items, |w, item| {
            w.visit_expr(&item.expr);
            if let Some(alias) = &item.alias {
                w.alias(alias);
            }
        });
        match &select.from {
            Some(FromClause::Dual) => self.push(" FROM DUAL"),
            Some(FromClause::Tables(tables)) => {
                self.push(" FROM ");
                self.table_references(tables);
            }
            None => {}
        }
        self.where_clause(select.where_clause.as_ref());
        if let Some(group_by) = &select.group_by {
            self.push(" GROUP BY ");
            self.order_by_items(&group_by.items);
            if group_by.with_rollup {
                self.push(" WITH ROLLUP");
            }
        }
        if let Some(having) = &select.having {
            self.push(" HAVING ");
            self.visit_expr(having);
        }
        self.order_by(&select.order_by);
        self.limit(select.limit.as_ref());
        match select.lock {
            Some(LockClause::ForUpdate) => self.push(" FOR UPDATE"),
            Some(LockClause::ShareMode) => self.push(" LOCK IN SHARE MODE"),
            None => {}
        }
    }

    fn visit_table_reference(&mut self, table: &TableReference) {
        match table {
            TableReference::Table { name, alias, hints } => {
                self.visit_identifier(name);
                if let Some(alias) = alias {
                    self.alias(alias);
                }
                for hint in hints {
                    self.index_hint(hint);
                }
            }
            TableReference::Derived { subquery, alias } => {
                self.subquery(subquery);
                if let Some(alias) = alias {
                    self.alias(alias);
                }
            }
            TableReference::Nested(tables) => {
                self.push("(");
                self.table_references(tables);
                self.push(")");
            }
            TableReference::Join(join) => {
                self.visit_table_reference(&join.left);
                self.push(" ");
                self.push(join.kind.as_str());
                self.push(" ");
                if matches!(join.right, TableReference::Join(_)) {
                    self.push("(");
                    self.visit_table_reference(&join.right);
                    self.push(")");
                } else {
                    self.visit_table_reference(&join.right);
                }
                match &join.condition {
                    Some(JoinCondition::On(condition)) => {
                        self.push(" ON ");
                        self.visit_expr(condition);
                    }
                    Some(JoinCondition::Using(columns)) => {
                        self.push(" USING ");
                        self.parenthesized_identifiers(columns);
                    }
                    None => {}
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.expr(expr);
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        for (i, part) in identifier.parts().into_iter().enumerate() {
            if i > 0 {
                self.push(".");
            }
            if part.quoted {
                let quoted = self.dialect.quote_identifier(&part.text);
                self.push(&quoted);
            } else {
                self.push(&part.text);
            }
        }
    }

    fn visit_function_name(&mut self, name: &Identifier) {
        self.visit_identifier(name);
    }

    fn visit_data_type(&mut self, data_type: &DataType) {
        self.push(data_type.name.as_str());
        if data_type.values.is_empty() {
            if let Some(length) = data_type.length {
                self.push("(");
                self.number(length);
                if let Some(decimals) = data_type.decimals {
                    self.push(",");
                    self.number(decimals);
                }
                self.push(")");
            }
        } else {
            self.push("(");
            self.list(&data_type.values, |w, value| w.string(value));
            self.push(")");
        }
        if data_type.unsigned {
            self.push(" UNSIGNED");
        }
        if data_type.zerofill {
            self.push(" ZEROFILL");
        }
        if data_type.binary {
            self.push(" BINARY");
        }
        if let Some(charset) = &data_type.charset {
            self.push(" CHARACTER SET ");
            self.name(charset);
        }
        if let Some(collation) = &data_type.collation {
            self.push(" COLLATE ");
            self.name(collation);
        }
    }

    fn visit_column_definition(&mut self, definition: &ColumnDefinition) {
        self.visit_data_type(&definition.data_type);
        if let Some(generated) = &definition.generated {
            self.push(" AS (");
            self.visit_expr(&generated.expr);
            self.push(")");
            match generated.stored {
                Some(true) => self.push(" STORED"),
                Some(false) => self.push(" VIRTUAL"),
                None => {}
            }
        }
        match definition.nullable {
            Some(true) => self.push(" NULL"),
            Some(false) => self.push(" NOT NULL"),
            None => {}
        }
        if let Some(default) = &definition.default {
            self.push(" DEFAULT ");
            self.visit_expr(default);
        }
        if let Some(on_update) = &definition.on_update {
            self.push(" ON UPDATE ");
            self.visit_expr(on_update);
        }
        if definition.auto_increment {
            self.push(" AUTO_INCREMENT");
        }
        match definition.key {
            Some(ColumnKey::Primary) => self.push(" PRIMARY KEY"),
            Some(ColumnKey::Unique) => self.push(" UNIQUE KEY"),
            None => {}
        }
        if let Some(comment) = &definition.comment {
            self.push(" COMMENT ");
            self.string(comment);
        }
        if let Some(format) = definition.column_format {
            self.push(match format {
                ColumnFormat::Fixed => " COLUMN_FORMAT FIXED",
                ColumnFormat::Dynamic => " COLUMN_FORMAT DYNAMIC",
                ColumnFormat::Default => " COLUMN_FORMAT DEFAULT",
            });
        }
        if let Some(storage) = definition.storage {
            self.push(match storage {
                ColumnStorage::Disk => " STORAGE DISK",
                ColumnStorage::Memory => " STORAGE MEMORY",
                ColumnStorage::Default => " STORAGE DEFAULT",
            });
        }
        if let Some(reference) = &definition.reference {
            self.push(" ");
            self.reference(reference);
        }
    }

    fn visit_index_definition(&mut self, index: &IndexDefinition) {
        self.constraint(index.constraint.as_ref());
        self.push(match index.kind {
            IndexKind::Primary => "PRIMARY KEY ",
            IndexKind::Unique => "UNIQUE KEY ",
            IndexKind::Fulltext => "FULLTEXT INDEX ",
            IndexKind::Spatial => "SPATIAL INDEX ",
            IndexKind::Index => "INDEX ",
        });
        if let Some(name) = &index.name {
            self.visit_identifier(name);
            self.push(" ");
        }
        if let Some(index_type) = index.index_type {
            self.push("USING ");
            self.push(index_type.as_str());
            self.push(" ");
        }
        self.key_parts(&index.columns);
        self.index_options(&index.options);
    }

    #[allow(clippy::too_many_lines)]
    fn visit_alter_specification(&mut self, specification: &AlterSpecification) {
        match specification {
            AlterSpecification::AddColumn {
                column,
                definition,
                first,
                after_column,
            } => {
                self.push("ADD COLUMN ");
                self.column(column, definition);
                self.column_position(*first, after_column.as_ref());
            }
            AlterSpecification::AddColumns(columns) => {
                self.push("ADD (");
                self.list(columns, |w, (name, definition)| w.column(name, definition));
                self.push(")");
            }
            AlterSpecification::AddIndex(index) => {
                self.push("ADD ");
                self.visit_index_definition(index);
            }
            AlterSpecification::AddForeignKey(foreign_key) => {
                self.push("ADD ");
                self.foreign_key(foreign_key);
            }
            AlterSpecification::AlterColumnDefault { column, default } => {
                self.push("ALTER COLUMN ");
                self.visit_identifier(column);
                match default {
                    Some(default) => {
                        self.push(" SET DEFAULT ");
                        self.visit_expr(default);
                    }
                    None => self.push(" DROP DEFAULT"),
                }
            }
            AlterSpecification::ChangeColumn {
                old_name,
                new_name,
                definition,
                first,
                after_column,
            } => {
                self.push("CHANGE COLUMN ");
                self.visit_identifier(old_name);
                self.push(" ");
                self.column(new_name, definition);
                self.column_position(*first, after_column.as_ref());
            }
            AlterSpecification::ModifyColumn {
                column,
                definition,
                first,
                after_column,
            } => {
                self.push("MODIFY COLUMN ");
                self.column(column, definition);
                self.column_position(*first, after_column.as_ref());
            }
            AlterSpecification::DropColumn(column) => {
                self.push("DROP COLUMN ");
                self.visit_identifier(column);
            }
            AlterSpecification::DropPrimaryKey => self.push("DROP PRIMARY KEY"),
            AlterSpecification::DropIndex(index) => {
                self.push("DROP INDEX ");
                self.visit_identifier(index);
            }
            AlterSpecification::DropForeignKey(key) => {
                self.push("DROP FOREIGN KEY ");
                self.visit_identifier(key);
            }
            AlterSpecification::DisableKeys => self.push("DISABLE KEYS"),
            AlterSpecification::EnableKeys => self.push("ENABLE KEYS"),
            AlterSpecification::RenameTable(name) => {
                self.push("RENAME TO ");
                self.visit_identifier(name);
            }
            AlterSpecification::RenameIndex { old_name, new_name } => {
                self.push("RENAME INDEX ");
                self.visit_identifier(old_name);
                self.push(" TO ");
                self.visit_identifier(new_name);
            }
            AlterSpecification::OrderBy(columns) => {
                self.push("ORDER BY ");
                self.identifiers(columns);
            }
            AlterSpecification::ConvertToCharset { charset, collation } => {
                self.push("CONVERT TO CHARACTER SET ");
                self.name(charset);
                if let Some(collation) = collation {
                    self.push(" COLLATE ");
                    self.name(collation);
                }
            }
            AlterSpecification::DiscardTablespace => self.push("DISCARD TABLESPACE"),
            AlterSpecification::ImportTablespace => self.push("IMPORT TABLESPACE"),
            AlterSpecification::Force => self.push("FORCE"),
            AlterSpecification::Algorithm(algorithm) => {
                self.push("ALGORITHM = ");
                self.option_name(algorithm);
            }
            AlterSpecification::Lock(lock) => {
                self.push("LOCK = ");
                self.option_name(lock);
            }
            AlterSpecification::AddPartition(definition) => {
                self.push("ADD PARTITION ");
                self.push(definition);
            }
            AlterSpecification::DropPartition(names) => {
                self.push("DROP PARTITION ");
                self.identifiers(names);
            }
            AlterSpecification::CoalescePartition(count) => {
                self.push("COALESCE PARTITION ");
                self.number(*count);
            }
            AlterSpecification::ReorganizePartition { names, into } => {
                self.push("REORGANIZE PARTITION");
                if !names.is_empty() {
                    self.push(" ");
                    self.identifiers(names);
                }
                if let Some(into) = into {
                    self.push(" INTO ");
                    self.push(into);
                }
            }
            AlterSpecification::ExchangePartition { partition, table } => {
                self.push("EXCHANGE PARTITION ");
                self.visit_identifier(partition);
                self.push(" WITH TABLE ");
                self.visit_identifier(table);
            }
            AlterSpecification::PartitionMaintenance {
                operation,
                partitions,
            } => {
                self.push(operation.as_str());
                self.push(" PARTITION ");
                match partitions {
                    PartitionNames::All => self.push("ALL"),
                    PartitionNames::Names(names) => self.identifiers(names),
                }
            }
            AlterSpecification::RemovePartitioning => self.push("REMOVE PARTITIONING"),
        }
    }

    /// Each statement of a compound body is closed by `;`.
    fn visit_compound_body(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.visit_statement(statement);
            self.push("; ");
        }
    }
}

const fn is_sign(op: UnaryOp) -> bool {
    matches!(op, UnaryOp::Minus | UnaryOp::Plus)
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`: a word the lexer reads back unchanged.
fn is_plain_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

macro_rules! display_via_writer {
    ($($node:ty => $visit:ident,)*) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut writer = SqlWriter::mysql();
                    writer.$visit(self);
                    f.write_str(writer.as_str())
                }
            }
        )*
    };
}

display_via_writer! {
    Statement => visit_statement,
    QueryExpr => visit_query,
    Select => visit_select,
    TableReference => visit_table_reference,
    Expr => visit_expr,
    Identifier => visit_identifier,
    DataType => visit_data_type,
    ColumnDefinition => visit_column_definition,
    IndexDefinition => visit_index_definition,
    AlterSpecification => visit_alter_specification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, StringLiteral};
    use crate::parser::Parser;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    fn render(sql: &str) -> String {
        parse(sql).to_string()
    }

    fn assert_round_trip(sql: &str) {
        let statement = parse(sql);
        let rendered = statement.to_string();
        let reparsed = Parser::new(&rendered)
            .parse_statement()
            .unwrap_or_else(|e| panic!("re-parse of {rendered:?} failed: {e}"));
        assert_eq!(statement, reparsed, "rendered as {rendered:?}");
    }

    #[test]
    fn test_keywords_upper_cased() {
        assert_eq!(
            render("select distinct a from t where b is not null order by a desc limit 5"),
            "SELECT DISTINCT a FROM t WHERE b IS NOT NULL ORDER BY a DESC LIMIT 5"
        );
    }

    #[test]
    fn test_minimal_parentheses() {
        assert_eq!(render("SELECT (a + b) * c"), "SELECT (a + b) * c");
        assert_eq!(render("SELECT a + (b * c)"), "SELECT a + b * c");
        assert_eq!(render("SELECT a - (b - c)"), "SELECT a - (b - c)");
        assert_eq!(render("SELECT (a - b) - c"), "SELECT a - b - c");
        assert_eq!(render("SELECT NOT (a OR b)"), "SELECT NOT (a OR b)");
        assert_eq!(render("SELECT - -a"), "SELECT - -a");
    }

    #[test]
    fn test_hand_built_tree_gets_parentheses() {
        let sum = Expr::column("a").binary(BinaryOp::Add, Expr::column("b"));
        let product = sum.binary(BinaryOp::Mul, Expr::integer(2));
        assert_eq!(product.to_string(), "(a + b) * 2");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(render("SELECT `order` FROM `my``table`"), "SELECT `order` FROM `my``table`");
        let literal = Expr::Literal(Literal::String(StringLiteral::new("it's")));
        assert_eq!(literal.to_string(), "'it''s'");
    }

    #[test]
    fn test_alias_spelling() {
        assert_eq!(render("SELECT a 'total' FROM t x"), "SELECT a AS total FROM t AS x");
        assert_eq!(render("SELECT a AS 'two words'"), "SELECT a AS 'two words'");
    }

    #[test]
    fn test_limit_forms() {
        assert_eq!(render("SELECT a FROM t LIMIT 10 OFFSET 5"), "SELECT a FROM t LIMIT 5, 10");
        assert_eq!(render("SELECT a FROM t LIMIT ? OFFSET ?"), "SELECT a FROM t LIMIT ? OFFSET ?");
    }

    #[test]
    fn test_union_branches() {
        assert_eq!(
            render("SELECT a FROM t UNION ALL (SELECT b FROM u ORDER BY b LIMIT 1) ORDER BY 1"),
            "SELECT a FROM t UNION ALL (SELECT b FROM u ORDER BY b LIMIT 1) ORDER BY 1"
        );
        assert_round_trip("(SELECT a FROM t ORDER BY a LIMIT 3) ORDER BY a DESC");
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            render("SELECT x'0A', 0x1, b'01', N'n', _utf8'u', 1.5"),
            "SELECT X'0A', 0x1, b'01', N'n', _utf8'u', 1.5"
        );
    }

    #[test]
    fn test_temporal_functions_render_parentheses() {
        assert_eq!(render("SELECT NOW(), CURRENT_DATE"), "SELECT NOW(), CURRENT_DATE()");
    }

    #[test]
    fn test_compound_body() {
        assert_eq!(
            render("lbl: BEGIN DECLARE x INT DEFAULT 0; SET x = x + 1; END lbl"),
            "lbl: BEGIN DECLARE x INT DEFAULT 0; SET x = x + 1; END lbl"
        );
        assert_eq!(render("BEGIN END"), "BEGIN END");
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            render(
                "create table t (id int unsigned not null auto_increment, \
                 title varchar(20) default 'x', primary key (id)) engine=InnoDB"
            ),
            "CREATE TABLE t (id INT UNSIGNED NOT NULL AUTO_INCREMENT, \
             title VARCHAR(20) DEFAULT 'x', PRIMARY KEY (id)) ENGINE = InnoDB"
        );
    }

    #[test]
    fn test_round_trips() {
        for sql in [
            "SELECT a FROM t1 LEFT JOIN (t2 JOIN t3 ON t2.id = t3.id) ON t1.id = t2.id",
            "SELECT * FROM t WHERE a BETWEEN 1 AND 2 OR b NOT LIKE 'x%' ESCAPE '!'",
            "SELECT CAST(a AS DECIMAL(10, 2)), CONVERT(b USING utf8mb4), TRIM(LEADING 'x' FROM c)",
            "SELECT a FROM t WHERE (a = 1) = (b IN (1, 2))",
            "SELECT @a := 1, @@GLOBAL.sql_mode",
            "ALTER TABLE t ADD COLUMN c INT AFTER b, DROP INDEX i, ENGINE = MyISAM",
            "SET NAMES utf8mb4 COLLATE utf8mb4_bin",
            "SHOW FULL COLUMNS FROM t FROM db LIKE 'a%'",
            "COMMIT WORK AND NO CHAIN RELEASE",
        ] {
            assert_round_trip(sql);
        }
    }
}
