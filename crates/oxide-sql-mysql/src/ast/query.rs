//! SELECT, UNION and table reference AST types.

use super::{Expr, Identifier};

/// A query: one SELECT or a UNION chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    /// A single SELECT.
    Select(Box<Select>),
    /// A UNION chain.
    Union(Box<Union>),
}

impl QueryExpr {
    /// Returns the SELECT if this is not a union.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            Self::Union(_) => None,
        }
    }
}

/// `first UNION [ALL] second ... [ORDER BY ..] [LIMIT ..]`.
///
/// `order_by` and `limit` apply to the whole union. Clauses written inside
/// a parenthesised branch stay on that branch's [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    /// Leftmost branch.
    pub first: Select,
    /// Remaining branches in order.
    pub rest: Vec<UnionBranch>,
    /// ORDER BY of the union.
    pub order_by: Vec<OrderByItem>,
    /// LIMIT of the union.
    pub limit: Option<Limit>,
}

/// A branch after the first in a UNION chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionBranch {
    /// `UNION ALL` rather than `UNION [DISTINCT]`.
    pub all: bool,
    /// The branch query.
    pub select: Select,
}

/// `ALL`, `DISTINCT` or `DISTINCTROW` set quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    All,
    Distinct,
    DistinctRow,
}

/// Modifiers between `SELECT` and the projection list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub quantifier: Option<SetQuantifier>,
    pub high_priority: bool,
    pub straight_join: bool,
    pub sql_small_result: bool,
    pub sql_big_result: bool,
    pub sql_buffer_result: bool,
    /// `SQL_CACHE` (true) or `SQL_NO_CACHE` (false).
    pub sql_cache: Option<bool>,
    pub sql_calc_found_rows: bool,
}

/// A projection item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// The expression; a wildcard identifier for `*` and `t.*`.
    pub expr: Expr,
    /// Alias.
    pub alias: Option<Identifier>,
}

/// FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FromClause {
    /// `FROM DUAL`.
    Dual,
    /// Comma-separated table references.
    Tables(Vec<TableReference>),
}

/// Row locking clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockClause {
    /// `FOR UPDATE`.
    ForUpdate,
    /// `LOCK IN SHARE MODE`.
    ShareMode,
}

/// GROUP BY clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    pub items: Vec<OrderByItem>,
    /// `WITH ROLLUP`.
    pub with_rollup: bool,
}

/// A SELECT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    pub options: SelectOptions,
    pub items: Vec<SelectItem>,
    pub from: Option<FromClause>,
    pub where_clause: Option<Expr>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
    pub lock: Option<LockClause>,
}

impl Select {
    /// Returns true if ORDER BY, LIMIT or a locking clause is present,
    /// which makes the SELECT need parentheses inside a union.
    #[must_use]
    pub const fn has_trailing_clauses(&self) -> bool {
        !self.order_by.is_empty() || self.limit.is_some() || self.lock.is_some()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY or GROUP BY item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByItem {
    pub expr: Expr,
    /// Direction as written.
    pub direction: Option<SortDirection>,
}

/// A LIMIT operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValue {
    /// Literal row count.
    Number(u64),
    /// `?` marker with its 1-based position.
    Parameter(usize),
}

/// `LIMIT [offset,] count` or `LIMIT count OFFSET offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: Option<LimitValue>,
    pub count: LimitValue,
}

/// Index hint verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexHintAction {
    Use,
    Ignore,
    Force,
}

/// Clause an index hint is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexHintScope {
    Join,
    OrderBy,
    GroupBy,
}

/// `{USE|IGNORE|FORCE} {INDEX|KEY} [FOR ..] (names)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHint {
    pub action: IndexHintAction,
    pub scope: Option<IndexHintScope>,
    pub indexes: Vec<Identifier>,
}

/// Join operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// `JOIN` or `INNER JOIN`.
    Inner,
    /// `CROSS JOIN`.
    Cross,
    /// `STRAIGHT_JOIN`.
    Straight,
    /// `LEFT [OUTER] JOIN`.
    Left,
    /// `RIGHT [OUTER] JOIN`.
    Right,
    /// `NATURAL JOIN`.
    Natural,
    /// `NATURAL LEFT [OUTER] JOIN`.
    NaturalLeft,
    /// `NATURAL RIGHT [OUTER] JOIN`.
    NaturalRight,
}

impl JoinKind {
    /// Keyword sequence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Straight => "STRAIGHT_JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Natural => "NATURAL JOIN",
            Self::NaturalLeft => "NATURAL LEFT JOIN",
            Self::NaturalRight => "NATURAL RIGHT JOIN",
        }
    }

    /// Returns true for `LEFT` and `RIGHT` joins, which require a condition.
    #[must_use]
    pub const fn is_outer(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// `ON expr` or `USING (cols)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinCondition {
    On(Expr),
    Using(Vec<Identifier>),
}

/// A join of two table references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub left: TableReference,
    pub kind: JoinKind,
    pub right: TableReference,
    pub condition: Option<JoinCondition>,
}

/// An entry of a FROM list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableReference {
    /// Named table.
    Table {
        name: Identifier,
        alias: Option<Identifier>,
        hints: Vec<IndexHint>,
    },
    /// Subquery in FROM.
    Derived {
        subquery: Box<QueryExpr>,
        alias: Option<Identifier>,
    },
    /// Parenthesised comma list `(t1, t2)`.
    Nested(Vec<TableReference>),
    /// Join tree node.
    Join(Box<Join>),
}

impl TableReference {
    /// Creates an unaliased table reference.
    #[must_use]
    pub const fn table(name: Identifier) -> Self {
        Self::Table {
            name,
            alias: None,
            hints: Vec::new(),
        }
    }
}
