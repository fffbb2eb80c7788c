//! INSERT, REPLACE, UPDATE, DELETE and CALL AST types.

use super::{Expr, Identifier, Limit, OrderByItem, QueryExpr, TableReference};

/// `column = value` in SET lists and `ON DUPLICATE KEY UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: Identifier,
    pub value: Expr,
}

/// Scheduling modifier of INSERT and REPLACE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPriority {
    LowPriority,
    Delayed,
    HighPriority,
}

/// Row source of an INSERT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertSource {
    /// `VALUES (..), (..)`.
    Values(Vec<Vec<Expr>>),
    /// `SET col = expr, ..`.
    Set(Vec<Assignment>),
    /// `SELECT ..`.
    Query(Box<QueryExpr>),
}

/// INSERT or REPLACE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    /// REPLACE rather than INSERT.
    pub replace: bool,
    pub priority: Option<InsertPriority>,
    pub ignore: bool,
    pub table: Identifier,
    pub columns: Vec<Identifier>,
    pub source: InsertSource,
    /// `ON DUPLICATE KEY UPDATE` assignments.
    pub on_duplicate: Vec<Assignment>,
}

/// Single or multi-table UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub low_priority: bool,
    pub ignore: bool,
    pub tables: Vec<TableReference>,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

/// Single or multi-table DELETE.
///
/// With no `targets` this is the single-table form `DELETE FROM t ..`.
/// Otherwise rows are deleted from `targets`, either as
/// `DELETE targets FROM tables` or, with `using`, as
/// `DELETE FROM targets USING tables`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    pub low_priority: bool,
    pub quick: bool,
    pub ignore: bool,
    pub targets: Vec<Identifier>,
    pub using: bool,
    pub tables: Vec<TableReference>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

/// `CALL proc[(args)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub procedure: Identifier,
    pub args: Vec<Expr>,
}
