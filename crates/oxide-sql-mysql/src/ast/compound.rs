//! Stored-routine control flow AST types.

use super::{DataType, Expr, Identifier, Literal, QueryExpr, Statement};

/// `[label:] BEGIN statements END [label]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub label: Option<Identifier>,
    pub statements: Vec<Statement>,
}

/// One `IF`/`ELSEIF` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBranch {
    pub condition: Expr,
    pub statements: Vec<Statement>,
}

/// `IF .. THEN .. [ELSEIF ..] [ELSE ..] END IF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    /// The IF arm followed by the ELSEIF arms; never empty.
    pub branches: Vec<ConditionalBranch>,
    pub else_statements: Option<Vec<Statement>>,
}

/// `CASE [operand] WHEN .. THEN .. [ELSE ..] END CASE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStatement {
    pub operand: Option<Expr>,
    /// Never empty.
    pub branches: Vec<ConditionalBranch>,
    pub else_statements: Option<Vec<Statement>>,
}

/// `[label:] LOOP .. END LOOP [label]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub label: Option<Identifier>,
    pub statements: Vec<Statement>,
}

/// `[label:] WHILE cond DO .. END WHILE [label]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    pub label: Option<Identifier>,
    pub condition: Expr,
    pub statements: Vec<Statement>,
}

/// `[label:] REPEAT .. UNTIL cond END REPEAT [label]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    pub label: Option<Identifier>,
    pub statements: Vec<Statement>,
    pub until: Expr,
}

/// A condition value in handlers, condition declarations and SIGNAL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    /// MySQL error number.
    ErrorCode(u64),
    /// `SQLSTATE [VALUE] 'xxxxx'`.
    SqlState(String),
    /// Declared condition name.
    Name(Identifier),
    SqlWarning,
    NotFound,
    SqlException,
}

/// Handler action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerAction {
    Continue,
    Exit,
    Undo,
}

/// DECLARE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declare {
    /// `DECLARE a, b type [DEFAULT expr]`.
    Variables {
        names: Vec<Identifier>,
        data_type: DataType,
        default: Option<Expr>,
    },
    /// `DECLARE name CONDITION FOR value`.
    Condition {
        name: Identifier,
        value: ConditionValue,
    },
    /// `DECLARE name CURSOR FOR select`.
    Cursor {
        name: Identifier,
        query: Box<QueryExpr>,
    },
    /// `DECLARE action HANDLER FOR conditions statement`.
    Handler {
        action: HandlerAction,
        conditions: Vec<ConditionValue>,
        body: Box<Statement>,
    },
}

macro_rules! condition_items {
    ($($variant:ident => $text:literal,)*) => {
        /// Condition information item names of SIGNAL and GET DIAGNOSTICS.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum ConditionItem {
            $($variant,)*
        }

        impl ConditionItem {
            /// Looks up an item by name (case-insensitive).
            #[must_use]
            pub fn from_word(word: &str) -> Option<Self> {
                match word.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Upper-case name.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

condition_items! {
    ClassOrigin => "CLASS_ORIGIN",
    SubclassOrigin => "SUBCLASS_ORIGIN",
    ReturnedSqlstate => "RETURNED_SQLSTATE",
    MessageText => "MESSAGE_TEXT",
    MysqlErrno => "MYSQL_ERRNO",
    ConstraintCatalog => "CONSTRAINT_CATALOG",
    ConstraintSchema => "CONSTRAINT_SCHEMA",
    ConstraintName => "CONSTRAINT_NAME",
    CatalogName => "CATALOG_NAME",
    SchemaName => "SCHEMA_NAME",
    TableName => "TABLE_NAME",
    ColumnName => "COLUMN_NAME",
    CursorName => "CURSOR_NAME",
}

/// `item = literal` in a SIGNAL SET list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalItem {
    pub item: ConditionItem,
    pub value: Literal,
}

/// SIGNAL or RESIGNAL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub resignal: bool,
    /// Required for SIGNAL, optional for RESIGNAL.
    pub condition: Option<ConditionValue>,
    pub items: Vec<SignalItem>,
}

/// Diagnostics area selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsArea {
    Current,
    Stacked,
}

/// Statement information item of GET DIAGNOSTICS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementInfoItem {
    Number,
    RowCount,
}

impl StatementInfoItem {
    /// Upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::RowCount => "ROW_COUNT",
        }
    }
}

/// What GET DIAGNOSTICS retrieves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticsInfo {
    /// `target = {NUMBER | ROW_COUNT}, ..`.
    Statement(Vec<(Expr, StatementInfoItem)>),
    /// `CONDITION n target = item, ..`.
    Condition {
        number: Expr,
        items: Vec<(Expr, ConditionItem)>,
    },
}

/// `GET [CURRENT | STACKED] DIAGNOSTICS ..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDiagnostics {
    pub area: Option<DiagnosticsArea>,
    pub info: DiagnosticsInfo,
}

/// `FETCH [[NEXT] FROM] cursor INTO targets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub cursor: Identifier,
    pub targets: Vec<Identifier>,
}
