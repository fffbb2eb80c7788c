//! Database administration AST types: SHOW, SET, EXPLAIN and DESCRIBE.

use super::{Expr, Identifier, Limit, Statement, VariableScope};

/// Trailing `LIKE 'pattern'` or `WHERE expr` shared by many SHOW forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowFilter {
    Like(String),
    Where(Expr),
}

/// Object kind of `SHOW CREATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCreateKind {
    Database,
    Event,
    Function,
    Procedure,
    Table,
    Trigger,
    View,
}

impl ShowCreateKind {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "DATABASE",
            Self::Event => "EVENT",
            Self::Function => "FUNCTION",
            Self::Procedure => "PROCEDURE",
            Self::Table => "TABLE",
            Self::Trigger => "TRIGGER",
            Self::View => "VIEW",
        }
    }
}

/// Resource class of `SHOW PROFILE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileType {
    All,
    BlockIo,
    ContextSwitches,
    Cpu,
    Ipc,
    Memory,
    PageFaults,
    Source,
    Swaps,
}

impl ProfileType {
    /// Keyword sequence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::BlockIo => "BLOCK IO",
            Self::ContextSwitches => "CONTEXT SWITCHES",
            Self::Cpu => "CPU",
            Self::Ipc => "IPC",
            Self::Memory => "MEMORY",
            Self::PageFaults => "PAGE FAULTS",
            Self::Source => "SOURCE",
            Self::Swaps => "SWAPS",
        }
    }
}

/// A SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Show {
    Authors,
    /// `SHOW {BINARY | MASTER} LOGS`.
    BinaryLogs,
    BinlogEvents {
        log_name: Option<String>,
        position: Option<u64>,
        limit: Option<Limit>,
    },
    CharacterSet(Option<ShowFilter>),
    Collation(Option<ShowFilter>),
    /// `SHOW [FULL] {COLUMNS | FIELDS} {FROM | IN} t [{FROM | IN} db]`.
    Columns {
        full: bool,
        table: Identifier,
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    Contributors,
    Create {
        kind: ShowCreateKind,
        /// `SHOW CREATE DATABASE IF NOT EXISTS`.
        if_not_exists: bool,
        name: Identifier,
    },
    Databases(Option<ShowFilter>),
    /// `SHOW ENGINE name {STATUS | MUTEX}`.
    Engine { name: Identifier, mutex: bool },
    /// `SHOW [STORAGE] ENGINES`.
    Engines,
    Errors(Option<Limit>),
    Warnings(Option<Limit>),
    /// `SHOW COUNT(*) ERRORS`.
    ErrorCount,
    /// `SHOW COUNT(*) WARNINGS`.
    WarningCount,
    Events {
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    FunctionCode(Identifier),
    FunctionStatus(Option<ShowFilter>),
    /// `SHOW GRANTS [FOR user]`.
    Grants(Option<Expr>),
    /// `SHOW {INDEX | INDEXES | KEYS} {FROM | IN} t [{FROM | IN} db] [WHERE ..]`.
    Index {
        table: Identifier,
        database: Option<Identifier>,
        filter: Option<Expr>,
    },
    MasterStatus,
    OpenTables {
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    Plugins,
    Privileges,
    ProcedureCode(Identifier),
    ProcedureStatus(Option<ShowFilter>),
    Processlist {
        full: bool,
    },
    Profile {
        types: Vec<ProfileType>,
        query: Option<u64>,
        limit: Option<Limit>,
    },
    Profiles,
    SlaveHosts,
    SlaveStatus,
    Status {
        scope: Option<VariableScope>,
        filter: Option<ShowFilter>,
    },
    TableStatus {
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    Tables {
        full: bool,
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    Triggers {
        database: Option<Identifier>,
        filter: Option<ShowFilter>,
    },
    Variables {
        scope: Option<VariableScope>,
        filter: Option<ShowFilter>,
    },
}

/// Transaction isolation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    /// Keyword sequence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadUncommitted => "READ UNCOMMITTED",
            Self::ReadCommitted => "READ COMMITTED",
            Self::RepeatableRead => "REPEATABLE READ",
            Self::Serializable => "SERIALIZABLE",
        }
    }
}

/// Characteristic of `SET TRANSACTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCharacteristic {
    IsolationLevel(IsolationLevel),
    ReadWrite,
    ReadOnly,
}

/// `target = value` in a SET statement.
///
/// The target is a user variable, a system variable (scoped with
/// `GLOBAL`/`SESSION`/`LOCAL` or `@@`), or a plain name, possibly the
/// `NEW.col` / `OLD.col` row references of a trigger body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetVariable {
    pub target: Expr,
    pub value: Expr,
}

/// A SET statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Set {
    /// `SET a = 1, @b = 2, GLOBAL c = 3`.
    Variables(Vec<SetVariable>),
    /// `SET NAMES {charset | DEFAULT} [COLLATE c]`; `None` is DEFAULT.
    Names {
        charset: Option<String>,
        collation: Option<String>,
    },
    /// `SET {CHARACTER SET | CHARSET} {charset | DEFAULT}`.
    CharacterSet(Option<String>),
    /// `SET [scope] TRANSACTION characteristic, ..`.
    Transaction {
        scope: Option<VariableScope>,
        characteristics: Vec<TransactionCharacteristic>,
    },
}

/// `EXPLAIN` output modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainFormat {
    Extended,
    Partitions,
    Traditional,
    Json,
}

/// `EXPLAIN [format] statement`; DESCRIBE and DESC are synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explain {
    pub format: Option<ExplainFormat>,
    /// SELECT, INSERT, REPLACE, UPDATE or DELETE.
    pub statement: Box<Statement>,
}

/// Column selector of DESCRIBE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeColumn {
    Name(Identifier),
    /// Wildcard pattern string.
    Pattern(String),
}

/// `{DESCRIBE | DESC | EXPLAIN} table [column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Describe {
    pub table: Identifier,
    pub column: Option<DescribeColumn>,
}
