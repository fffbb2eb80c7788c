//! Data definition AST types: tables, indexes, views, routines, triggers
//! and events.

use super::{DataType, Expr, Identifier, IntervalUnit, QueryExpr, SortDirection, Statement};

// ===================================================================
// Columns
// ===================================================================

/// Inline index marker on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    /// `PRIMARY KEY` or bare `KEY`.
    Primary,
    /// `UNIQUE [KEY]`.
    Unique,
}

/// `COLUMN_FORMAT` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Fixed,
    Dynamic,
    Default,
}

/// `STORAGE` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStorage {
    Disk,
    Memory,
    Default,
}

/// `[GENERATED ALWAYS] AS (expr) [VIRTUAL | STORED]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedColumn {
    pub expr: Expr,
    /// `STORED` (true) or `VIRTUAL` (false), if written.
    pub stored: Option<bool>,
}

/// Type and attributes of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub data_type: DataType,
    /// `NULL` (true) or `NOT NULL` (false); the last one written wins.
    pub nullable: Option<bool>,
    pub default: Option<Expr>,
    /// `ON UPDATE expr`.
    pub on_update: Option<Expr>,
    pub auto_increment: bool,
    pub key: Option<ColumnKey>,
    pub comment: Option<String>,
    pub column_format: Option<ColumnFormat>,
    pub storage: Option<ColumnStorage>,
    pub generated: Option<GeneratedColumn>,
    /// Inline `REFERENCES` clause.
    pub reference: Option<Reference>,
}

impl ColumnDefinition {
    /// Creates a definition with no attributes.
    #[must_use]
    pub const fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            nullable: None,
            default: None,
            on_update: None,
            auto_increment: false,
            key: None,
            comment: None,
            column_format: None,
            storage: None,
            generated: None,
            reference: None,
        }
    }
}

// ===================================================================
// Indexes and constraints
// ===================================================================

/// Index category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Primary,
    Unique,
    Index,
    Fulltext,
    Spatial,
}

/// Index storage structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    BTree,
    Hash,
    RTree,
}

impl IndexType {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BTree => "BTREE",
            Self::Hash => "HASH",
            Self::RTree => "RTREE",
        }
    }
}

/// A key part: column, optional prefix length and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    pub name: Identifier,
    pub length: Option<u64>,
    pub direction: Option<SortDirection>,
}

/// Index option. The set is closed; anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOption {
    KeyBlockSize(u64),
    Using(IndexType),
    WithParser(Identifier),
    Comment(String),
}

/// An index in CREATE TABLE, ALTER TABLE ADD or CREATE INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub kind: IndexKind,
    /// `CONSTRAINT symbol` prefix.
    pub constraint: Option<Identifier>,
    pub name: Option<Identifier>,
    /// `USING type` before the column list.
    pub index_type: Option<IndexType>,
    pub columns: Vec<IndexColumn>,
    pub options: Vec<IndexOption>,
}

/// `MATCH` clause of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMatch {
    Full,
    Partial,
    Simple,
}

/// Referential action of `ON DELETE` / `ON UPDATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl ReferenceAction {
    /// Keyword sequence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::NoAction => "NO ACTION",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// `REFERENCES table (cols) [MATCH ..] [ON DELETE ..] [ON UPDATE ..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub table: Identifier,
    pub columns: Vec<Identifier>,
    pub match_type: Option<ReferenceMatch>,
    pub on_delete: Option<ReferenceAction>,
    pub on_update: Option<ReferenceAction>,
}

/// `[CONSTRAINT symbol] FOREIGN KEY [name] (cols) REFERENCES ..`.
///
/// `columns` and `reference.columns` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDefinition {
    pub constraint: Option<Identifier>,
    pub name: Option<Identifier>,
    pub columns: Vec<Identifier>,
    pub reference: Reference,
}

/// An entry in the parenthesised body of CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableElement {
    Column {
        name: Identifier,
        definition: ColumnDefinition,
    },
    Index(IndexDefinition),
    ForeignKey(ForeignKeyDefinition),
    Check {
        constraint: Option<Identifier>,
        expr: Expr,
    },
}

// ===================================================================
// Table options
// ===================================================================

/// Value of `PACK_KEYS` and the `STATS_*` options: 0, 1 or DEFAULT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFlag {
    Off,
    On,
    Default,
}

/// `ROW_FORMAT` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Default,
    Dynamic,
    Fixed,
    Compressed,
    Redundant,
    Compact,
}

impl RowFormat {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Dynamic => "DYNAMIC",
            Self::Fixed => "FIXED",
            Self::Compressed => "COMPRESSED",
            Self::Redundant => "REDUNDANT",
            Self::Compact => "COMPACT",
        }
    }
}

/// `INSERT_METHOD` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMethod {
    No,
    First,
    Last,
}

/// Table options of CREATE TABLE and ALTER TABLE. Each option appears at
/// most once; a repeated option keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub engine: Option<Identifier>,
    pub auto_increment: Option<u64>,
    pub avg_row_length: Option<u64>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub checksum: Option<bool>,
    pub comment: Option<String>,
    pub connection: Option<String>,
    pub data_directory: Option<String>,
    pub index_directory: Option<String>,
    pub delay_key_write: Option<bool>,
    pub insert_method: Option<InsertMethod>,
    pub key_block_size: Option<u64>,
    pub max_rows: Option<u64>,
    pub min_rows: Option<u64>,
    pub pack_keys: Option<OptionFlag>,
    pub password: Option<String>,
    pub row_format: Option<RowFormat>,
    pub stats_auto_recalc: Option<OptionFlag>,
    pub stats_persistent: Option<OptionFlag>,
    pub tablespace: Option<Identifier>,
    /// `UNION = (t1, t2)` of MERGE tables.
    pub union: Vec<Identifier>,
}

impl TableOptions {
    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ===================================================================
// Tables
// ===================================================================

/// `IGNORE` or `REPLACE` before `CREATE TABLE ... SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateHandling {
    Ignore,
    Replace,
}

/// CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: Identifier,
    /// Column and constraint definitions.
    pub elements: Vec<TableElement>,
    /// `LIKE other`.
    pub like: Option<Identifier>,
    pub options: TableOptions,
    /// `PARTITION BY ..` clause, verbatim.
    pub partition: Option<String>,
    pub duplicate: Option<DuplicateHandling>,
    /// `[AS] SELECT ..`.
    pub query: Option<Box<QueryExpr>>,
}

/// Partitions named by a maintenance operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionNames {
    All,
    Names(Vec<Identifier>),
}

/// Partition maintenance verbs taking a partition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionOperation {
    Analyze,
    Check,
    Optimize,
    Rebuild,
    Repair,
    Truncate,
}

impl PartitionOperation {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analyze => "ANALYZE",
            Self::Check => "CHECK",
            Self::Optimize => "OPTIMIZE",
            Self::Rebuild => "REBUILD",
            Self::Repair => "REPAIR",
            Self::Truncate => "TRUNCATE",
        }
    }
}

/// One clause of ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterSpecification {
    /// `ADD [COLUMN] name def [FIRST | AFTER col]`. At most one of
    /// `first` and `after_column` is set.
    AddColumn {
        column: Identifier,
        definition: ColumnDefinition,
        first: bool,
        after_column: Option<Identifier>,
    },
    /// `ADD [COLUMN] (name def, ..)`.
    AddColumns(Vec<(Identifier, ColumnDefinition)>),
    AddIndex(IndexDefinition),
    AddForeignKey(ForeignKeyDefinition),
    /// `ALTER [COLUMN] col {SET DEFAULT lit | DROP DEFAULT}`.
    AlterColumnDefault {
        column: Identifier,
        default: Option<Expr>,
    },
    ChangeColumn {
        old_name: Identifier,
        new_name: Identifier,
        definition: ColumnDefinition,
        first: bool,
        after_column: Option<Identifier>,
    },
    ModifyColumn {
        column: Identifier,
        definition: ColumnDefinition,
        first: bool,
        after_column: Option<Identifier>,
    },
    DropColumn(Identifier),
    DropPrimaryKey,
    DropIndex(Identifier),
    DropForeignKey(Identifier),
    DisableKeys,
    EnableKeys,
    /// `RENAME [TO | AS] name`.
    RenameTable(Identifier),
    /// `RENAME {INDEX | KEY} old TO new`.
    RenameIndex {
        old_name: Identifier,
        new_name: Identifier,
    },
    OrderBy(Vec<Identifier>),
    /// `CONVERT TO CHARACTER SET cs [COLLATE c]`.
    ConvertToCharset {
        charset: String,
        collation: Option<String>,
    },
    DiscardTablespace,
    ImportTablespace,
    Force,
    /// `ALGORITHM [=] value`.
    Algorithm(Identifier),
    /// `LOCK [=] value`.
    Lock(Identifier),
    /// `ADD PARTITION (definitions)`, definitions verbatim.
    AddPartition(String),
    DropPartition(Vec<Identifier>),
    CoalescePartition(u64),
    /// `REORGANIZE PARTITION [names INTO (definitions)]`.
    ReorganizePartition {
        names: Vec<Identifier>,
        into: Option<String>,
    },
    ExchangePartition {
        partition: Identifier,
        table: Identifier,
    },
    PartitionMaintenance {
        operation: PartitionOperation,
        partitions: PartitionNames,
    },
    RemovePartitioning,
}

/// ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTable {
    pub ignore: bool,
    pub name: Identifier,
    pub specifications: Vec<AlterSpecification>,
    pub options: TableOptions,
    /// New `PARTITION BY ..` clause, verbatim.
    pub partition: Option<String>,
}

/// `RESTRICT` or `CASCADE` on DROP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehavior {
    Restrict,
    Cascade,
}

/// DROP TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    pub temporary: bool,
    pub if_exists: bool,
    pub names: Vec<Identifier>,
    pub behavior: Option<DropBehavior>,
}

/// `old TO new` in RENAME TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRename {
    pub from: Identifier,
    pub to: Identifier,
}

/// CREATE INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Index definition; its `name` is always set.
    pub index: IndexDefinition,
    pub table: Identifier,
    pub algorithm: Option<Identifier>,
    pub lock: Option<Identifier>,
}

/// DROP INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndex {
    pub name: Identifier,
    pub table: Identifier,
    pub algorithm: Option<Identifier>,
    pub lock: Option<Identifier>,
}

/// CREATE DATABASE / SCHEMA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabase {
    pub if_not_exists: bool,
    pub name: Identifier,
    pub charset: Option<String>,
    pub collation: Option<String>,
}

/// DROP DATABASE / SCHEMA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDatabase {
    pub if_exists: bool,
    pub name: Identifier,
}

// ===================================================================
// Triggers and stored routines
// ===================================================================

/// Trigger action time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTiming {
    Before,
    After,
}

/// Trigger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Insert,
    Update,
    Delete,
}

/// `FOLLOWS other` or `PRECEDES other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOrder {
    Follows(Identifier),
    Precedes(Identifier),
}

/// CREATE TRIGGER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrigger {
    pub definer: Option<Expr>,
    pub name: Identifier,
    pub timing: TriggerTiming,
    pub event: TriggerEvent,
    pub table: Identifier,
    pub order: Option<TriggerOrder>,
    pub body: Box<Statement>,
}

/// DROP TRIGGER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTrigger {
    pub if_exists: bool,
    pub name: Identifier,
}

/// PROCEDURE or FUNCTION.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    Procedure,
    Function,
}

impl RoutineKind {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Procedure => "PROCEDURE",
            Self::Function => "FUNCTION",
        }
    }
}

/// Procedure parameter direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    In,
    Out,
    InOut,
}

/// A routine parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineParam {
    /// Only procedures have modes.
    pub mode: Option<ParamMode>,
    pub name: Identifier,
    pub data_type: DataType,
}

/// SQL data access characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDataAccess {
    ContainsSql,
    NoSql,
    ReadsSqlData,
    ModifiesSqlData,
}

/// `SQL SECURITY` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlSecurity {
    Definer,
    Invoker,
}

/// Routine characteristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineCharacteristic {
    Comment(String),
    LanguageSql,
    /// `[NOT] DETERMINISTIC`.
    Deterministic(bool),
    DataAccess(SqlDataAccess),
    SqlSecurity(SqlSecurity),
}

/// CREATE PROCEDURE / FUNCTION.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoutine {
    pub definer: Option<Expr>,
    pub kind: RoutineKind,
    pub name: Identifier,
    pub params: Vec<RoutineParam>,
    /// Return type; functions only.
    pub returns: Option<DataType>,
    pub characteristics: Vec<RoutineCharacteristic>,
    pub body: Box<Statement>,
}

/// ALTER PROCEDURE / FUNCTION.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterRoutine {
    pub kind: RoutineKind,
    pub name: Identifier,
    pub characteristics: Vec<RoutineCharacteristic>,
}

/// DROP PROCEDURE / FUNCTION.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRoutine {
    pub kind: RoutineKind,
    pub if_exists: bool,
    pub name: Identifier,
}

// ===================================================================
// Views and events
// ===================================================================

/// View `ALGORITHM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAlgorithm {
    Undefined,
    Merge,
    TempTable,
}

impl ViewAlgorithm {
    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Merge => "MERGE",
            Self::TempTable => "TEMPTABLE",
        }
    }
}

/// `WITH [CASCADED | LOCAL] CHECK OPTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCheckOption {
    Default,
    Cascaded,
    Local,
}

/// CREATE [OR REPLACE] VIEW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateView {
    pub or_replace: bool,
    pub algorithm: Option<ViewAlgorithm>,
    pub definer: Option<Expr>,
    pub sql_security: Option<SqlSecurity>,
    pub name: Identifier,
    pub columns: Vec<Identifier>,
    pub query: Box<QueryExpr>,
    pub check_option: Option<ViewCheckOption>,
}

/// ALTER VIEW, recognized up to the view name. The rest of the statement
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterView {
    pub algorithm: Option<ViewAlgorithm>,
    pub definer: Option<Expr>,
    pub sql_security: Option<SqlSecurity>,
    pub name: Identifier,
    pub remainder: String,
}

/// DROP VIEW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropView {
    pub if_exists: bool,
    pub names: Vec<Identifier>,
    pub behavior: Option<DropBehavior>,
}

/// Event schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSchedule {
    /// `AT timestamp [+ INTERVAL ..]`.
    At(Expr),
    /// `EVERY value unit [STARTS ts] [ENDS ts]`.
    Every {
        value: Expr,
        unit: IntervalUnit,
        starts: Option<Expr>,
        ends: Option<Expr>,
    },
}

/// Event status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Enable,
    Disable,
    DisableOnSlave,
}

/// CREATE EVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub definer: Option<Expr>,
    pub if_not_exists: bool,
    pub name: Identifier,
    pub schedule: EventSchedule,
    /// `ON COMPLETION [NOT] PRESERVE`.
    pub preserve: Option<bool>,
    pub status: Option<EventStatus>,
    pub comment: Option<String>,
    pub body: Box<Statement>,
}

/// ALTER EVENT, recognized up to the event name. The rest of the
/// statement is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterEvent {
    pub definer: Option<Expr>,
    pub name: Identifier,
    pub remainder: String,
}

/// DROP EVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub if_exists: bool,
    pub name: Identifier,
}
