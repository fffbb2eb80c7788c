//! Abstract Syntax Tree (AST) types for MySQL statements.
//!
//! Every node is a plain owned value built bottom-up by the parser. Nodes
//! derive `PartialEq`, so two parses can be compared structurally, and
//! implement `Display` by rendering through [`SqlWriter`].

mod compound;
mod dal;
mod ddl;
mod dml;
mod expression;
mod identifier;
mod query;
mod render;
mod statement;
mod transaction;
mod types;
mod visitor;

pub use compound::{
    Block, CaseStatement, ConditionItem, ConditionValue, ConditionalBranch, Declare,
    DiagnosticsArea, DiagnosticsInfo, Fetch, GetDiagnostics, HandlerAction, If, Loop, Repeat,
    Signal, SignalItem, StatementInfoItem, While,
};
pub use dal::{
    Describe, DescribeColumn, Explain, ExplainFormat, IsolationLevel, ProfileType, Set,
    SetVariable, Show, ShowCreateKind, ShowFilter, TransactionCharacteristic,
};
pub use ddl::{
    AlterEvent, AlterRoutine, AlterSpecification, AlterTable, AlterView, ColumnDefinition,
    ColumnFormat, ColumnKey, ColumnStorage, CreateDatabase, CreateEvent, CreateIndex,
    CreateRoutine, CreateTable, CreateTrigger, CreateView, DropBehavior, DropDatabase, DropEvent,
    DropIndex, DropRoutine, DropTable, DropTrigger, DropView, DuplicateHandling, EventSchedule,
    EventStatus, ForeignKeyDefinition, GeneratedColumn, IndexColumn, IndexDefinition, IndexKind,
    IndexOption, IndexType, InsertMethod, OptionFlag, ParamMode, PartitionNames,
    PartitionOperation, Reference, ReferenceAction, ReferenceMatch, RoutineCharacteristic,
    RoutineKind, RoutineParam, RowFormat, SqlDataAccess, SqlSecurity, TableElement,
    TableOptions, TableRename, TriggerEvent, TriggerOrder, TriggerTiming, ViewAlgorithm,
    ViewCheckOption,
};
pub use dml::{Assignment, Call, Delete, Insert, InsertPriority, InsertSource, Update};
pub use expression::{
    AggregateFunction, BinaryOp, ConvertTarget, Expr, FunctionCall, IntervalUnit, IsTest,
    Literal, MatchModifier, Quantifier, StringLiteral, TemporalFunction, TrimMode, UnaryOp,
    VariableScope, WhenClause,
};
pub use identifier::Identifier;
pub use query::{
    FromClause, GroupBy, IndexHint, IndexHintAction, IndexHintScope, Join, JoinCondition,
    JoinKind, Limit, LimitValue, LockClause, OrderByItem, QueryExpr, Select, SelectItem,
    SelectOptions, SetQuantifier, SortDirection, TableReference, Union, UnionBranch,
};
pub use render::SqlWriter;
pub use statement::Statement;
pub use transaction::{
    Completion, CompletionType, Deallocate, Execute, Prepare, PrepareSource, TransactionMode,
};
pub use types::{CastKind, CastType, DataType, TypeName};
pub use visitor::{
    walk_alter_specification, walk_column_definition, walk_expr, walk_index_definition,
    walk_query, walk_select, walk_statement, walk_table_reference, Visitor,
};
