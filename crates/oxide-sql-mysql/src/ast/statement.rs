//! The statement type.

use super::{
    AlterEvent, AlterRoutine, AlterTable, AlterView, Block, Call, CaseStatement, Completion,
    CreateDatabase, CreateEvent, CreateIndex, CreateRoutine, CreateTable, CreateTrigger,
    CreateView, Deallocate, Declare, Delete, Describe, DropDatabase, DropEvent, DropIndex,
    DropRoutine, DropTable, DropTrigger, DropView, Execute, Explain, Expr, Fetch, GetDiagnostics,
    Identifier, If, Insert, Loop, Prepare, QueryExpr, Repeat, Set, Show, Signal, TableRename,
    TransactionMode, Update, While,
};

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::large_enum_variant)]
pub enum Statement {
    // DML
    /// SELECT or UNION.
    Query(QueryExpr),
    /// INSERT or REPLACE.
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Call(Call),

    // DDL
    CreateTable(CreateTable),
    AlterTable(AlterTable),
    DropTable(DropTable),
    RenameTable(Vec<TableRename>),
    TruncateTable(Identifier),
    CreateIndex(CreateIndex),
    DropIndex(DropIndex),
    CreateDatabase(CreateDatabase),
    DropDatabase(DropDatabase),
    CreateTrigger(CreateTrigger),
    DropTrigger(DropTrigger),
    CreateRoutine(CreateRoutine),
    AlterRoutine(AlterRoutine),
    DropRoutine(DropRoutine),
    CreateView(CreateView),
    AlterView(AlterView),
    DropView(DropView),
    CreateEvent(CreateEvent),
    AlterEvent(AlterEvent),
    DropEvent(DropEvent),

    // DAL
    Show(Show),
    Set(Set),
    Explain(Explain),
    Describe(Describe),
    Use(Identifier),

    // Compound statements
    Block(Block),
    If(If),
    Case(CaseStatement),
    Loop(Loop),
    While(While),
    Repeat(Repeat),
    Leave(Identifier),
    Iterate(Identifier),
    Return(Expr),
    Declare(Declare),
    Signal(Signal),
    GetDiagnostics(GetDiagnostics),
    Open(Identifier),
    Fetch(Fetch),
    Close(Identifier),

    // Transactions
    StartTransaction(Vec<TransactionMode>),
    /// `BEGIN [WORK]` outside a routine body.
    Begin {
        work: bool,
    },
    Commit(Completion),
    Rollback(Completion),
    Savepoint(Identifier),
    ReleaseSavepoint(Identifier),
    /// `ROLLBACK [WORK] TO [SAVEPOINT] name`.
    RollbackToSavepoint {
        work: bool,
        name: Identifier,
    },

    // Prepared statements
    Prepare(Prepare),
    Execute(Execute),
    Deallocate(Deallocate),
}

impl Statement {
    /// Returns the query if this is a SELECT or UNION.
    #[must_use]
    pub const fn as_query(&self) -> Option<&QueryExpr> {
        match self {
            Self::Query(query) => Some(query),
            _ => None,
        }
    }
}
