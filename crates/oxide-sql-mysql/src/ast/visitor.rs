//! Syntax tree traversal.
//!
//! A [`Visitor`] has one callback per node family. Every callback defaults
//! to the matching `walk_*` function, which visits the node's children in
//! source order. Override a callback to observe a family, and call the
//! `walk_*` function from the override to keep descending.

use super::{
    AlterSpecification, Assignment, ColumnDefinition, ConditionValue, DataType,
    Declare, DiagnosticsInfo, EventSchedule, Expr, ForeignKeyDefinition, FromClause, Identifier,
    IndexDefinition, IndexOption, InsertSource, JoinCondition, OrderByItem, QueryExpr, Reference,
    Select, Set, Show, ShowFilter, Statement, TableElement, TableReference, TriggerOrder,
};

/// Callbacks invoked while walking a syntax tree.
pub trait Visitor {
    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_query(&mut self, query: &QueryExpr) {
        walk_query(self, query);
    }

    fn visit_select(&mut self, select: &Select) {
        walk_select(self, select);
    }

    fn visit_table_reference(&mut self, table: &TableReference) {
        walk_table_reference(self, table);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    /// Called for every name: tables, columns, indexes, aliases, labels.
    /// Names of called functions go to [`Visitor::visit_function_name`].
    fn visit_identifier(&mut self, _identifier: &Identifier) {}

    /// Called for the name of a user or builtin function call.
    fn visit_function_name(&mut self, _name: &Identifier) {}

    fn visit_data_type(&mut self, _data_type: &DataType) {}

    fn visit_column_definition(&mut self, definition: &ColumnDefinition) {
        walk_column_definition(self, definition);
    }

    fn visit_index_definition(&mut self, index: &IndexDefinition) {
        walk_index_definition(self, index);
    }

    fn visit_alter_specification(&mut self, specification: &AlterSpecification) {
        walk_alter_specification(self, specification);
    }

    /// Called for the statement list of a block, loop or conditional arm.
    fn visit_compound_body(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.visit_statement(statement);
        }
    }
}

impl Statement {
    /// Walks this statement with `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_statement(self);
    }
}

impl Expr {
    /// Walks this expression with `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expr(self);
    }
}

fn walk_exprs<V: Visitor + ?Sized>(visitor: &mut V, exprs: &[Expr]) {
    for expr in exprs {
        visitor.visit_expr(expr);
    }
}

fn walk_identifiers<V: Visitor + ?Sized>(visitor: &mut V, identifiers: &[Identifier]) {
    for identifier in identifiers {
        visitor.visit_identifier(identifier);
    }
}

fn walk_order_by<V: Visitor + ?Sized>(visitor: &mut V, items: &[OrderByItem]) {
    for item in items {
        visitor.visit_expr(&item.expr);
    }
}

fn walk_assignments<V: Visitor + ?Sized>(visitor: &mut V, assignments: &[Assignment]) {
    for assignment in assignments {
        visitor.visit_identifier(&assignment.column);
        visitor.visit_expr(&assignment.value);
    }
}

fn walk_optional_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: Option<&Expr>) {
    if let Some(expr) = expr {
        visitor.visit_expr(expr);
    }
}

fn walk_optional_identifier<V: Visitor + ?Sized>(visitor: &mut V, identifier: Option<&Identifier>) {
    if let Some(identifier) = identifier {
        visitor.visit_identifier(identifier);
    }
}

/// Visits the children of a statement.
pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Query(query) => visitor.visit_query(query),
        Statement::Insert(insert) => {
            visitor.visit_identifier(&insert.table);
            walk_identifiers(visitor, &insert.columns);
            match &insert.source {
                InsertSource::Values(rows) => {
                    for row in rows {
                        walk_exprs(visitor, row);
                    }
                }
                InsertSource::Set(assignments) => walk_assignments(visitor, assignments),
                InsertSource::Query(query) => visitor.visit_query(query),
            }
            walk_assignments(visitor, &insert.on_duplicate);
        }
        Statement::Update(update) => {
            for table in &update.tables {
                visitor.visit_table_reference(table);
            }
            walk_assignments(visitor, &update.assignments);
            walk_optional_expr(visitor, update.where_clause.as_ref());
            walk_order_by(visitor, &update.order_by);
        }
        Statement::Delete(delete) => {
            walk_identifiers(visitor, &delete.targets);
            for table in &delete.tables {
                visitor.visit_table_reference(table);
            }
            walk_optional_expr(visitor, delete.where_clause.as_ref());
            walk_order_by(visitor, &delete.order_by);
        }
        Statement::Call(call) => {
            visitor.visit_identifier(&call.procedure);
            walk_exprs(visitor, &call.args);
        }

        Statement::CreateTable(create) => {
            visitor.visit_identifier(&create.name);
            for element in &create.elements {
                walk_table_element(visitor, element);
            }
            walk_optional_identifier(visitor, create.like.as_ref());
            walk_optional_identifier(visitor, create.options.engine.as_ref());
            walk_optional_identifier(visitor, create.options.tablespace.as_ref());
            walk_identifiers(visitor, &create.options.union);
            if let Some(query) = &create.query {
                visitor.visit_query(query);
            }
        }
        Statement::AlterTable(alter) => {
            visitor.visit_identifier(&alter.name);
            for specification in &alter.specifications {
                visitor.visit_alter_specification(specification);
            }
            walk_optional_identifier(visitor, alter.options.engine.as_ref());
            walk_optional_identifier(visitor, alter.options.tablespace.as_ref());
            walk_identifiers(visitor, &alter.options.union);
        }
        Statement::DropTable(drop) => walk_identifiers(visitor, &drop.names),
        Statement::RenameTable(renames) => {
            for rename in renames {
                visitor.visit_identifier(&rename.from);
                visitor.visit_identifier(&rename.to);
            }
        }
        Statement::TruncateTable(name)
        | Statement::Use(name)
        | Statement::Leave(name)
        | Statement::Iterate(name)
        | Statement::Open(name)
        | Statement::Close(name)
        | Statement::Savepoint(name)
        | Statement::ReleaseSavepoint(name)
        | Statement::RollbackToSavepoint { name, .. } => visitor.visit_identifier(name),
        Statement::CreateIndex(create) => {
            visitor.visit_index_definition(&create.index);
            visitor.visit_identifier(&create.table);
            walk_optional_identifier(visitor, create.algorithm.as_ref());
            walk_optional_identifier(visitor, create.lock.as_ref());
        }
        Statement::DropIndex(drop) => {
            visitor.visit_identifier(&drop.name);
            visitor.visit_identifier(&drop.table);
            walk_optional_identifier(visitor, drop.algorithm.as_ref());
            walk_optional_identifier(visitor, drop.lock.as_ref());
        }
        Statement::CreateDatabase(create) => visitor.visit_identifier(&create.name),
        Statement::DropDatabase(drop) => visitor.visit_identifier(&drop.name),
        Statement::CreateTrigger(trigger) => {
            walk_optional_expr(visitor, trigger.definer.as_ref());
            visitor.visit_identifier(&trigger.name);
            visitor.visit_identifier(&trigger.table);
            match &trigger.order {
                Some(TriggerOrder::Follows(other) | TriggerOrder::Precedes(other)) => {
                    visitor.visit_identifier(other);
                }
                None => {}
            }
            visitor.visit_statement(&trigger.body);
        }
        Statement::DropTrigger(drop) => visitor.visit_identifier(&drop.name),
        Statement::CreateRoutine(routine) => {
            walk_optional_expr(visitor, routine.definer.as_ref());
            visitor.visit_identifier(&routine.name);
            for param in &routine.params {
                visitor.visit_identifier(&param.name);
                visitor.visit_data_type(&param.data_type);
            }
            if let Some(returns) = &routine.returns {
                visitor.visit_data_type(returns);
            }
            visitor.visit_statement(&routine.body);
        }
        Statement::AlterRoutine(alter) => visitor.visit_identifier(&alter.name),
        Statement::DropRoutine(drop) => visitor.visit_identifier(&drop.name),
        Statement::CreateView(view) => {
            walk_optional_expr(visitor, view.definer.as_ref());
            visitor.visit_identifier(&view.name);
            walk_identifiers(visitor, &view.columns);
            visitor.visit_query(&view.query);
        }
        Statement::AlterView(view) => {
            walk_optional_expr(visitor, view.definer.as_ref());
            visitor.visit_identifier(&view.name);
        }
        Statement::DropView(drop) => walk_identifiers(visitor, &drop.names),
        Statement::CreateEvent(event) => {
            walk_optional_expr(visitor, event.definer.as_ref());
            visitor.visit_identifier(&event.name);
            match &event.schedule {
                EventSchedule::At(at) => visitor.visit_expr(at),
                EventSchedule::Every {
                    value, starts, ends, ..
                } => {
                    visitor.visit_expr(value);
                    walk_optional_expr(visitor, starts.as_ref());
                    walk_optional_expr(visitor, ends.as_ref());
                }
            }
            visitor.visit_statement(&event.body);
        }
        Statement::AlterEvent(event) => {
            walk_optional_expr(visitor, event.definer.as_ref());
            visitor.visit_identifier(&event.name);
        }
        Statement::DropEvent(drop) => visitor.visit_identifier(&drop.name),

        Statement::Show(show) => walk_show(visitor, show),
        Statement::Set(set) => {
            if let Set::Variables(variables) = set {
                for variable in variables {
                    visitor.visit_expr(&variable.target);
                    visitor.visit_expr(&variable.value);
                }
            }
        }
        Statement::Explain(explain) => visitor.visit_statement(&explain.statement),
        Statement::Describe(describe) => {
            visitor.visit_identifier(&describe.table);
            if let Some(super::DescribeColumn::Name(column)) = &describe.column {
                visitor.visit_identifier(column);
            }
        }

        Statement::Block(block) => {
            walk_optional_identifier(visitor, block.label.as_ref());
            visitor.visit_compound_body(&block.statements);
        }
        Statement::If(if_statement) => {
            for branch in &if_statement.branches {
                visitor.visit_expr(&branch.condition);
                visitor.visit_compound_body(&branch.statements);
            }
            if let Some(statements) = &if_statement.else_statements {
                visitor.visit_compound_body(statements);
            }
        }
        Statement::Case(case) => {
            walk_optional_expr(visitor, case.operand.as_ref());
            for branch in &case.branches {
                visitor.visit_expr(&branch.condition);
                visitor.visit_compound_body(&branch.statements);
            }
            if let Some(statements) = &case.else_statements {
                visitor.visit_compound_body(statements);
            }
        }
        Statement::Loop(body) => {
            walk_optional_identifier(visitor, body.label.as_ref());
            visitor.visit_compound_body(&body.statements);
        }
        Statement::While(body) => {
            walk_optional_identifier(visitor, body.label.as_ref());
            visitor.visit_expr(&body.condition);
            visitor.visit_compound_body(&body.statements);
        }
        Statement::Repeat(body) => {
            walk_optional_identifier(visitor, body.label.as_ref());
            visitor.visit_compound_body(&body.statements);
            visitor.visit_expr(&body.until);
        }
        Statement::Return(expr) => visitor.visit_expr(expr),
        Statement::Declare(declare) => walk_declare(visitor, declare),
        Statement::Signal(signal) => {
            if let Some(condition) = &signal.condition {
                walk_condition_value(visitor, condition);
            }
        }
        Statement::GetDiagnostics(diagnostics) => match &diagnostics.info {
            DiagnosticsInfo::Statement(items) => {
                for (target, _) in items {
                    visitor.visit_expr(target);
                }
            }
            DiagnosticsInfo::Condition { number, items } => {
                visitor.visit_expr(number);
                for (target, _) in items {
                    visitor.visit_expr(target);
                }
            }
        },
        Statement::Fetch(fetch) => {
            visitor.visit_identifier(&fetch.cursor);
            walk_identifiers(visitor, &fetch.targets);
        }

        Statement::StartTransaction(_)
        | Statement::Begin { .. }
        | Statement::Commit(_)
        | Statement::Rollback(_) => {}

        Statement::Prepare(prepare) => visitor.visit_identifier(&prepare.name),
        Statement::Execute(execute) => {
            visitor.visit_identifier(&execute.name);
            walk_exprs(visitor, &execute.using);
        }
        Statement::Deallocate(deallocate) => visitor.visit_identifier(&deallocate.name),
    }
}

fn walk_table_element<V: Visitor + ?Sized>(visitor: &mut V, element: &TableElement) {
    match element {
        TableElement::Column { name, definition } => {
            visitor.visit_identifier(name);
            visitor.visit_column_definition(definition);
        }
        TableElement::Index(index) => visitor.visit_index_definition(index),
        TableElement::ForeignKey(foreign_key) => walk_foreign_key(visitor, foreign_key),
        TableElement::Check { constraint, expr } => {
            walk_optional_identifier(visitor, constraint.as_ref());
            visitor.visit_expr(expr);
        }
    }
}

fn walk_reference<V: Visitor + ?Sized>(visitor: &mut V, reference: &Reference) {
    visitor.visit_identifier(&reference.table);
    walk_identifiers(visitor, &reference.columns);
}

fn walk_foreign_key<V: Visitor + ?Sized>(visitor: &mut V, foreign_key: &ForeignKeyDefinition) {
    walk_optional_identifier(visitor, foreign_key.constraint.as_ref());
    walk_optional_identifier(visitor, foreign_key.name.as_ref());
    walk_identifiers(visitor, &foreign_key.columns);
    walk_reference(visitor, &foreign_key.reference);
}

fn walk_show_filter<V: Visitor + ?Sized>(visitor: &mut V, filter: Option<&ShowFilter>) {
    if let Some(ShowFilter::Where(expr)) = filter {
        visitor.visit_expr(expr);
    }
}

fn walk_show<V: Visitor + ?Sized>(visitor: &mut V, show: &Show) {
    match show {
        Show::CharacterSet(filter)
        | Show::Collation(filter)
        | Show::Databases(filter)
        | Show::FunctionStatus(filter)
        | Show::ProcedureStatus(filter)
        | Show::Status { filter, .. }
        | Show::Variables { filter, .. } => walk_show_filter(visitor, filter.as_ref()),
        Show::Columns {
            table,
            database,
            filter,
            ..
        } => {
            visitor.visit_identifier(table);
            walk_optional_identifier(visitor, database.as_ref());
            walk_show_filter(visitor, filter.as_ref());
        }
        Show::Events { database, filter }
        | Show::OpenTables { database, filter }
        | Show::TableStatus { database, filter }
        | Show::Tables {
            database, filter, ..
        }
        | Show::Triggers { database, filter } => {
            walk_optional_identifier(visitor, database.as_ref());
            walk_show_filter(visitor, filter.as_ref());
        }
        Show::Index {
            table,
            database,
            filter,
        } => {
            visitor.visit_identifier(table);
            walk_optional_identifier(visitor, database.as_ref());
            walk_optional_expr(visitor, filter.as_ref());
        }
        Show::Create { name, .. }
        | Show::Engine { name, .. }
        | Show::FunctionCode(name)
        | Show::ProcedureCode(name) => visitor.visit_identifier(name),
        Show::Grants(user) => walk_optional_expr(visitor, user.as_ref()),
        Show::Authors
        | Show::BinaryLogs
        | Show::BinlogEvents { .. }
        | Show::Contributors
        | Show::Engines
        | Show::Errors(_)
        | Show::Warnings(_)
        | Show::ErrorCount
        | Show::WarningCount
        | Show::MasterStatus
        | Show::Plugins
        | Show::Privileges
        | Show::Processlist { .. }
        | Show::Profile { .. }
        | Show::Profiles
        | Show::SlaveHosts
        | Show::SlaveStatus => {}
    }
}

fn walk_condition_value<V: Visitor + ?Sized>(visitor: &mut V, value: &ConditionValue) {
    if let ConditionValue::Name(name) = value {
        visitor.visit_identifier(name);
    }
}

fn walk_declare<V: Visitor + ?Sized>(visitor: &mut V, declare: &Declare) {
    match declare {
        Declare::Variables {
            names,
            data_type,
            default,
        } => {
            walk_identifiers(visitor, names);
            visitor.visit_data_type(data_type);
            walk_optional_expr(visitor, default.as_ref());
        }
        Declare::Condition { name, value } => {
            visitor.visit_identifier(name);
            walk_condition_value(visitor, value);
        }
        Declare::Cursor { name, query } => {
            visitor.visit_identifier(name);
            visitor.visit_query(query);
        }
        Declare::Handler {
            conditions, body, ..
        } => {
            for condition in conditions {
                walk_condition_value(visitor, condition);
            }
            visitor.visit_statement(body);
        }
    }
}

/// Visits every SELECT of a query.
pub fn walk_query<V: Visitor + ?Sized>(visitor: &mut V, query: &QueryExpr) {
    match query {
        QueryExpr::Select(select) => visitor.visit_select(select),
        QueryExpr::Union(union) => {
            visitor.visit_select(&union.first);
            for branch in &union.rest {
                visitor.visit_select(&branch.select);
            }
            walk_order_by(visitor, &union.order_by);
        }
    }
}

/// Visits the clauses of a SELECT in source order.
pub fn walk_select<V: Visitor + ?Sized>(visitor: &mut V, select: &Select) {
    for item in &select.items {
        visitor.visit_expr(&item.expr);
        walk_optional_identifier(visitor, item.alias.as_ref());
    }
    if let Some(FromClause::Tables(tables)) = &select.from {
        for table in tables {
            visitor.visit_table_reference(table);
        }
    }
    walk_optional_expr(visitor, select.where_clause.as_ref());
    if let Some(group_by) = &select.group_by {
        walk_order_by(visitor, &group_by.items);
    }
    walk_optional_expr(visitor, select.having.as_ref());
    walk_order_by(visitor, &select.order_by);
}

/// Visits table names, derived queries and join conditions.
pub fn walk_table_reference<V: Visitor + ?Sized>(visitor: &mut V, table: &TableReference) {
    match table {
        TableReference::Table { name, alias, hints } => {
            visitor.visit_identifier(name);
            walk_optional_identifier(visitor, alias.as_ref());
            for hint in hints {
                walk_identifiers(visitor, &hint.indexes);
            }
        }
        TableReference::Derived { subquery, alias } => {
            visitor.visit_query(subquery);
            walk_optional_identifier(visitor, alias.as_ref());
        }
        TableReference::Nested(tables) => {
            for table in tables {
                visitor.visit_table_reference(table);
            }
        }
        TableReference::Join(join) => {
            visitor.visit_table_reference(&join.left);
            visitor.visit_table_reference(&join.right);
            match &join.condition {
                Some(JoinCondition::On(expr)) => visitor.visit_expr(expr),
                Some(JoinCondition::Using(columns)) => walk_identifiers(visitor, columns),
                None => {}
            }
        }
    }
}

/// Visits the operands of an expression, including nested queries.
pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Identifier(identifier) => visitor.visit_identifier(identifier),
        Expr::Default(column) => walk_optional_identifier(visitor, column.as_ref()),
        Expr::Literal(_)
        | Expr::Parameter(_)
        | Expr::UserVariable(_)
        | Expr::SystemVariable { .. }
        | Expr::UserName { .. }
        | Expr::Temporal { .. } => {}
        Expr::Assignment { target, value } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        Expr::Binary { left, right, .. }
        | Expr::SoundsLike { left, right }
        | Expr::Regexp {
            expr: left,
            pattern: right,
            ..
        } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expr::Unary { expr, .. }
        | Expr::Not(expr)
        | Expr::Is { expr, .. }
        | Expr::Collate { expr, .. }
        | Expr::Interval { value: expr, .. }
        | Expr::Cast { expr, .. }
        | Expr::Convert { expr, .. }
        | Expr::Extract { expr, .. }
        | Expr::GetFormat { format: expr, .. } => visitor.visit_expr(expr),
        Expr::Quantified { left, subquery, .. } => {
            visitor.visit_expr(left);
            visitor.visit_query(subquery);
        }
        Expr::Between {
            expr, low, high, ..
        } => {
            visitor.visit_expr(expr);
            visitor.visit_expr(low);
            visitor.visit_expr(high);
        }
        Expr::Like {
            expr,
            pattern,
            escape,
            ..
        } => {
            visitor.visit_expr(expr);
            visitor.visit_expr(pattern);
            if let Some(escape) = escape {
                visitor.visit_expr(escape);
            }
        }
        Expr::InList { expr, list, .. } => {
            visitor.visit_expr(expr);
            walk_exprs(visitor, list);
        }
        Expr::InSubquery { expr, subquery, .. } => {
            visitor.visit_expr(expr);
            visitor.visit_query(subquery);
        }
        Expr::Exists(query) | Expr::Subquery(query) => visitor.visit_query(query),
        Expr::Row(items) | Expr::Char { args: items, .. } => walk_exprs(visitor, items),
        Expr::Case {
            operand,
            when_clauses,
            else_result,
        } => {
            if let Some(operand) = operand {
                visitor.visit_expr(operand);
            }
            for clause in when_clauses {
                visitor.visit_expr(&clause.condition);
                visitor.visit_expr(&clause.result);
            }
            if let Some(else_result) = else_result {
                visitor.visit_expr(else_result);
            }
        }
        Expr::Function(call) => {
            visitor.visit_function_name(&call.name);
            walk_exprs(visitor, &call.args);
        }
        Expr::Aggregate { args, .. } => walk_exprs(visitor, args),
        Expr::GroupConcat { args, order_by, .. } => {
            walk_exprs(visitor, args);
            walk_order_by(visitor, order_by);
        }
        Expr::Trim { remove, expr, .. } => {
            if let Some(remove) = remove {
                visitor.visit_expr(remove);
            }
            visitor.visit_expr(expr);
        }
        Expr::Substring { expr, from, length } => {
            visitor.visit_expr(expr);
            visitor.visit_expr(from);
            if let Some(length) = length {
                visitor.visit_expr(length);
            }
        }
        Expr::TimestampAdd { interval, expr, .. } => {
            visitor.visit_expr(interval);
            visitor.visit_expr(expr);
        }
        Expr::TimestampDiff { start, end, .. } => {
            visitor.visit_expr(start);
            visitor.visit_expr(end);
        }
        Expr::Position { needle, haystack } => {
            visitor.visit_expr(needle);
            visitor.visit_expr(haystack);
        }
        Expr::Match {
            columns, against, ..
        } => {
            walk_identifiers(visitor, columns);
            visitor.visit_expr(against);
        }
    }
}

/// Visits the type and the expressions attached to a column.
pub fn walk_column_definition<V: Visitor + ?Sized>(visitor: &mut V, definition: &ColumnDefinition) {
    visitor.visit_data_type(&definition.data_type);
    if let Some(generated) = &definition.generated {
        visitor.visit_expr(&generated.expr);
    }
    walk_optional_expr(visitor, definition.default.as_ref());
    walk_optional_expr(visitor, definition.on_update.as_ref());
    if let Some(reference) = &definition.reference {
        walk_reference(visitor, reference);
    }
}

/// Visits the names of an index and its key parts.
pub fn walk_index_definition<V: Visitor + ?Sized>(visitor: &mut V, index: &IndexDefinition) {
    walk_optional_identifier(visitor, index.constraint.as_ref());
    walk_optional_identifier(visitor, index.name.as_ref());
    for column in &index.columns {
        visitor.visit_identifier(&column.name);
    }
    for option in &index.options {
        if let IndexOption::WithParser(parser) = option {
            visitor.visit_identifier(parser);
        }
    }
}

/// Visits the columns, indexes and names touched by one ALTER TABLE clause.
pub fn walk_alter_specification<V: Visitor + ?Sized>(
    visitor: &mut V,
    specification: &AlterSpecification,
) {
    match specification {
        AlterSpecification::AddColumn {
            column,
            definition,
            after_column,
            ..
        }
        | AlterSpecification::ModifyColumn {
            column,
            definition,
            after_column,
            ..
        } => {
            visitor.visit_identifier(column);
            visitor.visit_column_definition(definition);
            walk_optional_identifier(visitor, after_column.as_ref());
        }
        AlterSpecification::ChangeColumn {
            old_name,
            new_name,
            definition,
            after_column,
            ..
        } => {
            visitor.visit_identifier(old_name);
            visitor.visit_identifier(new_name);
            visitor.visit_column_definition(definition);
            walk_optional_identifier(visitor, after_column.as_ref());
        }
        AlterSpecification::AddColumns(columns) => {
            for (column, definition) in columns {
                visitor.visit_identifier(column);
                visitor.visit_column_definition(definition);
            }
        }
        AlterSpecification::AddIndex(index) => visitor.visit_index_definition(index),
        AlterSpecification::AddForeignKey(foreign_key) => walk_foreign_key(visitor, foreign_key),
        AlterSpecification::AlterColumnDefault { column, default } => {
            visitor.visit_identifier(column);
            walk_optional_expr(visitor, default.as_ref());
        }
        AlterSpecification::DropColumn(name)
        | AlterSpecification::DropIndex(name)
        | AlterSpecification::DropForeignKey(name)
        | AlterSpecification::RenameTable(name)
        | AlterSpecification::Algorithm(name)
        | AlterSpecification::Lock(name) => visitor.visit_identifier(name),
        AlterSpecification::RenameIndex { old_name, new_name } => {
            visitor.visit_identifier(old_name);
            visitor.visit_identifier(new_name);
        }
        AlterSpecification::OrderBy(columns)
        | AlterSpecification::DropPartition(columns)
        | AlterSpecification::ReorganizePartition { names: columns, .. } => {
            walk_identifiers(visitor, columns);
        }
        AlterSpecification::ExchangePartition { partition, table } => {
            visitor.visit_identifier(partition);
            visitor.visit_identifier(table);
        }
        AlterSpecification::PartitionMaintenance { partitions, .. } => {
            if let super::PartitionNames::Names(names) = partitions {
                walk_identifiers(visitor, names);
            }
        }
        AlterSpecification::DropPrimaryKey
        | AlterSpecification::DisableKeys
        | AlterSpecification::EnableKeys
        | AlterSpecification::ConvertToCharset { .. }
        | AlterSpecification::DiscardTablespace
        | AlterSpecification::ImportTablespace
        | AlterSpecification::Force
        | AlterSpecification::AddPartition(_)
        | AlterSpecification::CoalescePartition(_)
        | AlterSpecification::RemovePartitioning => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    #[derive(Default)]
    struct ColumnCollector {
        columns: Vec<String>,
    }

    impl Visitor for ColumnCollector {
        fn visit_expr(&mut self, expr: &Expr) {
            if let Expr::Identifier(id) = expr {
                self.columns.push(id.text.clone());
            }
            walk_expr(self, expr);
        }
    }

    #[derive(Default)]
    struct Counter {
        selects: usize,
        tables: usize,
        statements: usize,
    }

    impl Visitor for Counter {
        fn visit_statement(&mut self, statement: &Statement) {
            self.statements += 1;
            walk_statement(self, statement);
        }

        fn visit_select(&mut self, select: &Select) {
            self.selects += 1;
            walk_select(self, select);
        }

        fn visit_table_reference(&mut self, table: &TableReference) {
            if matches!(table, TableReference::Table { .. }) {
                self.tables += 1;
            }
            walk_table_reference(self, table);
        }
    }

    #[test]
    fn test_collects_columns_in_order() {
        let mut collector = ColumnCollector::default();
        parse("SELECT a, b + 1 FROM t WHERE c > 2 ORDER BY d").accept(&mut collector);
        assert_eq!(collector.columns, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_descends_into_subqueries_and_joins() {
        let mut counter = Counter::default();
        parse(
            "SELECT * FROM a JOIN b ON a.id = b.id \
             WHERE a.x IN (SELECT x FROM c) UNION SELECT 1",
        )
        .accept(&mut counter);
        assert_eq!(counter.selects, 3);
        assert_eq!(counter.tables, 3);
    }

    #[test]
    fn test_visits_compound_bodies() {
        let mut counter = Counter::default();
        parse("BEGIN IF x THEN SELECT 1; ELSE SELECT 2; END IF; END").accept(&mut counter);
        assert_eq!(counter.statements, 4);
        assert_eq!(counter.selects, 2);
    }

    #[test]
    fn test_expression_accept() {
        let mut collector = ColumnCollector::default();
        let expr = Parser::new("CASE WHEN a THEN b ELSE c END")
            .parse_expression()
            .unwrap();
        expr.accept(&mut collector);
        assert_eq!(collector.columns, vec!["a", "b", "c"]);
    }
}
