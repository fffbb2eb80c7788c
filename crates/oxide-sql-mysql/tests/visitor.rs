mod common;

use std::collections::BTreeSet;

use common::parse;
use oxide_sql_mysql::ast::{
    walk_expr, walk_table_reference, Expr, Identifier, TableReference, Visitor,
};

/// Collects the names of every table a statement reads or writes.
#[derive(Default)]
struct TableNames {
    names: BTreeSet<String>,
}

impl Visitor for TableNames {
    fn visit_table_reference(&mut self, table: &TableReference) {
        if let TableReference::Table { name, .. } = table {
            self.names.insert(name.to_string());
        }
        walk_table_reference(self, table);
    }
}

#[derive(Default)]
struct Parameters {
    count: usize,
}

impl Visitor for Parameters {
    fn visit_expr(&mut self, expr: &Expr) {
        if matches!(expr, Expr::Parameter(_)) {
            self.count += 1;
        }
        walk_expr(self, expr);
    }
}

/// Separates plain names from the names of called functions.
#[derive(Default)]
struct Names {
    names: Vec<String>,
    functions: Vec<String>,
}

impl Visitor for Names {
    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.names.push(identifier.to_string());
    }

    fn visit_function_name(&mut self, name: &Identifier) {
        self.functions.push(name.to_string());
    }
}

fn table_names(sql: &str) -> Vec<String> {
    let mut visitor = TableNames::default();
    parse(sql).accept(&mut visitor);
    visitor.names.into_iter().collect()
}

#[test]
fn test_tables_in_nested_queries() {
    assert_eq!(
        table_names(
            "SELECT * FROM a JOIN (SELECT id FROM b) AS d ON a.id = d.id \
             WHERE EXISTS (SELECT 1 FROM db.c WHERE c.x = a.x)"
        ),
        vec!["a", "b", "db.c"]
    );
}

#[test]
fn test_tables_in_program_bodies() {
    assert_eq!(
        table_names(
            "CREATE TRIGGER trg AFTER INSERT ON orders FOR EACH ROW \
             BEGIN \
               UPDATE totals SET n = n + 1; \
               IF NEW.flag THEN DELETE FROM pending WHERE id = NEW.id; END IF; \
             END"
        ),
        vec!["pending", "totals"]
    );
}

#[test]
fn test_counts_parameters() {
    let mut visitor = Parameters::default();
    parse("UPDATE t SET a = ?, b = ? WHERE c IN (?, ?) LIMIT 1").accept(&mut visitor);
    assert_eq!(visitor.count, 4);
}

#[test]
fn test_function_names_are_not_identifiers() {
    let mut visitor = Names::default();
    parse("SELECT concat(a, b), db.fmt(c) FROM t WHERE lower(d) = 'x'").accept(&mut visitor);
    assert_eq!(visitor.functions, vec!["concat", "db.fmt", "lower"]);
    assert_eq!(visitor.names, vec!["a", "b", "c", "t", "d"]);
}
