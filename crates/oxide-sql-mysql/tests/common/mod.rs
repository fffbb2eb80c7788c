#![allow(dead_code)]

use oxide_sql_mysql::ast::{AlterTable, CreateTable, QueryExpr, Select, Show};
use oxide_sql_mysql::{ParseError, Parser, Statement};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_all(sql: &str) -> Vec<Statement> {
    Parser::new(sql)
        .parse_statements()
        .unwrap_or_else(|e| panic!("Failed to parse script: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Statement::Query(QueryExpr::Select(s)) => *s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTable {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_alter_table(sql: &str) -> AlterTable {
    match parse(sql) {
        Statement::AlterTable(a) => a,
        other => panic!("Expected ALTER TABLE, got {other:?}"),
    }
}

pub fn parse_show(sql: &str) -> Show {
    match parse(sql) {
        Statement::Show(s) => s,
        other => panic!("Expected SHOW, got {other:?}"),
    }
}

/// Verifies that rendering is faithful: the rendered text parses back to
/// the same tree, and rendering that tree again gives the same text.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = Parser::new(&rendered1)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Re-parse failed.\n  Input:    {sql}\n  Rendered: {rendered1}\n  Error:    {e}"));
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Asserts the canonical rendering of `sql`.
pub fn renders_as(sql: &str, expected: &str) {
    assert_eq!(parse(sql).to_string(), expected, "Rendering of: {sql}");
}
