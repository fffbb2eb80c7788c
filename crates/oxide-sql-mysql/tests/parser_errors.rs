mod common;

use common::parse_err;
use oxide_sql_mysql::{Parser, ParserOptions};

#[test]
fn test_label_mismatch() {
    let err = parse_err("outer_loop: LOOP LEAVE outer_loop; END LOOP inner_loop");
    assert_eq!(
        err.message,
        "End label inner_loop does not match begin label outer_loop"
    );
    assert_eq!(err.expected.as_deref(), Some("outer_loop"));
    assert_eq!(err.found.as_deref(), Some("inner_loop"));
}

#[test]
fn test_labels_compare_case_insensitively() {
    common::parse("Lbl: BEGIN SELECT 1; END LBL");
}

#[test]
fn test_closing_label_without_opening() {
    let err = parse_err("WHILE 1 DO SELECT 1; END WHILE w");
    assert_eq!(err.message, "End label w without matching begin label");
}

#[test]
fn test_foreign_key_arity() {
    let err = parse_err("CREATE TABLE t (a INT, b INT, FOREIGN KEY (a, b) REFERENCES p (x))");
    assert_eq!(
        err.message,
        "Incorrect foreign key without name: 2 referencing columns but 1 referenced columns"
    );

    let err = parse_err(
        "ALTER TABLE t ADD CONSTRAINT fk_child FOREIGN KEY (a) REFERENCES p (x, y)",
    );
    assert!(err.message.contains("foreign key fk_child"), "{}", err.message);
}

#[test]
fn test_union_branch_needs_parentheses() {
    let err = parse_err("SELECT 1 LIMIT 1 UNION SELECT 2");
    assert!(err.message.starts_with("Incorrect usage of UNION"));
}

#[test]
fn test_case_statement_requires_when() {
    let err = parse_err("CASE x ELSE SELECT 1; END CASE");
    assert_eq!(err.message, "CASE requires at least one WHEN branch");
}

#[test]
fn test_compound_statement_needs_semicolon() {
    assert!(Parser::new("BEGIN SELECT 1 END").parse_statement().is_err());
}

#[test]
fn test_unknown_words() {
    assert_eq!(
        parse_err("ALTER TABLE t FROBNICATE").message,
        "Unknown ALTER TABLE specification: FROBNICATE"
    );
    assert!(parse_err("SHOW WIDGETS").message.contains("WIDGETS"));
    assert!(parse_err("CREATE TABLE t (a WIDGET)")
        .message
        .starts_with("Unknown data type"));
}

#[test]
fn test_trailing_input_rejected() {
    let err = parse_err("SELECT 1 SELECT 2");
    assert_eq!(err.span.start, 9);
}

#[test]
fn test_nesting_limit() {
    let sql = format!("SELECT {}1{}", "(".repeat(20), ")".repeat(20));
    let options = ParserOptions::new().max_depth(16);
    let err = Parser::with_options(&sql, options)
        .parse_statement()
        .unwrap_err();
    assert_eq!(err.message, "maximum nesting depth exceeded");
    assert!(Parser::new(&sql).parse_statement().is_ok());
}

#[test]
fn test_single_table_delete_rejects_wildcard() {
    let err = parse_err("DELETE FROM t.* WHERE a = 1");
    assert!(err.message.starts_with("Incorrect usage of table.*"), "{}", err.message);
    common::parse("DELETE FROM t.* USING t JOIN u ON t.a = u.a");
}

#[test]
fn test_error_line_and_column() {
    let sql = "SELECT a\nFROM t\nWHERE a = = 1";
    let err = parse_err(sql);
    assert_eq!(err.span.line_column(sql), (3, 11));
}

#[test]
fn test_error_display_includes_position() {
    let err = parse_err("SELECT FROM t");
    let text = err.to_string();
    assert!(text.contains("at position 7..11"), "{text}");
}
