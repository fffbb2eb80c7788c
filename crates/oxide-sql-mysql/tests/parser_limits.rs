//! Deep and long input fails with a depth error instead of exhausting the
//! stack.

mod common;

use std::thread;

use oxide_sql_mysql::{ParseError, Parser, ParserOptions};

const DEPTH_ERROR: &str = "maximum nesting depth exceeded";

/// Runs `f` on a thread with a 2 MiB stack, the size test threads get.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(f)
        .expect("spawn thread")
        .join()
        .expect("thread finished without overflowing")
}

/// Deepest `n` for which `sql(n)` parses with default options, and the
/// error for `n + 1`. Every accepted tree is rendered and walked too.
fn deepest(sql: fn(usize) -> String) -> (usize, ParseError) {
    for n in 1..=ParserOptions::DEFAULT_MAX_DEPTH * 2 {
        match Parser::new(&sql(n)).parse_statement() {
            Ok(statement) => {
                let rendered = statement.to_string();
                assert_eq!(common::parse(&rendered), statement);
            }
            Err(err) => return (n - 1, err),
        }
    }
    panic!("no depth error below {}", ParserOptions::DEFAULT_MAX_DEPTH * 2);
}

fn nested_arithmetic(n: usize) -> String {
    format!("SELECT {}1{}", "(1 + ".repeat(n), ")".repeat(n))
}

fn nested_subqueries(n: usize) -> String {
    let mut sql = String::from("1");
    for _ in 0..n {
        sql = format!("(SELECT {sql})");
    }
    format!("SELECT {sql}")
}

fn nested_blocks(n: usize) -> String {
    let mut sql = String::from("SELECT 1");
    for _ in 0..n {
        sql = format!("BEGIN {sql}; END");
    }
    sql
}

#[test]
fn test_deepest_parentheses_fit_small_stack() {
    let (depth, err) = on_small_stack(|| deepest(nested_arithmetic));
    assert!(depth >= 20, "accepted only {depth} levels");
    assert_eq!(err.message, DEPTH_ERROR);
}

#[test]
fn test_deepest_subqueries_fit_small_stack() {
    let (depth, err) = on_small_stack(|| deepest(nested_subqueries));
    assert!(depth >= 10, "accepted only {depth} levels");
    assert_eq!(err.message, DEPTH_ERROR);
}

#[test]
fn test_deepest_blocks_fit_small_stack() {
    let (depth, err) = on_small_stack(|| deepest(nested_blocks));
    assert!(depth >= 20, "accepted only {depth} levels");
    assert_eq!(err.message, DEPTH_ERROR);
}

#[test]
fn test_far_too_deep_input_fails_cleanly() {
    let parens = format!("SELECT {}1", "(".repeat(100_000));
    let subqueries = "SELECT ".to_string() + &"(SELECT ".repeat(100_000);
    let blocks = "BEGIN ".repeat(5000);
    on_small_stack(move || {
        for sql in [parens, subqueries, blocks] {
            let err = Parser::new(&sql).parse_statement().unwrap_err();
            assert_eq!(err.message, DEPTH_ERROR);
        }
    });
}

#[test]
fn test_long_operator_chain_rejected() {
    let sql = format!("SELECT 1{}", " + 1".repeat(200_000));
    let err = on_small_stack(move || Parser::new(&sql).parse_statement().unwrap_err());
    assert_eq!(err.message, DEPTH_ERROR);
}

#[test]
fn test_long_join_and_name_chains_rejected() {
    let joins = format!("SELECT * FROM t{}", " JOIN t".repeat(50_000));
    let names = format!("SELECT a{}", ".a".repeat(50_000));
    on_small_stack(move || {
        for sql in [joins, names] {
            let err = Parser::new(&sql).parse_statement().unwrap_err();
            assert_eq!(err.message, DEPTH_ERROR);
        }
    });
}

#[test]
fn test_moderate_chains_still_parse() {
    let sum = format!("SELECT 1{}", " + 1".repeat(150));
    let disjunction = format!(
        "SELECT * FROM t WHERE {}",
        (0..150)
            .map(|i| format!("a = {i}"))
            .collect::<Vec<_>>()
            .join(" OR ")
    );
    on_small_stack(move || {
        common::round_trip(&sum);
        common::round_trip(&disjunction);
    });
}
