//! # oxide-sql-mysql
//!
//! A parser for the MySQL dialect of SQL.
//!
//! This crate provides:
//! - A lexer covering MySQL literals, quoting, comments and variables
//! - A hand-written recursive descent parser for queries, data
//!   modification, schema definition, administration statements, stored
//!   program bodies, transactions and prepared statements
//! - A typed syntax tree with a [`Visitor`](ast::Visitor) for traversal
//! - Rendering back to SQL text that parses to the same tree
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_sql_mysql::{parse, Statement};
//!
//! let statement = parse("SELECT id, name FROM users WHERE active = 1 LIMIT 10").unwrap();
//! assert!(matches!(statement, Statement::Query(_)));
//! ```
//!
//! ## Rendering
//!
//! Every node implements `Display`. Keywords come out upper cased and
//! parentheses appear only where precedence needs them:
//!
//! ```rust
//! use oxide_sql_mysql::parse;
//!
//! let statement = parse("select (a+b)*c, a+(b*c) from t").unwrap();
//! assert_eq!(statement.to_string(), "SELECT (a + b) * c, a + b * c FROM t");
//! ```
//!
//! ## Scripts
//!
//! ```rust
//! use oxide_sql_mysql::parse_statements;
//!
//! let statements = parse_statements("BEGIN; UPDATE t SET a = 1; COMMIT;").unwrap();
//! assert_eq!(statements.len(), 3);
//! ```

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, SqlWriter, Statement};
pub use dialect::{Dialect, MySqlDialect};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, ParserOptions};

/// Parses a single statement, optionally terminated by `;`.
///
/// # Errors
///
/// Returns the first syntax error in `sql`.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    Parser::new(sql).parse_statement()
}

/// Parses a `;`-separated script.
///
/// # Errors
///
/// Returns the first syntax error in `sql`.
pub fn parse_statements(sql: &str) -> Result<Vec<Statement>, ParseError> {
    Parser::new(sql).parse_statements()
}
