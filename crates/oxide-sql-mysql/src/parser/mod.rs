//! Recursive descent parser for MySQL statements.
//!
//! The parser consumes tokens from a [`TokenStream`](crate::lexer::TokenStream)
//! and builds [`Statement`](crate::ast::Statement) values. Expressions use
//! one method per precedence level; statements are dispatched on their
//! leading word.

mod compound;
mod dal;
mod data_type;
mod ddl;
mod dml;
mod error;
mod expr;
mod functions;
mod options;
#[allow(clippy::module_inception)]
mod parser;
mod transaction;

pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::Parser;

/// Result type used throughout the parser.
pub type Result<T> = core::result::Result<T, ParseError>;
