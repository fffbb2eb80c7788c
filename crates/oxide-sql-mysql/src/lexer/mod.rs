//! MySQL lexer.
//!
//! Converts statement text into a stream of tokens. The parser consumes it
//! through [`TokenStream`], which adds one-token pushback.

mod span;
mod stream;
mod token;
mod tokenizer;

pub use span::Span;
pub use stream::TokenStream;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
