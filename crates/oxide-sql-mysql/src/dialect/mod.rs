//! SQL dialect support.
//!
//! The dialect decides how the [`SqlWriter`](crate::ast::SqlWriter) spells
//! the parts of the output that vary between servers: identifier quoting
//! and string literal escaping.

mod mysql;

pub use mysql::MySqlDialect;

/// Trait for dialect-specific rendering behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '`'
    }

    /// Returns the escape sequence for a single quote inside a string
    /// literal.
    fn string_escape(&self) -> &'static str {
        "''"
    }

    /// Returns the parameter placeholder.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Quotes an identifier, doubling any embedded quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(quote);
        for c in name.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Renders a string literal body between single quotes.
    ///
    /// Backslashes are escaped except in front of `%` and `_`, where the
    /// lexer keeps the backslash as part of the value.
    fn quote_string(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        let mut chars = value.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\'' => quoted.push_str(self.string_escape()),
                '\\' if matches!(chars.peek(), Some('%' | '_')) => quoted.push('\\'),
                '\\' => quoted.push_str("\\\\"),
                '\0' => quoted.push_str("\\0"),
                '\u{1a}' => quoted.push_str("\\Z"),
                c => quoted.push(c),
            }
        }
        quoted.push('\'');
        quoted
    }
}
