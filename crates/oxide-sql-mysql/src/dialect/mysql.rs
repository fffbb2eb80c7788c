//! MySQL dialect.

use super::Dialect;

/// The MySQL dialect: backtick-quoted identifiers and backslash escapes in
/// strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_dialect() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identifier_quote(), '`');
        assert_eq!(dialect.parameter_placeholder(), "?");
    }

    #[test]
    fn test_quote_identifier_doubles_backticks() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.quote_identifier("order"), "`order`");
        assert_eq!(dialect.quote_identifier("a`b"), "`a``b`");
    }

    #[test]
    fn test_quote_string_escapes() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.quote_string("it's"), "'it''s'");
        assert_eq!(dialect.quote_string("a\\b"), "'a\\\\b'");
        assert_eq!(dialect.quote_string("50\\%"), "'50\\%'");
        assert_eq!(dialect.quote_string("nul\0"), "'nul\\0'");
    }
}
