//! Token types for the MySQL lexer.

use super::Span;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Reserved MySQL words.
        ///
        /// Only reserved words get a variant. Everything else the grammar
        /// recognizes (`ENGINE`, `BEGIN`, `TEMPORARY`, ...) is lexed as an
        /// identifier and matched by text in the grammar position that
        /// gives it meaning.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl Keyword {
            /// Looks up a reserved word (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    Add => "ADD",
    All => "ALL",
    Alter => "ALTER",
    Analyze => "ANALYZE",
    And => "AND",
    As => "AS",
    Asc => "ASC",
    Before => "BEFORE",
    Between => "BETWEEN",
    Bigint => "BIGINT",
    Binary => "BINARY",
    Blob => "BLOB",
    Both => "BOTH",
    By => "BY",
    Call => "CALL",
    Cascade => "CASCADE",
    Case => "CASE",
    Change => "CHANGE",
    Char => "CHAR",
    Character => "CHARACTER",
    Check => "CHECK",
    Collate => "COLLATE",
    Column => "COLUMN",
    Condition => "CONDITION",
    Constraint => "CONSTRAINT",
    Continue => "CONTINUE",
    Convert => "CONVERT",
    Create => "CREATE",
    Cross => "CROSS",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Cursor => "CURSOR",
    Database => "DATABASE",
    Databases => "DATABASES",
    DayHour => "DAY_HOUR",
    DayMicrosecond => "DAY_MICROSECOND",
    DayMinute => "DAY_MINUTE",
    DaySecond => "DAY_SECOND",
    Dec => "DEC",
    Decimal => "DECIMAL",
    Declare => "DECLARE",
    Default => "DEFAULT",
    Delayed => "DELAYED",
    Delete => "DELETE",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Deterministic => "DETERMINISTIC",
    Distinct => "DISTINCT",
    Distinctrow => "DISTINCTROW",
    Div => "DIV",
    Double => "DOUBLE",
    Drop => "DROP",
    Dual => "DUAL",
    Each => "EACH",
    Else => "ELSE",
    Elseif => "ELSEIF",
    Exists => "EXISTS",
    Exit => "EXIT",
    Explain => "EXPLAIN",
    False => "FALSE",
    Fetch => "FETCH",
    Float => "FLOAT",
    Float4 => "FLOAT4",
    Float8 => "FLOAT8",
    For => "FOR",
    Force => "FORCE",
    Foreign => "FOREIGN",
    From => "FROM",
    Fulltext => "FULLTEXT",
    Get => "GET",
    Grant => "GRANT",
    Group => "GROUP",
    Having => "HAVING",
    HighPriority => "HIGH_PRIORITY",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourMinute => "HOUR_MINUTE",
    HourSecond => "HOUR_SECOND",
    If => "IF",
    Ignore => "IGNORE",
    In => "IN",
    Index => "INDEX",
    Inner => "INNER",
    Inout => "INOUT",
    Insert => "INSERT",
    Int => "INT",
    Int1 => "INT1",
    Int2 => "INT2",
    Int3 => "INT3",
    Int4 => "INT4",
    Int8 => "INT8",
    Integer => "INTEGER",
    Interval => "INTERVAL",
    Into => "INTO",
    Is => "IS",
    Iterate => "ITERATE",
    Join => "JOIN",
    Key => "KEY",
    Keys => "KEYS",
    Kill => "KILL",
    Leading => "LEADING",
    Leave => "LEAVE",
    Left => "LEFT",
    Like => "LIKE",
    Limit => "LIMIT",
    Linear => "LINEAR",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Lock => "LOCK",
    Long => "LONG",
    Longblob => "LONGBLOB",
    Longtext => "LONGTEXT",
    Loop => "LOOP",
    LowPriority => "LOW_PRIORITY",
    Match => "MATCH",
    Mediumblob => "MEDIUMBLOB",
    Mediumint => "MEDIUMINT",
    Mediumtext => "MEDIUMTEXT",
    Middleint => "MIDDLEINT",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    Mod => "MOD",
    Modifies => "MODIFIES",
    Natural => "NATURAL",
    Not => "NOT",
    Null => "NULL",
    Numeric => "NUMERIC",
    On => "ON",
    Optimize => "OPTIMIZE",
    Option => "OPTION",
    Or => "OR",
    Order => "ORDER",
    Out => "OUT",
    Outer => "OUTER",
    Partition => "PARTITION",
    Precision => "PRECISION",
    Primary => "PRIMARY",
    Procedure => "PROCEDURE",
    Range => "RANGE",
    Read => "READ",
    Reads => "READS",
    Real => "REAL",
    References => "REFERENCES",
    Regexp => "REGEXP",
    Release => "RELEASE",
    Rename => "RENAME",
    Repeat => "REPEAT",
    Replace => "REPLACE",
    Resignal => "RESIGNAL",
    Restrict => "RESTRICT",
    Return => "RETURN",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Rlike => "RLIKE",
    Schema => "SCHEMA",
    Schemas => "SCHEMAS",
    SecondMicrosecond => "SECOND_MICROSECOND",
    Select => "SELECT",
    Separator => "SEPARATOR",
    Set => "SET",
    Show => "SHOW",
    Signal => "SIGNAL",
    Smallint => "SMALLINT",
    Spatial => "SPATIAL",
    Specific => "SPECIFIC",
    Sql => "SQL",
    Sqlexception => "SQLEXCEPTION",
    Sqlstate => "SQLSTATE",
    Sqlwarning => "SQLWARNING",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    SqlSmallResult => "SQL_SMALL_RESULT",
    StraightJoin => "STRAIGHT_JOIN",
    Table => "TABLE",
    Then => "THEN",
    Tinyblob => "TINYBLOB",
    Tinyint => "TINYINT",
    Tinytext => "TINYTEXT",
    To => "TO",
    Trailing => "TRAILING",
    Trigger => "TRIGGER",
    True => "TRUE",
    Undo => "UNDO",
    Union => "UNION",
    Unique => "UNIQUE",
    Unlock => "UNLOCK",
    Unsigned => "UNSIGNED",
    Update => "UPDATE",
    Usage => "USAGE",
    Use => "USE",
    Using => "USING",
    UtcDate => "UTC_DATE",
    UtcTime => "UTC_TIME",
    UtcTimestamp => "UTC_TIMESTAMP",
    Values => "VALUES",
    Varbinary => "VARBINARY",
    Varchar => "VARCHAR",
    Varcharacter => "VARCHARACTER",
    Varying => "VARYING",
    When => "WHEN",
    Where => "WHERE",
    While => "WHILE",
    With => "WITH",
    Write => "WRITE",
    Xor => "XOR",
    YearMonth => "YEAR_MONTH",
    Zerofill => "ZEROFILL",
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer literal that fits in 64 bits.
    Integer(u64),
    /// Decimal or approximate number, kept as written (`1.50`, `2e10`).
    Decimal(String),
    /// String literal with escapes decoded; adjacent literals are merged.
    String(String),
    /// `N'...'` national character string.
    NationalString(String),
    /// `_charset'...'` string with an explicit introducer.
    IntroducedString {
        /// Character set name without the leading underscore.
        charset: String,
        /// Decoded string value.
        value: String,
    },
    /// `X'..'` or `0x..`, hex digits only.
    HexString(String),
    /// `B'..'` or `0b..`, binary digits only.
    BitString(String),

    // Names
    /// Unquoted identifier (any non-reserved word).
    Identifier(String),
    /// Backtick-quoted identifier.
    QuotedIdentifier(String),
    /// Reserved word.
    Keyword(Keyword),
    /// `@name`; the text after `@`, quoting preserved.
    UserVariable(String),
    /// `@@[scope.]name`; the text after `@@`.
    SystemVariable(String),
    /// `?` parameter marker.
    Question,

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// <=>
    NullSafeEq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    LogicalOr,
    /// &&
    LogicalAnd,
    /// !
    Bang,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// :=
    Assign,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

impl TokenKind {
    /// Short human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Decimal(d) => format!("number {d}"),
            Self::String(_) | Self::NationalString(_) | Self::IntroducedString { .. } => {
                String::from("string literal")
            }
            Self::HexString(_) => String::from("hex literal"),
            Self::BitString(_) => String::from("bit literal"),
            Self::Identifier(s) => format!("identifier {s}"),
            Self::QuotedIdentifier(s) => format!("identifier `{s}`"),
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::UserVariable(v) => format!("@{v}"),
            Self::SystemVariable(v) => format!("@@{v}"),
            Self::Eof => String::from("end of input"),
            Self::Error(msg) => format!("invalid token ({msg})"),
            other => format!("'{}'", other.punctuation()),
        }
    }

    /// Spelling of an operator or delimiter token.
    #[must_use]
    pub const fn punctuation(&self) -> &'static str {
        match self {
            Self::Question => "?",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::Bang => "!",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitNot => "~",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Assign => ":=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            _ => "",
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Upper-cased text of an unquoted word (identifier or keyword).
    ///
    /// Quoted identifiers return `None`: a backticked name never acts as a
    /// context-sensitive keyword.
    #[must_use]
    pub fn upper_word(&self) -> Option<String> {
        match &self.kind {
            TokenKind::Identifier(s) => Some(s.to_ascii_uppercase()),
            TokenKind::Keyword(kw) => Some(kw.as_str().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("straight_join"), Some(Keyword::StraightJoin));
        assert_eq!(Keyword::from_str("engine"), None);
        assert_eq!(Keyword::from_str("begin"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::CurrentTimestamp.as_str(), "CURRENT_TIMESTAMP");
        assert_eq!(Keyword::Sqlstate.as_str(), "SQLSTATE");
    }

    #[test]
    fn test_upper_word() {
        let ident = Token::new(TokenKind::Identifier(String::from("Engine")), Span::new(0, 6));
        let quoted = Token::new(
            TokenKind::QuotedIdentifier(String::from("engine")),
            Span::new(0, 8),
        );
        assert_eq!(ident.upper_word().as_deref(), Some("ENGINE"));
        assert_eq!(quoted.upper_word(), None);
    }
}
