//! Expression AST types.

use super::{CastType, Identifier, OrderByItem, QueryExpr};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// NULL literal.
    Null,
    /// TRUE or FALSE.
    Boolean(bool),
    /// Unsigned integer literal.
    Integer(u64),
    /// Decimal or approximate number, kept as written.
    Decimal(String),
    /// Character string literal.
    String(StringLiteral),
    /// Hexadecimal literal; the digits only.
    Hex(String),
    /// Bit-field literal; the binary digits only.
    Bit(String),
}

/// A decoded string literal with its optional charset marking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Decoded value.
    pub value: String,
    /// Character set from a `_charset'..'` introducer.
    pub introducer: Option<String>,
    /// Written as `N'..'`.
    pub national: bool,
}

impl StringLiteral {
    /// Creates a plain string literal.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            introducer: None,
            national: false,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Logical
    Or,
    Xor,
    And,

    // Comparison
    Eq,
    NullSafeEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitOr,
    BitAnd,
    LeftShift,
    RightShift,
    BitXor,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    /// Integer division (`DIV`).
    IntDiv,
    Mod,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::BitXor => "^",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "DIV",
            Self::Mod => "%",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 2,
            Self::Xor => 3,
            Self::And => 4,
            Self::Eq
            | Self::NullSafeEq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq => 6,
            Self::BitOr => 7,
            Self::BitAnd => 8,
            Self::LeftShift | Self::RightShift => 9,
            Self::Add | Self::Sub => 10,
            Self::Mul | Self::Div | Self::IntDiv | Self::Mod => 11,
            Self::BitXor => 12,
        }
    }

    /// Returns true for the six relational operators and `<=>`.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        self.precedence() == 6
    }
}

/// Unary operators binding tighter than any binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `~`
    BitNot,
    /// `!`
    Not,
    /// `BINARY`
    Binary,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitNot => "~",
            Self::Not => "!",
            Self::Binary => "BINARY ",
        }
    }
}

/// `ANY`, `SOME` or `ALL` over a subquery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Any,
    Some,
    All,
}

/// The right-hand side of `IS [NOT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsTest {
    Null,
    True,
    False,
    Unknown,
}

/// Scope prefix of a system variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScope {
    Global,
    Session,
    Local,
}

impl VariableScope {
    /// Parses `GLOBAL`, `SESSION` or `LOCAL` (case-insensitive).
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "GLOBAL" => Some(Self::Global),
            "SESSION" => Some(Self::Session),
            "LOCAL" => Some(Self::Local),
            _ => None,
        }
    }

    /// Upper-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::Session => "SESSION",
            Self::Local => "LOCAL",
        }
    }
}

macro_rules! interval_units {
    ($($variant:ident => $text:literal,)*) => {
        /// Temporal unit used by `INTERVAL`, `EXTRACT` and `TIMESTAMPADD`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum IntervalUnit {
            $($variant,)*
        }

        impl IntervalUnit {
            /// Looks up a unit name; the `SQL_TSI_` prefix is accepted.
            #[must_use]
            pub fn from_word(word: &str) -> Option<Self> {
                let upper = word.to_ascii_uppercase();
                let name = upper.strip_prefix("SQL_TSI_").unwrap_or(&upper);
                match name {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Upper-case keyword.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

interval_units! {
    Microsecond => "MICROSECOND",
    Second => "SECOND",
    Minute => "MINUTE",
    Hour => "HOUR",
    Day => "DAY",
    Week => "WEEK",
    Month => "MONTH",
    Quarter => "QUARTER",
    Year => "YEAR",
    SecondMicrosecond => "SECOND_MICROSECOND",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourSecond => "HOUR_SECOND",
    HourMinute => "HOUR_MINUTE",
    DayMicrosecond => "DAY_MICROSECOND",
    DaySecond => "DAY_SECOND",
    DayMinute => "DAY_MINUTE",
    DayHour => "DAY_HOUR",
    YearMonth => "YEAR_MONTH",
}

/// Aggregate functions with `DISTINCT` support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    BitAnd,
    BitOr,
    BitXor,
    Std,
    Stddev,
    StddevPop,
    StddevSamp,
    Variance,
    VarPop,
    VarSamp,
}

impl AggregateFunction {
    /// Looks up an aggregate by upper-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "COUNT" => Self::Count,
            "SUM" => Self::Sum,
            "AVG" => Self::Avg,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "BIT_AND" => Self::BitAnd,
            "BIT_OR" => Self::BitOr,
            "BIT_XOR" => Self::BitXor,
            "STD" => Self::Std,
            "STDDEV" => Self::Stddev,
            "STDDEV_POP" => Self::StddevPop,
            "STDDEV_SAMP" => Self::StddevSamp,
            "VARIANCE" => Self::Variance,
            "VAR_POP" => Self::VarPop,
            "VAR_SAMP" => Self::VarSamp,
            _ => return None,
        })
    }

    /// Upper-case function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::BitAnd => "BIT_AND",
            Self::BitOr => "BIT_OR",
            Self::BitXor => "BIT_XOR",
            Self::Std => "STD",
            Self::Stddev => "STDDEV",
            Self::StddevPop => "STDDEV_POP",
            Self::StddevSamp => "STDDEV_SAMP",
            Self::Variance => "VARIANCE",
            Self::VarPop => "VAR_POP",
            Self::VarSamp => "VAR_SAMP",
        }
    }
}

/// Niladic temporal and session functions callable without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalFunction {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    LocalTime,
    LocalTimestamp,
    UtcDate,
    UtcTime,
    UtcTimestamp,
}

impl TemporalFunction {
    /// Upper-case function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::LocalTime => "LOCALTIME",
            Self::LocalTimestamp => "LOCALTIMESTAMP",
            Self::UtcDate => "UTC_DATE",
            Self::UtcTime => "UTC_TIME",
            Self::UtcTimestamp => "UTC_TIMESTAMP",
        }
    }
}

/// `TRIM` removal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    Both,
    Leading,
    Trailing,
}

/// Search modifier of `MATCH ... AGAINST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchModifier {
    NaturalLanguage,
    NaturalLanguageWithQueryExpansion,
    Boolean,
    WithQueryExpansion,
}

impl MatchModifier {
    /// Keyword sequence as rendered after the search string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalLanguage => "IN NATURAL LANGUAGE MODE",
            Self::NaturalLanguageWithQueryExpansion => {
                "IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION"
            }
            Self::Boolean => "IN BOOLEAN MODE",
            Self::WithQueryExpansion => "WITH QUERY EXPANSION",
        }
    }
}

/// Target of `CONVERT(expr, type)` or `CONVERT(expr USING charset)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertTarget {
    /// Type conversion.
    Type(CastType),
    /// Character set transcoding.
    Charset(String),
}

/// One `WHEN ... THEN ...` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhenClause {
    /// Condition, or comparand in the simple form.
    pub condition: Expr,
    /// Value produced when the arm matches.
    pub result: Expr,
}

/// An ordinary function call, resolved by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Function name, possibly schema-qualified.
    pub name: Identifier,
    /// Arguments.
    pub args: Vec<Expr>,
}

/// A SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Literal value.
    Literal(Literal),
    /// Column or other name, including `*` and `t.*`.
    Identifier(Identifier),
    /// `?` marker with its 1-based position.
    Parameter(usize),
    /// `@name`; the text after `@`, quoting preserved.
    UserVariable(String),
    /// `@@[scope.]name`.
    SystemVariable {
        /// Explicit scope.
        scope: Option<VariableScope>,
        /// Variable name.
        name: String,
    },
    /// `'user'@'host'` account name.
    UserName {
        /// Decoded user part.
        user: String,
        /// Host part as written after `@`.
        host: String,
    },
    /// `DEFAULT` or `DEFAULT(col)`.
    Default(Option<Identifier>),
    /// `target := value`.
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// Binary operation.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Unary operation.
    Unary { op: UnaryOp, expr: Box<Expr> },
    /// Logical `NOT expr`.
    Not(Box<Expr>),
    /// `expr op {ANY | SOME | ALL} (subquery)`.
    Quantified {
        left: Box<Expr>,
        op: BinaryOp,
        quantifier: Quantifier,
        subquery: Box<QueryExpr>,
    },
    /// `expr IS [NOT] {NULL | TRUE | FALSE | UNKNOWN}`.
    Is {
        expr: Box<Expr>,
        negated: bool,
        test: IsTest,
    },
    /// `expr [NOT] BETWEEN low AND high`.
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    /// `expr [NOT] LIKE pattern [ESCAPE escape]`.
    Like {
        expr: Box<Expr>,
        negated: bool,
        pattern: Box<Expr>,
        escape: Option<Box<Expr>>,
    },
    /// `expr [NOT] REGEXP pattern` (`RLIKE` is a synonym).
    Regexp {
        expr: Box<Expr>,
        negated: bool,
        pattern: Box<Expr>,
    },
    /// `left SOUNDS LIKE right`.
    SoundsLike { left: Box<Expr>, right: Box<Expr> },
    /// `expr [NOT] IN (list)`.
    InList {
        expr: Box<Expr>,
        negated: bool,
        list: Vec<Expr>,
    },
    /// `expr [NOT] IN (subquery)`.
    InSubquery {
        expr: Box<Expr>,
        negated: bool,
        subquery: Box<QueryExpr>,
    },
    /// `EXISTS (subquery)`.
    Exists(Box<QueryExpr>),
    /// Scalar or row subquery.
    Subquery(Box<QueryExpr>),
    /// Row constructor `(a, b)` or `ROW(a)`.
    Row(Vec<Expr>),
    /// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`.
    Case {
        operand: Option<Box<Expr>>,
        when_clauses: Vec<WhenClause>,
        else_result: Option<Box<Expr>>,
    },
    /// `expr COLLATE collation`.
    Collate { expr: Box<Expr>, collation: String },
    /// `INTERVAL value unit` as an operand of date arithmetic.
    Interval { value: Box<Expr>, unit: IntervalUnit },
    /// Ordinary function call.
    Function(FunctionCall),
    /// Aggregate call; `COUNT(*)` has a single wildcard argument.
    Aggregate {
        func: AggregateFunction,
        distinct: bool,
        args: Vec<Expr>,
    },
    /// `GROUP_CONCAT([DISTINCT] args [ORDER BY ..] [SEPARATOR 'sep'])`.
    GroupConcat {
        distinct: bool,
        args: Vec<Expr>,
        order_by: Vec<OrderByItem>,
        separator: Option<String>,
    },
    /// `CAST(expr AS type)`.
    Cast { expr: Box<Expr>, target: CastType },
    /// `CONVERT(expr, type)` or `CONVERT(expr USING charset)`.
    Convert {
        expr: Box<Expr>,
        target: ConvertTarget,
    },
    /// `CHAR(args [USING charset])`.
    Char {
        args: Vec<Expr>,
        charset: Option<String>,
    },
    /// `TRIM([[mode] [remove] FROM] expr)`.
    Trim {
        mode: Option<TrimMode>,
        remove: Option<Box<Expr>>,
        expr: Box<Expr>,
    },
    /// `SUBSTRING(expr FROM pos [FOR len])` and its comma forms.
    Substring {
        expr: Box<Expr>,
        from: Box<Expr>,
        length: Option<Box<Expr>>,
    },
    /// `EXTRACT(unit FROM expr)`.
    Extract { unit: IntervalUnit, expr: Box<Expr> },
    /// `TIMESTAMPADD(unit, interval, expr)`.
    TimestampAdd {
        unit: IntervalUnit,
        interval: Box<Expr>,
        expr: Box<Expr>,
    },
    /// `TIMESTAMPDIFF(unit, start, end)`.
    TimestampDiff {
        unit: IntervalUnit,
        start: Box<Expr>,
        end: Box<Expr>,
    },
    /// `POSITION(needle IN haystack)`.
    Position {
        needle: Box<Expr>,
        haystack: Box<Expr>,
    },
    /// `GET_FORMAT({DATE | TIME | DATETIME | TIMESTAMP}, format)`.
    GetFormat { kind: String, format: Box<Expr> },
    /// Niladic temporal function, with optional fractional precision.
    Temporal {
        func: TemporalFunction,
        precision: Option<u64>,
    },
    /// `MATCH (cols) AGAINST (expr [modifier])`.
    Match {
        columns: Vec<Identifier>,
        against: Box<Expr>,
        modifier: Option<MatchModifier>,
    },
}

impl Expr {
    /// Creates an unquoted column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: u64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a plain string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(StringLiteral::new(value)))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Binding strength of the outermost construct, on the same scale as
    /// [`BinaryOp::precedence`]. Atoms bind tightest.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Assignment { .. } => 1,
            Self::Binary { op, .. } => op.precedence(),
            Self::Not(_) => 5,
            Self::Quantified { .. }
            | Self::Is { .. }
            | Self::Between { .. }
            | Self::Like { .. }
            | Self::Regexp { .. }
            | Self::SoundsLike { .. }
            | Self::InList { .. }
            | Self::InSubquery { .. } => 6,
            Self::Unary { .. } => 13,
            Self::Collate { .. } => 14,
            _ => 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_precedence() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::BitXor.precedence() > BinaryOp::Mul.precedence());
        assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
        assert!(BinaryOp::NullSafeEq.is_comparison());
        assert!(!BinaryOp::BitOr.is_comparison());
    }

    #[test]
    fn test_interval_unit_lookup() {
        assert_eq!(IntervalUnit::from_word("day"), Some(IntervalUnit::Day));
        assert_eq!(
            IntervalUnit::from_word("SQL_TSI_MONTH"),
            Some(IntervalUnit::Month)
        );
        assert_eq!(IntervalUnit::from_word("fortnight"), None);
    }

    #[test]
    fn test_expr_precedence() {
        let sum = Expr::integer(1).binary(BinaryOp::Add, Expr::integer(2));
        assert_eq!(sum.precedence(), 10);
        assert_eq!(Expr::Not(Box::new(sum)).precedence(), 5);
        assert_eq!(Expr::column("a").precedence(), 15);
    }
}
