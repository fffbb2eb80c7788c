//! Column data types and CAST targets.

/// Base name of a column data type. Synonyms collapse onto one variant
/// (`INTEGER` is `Int`, `DEC` and `FIXED` are `Decimal`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    // Numeric
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Real,
    Double,
    Float,
    Decimal,
    Numeric,
    Bool,
    Serial,

    // Temporal
    Date,
    Time,
    Timestamp,
    DateTime,
    Year,

    // String
    Char,
    VarChar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Enum,
    Set,
    Json,

    // Spatial
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl TypeName {
    /// Canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bit => "BIT",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::MediumInt => "MEDIUMINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Bool => "BOOL",
            Self::Serial => "SERIAL",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::DateTime => "DATETIME",
            Self::Year => "YEAR",
            Self::Char => "CHAR",
            Self::VarChar => "VARCHAR",
            Self::Binary => "BINARY",
            Self::VarBinary => "VARBINARY",
            Self::TinyBlob => "TINYBLOB",
            Self::Blob => "BLOB",
            Self::MediumBlob => "MEDIUMBLOB",
            Self::LongBlob => "LONGBLOB",
            Self::TinyText => "TINYTEXT",
            Self::Text => "TEXT",
            Self::MediumText => "MEDIUMTEXT",
            Self::LongText => "LONGTEXT",
            Self::Enum => "ENUM",
            Self::Set => "SET",
            Self::Json => "JSON",
            Self::Geometry => "GEOMETRY",
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Returns true for types that accept `CHARACTER SET` and `COLLATE`.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::VarChar
                | Self::TinyText
                | Self::Text
                | Self::MediumText
                | Self::LongText
                | Self::Enum
                | Self::Set
        )
    }

    /// Returns true for types that accept `UNSIGNED` and `ZEROFILL`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::TinyInt
                | Self::SmallInt
                | Self::MediumInt
                | Self::Int
                | Self::BigInt
                | Self::Real
                | Self::Double
                | Self::Float
                | Self::Decimal
                | Self::Numeric
        )
    }
}

/// A column data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    /// Base type.
    pub name: TypeName,
    /// Length, display width or precision.
    pub length: Option<u64>,
    /// Digits after the decimal point.
    pub decimals: Option<u64>,
    /// `UNSIGNED`.
    pub unsigned: bool,
    /// `ZEROFILL`.
    pub zerofill: bool,
    /// `BINARY` attribute of a character type.
    pub binary: bool,
    /// `CHARACTER SET` of a character type.
    pub charset: Option<String>,
    /// `COLLATE` of a character type.
    pub collation: Option<String>,
    /// Members of `ENUM` or `SET`.
    pub values: Vec<String>,
}

impl DataType {
    /// Creates a data type with no modifiers.
    #[must_use]
    pub const fn new(name: TypeName) -> Self {
        Self {
            name,
            length: None,
            decimals: None,
            unsigned: false,
            zerofill: false,
            binary: false,
            charset: None,
            collation: None,
            values: Vec::new(),
        }
    }

    /// Sets the length.
    #[must_use]
    pub const fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

/// Base of a `CAST`/`CONVERT` target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    Binary,
    Char,
    Date,
    DateTime,
    Time,
    Decimal,
    Signed,
    Unsigned,
}

impl CastKind {
    /// Canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Char => "CHAR",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Time => "TIME",
            Self::Decimal => "DECIMAL",
            Self::Signed => "SIGNED",
            Self::Unsigned => "UNSIGNED",
        }
    }
}

/// Target type of `CAST(expr AS ..)` and `CONVERT(expr, ..)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastType {
    /// Base type.
    pub kind: CastKind,
    /// Length or precision.
    pub length: Option<u64>,
    /// Decimal scale.
    pub scale: Option<u64>,
    /// Character set of a `CHAR` target.
    pub charset: Option<String>,
}

impl CastType {
    /// Creates a target with no modifiers.
    #[must_use]
    pub const fn new(kind: CastKind) -> Self {
        Self {
            kind,
            length: None,
            scale: None,
            charset: None,
        }
    }
}
