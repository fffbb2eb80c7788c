//! Column data types and CAST targets.

use super::{ParseError, Parser, Result};
use crate::ast::{CastKind, CastType, DataType, TypeName};
use crate::lexer::{Keyword, TokenKind};

/// Resolves a type word, folding synonyms onto one [`TypeName`].
fn type_name(word: &str) -> Option<TypeName> {
    Some(match word {
        "BIT" => TypeName::Bit,
        "TINYINT" | "INT1" => TypeName::TinyInt,
        "SMALLINT" | "INT2" => TypeName::SmallInt,
        "MEDIUMINT" | "INT3" | "MIDDLEINT" => TypeName::MediumInt,
        "INT" | "INTEGER" | "INT4" => TypeName::Int,
        "BIGINT" | "INT8" => TypeName::BigInt,
        "REAL" => TypeName::Real,
        "DOUBLE" | "FLOAT8" => TypeName::Double,
        "FLOAT" | "FLOAT4" => TypeName::Float,
        "DECIMAL" | "DEC" | "FIXED" => TypeName::Decimal,
        "NUMERIC" => TypeName::Numeric,
        "BOOL" | "BOOLEAN" => TypeName::Bool,
        "SERIAL" => TypeName::Serial,
        "DATE" => TypeName::Date,
        "TIME" => TypeName::Time,
        "TIMESTAMP" => TypeName::Timestamp,
        "DATETIME" => TypeName::DateTime,
        "YEAR" => TypeName::Year,
        "CHAR" | "CHARACTER" => TypeName::Char,
        "VARCHAR" | "VARCHARACTER" => TypeName::VarChar,
        "BINARY" => TypeName::Binary,
        "VARBINARY" => TypeName::VarBinary,
        "TINYBLOB" => TypeName::TinyBlob,
        "BLOB" => TypeName::Blob,
        "MEDIUMBLOB" => TypeName::MediumBlob,
        "LONGBLOB" => TypeName::LongBlob,
        "TINYTEXT" => TypeName::TinyText,
        "TEXT" => TypeName::Text,
        "MEDIUMTEXT" | "LONG" => TypeName::MediumText,
        "LONGTEXT" => TypeName::LongText,
        "ENUM" => TypeName::Enum,
        "SET" => TypeName::Set,
        "JSON" => TypeName::Json,
        "GEOMETRY" => TypeName::Geometry,
        "POINT" => TypeName::Point,
        "LINESTRING" => TypeName::LineString,
        "POLYGON" => TypeName::Polygon,
        "MULTIPOINT" => TypeName::MultiPoint,
        "MULTILINESTRING" => TypeName::MultiLineString,
        "MULTIPOLYGON" => TypeName::MultiPolygon,
        "GEOMETRYCOLLECTION" => TypeName::GeometryCollection,
        _ => return None,
    })
}

/// Charset implied by `NATIONAL` and `NCHAR` spellings.
const NATIONAL_CHARSET: &str = "utf8";

impl Parser<'_> {
    /// Parses a column data type with its modifiers.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType> {
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("data type"))?;
        let span = self.span();

        let mut national = false;
        let name = match word.as_str() {
            "NATIONAL" => {
                self.advance();
                national = true;
                match self.current_word().as_deref() {
                    Some("CHAR" | "CHARACTER") => TypeName::Char,
                    Some("VARCHAR" | "VARCHARACTER") => TypeName::VarChar,
                    _ => return Err(self.error_expected("CHAR or VARCHAR")),
                }
            }
            "NCHAR" => {
                national = true;
                TypeName::Char
            }
            "NVARCHAR" => {
                national = true;
                TypeName::VarChar
            }
            other => type_name(other).ok_or_else(|| ParseError::unknown_data_type(other, span))?,
        };
        self.advance();

        let mut data_type = DataType::new(name);
        match word.as_str() {
            "DOUBLE" => {
                self.consume_word("PRECISION");
            }
            "CHAR" | "CHARACTER" | "NATIONAL" | "NCHAR" => {
                if self.consume_word("VARYING") {
                    data_type.name = TypeName::VarChar;
                }
            }
            "LONG" => {
                if self.consume_keyword(Keyword::Varbinary) {
                    data_type.name = TypeName::MediumBlob;
                } else {
                    self.consume_keyword(Keyword::Varchar);
                }
            }
            _ => {}
        }
        if national {
            data_type.charset = Some(String::from(NATIONAL_CHARSET));
        }

        if matches!(data_type.name, TypeName::Enum | TypeName::Set) {
            self.expect(&TokenKind::LeftParen)?;
            data_type.values = self.parse_comma_separated(Self::parse_string)?;
            self.expect(&TokenKind::RightParen)?;
        } else if self.consume(&TokenKind::LeftParen) {
            data_type.length = Some(self.parse_u64()?);
            if self.consume(&TokenKind::Comma) {
                data_type.decimals = Some(self.parse_u64()?);
            }
            self.expect(&TokenKind::RightParen)?;
        }

        if data_type.name.is_numeric() {
            loop {
                if self.consume_keyword(Keyword::Unsigned) {
                    data_type.unsigned = true;
                } else if self.consume_word("SIGNED") {
                    // the default
                } else if self.consume_keyword(Keyword::Zerofill) {
                    data_type.zerofill = true;
                } else {
                    break;
                }
            }
        }

        if data_type.name.is_textual() {
            loop {
                if self.consume_keyword(Keyword::Binary) {
                    data_type.binary = true;
                } else if let Some(charset) = self.parse_optional_charset()? {
                    data_type.charset = Some(charset);
                } else if self.consume_keyword(Keyword::Collate) {
                    data_type.collation = Some(self.parse_name_text()?);
                } else {
                    break;
                }
            }
        }

        Ok(data_type)
    }

    /// `{CHARACTER SET | CHARSET} name`, or the `ASCII` and `UNICODE`
    /// shorthands.
    pub(super) fn parse_optional_charset(&mut self) -> Result<Option<String>> {
        if self.consume_keyword(Keyword::Character) {
            self.expect_keyword(Keyword::Set)?;
            return self.parse_name_text().map(Some);
        }
        if self.consume_word("CHARSET") {
            return self.parse_name_text().map(Some);
        }
        if self.consume_word("ASCII") {
            return Ok(Some(String::from("latin1")));
        }
        if self.consume_word("UNICODE") {
            return Ok(Some(String::from("ucs2")));
        }
        Ok(None)
    }

    /// Parses the target type of CAST or CONVERT.
    pub(super) fn parse_cast_type(&mut self) -> Result<CastType> {
        let word = self
            .current_word()
            .ok_or_else(|| self.error_expected("data type"))?;
        let span = self.span();
        let kind = match word.as_str() {
            "BINARY" => CastKind::Binary,
            "CHAR" | "CHARACTER" | "NCHAR" => CastKind::Char,
            "DATE" => CastKind::Date,
            "DATETIME" => CastKind::DateTime,
            "TIME" => CastKind::Time,
            "DECIMAL" | "DEC" => CastKind::Decimal,
            "SIGNED" => CastKind::Signed,
            "UNSIGNED" => CastKind::Unsigned,
            other => return Err(ParseError::unknown_data_type(other, span)),
        };
        self.advance();

        let mut target = CastType::new(kind);
        match kind {
            CastKind::Signed | CastKind::Unsigned => {
                if !self.consume_keyword(Keyword::Int) {
                    self.consume_keyword(Keyword::Integer);
                }
            }
            CastKind::Decimal => {
                if self.consume(&TokenKind::LeftParen) {
                    target.length = Some(self.parse_u64()?);
                    if self.consume(&TokenKind::Comma) {
                        target.scale = Some(self.parse_u64()?);
                    }
                    self.expect(&TokenKind::RightParen)?;
                }
            }
            CastKind::Char => {
                target.length = self.parse_optional_length()?;
                if word == "NCHAR" {
                    target.charset = Some(String::from(NATIONAL_CHARSET));
                } else {
                    target.charset = self.parse_optional_charset()?;
                }
            }
            CastKind::Binary | CastKind::DateTime | CastKind::Time => {
                target.length = self.parse_optional_length()?;
            }
            CastKind::Date => {}
        }
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_type(sql: &str) -> DataType {
        Parser::new(sql).parse_data_type().unwrap()
    }

    #[test]
    fn test_synonyms_collapse() {
        assert_eq!(data_type("INTEGER").name, TypeName::Int);
        assert_eq!(data_type("dec(10,2)").name, TypeName::Decimal);
        assert_eq!(data_type("DOUBLE PRECISION").name, TypeName::Double);
        assert_eq!(data_type("CHARACTER VARYING(5)").name, TypeName::VarChar);
    }

    #[test]
    fn test_numeric_modifiers() {
        let ty = data_type("DECIMAL(10, 2) UNSIGNED ZEROFILL");
        assert_eq!(ty.length, Some(10));
        assert_eq!(ty.decimals, Some(2));
        assert!(ty.unsigned);
        assert!(ty.zerofill);
    }

    #[test]
    fn test_text_modifiers() {
        let ty = data_type("VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin");
        assert_eq!(ty.charset.as_deref(), Some("utf8mb4"));
        assert_eq!(ty.collation.as_deref(), Some("utf8mb4_bin"));
    }

    #[test]
    fn test_enum_values() {
        let ty = data_type("ENUM('a', 'b')");
        assert_eq!(ty.values, vec![String::from("a"), String::from("b")]);
    }

    #[test]
    fn test_unknown_type() {
        let err = Parser::new("WIDGET(3)").parse_data_type().unwrap_err();
        assert_eq!(err.message, "Unknown data type: WIDGET");
    }
}
