//! Builtin functions with their own argument grammar.
//!
//! [`Parser::parse_function_call`] looks the name up in a strategy table.
//! Names missing from the table take the ordinary path: zero or more
//! comma-separated expressions.

use super::{ParseError, Parser, Result};
use crate::ast::{AggregateFunction, ConvertTarget, Expr, FunctionCall, Identifier, TrimMode};
use crate::lexer::{Keyword, TokenKind};

/// How the arguments of a builtin are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Cast,
    Convert,
    Char,
    Trim,
    Substring,
    GroupConcat,
    Aggregate(AggregateFunction),
    Extract,
    TimestampAdd,
    TimestampDiff,
    Position,
    GetFormat,
    Row,
    /// Ordinary argument list with a fixed arity range.
    Arity { min: usize, max: Option<usize> },
}

fn strategy(name: &str) -> Option<Strategy> {
    if let Some(func) = AggregateFunction::from_name(name) {
        return Some(Strategy::Aggregate(func));
    }
    Some(match name {
        "CAST" => Strategy::Cast,
        "CONVERT" => Strategy::Convert,
        "CHAR" => Strategy::Char,
        "TRIM" => Strategy::Trim,
        "SUBSTRING" | "SUBSTR" | "MID" => Strategy::Substring,
        "GROUP_CONCAT" => Strategy::GroupConcat,
        "EXTRACT" => Strategy::Extract,
        "TIMESTAMPADD" => Strategy::TimestampAdd,
        "TIMESTAMPDIFF" => Strategy::TimestampDiff,
        "POSITION" => Strategy::Position,
        "GET_FORMAT" => Strategy::GetFormat,
        "ROW" => Strategy::Row,
        "POINT" => Strategy::Arity {
            min: 2,
            max: Some(2),
        },
        "LINESTRING" | "POLYGON" | "MULTIPOINT" | "MULTILINESTRING" | "MULTIPOLYGON"
        | "GEOMETRYCOLLECTION" => Strategy::Arity { min: 1, max: None },
        "CONTAINS" | "CROSSES" | "DISJOINT" | "EQUALS" | "INTERSECTS" | "OVERLAPS"
        | "TOUCHES" | "WITHIN" | "MBRCONTAINS" | "MBRDISJOINT" | "MBREQUAL" | "MBREQUALS"
        | "MBRINTERSECTS" | "MBROVERLAPS" | "MBRTOUCHES" | "MBRWITHIN" | "ST_CONTAINS"
        | "ST_CROSSES" | "ST_DISJOINT" | "ST_EQUALS" | "ST_INTERSECTS" | "ST_OVERLAPS"
        | "ST_TOUCHES" | "ST_WITHIN" | "ST_DISTANCE" => Strategy::Arity {
            min: 2,
            max: Some(2),
        },
        "IF" => Strategy::Arity {
            min: 3,
            max: Some(3),
        },
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parses the parenthesised arguments of a call to `name`. The
    /// current token is the opening parenthesis.
    pub(super) fn parse_function_call(&mut self, name: Identifier) -> Result<Expr> {
        let found = if name.parent.is_none() && !name.quoted {
            strategy(&name.upper())
        } else {
            None
        };
        let name_span = self.span();
        self.expect(&TokenKind::LeftParen)?;
        let expr = match found {
            Some(Strategy::Cast) => self.parse_cast_args()?,
            Some(Strategy::Convert) => self.parse_convert_args()?,
            Some(Strategy::Char) => self.parse_char_args()?,
            Some(Strategy::Trim) => self.parse_trim_args()?,
            Some(Strategy::Substring) => self.parse_substring_args()?,
            Some(Strategy::GroupConcat) => self.parse_group_concat_args()?,
            Some(Strategy::Aggregate(func)) => self.parse_aggregate_args(func)?,
            Some(Strategy::Extract) => {
                let unit = self.parse_interval_unit()?;
                self.expect_keyword(Keyword::From)?;
                let expr = self.parse_expression()?;
                Expr::Extract {
                    unit,
                    expr: Box::new(expr),
                }
            }
            Some(Strategy::TimestampAdd) => {
                let unit = self.parse_interval_unit()?;
                self.expect(&TokenKind::Comma)?;
                let interval = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let expr = self.parse_expression()?;
                Expr::TimestampAdd {
                    unit,
                    interval: Box::new(interval),
                    expr: Box::new(expr),
                }
            }
            Some(Strategy::TimestampDiff) => {
                let unit = self.parse_interval_unit()?;
                self.expect(&TokenKind::Comma)?;
                let start = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let end = self.parse_expression()?;
                Expr::TimestampDiff {
                    unit,
                    start: Box::new(start),
                    end: Box::new(end),
                }
            }
            Some(Strategy::Position) => {
                let needle = self.parse_expression()?;
                self.expect_keyword(Keyword::In)?;
                let haystack = self.parse_expression()?;
                Expr::Position {
                    needle: Box::new(needle),
                    haystack: Box::new(haystack),
                }
            }
            Some(Strategy::GetFormat) => {
                let kind = match self.current_word().as_deref() {
                    Some(word @ ("DATE" | "TIME" | "DATETIME" | "TIMESTAMP")) => word.to_string(),
                    _ => return Err(self.error_expected("DATE, TIME, DATETIME or TIMESTAMP")),
                };
                self.advance();
                self.expect(&TokenKind::Comma)?;
                let format = self.parse_expression()?;
                Expr::GetFormat {
                    kind,
                    format: Box::new(format),
                }
            }
            Some(Strategy::Row) => Expr::Row(self.parse_expression_list()?),
            Some(Strategy::Arity { min, max }) => {
                let args = self.parse_call_args()?;
                if args.len() < min || max.is_some_and(|max| args.len() > max) {
                    return Err(ParseError::new(
                        format!(
                            "Incorrect parameter count in the call to native function '{}'",
                            name.text
                        ),
                        name_span,
                    ));
                }
                Expr::Function(FunctionCall { name, args })
            }
            None => {
                let args = self.parse_call_args()?;
                Expr::Function(FunctionCall { name, args })
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(expr)
    }

    /// Zero or more comma-separated arguments.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>> {
        if self.check(&TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        self.parse_expression_list()
    }

    fn parse_cast_args(&mut self) -> Result<Expr> {
        let expr = self.parse_expression()?;
        self.expect_keyword(Keyword::As)?;
        let target = self.parse_cast_type()?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            target,
        })
    }

    fn parse_convert_args(&mut self) -> Result<Expr> {
        let expr = self.parse_expression()?;
        let target = if self.consume_keyword(Keyword::Using) {
            ConvertTarget::Charset(self.parse_name_text()?)
        } else {
            self.expect(&TokenKind::Comma)?;
            ConvertTarget::Type(self.parse_cast_type()?)
        };
        Ok(Expr::Convert {
            expr: Box::new(expr),
            target,
        })
    }

    fn parse_char_args(&mut self) -> Result<Expr> {
        let args = self.parse_expression_list()?;
        let charset = if self.consume_keyword(Keyword::Using) {
            Some(self.parse_name_text()?)
        } else {
            None
        };
        Ok(Expr::Char { args, charset })
    }

    /// `TRIM([{BOTH | LEADING | TRAILING}] [remove] FROM] expr)`.
    fn parse_trim_args(&mut self) -> Result<Expr> {
        let mode = if self.consume_keyword(Keyword::Both) {
            Some(TrimMode::Both)
        } else if self.consume_keyword(Keyword::Leading) {
            Some(TrimMode::Leading)
        } else if self.consume_keyword(Keyword::Trailing) {
            Some(TrimMode::Trailing)
        } else {
            None
        };

        if mode.is_some() && self.consume_keyword(Keyword::From) {
            let expr = self.parse_expression()?;
            return Ok(Expr::Trim {
                mode,
                remove: None,
                expr: Box::new(expr),
            });
        }

        let first = self.parse_expression()?;
        if self.consume_keyword(Keyword::From) {
            let expr = self.parse_expression()?;
            return Ok(Expr::Trim {
                mode,
                remove: Some(Box::new(first)),
                expr: Box::new(expr),
            });
        }
        if mode.is_some() {
            return Err(self.error_expected("FROM"));
        }
        Ok(Expr::Trim {
            mode: None,
            remove: None,
            expr: Box::new(first),
        })
    }

    /// `SUBSTRING(expr, pos [, len])` or `SUBSTRING(expr FROM pos [FOR len])`.
    fn parse_substring_args(&mut self) -> Result<Expr> {
        let expr = self.parse_expression()?;
        let (from, length) = if self.consume(&TokenKind::Comma) {
            let from = self.parse_expression()?;
            let length = if self.consume(&TokenKind::Comma) {
                Some(Box::new(self.parse_expression()?))
            } else {
                None
            };
            (from, length)
        } else {
            self.expect_keyword(Keyword::From)?;
            let from = self.parse_expression()?;
            let length = if self.consume_keyword(Keyword::For) {
                Some(Box::new(self.parse_expression()?))
            } else {
                None
            };
            (from, length)
        };
        Ok(Expr::Substring {
            expr: Box::new(expr),
            from: Box::new(from),
            length,
        })
    }

    fn parse_group_concat_args(&mut self) -> Result<Expr> {
        let distinct = self.consume_keyword(Keyword::Distinct);
        let args = self.parse_expression_list()?;
        let order_by = if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_items()?
        } else {
            Vec::new()
        };
        let separator = if self.consume_keyword(Keyword::Separator) {
            Some(self.parse_string()?)
        } else {
            None
        };
        Ok(Expr::GroupConcat {
            distinct,
            args,
            order_by,
            separator,
        })
    }

    fn parse_aggregate_args(&mut self, func: AggregateFunction) -> Result<Expr> {
        if func == AggregateFunction::Count && self.consume(&TokenKind::Star) {
            return Ok(Expr::Aggregate {
                func,
                distinct: false,
                args: vec![Expr::Identifier(Identifier::wildcard(None))],
            });
        }
        let distinct = if self.consume_keyword(Keyword::Distinct) {
            true
        } else {
            self.consume_keyword(Keyword::All);
            false
        };
        let args = self.parse_expression_list()?;
        if args.len() > 1 && !(distinct && func == AggregateFunction::Count) {
            return Err(ParseError::new(
                format!(
                    "Incorrect parameter count in the call to native function '{}'",
                    func.as_str()
                ),
                self.span(),
            ));
        }
        Ok(Expr::Aggregate {
            func,
            distinct,
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CastKind, IntervalUnit};

    fn expr(sql: &str) -> Expr {
        Parser::new(sql).parse_expression().unwrap()
    }

    #[test]
    fn test_cast_target() {
        let Expr::Cast { target, .. } = expr("CAST(a AS UNSIGNED INTEGER)") else {
            panic!("expected CAST");
        };
        assert_eq!(target.kind, CastKind::Unsigned);
    }

    #[test]
    fn test_cast_unknown_type_fails() {
        let err = Parser::new("CAST(a AS WIDGET)")
            .parse_expression()
            .unwrap_err();
        assert!(err.message.contains("Unknown data type"));
    }

    #[test]
    fn test_count_star_and_distinct() {
        assert_eq!(
            expr("COUNT(*)"),
            Expr::Aggregate {
                func: AggregateFunction::Count,
                distinct: false,
                args: vec![Expr::Identifier(Identifier::wildcard(None))],
            }
        );
        assert!(matches!(
            expr("count(DISTINCT a, b)"),
            Expr::Aggregate { distinct: true, .. }
        ));
    }

    #[test]
    fn test_trim_forms() {
        assert!(matches!(
            expr("TRIM(LEADING 'x' FROM a)"),
            Expr::Trim {
                mode: Some(TrimMode::Leading),
                remove: Some(_),
                ..
            }
        ));
        assert!(matches!(
            expr("TRIM(a)"),
            Expr::Trim {
                mode: None,
                remove: None,
                ..
            }
        ));
    }

    #[test]
    fn test_substring_forms_agree() {
        assert_eq!(expr("SUBSTRING(a, 2, 3)"), expr("SUBSTRING(a FROM 2 FOR 3)"));
    }

    #[test]
    fn test_extract_and_position() {
        assert!(matches!(
            expr("EXTRACT(YEAR FROM d)"),
            Expr::Extract {
                unit: IntervalUnit::Year,
                ..
            }
        ));
        assert!(matches!(expr("POSITION('a' IN b)"), Expr::Position { .. }));
    }

    #[test]
    fn test_group_concat() {
        let Expr::GroupConcat {
            distinct,
            order_by,
            separator,
            ..
        } = expr("GROUP_CONCAT(DISTINCT a ORDER BY a DESC SEPARATOR ';')")
        else {
            panic!("expected GROUP_CONCAT");
        };
        assert!(distinct);
        assert_eq!(order_by.len(), 1);
        assert_eq!(separator.as_deref(), Some(";"));
    }

    #[test]
    fn test_spatial_arity() {
        assert!(matches!(expr("POINT(1, 2)"), Expr::Function(_)));
        assert!(Parser::new("POINT(1)").parse_expression().is_err());
    }

    #[test]
    fn test_ordinary_function() {
        let Expr::Function(call) = expr("my_func()") else {
            panic!("expected call");
        };
        assert!(call.args.is_empty());
        assert_eq!(call.name.text, "my_func");
    }
}
