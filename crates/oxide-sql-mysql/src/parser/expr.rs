//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//!
//! | level | operators |
//! |-------|-----------|
//! | assignment | `:=` (right associative) |
//! | or | `OR`, `\|\|` |
//! | xor | `XOR` |
//! | and | `AND`, `&&` |
//! | not | `NOT` |
//! | predicate | `= <=> != < <= > >=`, `ANY/SOME/ALL`, `IS`, `BETWEEN`, `LIKE`, `REGEXP`, `IN`, `SOUNDS LIKE` |
//! | bit or | `\|` |
//! | bit and | `&` |
//! | shift | `<< >>` |
//! | additive | `+ -` |
//! | multiplicative | `* / DIV MOD %` |
//! | bit xor | `^` |
//! | unary | `+ - ~ ! BINARY` |
//! | collate | `COLLATE` |
//! | primary | literals, names, calls, `( .. )`, CASE, INTERVAL, ... |

use super::{ParseError, Parser, Result};
use crate::ast::{
    BinaryOp, Expr, FunctionCall, Identifier, IntervalUnit, IsTest, Literal, MatchModifier,
    Quantifier, StringLiteral, TemporalFunction, UnaryOp, WhenClause,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses a complete expression.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the tokens do not form an expression or
    /// nesting exceeds the configured depth.
    pub fn parse_expression(&mut self) -> Result<Expr> {
        self.nested(Self::parse_assignment)
    }

    /// Parses `expr, expr, ..`.
    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<Expr>> {
        self.parse_comma_separated(Self::parse_expression)
    }

    fn parse_assignment(&mut self) -> Result<Expr> {
        let target = self.parse_or()?;
        if self.consume(&TokenKind::Assign) {
            let value = self.parse_expression()?;
            return Ok(Expr::Assignment {
                target: Box::new(target),
                value: Box::new(value),
            });
        }
        Ok(target)
    }

    /// Folds `operand (op operand)*` into a left-deep tree. `operator`
    /// consumes the operator token and names it, or returns `None` at the
    /// end of the chain.
    fn parse_left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr>,
        operator: fn(&mut Self) -> Option<BinaryOp>,
    ) -> Result<Expr> {
        self.chained(|p| {
            let mut left = operand(p)?;
            while let Some(op) = operator(p) {
                p.chain_operator()?;
                let right = operand(p)?;
                left = left.binary(op, right);
            }
            Ok(left)
        })
    }

    fn parse_or(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_xor, |p| {
            (p.consume_keyword(Keyword::Or) || p.consume(&TokenKind::LogicalOr))
                .then_some(BinaryOp::Or)
        })
    }

    fn parse_xor(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_and, |p| {
            p.consume_keyword(Keyword::Xor).then_some(BinaryOp::Xor)
        })
    }

    fn parse_and(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_not, |p| {
            (p.consume_keyword(Keyword::And) || p.consume(&TokenKind::LogicalAnd))
                .then_some(BinaryOp::And)
        })
    }

    fn parse_not(&mut self) -> Result<Expr> {
        if self.consume_keyword(Keyword::Not) {
            let operand = self.nested(Self::parse_not)?;
            return Ok(Expr::Not(Box::new(operand)));
        }
        self.parse_predicate()
    }

    /// Comparison family. `NOT BETWEEN`, `NOT LIKE`, `NOT IN` and
    /// `NOT REGEXP` produce negated nodes rather than a wrapping NOT.
    fn parse_predicate(&mut self) -> Result<Expr> {
        self.chained(Self::parse_predicate_chain)
    }

    fn parse_predicate_chain(&mut self) -> Result<Expr> {
        let mut left = self.parse_bit_or()?;
        loop {
            if let Some(op) = comparison_op(self.kind()) {
                self.advance();
                self.chain_operator()?;
                left = self.parse_comparison_rhs(left, op)?;
                continue;
            }

            if self.consume_keyword(Keyword::Is) {
                self.chain_operator()?;
                let negated = self.consume_keyword(Keyword::Not);
                let test = if self.consume_keyword(Keyword::Null) {
                    IsTest::Null
                } else if self.consume_keyword(Keyword::True) {
                    IsTest::True
                } else if self.consume_keyword(Keyword::False) {
                    IsTest::False
                } else if self.consume_word("UNKNOWN") {
                    IsTest::Unknown
                } else {
                    return Err(self.error_expected("NULL, TRUE, FALSE or UNKNOWN"));
                };
                left = Expr::Is {
                    expr: Box::new(left),
                    negated,
                    test,
                };
                continue;
            }

            if self.check_word("SOUNDS") {
                self.advance();
                self.chain_operator()?;
                self.expect_keyword(Keyword::Like)?;
                let right = self.parse_bit_or()?;
                left = Expr::SoundsLike {
                    left: Box::new(left),
                    right: Box::new(right),
                };
                continue;
            }

            let negated = self.consume_keyword(Keyword::Not);
            let is_negatable = matches!(
                self.current().as_keyword(),
                Some(
                    Keyword::Between
                        | Keyword::Like
                        | Keyword::Regexp
                        | Keyword::Rlike
                        | Keyword::In
                )
            );
            if !is_negatable {
                if negated {
                    // `DEFAULT 0 NOT NULL`: the NOT belongs to the caller
                    self.tokens.push_back();
                }
                break;
            }
            self.chain_operator()?;
            match self.current().as_keyword() {
                Some(Keyword::Between) => {
                    self.advance();
                    let low = self.parse_bit_or()?;
                    self.expect_keyword(Keyword::And)?;
                    let high = self.parse_bit_or()?;
                    left = Expr::Between {
                        expr: Box::new(left),
                        negated,
                        low: Box::new(low),
                        high: Box::new(high),
                    };
                }
                Some(Keyword::Like) => {
                    self.advance();
                    let pattern = self.parse_bit_or()?;
                    let escape = if self.consume_word("ESCAPE") {
                        Some(Box::new(self.parse_bit_or()?))
                    } else {
                        None
                    };
                    left = Expr::Like {
                        expr: Box::new(left),
                        negated,
                        pattern: Box::new(pattern),
                        escape,
                    };
                }
                Some(Keyword::Regexp | Keyword::Rlike) => {
                    self.advance();
                    let pattern = self.parse_bit_or()?;
                    left = Expr::Regexp {
                        expr: Box::new(left),
                        negated,
                        pattern: Box::new(pattern),
                    };
                }
                _ => {
                    // IN is only the operator when a parenthesis follows
                    self.advance();
                    if !self.check(&TokenKind::LeftParen) {
                        if negated {
                            return Err(self.error_expected("'('"));
                        }
                        self.tokens.push_back();
                        break;
                    }
                    left = self.parse_in_rhs(left, negated)?;
                }
            }
        }
        Ok(left)
    }

    fn parse_comparison_rhs(&mut self, left: Expr, op: BinaryOp) -> Result<Expr> {
        let quantifier = if self.check_keyword(Keyword::All) {
            Some(Quantifier::All)
        } else if self.check_word("ANY") {
            Some(Quantifier::Any)
        } else if self.check_word("SOME") {
            Some(Quantifier::Some)
        } else {
            None
        };
        if let Some(quantifier) = quantifier {
            self.advance();
            if self.check(&TokenKind::LeftParen) {
                self.advance();
                let subquery = self.parse_query()?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(Expr::Quantified {
                    left: Box::new(left),
                    op,
                    quantifier,
                    subquery: Box::new(subquery),
                });
            }
            // a column named like the quantifier
            self.tokens.push_back();
        }
        let right = self.parse_bit_or()?;
        Ok(left.binary(op, right))
    }

    fn parse_in_rhs(&mut self, left: Expr, negated: bool) -> Result<Expr> {
        self.expect(&TokenKind::LeftParen)?;
        if self.query_ahead() {
            let subquery = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::InSubquery {
                expr: Box::new(left),
                negated,
                subquery: Box::new(subquery),
            });
        }
        let list = self.parse_expression_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::InList {
            expr: Box::new(left),
            negated,
            list,
        })
    }

    fn parse_bit_or(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_bit_and, |p| {
            p.consume(&TokenKind::BitOr).then_some(BinaryOp::BitOr)
        })
    }

    fn parse_bit_and(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_shift, |p| {
            p.consume(&TokenKind::BitAnd).then_some(BinaryOp::BitAnd)
        })
    }

    fn parse_shift(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_additive, |p| {
            let op = match p.kind() {
                TokenKind::LeftShift => BinaryOp::LeftShift,
                TokenKind::RightShift => BinaryOp::RightShift,
                _ => return None,
            };
            p.advance();
            Some(op)
        })
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_multiplicative, |p| {
            let op = match p.kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return None,
            };
            p.advance();
            Some(op)
        })
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_bit_xor, |p| {
            let op = match p.kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent | TokenKind::Keyword(Keyword::Mod) => BinaryOp::Mod,
                TokenKind::Keyword(Keyword::Div) => BinaryOp::IntDiv,
                _ => return None,
            };
            p.advance();
            Some(op)
        })
    }

    fn parse_bit_xor(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_unary, |p| {
            p.consume(&TokenKind::BitXor).then_some(BinaryOp::BitXor)
        })
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::BitNot => UnaryOp::BitNot,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Keyword(Keyword::Binary) => UnaryOp::Binary,
            _ => return self.parse_collate(),
        };
        self.advance();
        let operand = self.nested(Self::parse_unary)?;
        Ok(Expr::Unary {
            op,
            expr: Box::new(operand),
        })
    }

    fn parse_collate(&mut self) -> Result<Expr> {
        self.chained(|p| {
            let mut expr = p.parse_primary()?;
            while p.consume_keyword(Keyword::Collate) {
                p.chain_operator()?;
                let collation = p.parse_name_text()?;
                expr = Expr::Collate {
                    expr: Box::new(expr),
                    collation,
                };
            }
            Ok(expr)
        })
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let literal = match self.kind() {
            TokenKind::Integer(n) => Some(Literal::Integer(*n)),
            TokenKind::Decimal(d) => Some(Literal::Decimal(d.clone())),
            TokenKind::HexString(h) => Some(Literal::Hex(h.clone())),
            TokenKind::BitString(b) => Some(Literal::Bit(b.clone())),
            TokenKind::NationalString(s) => Some(Literal::String(StringLiteral {
                value: s.clone(),
                introducer: None,
                national: true,
            })),
            TokenKind::IntroducedString { charset, value } => {
                Some(Literal::String(StringLiteral {
                    value: value.clone(),
                    introducer: Some(charset.clone()),
                    national: false,
                }))
            }
            TokenKind::Keyword(Keyword::Null) => Some(Literal::Null),
            TokenKind::Keyword(Keyword::True) => Some(Literal::Boolean(true)),
            TokenKind::Keyword(Keyword::False) => Some(Literal::Boolean(false)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Expr::Literal(literal));
        }

        match self.kind().clone() {
            TokenKind::String(value) => {
                self.advance();
                if let TokenKind::UserVariable(host) = self.kind() {
                    let host = host.clone();
                    self.advance();
                    return Ok(Expr::UserName { user: value, host });
                }
                Ok(Expr::Literal(Literal::String(StringLiteral::new(value))))
            }
            TokenKind::Question => {
                self.advance();
                Ok(Expr::Parameter(self.tokens.next_param_index()))
            }
            TokenKind::UserVariable(name) => {
                self.advance();
                Ok(Expr::UserVariable(name))
            }
            TokenKind::SystemVariable(raw) => {
                self.advance();
                Ok(Self::system_variable(&raw))
            }
            TokenKind::LeftParen => self.parse_parenthesized(),
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => self.parse_name_or_call(),
            TokenKind::Keyword(keyword) => self.parse_keyword_primary(keyword),
            _ => Err(self.error_expected("expression")),
        }
    }

    /// `( subquery )`, `( expr )` or the row constructor `( expr, expr, .. )`.
    fn parse_parenthesized(&mut self) -> Result<Expr> {
        self.expect(&TokenKind::LeftParen)?;
        if self.query_ahead() {
            let subquery = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Subquery(Box::new(subquery)));
        }
        let first = self.parse_expression()?;
        if self.check(&TokenKind::Comma) {
            let mut items = vec![first];
            while self.consume(&TokenKind::Comma) {
                items.push(self.parse_expression()?);
            }
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Row(items));
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(first)
    }

    /// A name, `t.*`, or a (possibly qualified) function call.
    fn parse_name_or_call(&mut self) -> Result<Expr> {
        let name = self.parse_qualified_wildcard()?;
        if self.check(&TokenKind::LeftParen) && !name.is_wildcard() {
            return self.parse_function_call(name);
        }
        Ok(Expr::Identifier(name))
    }

    fn parse_keyword_primary(&mut self, keyword: Keyword) -> Result<Expr> {
        if let Some(func) = temporal_function(keyword) {
            self.advance();
            let precision = if self.consume(&TokenKind::LeftParen) {
                let precision = if let TokenKind::Integer(n) = self.kind() {
                    let n = *n;
                    self.advance();
                    Some(n)
                } else {
                    None
                };
                self.expect(&TokenKind::RightParen)?;
                precision
            } else {
                None
            };
            return Ok(Expr::Temporal { func, precision });
        }

        match keyword {
            Keyword::Exists => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let subquery = self.parse_query()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::Exists(Box::new(subquery)))
            }
            Keyword::Case => self.parse_case_expression(),
            Keyword::Interval => self.parse_interval(),
            Keyword::Match => self.parse_match(),
            Keyword::Default => {
                self.advance();
                if self.consume(&TokenKind::LeftParen) {
                    let column = self.parse_qualified_identifier()?;
                    self.expect(&TokenKind::RightParen)?;
                    Ok(Expr::Default(Some(column)))
                } else {
                    Ok(Expr::Default(None))
                }
            }
            Keyword::If
            | Keyword::Left
            | Keyword::Right
            | Keyword::Replace
            | Keyword::Insert
            | Keyword::Repeat
            | Keyword::Mod
            | Keyword::Database
            | Keyword::Schema
            | Keyword::Char
            | Keyword::Convert
            | Keyword::Values => {
                self.advance();
                if !self.check(&TokenKind::LeftParen) {
                    self.tokens.push_back();
                    return Err(self.error_expected("expression"));
                }
                self.parse_function_call(Identifier::new(keyword.as_str()))
            }
            _ => Err(self.error_expected("expression")),
        }
    }

    fn parse_case_expression(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        let mut when_clauses = Vec::new();
        while self.consume_keyword(Keyword::When) {
            let condition = self.parse_expression()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression()?;
            when_clauses.push(WhenClause { condition, result });
        }
        if when_clauses.is_empty() {
            return Err(ParseError::empty_case(self.span()));
        }
        let else_result = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect_word("END")?;
        Ok(Expr::Case {
            operand,
            when_clauses,
            else_result,
        })
    }

    /// `INTERVAL expr unit`, or the `INTERVAL(n, n1, ..)` function.
    fn parse_interval(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Interval)?;
        if self.consume(&TokenKind::LeftParen) {
            let mut args = self.parse_expression_list()?;
            self.expect(&TokenKind::RightParen)?;
            if args.len() == 1 {
                let unit = self.parse_interval_unit()?;
                let value = args.remove(0);
                return Ok(Expr::Interval {
                    value: Box::new(value),
                    unit,
                });
            }
            return Ok(Expr::Function(FunctionCall {
                name: Identifier::new("INTERVAL"),
                args,
            }));
        }
        let value = self.parse_expression()?;
        let unit = self.parse_interval_unit()?;
        Ok(Expr::Interval {
            value: Box::new(value),
            unit,
        })
    }

    /// Parses a temporal unit word such as `DAY` or `HOUR_MINUTE`.
    pub(super) fn parse_interval_unit(&mut self) -> Result<IntervalUnit> {
        match self.current_word().as_deref().and_then(IntervalUnit::from_word) {
            Some(unit) => {
                self.advance();
                Ok(unit)
            }
            None => Err(self.error_expected("interval unit")),
        }
    }

    fn parse_match(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Match)?;
        self.expect(&TokenKind::LeftParen)?;
        let columns = self.parse_comma_separated(Self::parse_qualified_identifier)?;
        self.expect(&TokenKind::RightParen)?;
        self.expect_word("AGAINST")?;
        self.expect(&TokenKind::LeftParen)?;
        let against = self.parse_expression()?;
        let modifier = if self.consume_keyword(Keyword::In) {
            if self.consume_word("BOOLEAN") {
                self.expect_word("MODE")?;
                Some(MatchModifier::Boolean)
            } else {
                self.expect_keyword(Keyword::Natural)?;
                self.expect_word("LANGUAGE")?;
                self.expect_word("MODE")?;
                if self.consume_keyword(Keyword::With) {
                    self.expect_word("QUERY")?;
                    self.expect_word("EXPANSION")?;
                    Some(MatchModifier::NaturalLanguageWithQueryExpansion)
                } else {
                    Some(MatchModifier::NaturalLanguage)
                }
            }
        } else if self.consume_keyword(Keyword::With) {
            self.expect_word("QUERY")?;
            self.expect_word("EXPANSION")?;
            Some(MatchModifier::WithQueryExpansion)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Match {
            columns,
            against: Box::new(against),
            modifier,
        })
    }
}

const fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NullSafeEq => BinaryOp::NullSafeEq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        _ => return None,
    })
}

const fn temporal_function(keyword: Keyword) -> Option<TemporalFunction> {
    Some(match keyword {
        Keyword::CurrentDate => TemporalFunction::CurrentDate,
        Keyword::CurrentTime => TemporalFunction::CurrentTime,
        Keyword::CurrentTimestamp => TemporalFunction::CurrentTimestamp,
        Keyword::CurrentUser => TemporalFunction::CurrentUser,
        Keyword::Localtime => TemporalFunction::LocalTime,
        Keyword::Localtimestamp => TemporalFunction::LocalTimestamp,
        Keyword::UtcDate => TemporalFunction::UtcDate,
        Keyword::UtcTime => TemporalFunction::UtcTime,
        Keyword::UtcTimestamp => TemporalFunction::UtcTimestamp,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(sql: &str) -> Expr {
        let mut parser = Parser::new(sql);
        let expr = parser.parse_expression().unwrap();
        assert!(parser.current().is_eof(), "trailing input in {sql}");
        expr
    }

    fn bin(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        left.binary(op, right)
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(
            expr("1 OR 0 AND 0"),
            bin(
                Expr::integer(1),
                BinaryOp::Or,
                bin(Expr::integer(0), BinaryOp::And, Expr::integer(0))
            )
        );
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        assert_eq!(
            expr("1+2*3"),
            bin(
                Expr::integer(1),
                BinaryOp::Add,
                bin(Expr::integer(2), BinaryOp::Mul, Expr::integer(3))
            )
        );
    }

    #[test]
    fn test_not_wraps_comparison() {
        assert_eq!(
            expr("NOT 1 = 1"),
            Expr::Not(Box::new(bin(
                Expr::integer(1),
                BinaryOp::Eq,
                Expr::integer(1)
            )))
        );
    }

    #[test]
    fn test_bit_xor_binds_tighter_than_mul() {
        assert_eq!(
            expr("2 * 3 ^ 1"),
            bin(
                Expr::integer(2),
                BinaryOp::Mul,
                bin(Expr::integer(3), BinaryOp::BitXor, Expr::integer(1))
            )
        );
    }

    #[test]
    fn test_not_between_is_negated_node() {
        let e = expr("a NOT BETWEEN 1 AND 2");
        assert!(matches!(e, Expr::Between { negated: true, .. }));
    }

    #[test]
    fn test_in_without_paren_is_pushed_back() {
        let mut parser = Parser::new("a IN b");
        let e = parser.parse_expression().unwrap();
        assert_eq!(e, Expr::column("a"));
        assert!(parser.check_keyword(Keyword::In));
    }

    #[test]
    fn test_not_before_null_is_left_alone() {
        let mut parser = Parser::new("0 NOT NULL");
        assert_eq!(parser.parse_expression().unwrap(), Expr::integer(0));
        assert!(parser.check_keyword(Keyword::Not));
    }

    #[test]
    fn test_row_constructor() {
        assert_eq!(
            expr("(1, 2)"),
            Expr::Row(vec![Expr::integer(1), Expr::integer(2)])
        );
        assert_eq!(expr("(1)"), Expr::integer(1));
    }

    #[test]
    fn test_assignment_is_lowest() {
        let e = expr("@a := 1 OR 0");
        assert!(matches!(e, Expr::Assignment { .. }));
    }

    #[test]
    fn test_empty_case_fails() {
        let mut parser = Parser::new("CASE a END");
        let err = parser.parse_expression().unwrap_err();
        assert!(err.message.contains("WHEN"));
    }

    #[test]
    fn test_quantified_comparison() {
        let e = expr("a > ALL (SELECT b FROM t)");
        assert!(matches!(
            e,
            Expr::Quantified {
                quantifier: Quantifier::All,
                op: BinaryOp::Gt,
                ..
            }
        ));
    }

    #[test]
    fn test_interval_forms() {
        assert_eq!(
            expr("INTERVAL 1 DAY"),
            Expr::Interval {
                value: Box::new(Expr::integer(1)),
                unit: IntervalUnit::Day
            }
        );
        assert!(matches!(expr("INTERVAL(5, 1, 10)"), Expr::Function(_)));
    }

    #[test]
    fn test_user_name() {
        assert_eq!(
            expr("'root'@'localhost'"),
            Expr::UserName {
                user: String::from("root"),
                host: String::from("'localhost'")
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let sql = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        let err = Parser::new(&sql).parse_expression().unwrap_err();
        assert_eq!(err.message, "maximum nesting depth exceeded");
    }
}
