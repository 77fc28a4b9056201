//! Recursive-descent parser over the lexer's token stream.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! filter     := or EOF
//! or         := and ( "||" and )*
//! and        := unary ( "&&" unary )*
//! unary      := "!" unary | primary
//! primary    := "(" or ")" | predicate
//! predicate  := IDENT cmp_op literal
//!             | IDENT "in" list
//!             | IDENT "not" "in" list
//!             | IDENT "contains" literal
//!             | IDENT "." "contains" "(" literal ")"
//! list       := "(" [ literal ( "," literal )* [","] ] ")"
//!             | "[" [ literal ( "," literal )* [","] ] "]"
//! literal    := STRING | INTEGER | BOOLEAN
//! ```

use crate::{
    ast::{
        expr::{FilterExpr, FilterExprKind},
        ident::Identifier,
        literal::{Literal, LiteralExpr},
        operator::Operator,
        span::Span,
    },
    errors::SyntaxError,
    lexer::{
        Lexer,
        token::{Token, TokenKind},
    },
};
use tracing::trace;

/// Upper bound on how deeply `(` and `!` may nest. Flat `&&`/`||` chains
/// are not nesting and have no length limit.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parse a filter string into an untyped AST.
pub fn parse(input: &str) -> ParseResult<FilterExpr> {
    let tokens = Lexer::new().tokenize(input)?;
    trace!(count = tokens.len(), "tokenized filter");

    Parser::new(&tokens).parse_filter()
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    nesting: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    fn parse_filter(&mut self) -> ParseResult<FilterExpr> {
        if self.peek().kind == TokenKind::Eof {
            return Err(SyntaxError::Parse {
                message: "filter is empty".to_string(),
                offset: 0,
                line: 1,
                column: 1,
            });
        }

        let expr = self.parse_or()?;

        let next = self.peek();
        match next.kind {
            TokenKind::Eof => Ok(expr),
            TokenKind::RightParen => Err(self.error_at(
                next,
                "unbalanced parentheses: ')' has no matching '('".to_string(),
            )),
            _ => Err(self.error_at(
                next,
                format!("unexpected token '{}', expected '&&', '||' or end of input", next.kind),
            )),
        }
    }

    fn parse_or(&mut self) -> ParseResult<FilterExpr> {
        let mut left = self.parse_and()?;

        while self.peek().kind == TokenKind::Or {
            self.advance();
            let right = self.parse_and()?;
            left = combine(left, right, |left, right| FilterExprKind::Or { left, right });
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<FilterExpr> {
        let mut left = self.parse_unary()?;

        while self.peek().kind == TokenKind::And {
            self.advance();
            let right = self.parse_unary()?;
            left = combine(left, right, |left, right| FilterExprKind::And { left, right });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<FilterExpr> {
        if self.peek().kind != TokenKind::Not {
            return self.parse_primary();
        }

        let bang = self.advance().span;
        self.enter(bang)?;
        let inner = self.parse_unary()?;
        self.leave();

        let span = bang.merge(inner.span);
        Ok(FilterExpr::new(
            FilterExprKind::Not {
                inner: Box::new(inner),
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> ParseResult<FilterExpr> {
        let token = self.peek();
        match &token.kind {
            TokenKind::LeftParen => {
                let open = self.advance().span;
                self.enter(open)?;
                let inner = self.parse_or()?;

                let close = self.peek();
                if close.kind != TokenKind::RightParen {
                    return Err(self.error_at(
                        close,
                        format!(
                            "unbalanced parentheses: expected ')' to close '(' at offset {}, found '{}'",
                            open.start, close.kind
                        ),
                    ));
                }
                self.advance();
                self.leave();
                Ok(inner)
            }
            TokenKind::Identifier(name) => {
                let field = Identifier::new(name, token.span);
                self.advance();
                self.parse_predicate(field)
            }
            TokenKind::Eof => Err(self.error_at(
                token,
                "unexpected end of input, expected a field name or '('".to_string(),
            )),
            other => Err(self.error_at(
                token,
                format!("unexpected token '{other}', expected a field name or '('"),
            )),
        }
    }

    fn parse_predicate(&mut self, field: Identifier) -> ParseResult<FilterExpr> {
        let start = field.span;
        let token = self.advance();
        let kind = match &token.kind {
            TokenKind::Equal => self.comparison(field, Operator::Eq)?,
            TokenKind::NotEqual => self.comparison(field, Operator::Ne)?,
            TokenKind::LessThan => self.comparison(field, Operator::Lt)?,
            TokenKind::LessOrEqual => self.comparison(field, Operator::Le)?,
            TokenKind::GreaterThan => self.comparison(field, Operator::Gt)?,
            TokenKind::GreaterOrEqual => self.comparison(field, Operator::Ge)?,
            TokenKind::Contains => self.comparison(field, Operator::Contains)?,
            TokenKind::In => self.membership(field, Operator::In)?,
            TokenKind::NotKeyword => {
                self.expect(|k| *k == TokenKind::In, "'in' after 'not'")?;
                self.membership(field, Operator::NotIn)?
            }
            TokenKind::Dot => {
                self.expect(|k| *k == TokenKind::Contains, "'contains' after '.'")?;
                self.expect(|k| *k == TokenKind::LeftParen, "'(' after 'contains'")?;
                let literal = self.parse_literal()?;
                self.expect(|k| *k == TokenKind::RightParen, "')' to close 'contains('")?;
                FilterExprKind::Comparison {
                    field,
                    op: Operator::Contains,
                    literal,
                }
            }
            other => {
                return Err(self.error_at(
                    token,
                    format!(
                        "unexpected token '{other}' after field '{}', expected a comparison operator, 'in' or 'contains'",
                        field.name
                    ),
                ));
            }
        };

        let span = start.merge(self.previous().span);

        Ok(FilterExpr::new(kind, span))
    }

    fn comparison(&mut self, field: Identifier, op: Operator) -> ParseResult<FilterExprKind> {
        let literal = self.parse_literal()?;
        Ok(FilterExprKind::Comparison { field, op, literal })
    }

    fn membership(&mut self, field: Identifier, op: Operator) -> ParseResult<FilterExprKind> {
        let open = self.advance();
        let close = match open.kind {
            TokenKind::LeftParen => TokenKind::RightParen,
            TokenKind::LeftBracket => TokenKind::RightBracket,
            _ => {
                return Err(self.error_at(
                    open,
                    format!("expected '(' or '[' to start the list, found '{}'", open.kind),
                ));
            }
        };

        let mut literals = Vec::new();
        loop {
            if self.peek().kind == close {
                self.advance();
                break;
            }

            literals.push(self.parse_literal()?);

            let next = self.advance();
            if next.kind == close {
                break;
            }
            if next.kind != TokenKind::Comma {
                return Err(self.error_at(
                    next,
                    format!("expected ',' or '{close}' in list, found '{}'", next.kind),
                ));
            }
        }

        Ok(FilterExprKind::Membership { field, op, literals })
    }

    fn parse_literal(&mut self) -> ParseResult<LiteralExpr> {
        let token = self.peek();
        let value = match &token.kind {
            TokenKind::String(s) => Literal::String(s.clone()),
            TokenKind::Integer(n) => Literal::Integer(*n),
            TokenKind::Boolean(b) => Literal::Boolean(*b),
            TokenKind::Eof => {
                return Err(self.error_at(
                    token,
                    "unexpected end of input, expected a literal".to_string(),
                ));
            }
            other => {
                return Err(self.error_at(
                    token,
                    format!("expected a literal (string, integer or boolean), found '{other}'"),
                ));
            }
        };

        let span = token.span;
        self.advance();
        Ok(LiteralExpr::new(value, span))
    }

    fn enter(&mut self, at: Span) -> ParseResult<()> {
        self.nesting += 1;
        if self.nesting > MAX_EXPRESSION_DEPTH {
            return Err(SyntaxError::TooDeep {
                offset: at.start,
                max: MAX_EXPRESSION_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn expect(&mut self, pred: impl Fn(&TokenKind) -> bool, what: &str) -> ParseResult<&'t Token> {
        let token = self.peek();
        if pred(&token.kind) {
            return Ok(self.advance());
        }
        Err(self.error_at(token, format!("expected {what}, found '{}'", token.kind)))
    }

    fn peek(&self) -> &'t Token {
        // The lexer always terminates the stream with Eof.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn previous(&self) -> &'t Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, token: &Token, message: String) -> SyntaxError {
        SyntaxError::Parse {
            message,
            offset: token.span.start,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

fn combine(
    left: FilterExpr,
    right: FilterExpr,
    build: impl FnOnce(Box<FilterExpr>, Box<FilterExpr>) -> FilterExprKind,
) -> FilterExpr {
    let span = left.span.merge(right.span);
    FilterExpr::new(build(Box::new(left), Box::new(right)), span)
}
