use crate::{
    ast::span::Span,
    lexer::{
        error::LexerError,
        rules::{FilterRules, Rule},
        token::{Token, TokenKind},
    },
};
use pest::{Parser, iterators::Pair};

pub mod error;
pub mod rules;
pub mod token;

pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer { tokens: Vec::new() }
    }

    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, LexerError> {
        self.tokens.clear();

        let pairs = FilterRules::parse(Rule::tokens, input)
            .map_err(|e| LexerError::from_pest_error(e, input))?;

        for pair in pairs.flat_map(|p| p.into_inner()) {
            self.process_pair(pair, input)?;
        }

        let (line, column) = line_col(input, input.len());
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: Span::new(input.len(), input.len(), line, column),
        });

        Ok(self.tokens.clone())
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn process_pair(&mut self, pair: Pair<Rule>, input: &str) -> Result<(), LexerError> {
        let span = pair_to_span(&pair);
        let lexeme = pair.as_str().to_string();

        let kind = match pair.as_rule() {
            Rule::lit_string => {
                let inner = pair.into_inner().next();
                let (content, start) = match &inner {
                    Some(p) => (p.as_str(), p.as_span().start()),
                    None => ("", span.start + 1),
                };
                TokenKind::String(unescape(content, start, input)?)
            }
            Rule::unterminated_string => {
                return Err(LexerError::UnterminatedString {
                    offset: span.start,
                    line: span.line,
                    column: span.column,
                });
            }
            Rule::lit_number => {
                let value = lexeme
                    .parse::<i64>()
                    .map_err(|e| LexerError::MalformedLiteral {
                        lexeme: lexeme.clone(),
                        reason: number_error_reason(&lexeme, &e),
                        offset: span.start,
                        line: span.line,
                        column: span.column,
                    })?;
                TokenKind::Integer(value)
            }
            Rule::word => keyword_or_identifier(&lexeme),

            // Operators
            Rule::op_and => TokenKind::And,
            Rule::op_or => TokenKind::Or,
            Rule::op_eq_eq => TokenKind::Equal,
            Rule::op_neq => TokenKind::NotEqual,
            Rule::op_gte => TokenKind::GreaterOrEqual,
            Rule::op_lte => TokenKind::LessOrEqual,
            Rule::op_gt => TokenKind::GreaterThan,
            Rule::op_lt => TokenKind::LessThan,
            Rule::op_not => TokenKind::Not,

            // Delimiters
            Rule::lparen => TokenKind::LeftParen,
            Rule::rparen => TokenKind::RightParen,
            Rule::lbracket => TokenKind::LeftBracket,
            Rule::rbracket => TokenKind::RightBracket,
            Rule::comma => TokenKind::Comma,
            Rule::dot => TokenKind::Dot,

            // EOI and anything silent-adjacent carries no token
            _ => return Ok(()),
        };

        self.tokens.push(Token { kind, lexeme, span });
        Ok(())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer { tokens: vec![] }
    }
}

fn pair_to_span(pair: &Pair<Rule>) -> Span {
    let (line, column) = pair.line_col();
    let span = pair.as_span();
    Span::new(span.start(), span.end(), line, column)
}

/// `true`/`false` are case-sensitive; `in`, `not` and `contains` are not.
fn keyword_or_identifier(word: &str) -> TokenKind {
    match word {
        "true" => return TokenKind::Boolean(true),
        "false" => return TokenKind::Boolean(false),
        _ => {}
    }

    match word.to_lowercase().as_str() {
        "in" => TokenKind::In,
        "not" => TokenKind::NotKeyword,
        "contains" => TokenKind::Contains,
        _ => TokenKind::Identifier(word.to_string()),
    }
}

fn number_error_reason(lexeme: &str, err: &std::num::ParseIntError) -> String {
    use std::num::IntErrorKind;

    if lexeme.contains('.') {
        return "fractional numbers are not supported".to_string();
    }
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            "integer does not fit in 64 bits".to_string()
        }
        _ => "expected a base-10 integer".to_string(),
    }
}

/// Resolves backslash escapes in the body of a string literal. `start` is the
/// byte offset of `raw` inside `input`.
fn unescape(raw: &str, start: usize, input: &str) -> Result<String, LexerError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let invalid = |sequence: String| {
            let (line, column) = line_col(input, start + i);
            LexerError::InvalidEscape {
                sequence,
                offset: start + i,
                line,
                column,
            }
        };

        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, '"')) => out.push('"'),
            Some((_, '\'')) => out.push('\''),
            Some((_, '\\')) => out.push('\\'),
            Some((_, '/')) => out.push('/'),
            Some((_, 'u')) => {
                if chars.next_if(|(_, c)| *c == '{').is_none() {
                    return Err(invalid("\\u".to_string()));
                }
                let mut hex = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    hex.push(c);
                }
                let sequence = format!("\\u{{{hex}}}");
                if !closed || hex.is_empty() || hex.len() > 6 {
                    return Err(invalid(sequence));
                }
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| invalid(sequence.clone()))?;
                out.push(decoded);
            }
            Some((_, other)) => return Err(invalid(format!("\\{other}"))),
            None => return Err(invalid("\\".to_string())),
        }
    }

    Ok(out)
}

/// 1-based line and column (in characters) of a byte offset.
pub(crate) fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let before = input.get(..offset).unwrap_or(input);
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}
