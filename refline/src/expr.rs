// Copyright 2025 the Refline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small evaluable-expression grammar over the variable `x`.
//!
//! Comparison lines are written by chart editors as plain strings like
//! `"2*x+1"` or `"log(x)"`. The grammar is deliberately tiny: float literals,
//! `x`, the constants `pi` and `e`, `+ - * /`, `^` (right associative), unary
//! minus, parentheses, and a whitelist of functions.
//!
//! Parsing happens once, when the line is compiled; evaluation is pure and
//! never fails. Domain violations (division by zero, `log` of a non-positive
//! value, `sqrt` of a negative value) yield [`None`] so the sampler can drop
//! that sample and keep going.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::log::debug;

/// The expression does not conform to the evaluable grammar.
///
/// Reported once when the expression is compiled, never per sample.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The expression is empty or all whitespace.
    #[error("empty expression")]
    Empty,
    /// A character outside the grammar's alphabet.
    #[error("unexpected character `{ch}` at offset {pos}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset into the source.
        pos: usize,
    },
    /// A numeric literal that does not parse as `f64`.
    #[error("invalid number at offset {pos}")]
    InvalidNumber {
        /// Byte offset into the source.
        pos: usize,
    },
    /// A token in a position the grammar does not allow.
    #[error("unexpected token at offset {pos}")]
    UnexpectedToken {
        /// Byte offset into the source.
        pos: usize,
    },
    /// The expression ended where more input was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// An identifier that is neither `x`, a constant, nor a known function.
    #[error("unknown identifier `{name}`")]
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
    },
    /// A function name not followed by a parenthesized argument.
    #[error("expected `(` after function `{name}` at offset {pos}")]
    ExpectedArgument {
        /// The function name.
        name: String,
        /// Byte offset into the source.
        pos: usize,
    },
}

/// Whitelisted named functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Func {
    /// Natural logarithm.
    Log,
    Log10,
    Log2,
    Exp,
    Sqrt,
    Abs,
    Sin,
    Cos,
}

impl Func {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "log" | "ln" => Some(Self::Log),
            "log10" => Some(Self::Log10),
            "log2" => Some(Self::Log2),
            "exp" => Some(Self::Exp),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }

    fn apply(self, v: f64) -> Option<f64> {
        match self {
            Self::Log if v <= 0.0 => None,
            Self::Log => Some(v.ln()),
            Self::Log10 if v <= 0.0 => None,
            Self::Log10 => Some(v.log10()),
            Self::Log2 if v <= 0.0 => None,
            Self::Log2 => Some(v.log2()),
            Self::Exp => Some(v.exp()),
            Self::Sqrt if v < 0.0 => None,
            Self::Sqrt => Some(v.sqrt()),
            Self::Abs => Some(v.abs()),
            Self::Sin => Some(v.sin()),
            Self::Cos => Some(v.cos()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
enum Expr {
    Number(f64),
    Variable,
    Unary(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Func,
        arg: Box<Expr>,
    },
}

impl Expr {
    fn eval(&self, x: f64) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Variable => Some(x),
            Self::Unary(e) => e.eval(x).map(|v| -v),
            Self::Binary { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                match op {
                    BinOp::Add => Some(l + r),
                    BinOp::Sub => Some(l - r),
                    BinOp::Mul => Some(l * r),
                    BinOp::Div if r == 0.0 => None,
                    BinOp::Div => Some(l / r),
                    BinOp::Pow => Some(l.powf(r)),
                }
            }
            Self::Call { func, arg } => func.apply(arg.eval(x)?),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Clone, Debug, PartialEq)]
struct Token {
    kind: TokenKind,
    pos: usize,
}

fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let pos = i;
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
            }
            '+' | '-' | '*' | '/' | '^' | '(' | ')' => {
                let kind = match c {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '^' => TokenKind::Caret,
                    '(' => TokenKind::LParen,
                    _ => TokenKind::RParen,
                };
                tokens.push(Token { kind, pos });
                i += 1;
            }
            '0'..='9' | '.' => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                // Exponent suffix, only when it is unambiguously part of the
                // literal ("2e3", "1e-5"); a bare trailing `e` is the constant.
                if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
                    let mut j = i + 1;
                    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                        j += 1;
                    }
                    if j < bytes.len() && bytes[j].is_ascii_digit() {
                        i = j;
                        while i < bytes.len() && bytes[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text = &source[pos..i];
                let value: f64 = text
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber { pos })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    pos,
                });
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(String::from(&source[pos..i])),
                    pos,
                });
            }
            _ => return Err(ParseError::UnexpectedCharacter { ch: c, pos }),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current);
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        match self.peek() {
            Some(t) if &t.kind == kind => {
                self.current += 1;
                Ok(())
            }
            Some(t) => Err(ParseError::UnexpectedToken { pos: t.pos }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        loop {
            let op = if self.match_kind(&TokenKind::Plus) {
                BinOp::Add
            } else if self.match_kind(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            let rhs = self.term()?;
            expr = Expr::Binary {
                op,
                lhs: Box::new(expr),
                rhs: Box::new(rhs),
            };
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        loop {
            let op = if self.match_kind(&TokenKind::Star) {
                BinOp::Mul
            } else if self.match_kind(&TokenKind::Slash) {
                BinOp::Div
            } else {
                break;
            };
            let rhs = self.unary()?;
            expr = Expr::Binary {
                op,
                lhs: Box::new(expr),
                rhs: Box::new(rhs),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(&TokenKind::Minus) {
            let operand = self.unary()?;
            return Ok(Expr::Unary(Box::new(operand)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.match_kind(&TokenKind::Caret) {
            // Right associative, binding tighter than unary minus on the left:
            // `-x^2` is `-(x^2)`, `2^3^2` is `2^(3^2)`.
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let pos = token.pos;
        match token.kind.clone() {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => self.identifier(name, pos),
            TokenKind::LParen => {
                let expr = self.expression()?;
                self.consume(&TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(ParseError::UnexpectedToken { pos }),
        }
    }

    fn identifier(&mut self, name: String, pos: usize) -> Result<Expr, ParseError> {
        match name.as_str() {
            "x" => Ok(Expr::Variable),
            "pi" => Ok(Expr::Number(core::f64::consts::PI)),
            "e" => Ok(Expr::Number(core::f64::consts::E)),
            _ => {
                let Some(func) = Func::from_name(&name) else {
                    return Err(ParseError::UnknownIdentifier { name });
                };
                if !self.match_kind(&TokenKind::LParen) {
                    return Err(ParseError::ExpectedArgument { name, pos });
                }
                let arg = self.expression()?;
                self.consume(&TokenKind::RParen)?;
                Ok(Expr::Call {
                    func,
                    arg: Box::new(arg),
                })
            }
        }
    }
}

/// A compiled single-variable expression.
///
/// Compile once with [`Expression::parse`]; evaluate as often as needed with
/// [`Expression::eval`]. Identical `(expression, x)` inputs always produce
/// identical outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    root: Expr,
    source: String,
}

impl Expression {
    /// Parses `source` against the comparison-line grammar.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        if source.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let tokens = tokenize(source)?;
        let mut parser = Parser::new(tokens);
        let root = parser.expression()?;
        if let Some(token) = parser.peek() {
            return Err(ParseError::UnexpectedToken { pos: token.pos });
        }
        debug_assert!(parser.is_at_end());
        debug!(source, "compiled comparison-line expression");
        Ok(Self {
            root,
            source: String::from(source),
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// Returns `None` for domain violations and non-finite results; the
    /// sampler treats that as "no point at this x".
    pub fn eval(&self, x: f64) -> Option<f64> {
        self.root.eval(x).filter(|v| v.is_finite())
    }

    /// The expression source as written.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl core::fmt::Display for Expression {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.source)
    }
}
