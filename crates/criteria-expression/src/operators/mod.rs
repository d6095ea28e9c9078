//! Operator definitions: the symbol table, precedence tiers and the
//! reduction dispatch.

pub mod arithmetic;
pub mod comparison;
pub mod logical;
pub mod membership;
pub mod string;

use crate::error::ExprError;
use crate::source::Position;
use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
    In,
    And,
    Or,
    Matches,
    OpenParen,
    CloseParen,
}

/// Every operator the lexer can emit, keyed by its source symbol.
pub const OPERATORS: &[(&str, Operator)] = &[
    ("+", Operator::Add),
    ("-", Operator::Subtract),
    ("*", Operator::Multiply),
    ("/", Operator::Divide),
    (">", Operator::Greater),
    (">=", Operator::GreaterEqual),
    ("<", Operator::Less),
    ("<=", Operator::LessEqual),
    ("==", Operator::Equal),
    ("!=", Operator::NotEqual),
    ("in", Operator::In),
    ("and", Operator::And),
    ("or", Operator::Or),
    ("matches", Operator::Matches),
    ("(", Operator::OpenParen),
    (")", Operator::CloseParen),
];

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, op)| *op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::In => "in",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Matches => "matches",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
        }
    }

    /// Binding strength; higher binds tighter. Parentheses are structural
    /// and sit below every binary operator.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Multiply | Operator::Divide => 4,
            Operator::Add | Operator::Subtract => 3,
            Operator::Greater
            | Operator::GreaterEqual
            | Operator::Less
            | Operator::LessEqual
            | Operator::Equal
            | Operator::NotEqual
            | Operator::In => 2,
            Operator::And | Operator::Or | Operator::Matches => 1,
            Operator::OpenParen | Operator::CloseParen => 0,
        }
    }

    pub const fn is_binary(self) -> bool {
        !matches!(self, Operator::OpenParen | Operator::CloseParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Shared context for a single reduction.
pub struct Reduction<'a> {
    pub operator: Operator,
    pub position: Position,
    pub create_pattern: Option<&'a crate::pattern::PatternFactory>,
}

impl Reduction<'_> {
    pub(crate) fn mismatch(&self) -> ExprError {
        ExprError::TypeMismatch {
            operator: self.operator.symbol().to_string(),
            position: self.position,
        }
    }
}

/// Applies a binary operator to already reduced operands.
pub fn reduce(ctx: &Reduction<'_>, left: Value, right: Value) -> Result<Value, ExprError> {
    if left.has_placeholder() || right.has_placeholder() {
        return Err(ctx.mismatch());
    }
    match ctx.operator {
        Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
            arithmetic::eval(ctx, &left, &right)
        }
        Operator::Greater | Operator::GreaterEqual | Operator::Less | Operator::LessEqual => {
            comparison::eval_ordering(ctx, &left, &right)
        }
        Operator::Equal => Ok(Value::Boolean(comparison::equals(&left, &right))),
        Operator::NotEqual => Ok(Value::Boolean(!comparison::equals(&left, &right))),
        Operator::And | Operator::Or => logical::eval(ctx, &left, &right),
        Operator::In => membership::eval(ctx, &left, &right),
        Operator::Matches => string::eval_matches(ctx, left, right),
        Operator::OpenParen | Operator::CloseParen => Err(ctx.mismatch()),
    }
}
