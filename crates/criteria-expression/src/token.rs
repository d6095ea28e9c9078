use crate::operators::Operator;
use crate::source::Position;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Operand(Value),
    Operator(Operator),
}

/// A lexed token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }

    pub fn as_operand(&self) -> Option<&Value> {
        match &self.kind {
            TokenKind::Operand(value) => Some(value),
            TokenKind::Operator(_) => None,
        }
    }
}
