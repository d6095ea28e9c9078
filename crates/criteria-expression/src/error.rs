use crate::source::Position;
use thiserror::Error;

/// Coarse classification of an [`ExprError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    TypeMismatch,
    DivisionByZero,
    Resolver,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("{message} near (line: {}, column: {})", .position.line, .position.column)]
    Syntax { message: String, position: Position },

    #[error(
        "invalid regular expression /{pattern}/: {message} near (line: {}, column: {})",
        .position.line,
        .position.column
    )]
    InvalidPattern {
        pattern: String,
        message: String,
        position: Position,
    },

    #[error(
        "Data type mismatch in criteria expression (operator: {operator}) near (line: {}, column: {})",
        .position.line,
        .position.column
    )]
    TypeMismatch { operator: String, position: Position },

    #[error(
        "Unresolved placeholder \"{name}\" near (line: {}, column: {})",
        .position.line,
        .position.column
    )]
    UnresolvedPlaceholder { name: String, position: Position },

    #[error("DIVISION_BY_ZERO near (line: {}, column: {})", .position.line, .position.column)]
    DivisionByZero { position: Position },

    #[error("{0}")]
    Resolver(String),
}

impl ExprError {
    pub(crate) fn syntax(message: impl Into<String>, position: Position) -> Self {
        ExprError::Syntax {
            message: message.into(),
            position,
        }
    }

    /// Builds the error a placeholder resolver reports back to the evaluator.
    pub fn resolver(message: impl Into<String>) -> Self {
        ExprError::Resolver(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExprError::Syntax { .. } | ExprError::InvalidPattern { .. } => ErrorKind::Syntax,
            ExprError::TypeMismatch { .. } | ExprError::UnresolvedPlaceholder { .. } => {
                ErrorKind::TypeMismatch
            }
            ExprError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ExprError::Resolver(_) => ErrorKind::Resolver,
        }
    }

    /// Where in the expression text the failure was detected.
    ///
    /// Resolver errors come from the host and carry no position.
    pub fn position(&self) -> Option<Position> {
        match self {
            ExprError::Syntax { position, .. }
            | ExprError::InvalidPattern { position, .. }
            | ExprError::TypeMismatch { position, .. }
            | ExprError::UnresolvedPlaceholder { position, .. }
            | ExprError::DivisionByZero { position } => Some(*position),
            ExprError::Resolver(_) => None,
        }
    }
}
