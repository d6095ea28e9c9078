//! Criteria expression evaluator.
//!
//! # Overview
//!
//! A small embeddable expression language for rule engines, filters and
//! validation predicates. An expression combines number, boolean, string,
//! `null`, list and regex literals with arithmetic (`+ - * /`), comparison
//! (`> >= < <= == !=`), logical (`and or`), membership (`in`) and regex
//! (`matches`) operators. Bare identifiers are placeholders whose values are
//! supplied by the caller.
//!
//! Evaluation is a single left-to-right pass over the tokens with an operator
//! stack and an operand stack. Types are strict: there is no truthiness and no
//! implicit conversion, and every failure reports the line and column it was
//! detected at.
//!
//! # Example
//!
//! ```
//! use criteria_expression::{evaluate, evaluate_with_resolver, Value};
//!
//! assert_eq!(evaluate("1 + 2 * 3").unwrap(), Value::Number(7.0));
//! assert_eq!(evaluate("\"ab\" matches /A./i").unwrap(), Value::Boolean(true));
//!
//! let result = evaluate_with_resolver("keyword == 1", |name| match name {
//!     "keyword" => Ok(Value::Number(1.0)),
//!     _ => Err(criteria_expression::ExprError::resolver(format!("unknown {}", name))),
//! });
//! assert_eq!(result.unwrap(), Value::Boolean(true));
//! ```

pub mod error;
pub mod evaluate;
pub mod expression;
pub mod lexer;
pub mod operators;
pub mod pattern;
pub mod resolve;
pub mod source;
pub mod token;
pub mod value;
pub mod vars;

pub use error::{ErrorKind, ExprError};
pub use evaluate::{Evaluator, EvaluatorOptions};
pub use expression::Expression;
pub use lexer::Lexer;
pub use operators::Operator;
pub use pattern::{PatternCache, PatternFactory};
pub use source::Position;
pub use token::{Token, TokenKind};
pub use value::Value;
pub use vars::Vars;

/// Maximum nesting depth of list literals.
pub const MAX_LIST_DEPTH: usize = 32;

/// Evaluates `expression`. Fails if a placeholder is left unresolved.
pub fn evaluate(expression: &str) -> Result<Value, ExprError> {
    evaluate::evaluate(Lexer::tokenize(expression)?)
}

/// Evaluates `expression`, first replacing each placeholder with the value
/// `resolver` returns for its name. Resolver errors are returned unchanged.
pub fn evaluate_with_resolver<F>(expression: &str, mut resolver: F) -> Result<Value, ExprError>
where
    F: FnMut(&str) -> Result<Value, ExprError>,
{
    let mut tokens = Lexer::tokenize(expression)?;
    resolve::resolve(&mut tokens, &mut resolver)?;
    evaluate::evaluate(tokens)
}
