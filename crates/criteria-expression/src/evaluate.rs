//! Single-pass operator-precedence evaluation over two explicit stacks.
//!
//! Tokens are consumed left to right. Operands go onto the operand stack,
//! operators onto the operator stack. Before an operator is pushed, every
//! stacked operator of greater or equal precedence (up to the nearest `(`)
//! is reduced, which gives left associativity within a tier. No syntax tree
//! is built.

use crate::error::ExprError;
use crate::operators::{self, Operator, Reduction};
use crate::pattern::PatternFactory;
use crate::source::Position;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use std::sync::Arc;

/// Options for [`Evaluator`].
#[derive(Clone, Default)]
pub struct EvaluatorOptions {
    /// Pattern compiler for `matches`. Defaults to compiling on every
    /// reduction.
    pub create_pattern: Option<Arc<PatternFactory>>,
}

#[derive(Clone, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
}

struct StackedOperator {
    operator: Operator,
    position: Position,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Evaluator { options }
    }

    pub fn with_pattern(mut self, create_pattern: Arc<PatternFactory>) -> Self {
        self.options.create_pattern = Some(create_pattern);
        self
    }

    /// Reduces `tokens` to a single value.
    pub fn evaluate<I>(&self, tokens: I) -> Result<Value, ExprError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut operators: Vec<StackedOperator> = Vec::new();
        let mut operands: Vec<(Value, Position)> = Vec::new();
        let mut expect_operand = true;
        let mut end = Position::default();

        for token in tokens {
            let position = token.position;
            end = position;
            match token.kind {
                TokenKind::Operand(value) => {
                    if !expect_operand {
                        return Err(ExprError::syntax(
                            format!("Unexpected operand {}", describe(&value)),
                            position,
                        ));
                    }
                    operands.push((value, position));
                    expect_operand = false;
                }
                TokenKind::Operator(Operator::OpenParen) => {
                    if !expect_operand {
                        return Err(ExprError::syntax("Unexpected '('", position));
                    }
                    operators.push(StackedOperator {
                        operator: Operator::OpenParen,
                        position,
                    });
                }
                TokenKind::Operator(Operator::CloseParen) => {
                    if expect_operand {
                        return Err(ExprError::syntax("Unexpected ')'", position));
                    }
                    loop {
                        match operators.pop() {
                            None => return Err(ExprError::syntax("Unmatched ')'", position)),
                            Some(top) if top.operator == Operator::OpenParen => break,
                            Some(top) => self.reduce(&top, &mut operands)?,
                        }
                    }
                }
                TokenKind::Operator(op) => {
                    if expect_operand {
                        return Err(ExprError::syntax(
                            format!("Missing left operand for \"{}\"", op),
                            position,
                        ));
                    }
                    while let Some(top) = operators.last() {
                        if top.operator == Operator::OpenParen
                            || top.operator.precedence() < op.precedence()
                        {
                            break;
                        }
                        if let Some(top) = operators.pop() {
                            self.reduce(&top, &mut operands)?;
                        }
                    }
                    operators.push(StackedOperator {
                        operator: op,
                        position,
                    });
                    expect_operand = true;
                }
            }
        }

        if expect_operand {
            if let Some(top) = operators.last() {
                if top.operator.is_binary() {
                    return Err(ExprError::syntax(
                        format!("Missing right operand for \"{}\"", top.operator),
                        top.position,
                    ));
                }
            }
        }

        while let Some(top) = operators.pop() {
            if top.operator == Operator::OpenParen {
                return Err(ExprError::syntax("Unmatched '('", top.position));
            }
            self.reduce(&top, &mut operands)?;
        }

        let result = operands.pop();
        if !operands.is_empty() {
            return Err(ExprError::syntax("Malformed expression", end));
        }
        let Some((value, position)) = result else {
            return Err(ExprError::syntax("Empty expression", end));
        };
        // Reductions reject placeholders, so only an operand that was never
        // reduced can still hold one, possibly nested in a list.
        if let Some(name) = value.first_placeholder() {
            return Err(ExprError::UnresolvedPlaceholder {
                name: name.to_string(),
                position,
            });
        }
        Ok(value)
    }

    fn reduce(
        &self,
        top: &StackedOperator,
        operands: &mut Vec<(Value, Position)>,
    ) -> Result<(), ExprError> {
        let missing = || {
            ExprError::syntax(
                format!("Missing operand for \"{}\"", top.operator),
                top.position,
            )
        };
        let (right, _) = operands.pop().ok_or_else(missing)?;
        let (left, _) = operands.pop().ok_or_else(missing)?;
        let ctx = Reduction {
            operator: top.operator,
            position: top.position,
            create_pattern: self.options.create_pattern.as_deref(),
        };
        operands.push((operators::reduce(&ctx, left, right)?, top.position));
        Ok(())
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

/// Evaluates `tokens` with default options.
pub fn evaluate<I>(tokens: I) -> Result<Value, ExprError>
where
    I: IntoIterator<Item = Token>,
{
    Evaluator::default().evaluate(tokens)
}
