//! Arithmetic operators: `+`, `-`, `*`, `/`.

use super::{Operator, Reduction};
use crate::error::ExprError;
use crate::value::Value;

pub fn eval(ctx: &Reduction<'_>, left: &Value, right: &Value) -> Result<Value, ExprError> {
    let (Value::Number(l), Value::Number(r)) = (left, right) else {
        return Err(ctx.mismatch());
    };
    let result = match ctx.operator {
        Operator::Add => l + r,
        Operator::Subtract => l - r,
        Operator::Multiply => l * r,
        Operator::Divide => {
            if *r == 0.0 {
                return Err(ExprError::DivisionByZero {
                    position: ctx.position,
                });
            }
            l / r
        }
        _ => return Err(ctx.mismatch()),
    };
    Ok(Value::Number(result))
}
