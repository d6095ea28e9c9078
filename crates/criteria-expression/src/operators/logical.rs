//! Logical operators: `and`, `or`.
//!
//! Both operands are fully reduced before the operator fires, so there is
//! no short-circuiting. Neither operand may be anything but a boolean.

use super::{Operator, Reduction};
use crate::error::ExprError;
use crate::value::Value;

pub fn eval(ctx: &Reduction<'_>, left: &Value, right: &Value) -> Result<Value, ExprError> {
    let (Value::Boolean(l), Value::Boolean(r)) = (left, right) else {
        return Err(ctx.mismatch());
    };
    match ctx.operator {
        Operator::And => Ok(Value::Boolean(*l && *r)),
        Operator::Or => Ok(Value::Boolean(*l || *r)),
        _ => Err(ctx.mismatch()),
    }
}
