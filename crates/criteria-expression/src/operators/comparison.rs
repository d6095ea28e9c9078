//! Comparison operators: `>`, `>=`, `<`, `<=`, `==`, `!=`.

use super::{Operator, Reduction};
use crate::error::ExprError;
use crate::value::Value;

/// `==` semantics. Any pair of types may be compared; different types are
/// simply unequal.
pub fn equals(left: &Value, right: &Value) -> bool {
    left.deep_equals(right)
}

/// Ordering comparisons are defined on numbers only.
pub fn eval_ordering(ctx: &Reduction<'_>, left: &Value, right: &Value) -> Result<Value, ExprError> {
    let (Value::Number(l), Value::Number(r)) = (left, right) else {
        return Err(ctx.mismatch());
    };
    let result = match ctx.operator {
        Operator::Greater => l > r,
        Operator::GreaterEqual => l >= r,
        Operator::Less => l < r,
        Operator::LessEqual => l <= r,
        _ => return Err(ctx.mismatch()),
    };
    Ok(Value::Boolean(result))
}
