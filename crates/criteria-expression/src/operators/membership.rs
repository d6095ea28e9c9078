//! List membership: `in`.

use super::Reduction;
use crate::error::ExprError;
use crate::value::Value;

pub fn eval(ctx: &Reduction<'_>, needle: &Value, haystack: &Value) -> Result<Value, ExprError> {
    let Value::List(items) = haystack else {
        return Err(ctx.mismatch());
    };
    Ok(Value::Boolean(items.iter().any(|item| item.deep_equals(needle))))
}
