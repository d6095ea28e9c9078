//! Placeholder resolution: substitutes caller-supplied values for
//! placeholder tokens before evaluation.

use crate::error::ExprError;
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Replaces every placeholder in `tokens`, including placeholders nested
/// inside list literals, with the value returned by `resolver`.
///
/// The first resolver error aborts resolution and is returned unchanged.
pub fn resolve<F>(tokens: &mut [Token], resolver: &mut F) -> Result<(), ExprError>
where
    F: FnMut(&str) -> Result<Value, ExprError>,
{
    for token in tokens.iter_mut() {
        if let TokenKind::Operand(value) = &mut token.kind {
            resolve_value(value, resolver)?;
        }
    }
    Ok(())
}

fn resolve_value<F>(value: &mut Value, resolver: &mut F) -> Result<(), ExprError>
where
    F: FnMut(&str) -> Result<Value, ExprError>,
{
    match value {
        Value::Placeholder(name) => {
            *value = resolver(name.as_str())?;
        }
        Value::List(items) => {
            for item in items.iter_mut() {
                resolve_value(item, resolver)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Names of all placeholders in `tokens`, in order of appearance, without
/// duplicates.
pub fn placeholders(tokens: &[Token]) -> Vec<&str> {
    fn collect<'a>(value: &'a Value, names: &mut Vec<&'a str>) {
        match value {
            Value::Placeholder(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Value::List(items) => items.iter().for_each(|item| collect(item, names)),
            _ => {}
        }
    }
    let mut names = Vec::new();
    for token in tokens {
        if let Some(value) = token.as_operand() {
            collect(value, &mut names);
        }
    }
    names
}
