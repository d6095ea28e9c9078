//! String operators: `matches`.

use super::Reduction;
use crate::error::ExprError;
use crate::pattern;
use crate::value::Value;

/// Unanchored regex match.
///
/// One side is the subject string, the other the pattern: a regex literal
/// on either side, or a string on the right-hand side.
pub fn eval_matches(ctx: &Reduction<'_>, left: Value, right: Value) -> Result<Value, ExprError> {
    let (subject, pattern) = match (left, right) {
        (Value::String(s), Value::Regex(p)) | (Value::Regex(p), Value::String(s)) => (s, p),
        (Value::String(s), Value::String(p)) => (s, p),
        _ => return Err(ctx.mismatch()),
    };
    let compiled = match ctx.create_pattern {
        Some(create_pattern) => create_pattern(pattern.as_str()),
        None => pattern::compile(&pattern),
    }
    .map_err(|e| ExprError::InvalidPattern {
        pattern: pattern.clone(),
        message: e.to_string(),
        position: ctx.position,
    })?;
    Ok(Value::Boolean(compiled.is_match(&subject)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::operators::Operator;
    use crate::source::Position;

    fn matches(left: Value, right: Value) -> Result<Value, ExprError> {
        let ctx = Reduction {
            operator: Operator::Matches,
            position: Position::default(),
            create_pattern: None,
        };
        eval_matches(&ctx, left, right)
    }

    #[test]
    fn test_order_independent() {
        let subject = Value::from("ab");
        let pattern = Value::Regex("a.".into());
        assert_eq!(matches(subject.clone(), pattern.clone()), Ok(true.into()));
        assert_eq!(matches(pattern, subject), Ok(true.into()));
    }

    #[test]
    fn test_string_pattern_on_the_right() {
        assert_eq!(matches("ab".into(), "a.".into()), Ok(true.into()));
        assert_eq!(matches("a.".into(), "ab".into()), Ok(false.into()));
    }

    #[test]
    fn test_match_is_unanchored() {
        assert_eq!(matches("xxabyy".into(), Value::Regex("ab".into())), Ok(true.into()));
    }

    #[test]
    fn test_type_checked() {
        let err = matches(1.into(), Value::Regex("1".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = matches(Value::Regex("a".into()), Value::Regex("a".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = matches("a".into(), Value::Regex("(".into())).unwrap_err();
        assert!(matches!(err, ExprError::InvalidPattern { .. }));
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}
