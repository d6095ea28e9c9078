//! Pre-lexed expressions.
//!
//! Lexing happens once in [`Expression::parse`]. Every evaluation works on a
//! private copy of the token buffer, so one `Expression` can be evaluated
//! any number of times, from any number of threads, with different
//! resolvers.

use crate::error::ExprError;
use crate::evaluate::Evaluator;
use crate::lexer::Lexer;
use crate::resolve;
use crate::token::Token;
use crate::value::Value;
use crate::vars::Vars;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    text: String,
    tokens: Vec<Token>,
}

impl Expression {
    pub fn parse(text: &str) -> Result<Self, ExprError> {
        Ok(Expression {
            text: text.to_string(),
            tokens: Lexer::tokenize(text)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder names the expression references, in order of first
    /// appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        resolve::placeholders(&self.tokens)
    }

    pub fn evaluate(&self) -> Result<Value, ExprError> {
        self.evaluate_using(&Evaluator::default())
    }

    pub fn evaluate_with<F>(&self, resolver: F) -> Result<Value, ExprError>
    where
        F: FnMut(&str) -> Result<Value, ExprError>,
    {
        self.evaluate_with_using(&Evaluator::default(), resolver)
    }

    /// Evaluates with placeholders bound from `vars`.
    pub fn evaluate_vars(&self, vars: &Vars) -> Result<Value, ExprError> {
        self.evaluate_with(|name| vars.resolve(name))
    }

    pub fn evaluate_using(&self, evaluator: &Evaluator) -> Result<Value, ExprError> {
        evaluator.evaluate(self.tokens.iter().cloned())
    }

    pub fn evaluate_with_using<F>(
        &self,
        evaluator: &Evaluator,
        mut resolver: F,
    ) -> Result<Value, ExprError>
    where
        F: FnMut(&str) -> Result<Value, ExprError>,
    {
        let mut tokens = self.tokens.clone();
        resolve::resolve(&mut tokens, &mut resolver)?;
        evaluator.evaluate(tokens)
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Expression::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::pattern::PatternCache;
    use std::sync::Arc;

    #[test]
    fn test_parse_once_evaluate_many() {
        let expr: Expression = "age >= 18 and country in [\"NL\", \"BE\"]".parse().unwrap();
        assert_eq!(expr.placeholders(), vec!["age", "country"]);

        let mut adult = Vars::new();
        adult.set("age", 30).unwrap();
        adult.set("country", "NL").unwrap();
        assert_eq!(expr.evaluate_vars(&adult), Ok(Value::Boolean(true)));

        let mut minor = Vars::new();
        minor.set("age", 12).unwrap();
        minor.set("country", "NL").unwrap();
        assert_eq!(expr.evaluate_vars(&minor), Ok(Value::Boolean(false)));

        let err = expr.evaluate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_lex_errors_surface_at_parse() {
        let err = Expression::parse("[1,2,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_shared_pattern_cache() {
        let cache = Arc::new(PatternCache::new());
        let evaluator = Evaluator::default().with_pattern(Arc::clone(&cache).into_factory());
        let expr = Expression::parse("name matches /^a/i").unwrap();
        for name in ["Ann", "alice", "bob"] {
            let result = expr.evaluate_with_using(&evaluator, |_| Ok(Value::from(name)));
            assert_eq!(result, Ok(Value::Boolean(name != "bob")));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expression_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expression>();
        assert_send_sync::<Evaluator>();
        assert_send_sync::<Vars>();
    }
}
