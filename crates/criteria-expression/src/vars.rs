use crate::error::ExprError;
use crate::value::Value;
use serde_json::Value as Json;
use std::collections::HashMap;

/// Variable store: named bindings that can resolve placeholders.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    vars: HashMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Vars::default()
    }

    /// Builds a store from the top-level members of a JSON object.
    pub fn from_json(json: &Json) -> Result<Self, ExprError> {
        let Json::Object(members) = json else {
            return Err(ExprError::resolver("variables must be a JSON object"));
        };
        let mut vars = Vars::new();
        for (name, member) in members {
            vars.set(name, Value::from_json(member)?)?;
        }
        Ok(vars)
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Binds `name`. Empty names can never appear in an expression and are
    /// rejected.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ExprError> {
        if name.is_empty() {
            return Err(ExprError::resolver("Invalid varname."));
        }
        self.vars.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Removes a binding. Returns false if nothing was bound.
    pub fn del(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Resolver callback: the bound value, or a resolver error naming the
    /// missing placeholder.
    pub fn resolve(&self, name: &str) -> Result<Value, ExprError> {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| ExprError::resolver(format!("Placeholder \"{}\" is not defined.", name)))
    }
}
