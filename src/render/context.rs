use std::collections::BTreeMap;

use tera::{Context, Value};

/// Build a render context from the variable mapping.
pub fn build_context(variables: &BTreeMap<String, Value>) -> Context {
    let mut context = Context::new();
    for (key, value) in variables {
        context.insert(key, value);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_context_carries_all_bindings() {
        let mut variables = BTreeMap::new();
        variables.insert("name".to_string(), Value::String("Ann".to_string()));
        variables.insert("count".to_string(), Value::Number(3.into()));

        let context = build_context(&variables);
        assert_eq!(context.get("name").unwrap(), &Value::String("Ann".into()));
        assert_eq!(context.get("count").unwrap(), &Value::Number(3.into()));
    }
}
