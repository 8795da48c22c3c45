use std::collections::HashMap;

use tera::{Tera, Value};

/// Register the math helpers available inside templates.
///
/// Unary helpers take an `x` argument, e.g. `{{ sqrt(x=9) }}`; `pow` takes
/// `base` and `exp`; `pi()` and `e()` take no arguments.
pub fn register_all(tera: &mut Tera) {
    tera.register_function("abs", unary("abs", f64::abs));
    tera.register_function("ceil", unary("ceil", f64::ceil));
    tera.register_function("floor", unary("floor", f64::floor));
    tera.register_function("round", unary("round", f64::round));
    tera.register_function("trunc", unary("trunc", f64::trunc));
    tera.register_function("sqrt", unary("sqrt", f64::sqrt));
    tera.register_function("exp", unary("exp", f64::exp));
    tera.register_function("ln", unary("ln", f64::ln));
    tera.register_function("log2", unary("log2", f64::log2));
    tera.register_function("log10", unary("log10", f64::log10));
    tera.register_function("sin", unary("sin", f64::sin));
    tera.register_function("cos", unary("cos", f64::cos));
    tera.register_function("tan", unary("tan", f64::tan));
    tera.register_function("pow", pow);
    tera.register_function("pi", constant(std::f64::consts::PI));
    tera.register_function("e", constant(std::f64::consts::E));
}

fn unary(name: &'static str, op: fn(f64) -> f64) -> impl tera::Function {
    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let x = number_arg(args, "x", name)?;
        number_value(op(x), name)
    }
}

fn pow(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let base = number_arg(args, "base", "pow")?;
    let exp = number_arg(args, "exp", "pow")?;
    number_value(base.powf(exp), "pow")
}

fn constant(value: f64) -> impl tera::Function {
    move |_args: &HashMap<String, Value>| -> tera::Result<Value> {
        Ok(Value::from(value))
    }
}

fn number_arg(args: &HashMap<String, Value>, key: &str, func: &str) -> tera::Result<f64> {
    args.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| tera::Error::msg(format!("function `{func}` needs a numeric `{key}` argument")))
}

fn number_value(value: f64, func: &str) -> tera::Result<Value> {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| tera::Error::msg(format!("function `{func}` produced a non-finite result")))
}
