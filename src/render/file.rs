use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex_lite::Regex;
use tera::{Context, Tera};

use crate::error::{JigError, Result};

/// Render `template_name` from the environment, classifying failures.
pub fn render_template(tera: &Tera, template_name: &str, context: &Context) -> Result<String> {
    tera.render(template_name, context)
        .map_err(|e| classify_render_error(template_name, e))
}

/// Tera reports a strict-undefined violation as a plain message somewhere in
/// its error chain; surface the variable name when one is found.
fn classify_render_error(file: &str, error: tera::Error) -> JigError {
    if let Some(variable) = find_undefined_variable(&error) {
        return JigError::UndefinedVariable {
            variable,
            file: file.to_string(),
            source: error,
        };
    }
    JigError::RenderFailed {
        file: file.to_string(),
        source: error,
    }
}

fn find_undefined_variable(error: &tera::Error) -> Option<String> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(name) = extract_variable_name(&err.to_string()) {
            return Some(name);
        }
        current = err.source();
    }
    None
}

fn extract_variable_name(message: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"Variable `([^`]+)` not found").expect("variable pattern is valid")
    });
    re.captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect binary files using content_inspector (BOM-aware, null-byte scanning).
///
/// Reads only the first 8KB to avoid unnecessary allocation for large files.
pub fn is_binary_file(path: &Path) -> bool {
    let Ok(file) = std::fs::File::open(path) else {
        return false;
    };

    let mut buf = [0u8; 8192];
    let Ok(n) = file.take(8192).read(&mut buf) else {
        return false;
    };

    !content_inspector::inspect(&buf[..n]).is_text()
}
