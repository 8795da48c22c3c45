use std::env;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex_lite::{Captures, Regex};

use crate::error::{JigError, Result};

fn env_var_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
            .expect("env var pattern is valid")
    })
}

/// Expand `$VAR` and `${VAR}` references from the process environment.
///
/// Unknown variables are left verbatim.
pub fn expand_env(input: &str) -> String {
    env_var_pattern()
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");
            env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_user(input: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if input == "~" {
            return home;
        }
        if let Some(rest) = input.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Make `path` absolute against the current directory and collapse `.` and
/// `..` segments lexically, without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| JigError::Io {
            context: "getting current directory".into(),
            source: e,
        })?;
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                // `/..` collapses to `/`
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Resolve a user-supplied template path: environment references, `~`
/// shorthand, then lexical absolutization.
pub fn resolve(input: &str) -> Result<PathBuf> {
    let expanded = expand_env(input);
    absolutize(&expand_user(&expanded))
}

/// Derive the output path by stripping the final extension.
pub fn output_path(template: &Path) -> Result<PathBuf> {
    if template.extension().is_none() {
        return Err(JigError::NoOutputExtension {
            path: template.to_path_buf(),
        });
    }
    Ok(template.with_extension(""))
}
