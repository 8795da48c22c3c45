use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum JigError {
    #[error("Template file not found: {path}")]
    #[diagnostic(help("Environment variables and ~ are expanded before lookup; check the resolved path"))]
    TemplateNotFound { path: PathBuf },

    #[error("Template file has no extension to strip: {path}")]
    #[diagnostic(help("Name templates with an extra suffix, e.g. report.txt.tmpl renders to report.txt"))]
    NoOutputExtension { path: PathBuf },

    #[error("Template syntax error under {dir}")]
    #[diagnostic(help("Every text file in the template's directory is loaded; fix or remove the file that fails to parse"))]
    TemplateSyntax {
        dir: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("Undefined variable `{variable}` in {file}")]
    #[diagnostic(help("Define it with -d {variable}=... or in the vars file"))]
    UndefinedVariable {
        variable: String,
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("Rendering failed for {file}")]
    #[diagnostic(help("Check the template's filters, includes, and helper calls"))]
    RenderFailed {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("Invalid variable assignment '{entry}': {reason}")]
    #[diagnostic(help("Use KEY=VALUE, e.g. -d name=World or -d count=3"))]
    InvalidAssignment { entry: String, reason: String },

    #[error("Failed to parse vars file {path}")]
    #[diagnostic(help("Check the TOML syntax in your vars file"))]
    VarsFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, JigError>;
