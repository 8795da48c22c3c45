pub mod error;
pub mod path;
pub mod render;
pub mod vars;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::style;
use tera::{Context, Value};

use crate::error::{JigError, Result};
use crate::render::{build_context, load_environment, render_template};

pub struct RenderOptions {
    pub templates: Vec<String>,
    pub data: Vec<String>,
    pub vars_file: Option<PathBuf>,
    pub dry_run: bool,
}

/// A render that has been produced in memory but not yet written.
pub struct PlannedRender {
    pub output_path: PathBuf,
    pub content: String,
}

/// Build the variable mapping for one invocation: vars file first, then
/// `KEY=VALUE` assignments, which win on conflict.
pub fn build_variables(
    data: &[String],
    vars_file: Option<&Path>,
) -> Result<BTreeMap<String, Value>> {
    let mut variables = match vars_file {
        Some(path) => vars::load_vars_file(path)?,
        None => BTreeMap::new(),
    };
    variables.extend(vars::parse_assignments(data)?);
    Ok(variables)
}

/// Render a single template file in memory, without writing.
///
/// The path may contain `$VAR` and `~` shorthand. The template's parent
/// directory becomes the environment's search root, so `{% extends %}` and
/// `{% include %}` resolve against siblings. The output path is the resolved
/// path minus its final extension.
pub fn plan_render(template: &str, context: &Context) -> Result<PlannedRender> {
    let template_path = path::resolve(template)?;
    if !template_path.is_file() {
        return Err(JigError::TemplateNotFound {
            path: template_path,
        });
    }
    let output_path = path::output_path(&template_path)?;

    let dir = template_path
        .parent()
        .expect("absolute file path has a parent");
    let name = template_path
        .file_name()
        .expect("absolute file path has a file name")
        .to_string_lossy();

    let tera = load_environment(dir)?;
    let content = render_template(&tera, &name, context)?;

    Ok(PlannedRender {
        output_path,
        content,
    })
}

/// Write a planned render to disk, truncating any existing file.
pub fn write_render(planned: &PlannedRender) -> Result<()> {
    std::fs::write(&planned.output_path, &planned.content).map_err(|e| JigError::Io {
        context: format!("writing {}", planned.output_path.display()),
        source: e,
    })
}

/// Render one template and persist the output. Returns the output path.
pub fn render_file(template: &str, context: &Context) -> Result<PathBuf> {
    let planned = plan_render(template, context)?;
    write_render(&planned)?;
    Ok(planned.output_path)
}

/// Render every template in argument order, halting at the first failure.
///
/// Outputs written before the failure stay in place.
pub fn run(options: RenderOptions) -> Result<()> {
    let variables = build_variables(&options.data, options.vars_file.as_deref())?;
    let context = build_context(&variables);

    for template in &options.templates {
        if options.dry_run {
            let planned = plan_render(template, &context)?;
            println!(
                "{} would write {}",
                style("==>").cyan().bold(),
                style(planned.output_path.display()).cyan()
            );
        } else {
            let output_path = render_file(template, &context)?;
            println!(
                "{} wrote {}",
                style("\u{2713}").green().bold(),
                style(output_path.display()).cyan()
            );
        }
    }

    Ok(())
}
