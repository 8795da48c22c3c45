use std::path::Path;

use tera::Tera;
use walkdir::WalkDir;

use crate::error::{JigError, Result};
use crate::render::file::is_binary_file;
use crate::render::functions;

/// Build a templating environment rooted at `dir`.
///
/// Every text file under the directory is loaded under its directory-relative
/// name, so `{% extends %}` and `{% include %}` resolve against siblings.
/// Binary files are skipped, and autoescaping is off.
pub fn load_environment(dir: &Path) -> Result<Tera> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_binary_file(path) {
            continue;
        }
        let name = path
            .strip_prefix(dir)
            .expect("entry must be under dir")
            .to_string_lossy()
            .into_owned();
        files.push((path.to_path_buf(), Some(name)));
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    functions::register_all(&mut tera);
    tera.add_template_files(files)
        .map_err(|e| JigError::TemplateSyntax {
            dir: dir.to_path_buf(),
            source: e,
        })?;
    Ok(tera)
}
