use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "jig",
    about = "Render template files in place, writing output beside the source",
    version
)]
pub struct Cli {
    /// Template files to render (output path is the same path minus its last
    /// extension, e.g. report.txt.tmpl renders to report.txt)
    pub templates: Vec<String>,

    /// Set variable values (can be repeated: -d key=value)
    #[arg(short, long = "data", value_name = "KEY=VALUE")]
    pub data: Vec<String>,

    /// Read variable values from a TOML file (overridden by --data)
    #[arg(short = 'f', long = "vars-file", value_name = "FILE")]
    pub vars_file: Option<PathBuf>,

    /// Show the output paths that would be written, without writing
    #[arg(long)]
    pub dry_run: bool,
}
