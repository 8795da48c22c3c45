mod cli;

use clap::Parser;
use cli::Cli;
use jig::RenderOptions;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    jig::run(RenderOptions {
        templates: cli.templates,
        data: cli.data,
        vars_file: cli.vars_file,
        dry_run: cli.dry_run,
    })?;

    Ok(())
}
