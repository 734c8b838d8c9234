use std::path::PathBuf;

use anyhow::{Context, Result};

use tensure_scaffold_core::build_file::{AppendMode, AppendOutcome};
use tensure_scaffold_core::config::ScaffoldConfig;
use tensure_scaffold_core::generator::{self, GenerateOptions, Progress, Step};
use tensure_scaffold_core::module_name::ModuleName;

use crate::output;

/// Command-line inputs for a scaffolding run.
pub struct Args {
    pub module_name: String,
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub build_file: Option<PathBuf>,
    pub include_dir: Option<PathBuf>,
    pub src_dir: Option<PathBuf>,
    pub skip_existing: bool,
}

/// Scaffold a backend module.
///
/// Validates the name, resolves the project layout (defaults, then config
/// file, then flags), runs the generator and prints what was created.
pub fn run(args: &Args) -> Result<()> {
    let name = ModuleName::parse(&args.module_name)?;
    let config = resolve_config(args)?;

    output::print_header(&format!("tensure-scaffold: {}", name.lower()));
    output::print_key_value("Module", &name.backend_type());
    output::print_key_value("Build file", &config.build_file.display().to_string());

    let options = GenerateOptions {
        append_mode: if args.skip_existing {
            AppendMode::SkipIfPresent
        } else {
            AppendMode::Always
        },
    };

    let total = Step::ALL.len();
    let report = generator::generate_with_progress(&config, &name, &options, |event| match event {
        Progress::StepStarted(step) => {
            let index = Step::ALL.iter().position(|s| *s == step).unwrap_or(0);
            output::print_step(index + 1, total, step.description());
        }
        Progress::BuildFileUpdated { path, outcome } => {
            let shown = config.relative_to_root(path).display();
            match outcome {
                AppendOutcome::Appended => println!("Updated {shown}"),
                AppendOutcome::AlreadyPresent => output::print_warning(&format!(
                    "{shown} already contains a block for {}, left unchanged",
                    name.capitalized()
                )),
            }
        }
    })
    .with_context(|| format!("failed to scaffold module '{name}'"))?;

    println!("Done. Created:");
    let relative = |paths: &[PathBuf]| -> Vec<PathBuf> {
        paths
            .iter()
            .map(|p| config.relative_to_root(p).to_path_buf())
            .collect()
    };
    output::print_path_list("include files", &relative(&report.include_files));
    output::print_path_list("src files", &relative(&report.src_files));
    output::print_success(&format!(
        "Backend {} scaffolded; fill in {}/{{comparator,executor,generator}}",
        name.backend_type(),
        name.wrapper_dir()
    ));

    Ok(())
}

fn resolve_config(args: &Args) -> Result<ScaffoldConfig> {
    let mut config = match &args.config {
        Some(path) => ScaffoldConfig::load(path, &args.root)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ScaffoldConfig::discover(&args.root)?,
    };

    if let Some(build_file) = &args.build_file {
        config.build_file = build_file.clone();
    }
    if let Some(include_dir) = &args.include_dir {
        config.include_dir = include_dir.clone();
    }
    if let Some(src_dir) = &args.src_dir {
        config.src_dir = src_dir.clone();
    }

    tracing::debug!("resolved config: {config:?}");
    Ok(config)
}
