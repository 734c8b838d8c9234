//! tensure-scaffold CLI - boilerplate generator for tensure fuzz backends.
//!
//! `tensure-scaffold <module>` appends a CMake block for the module and creates
//! the `<module>_wrapper` header and source directories with a stub
//! `<Module>Backend` plugin. All work is delegated to [`tensure_scaffold_core`].

mod commands;
mod output;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(
    name = "tensure-scaffold",
    about = "Scaffold a new tensure fuzz backend module (C++ stubs + CMake entry)",
    version
)]
struct Cli {
    /// Module name, e.g. `finch` (lowercased for paths, capitalized for the type name)
    module_name: String,

    /// Everything after the module name is accepted and ignored, including
    /// arguments that look like flags
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    extra: Vec<String>,

    /// Project root that the include/src dirs and build file are resolved against
    #[arg(long, env = "TENSURE_SCAFFOLD_ROOT", default_value = ".")]
    root: PathBuf,

    /// Path to a JSON config file (default: <root>/tensure-scaffold.config.json, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Build configuration file, relative to the root
    #[arg(long)]
    build_file: Option<PathBuf>,

    /// Header root, relative to the root
    #[arg(long)]
    include_dir: Option<PathBuf>,

    /// Source root, relative to the root
    #[arg(long)]
    src_dir: Option<PathBuf>,

    /// Do not append to the build file if it already has a block for this module
    #[arg(long)]
    skip_existing: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            output::print_error(err.kind().as_str().unwrap_or("invalid arguments"));
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = commands::generate::Args {
        module_name: cli.module_name,
        root: cli.root,
        config: cli.config,
        build_file: cli.build_file,
        include_dir: cli.include_dir,
        src_dir: cli.src_dir,
        skip_existing: cli.skip_existing,
    };
    if !cli.extra.is_empty() {
        tracing::debug!("ignoring extra arguments: {:?}", cli.extra);
    }

    if let Err(err) = commands::generate::run(&args) {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
