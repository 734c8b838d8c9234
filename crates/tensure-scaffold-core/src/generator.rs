//! End-to-end scaffolding of one backend module.
//!
//! Steps run in a fixed order and there is no rollback: if writing the
//! source files fails, the include files already created stay on disk.
//!
//! 1. Append the module block to the build file (after checking it exists)
//! 2. Create the include directory and its four headers
//! 3. Create the src directory and its four sources
//! 4. Render `<m>_backend.hpp`
//! 5. Render `<m>_backend.cpp`

use std::path::{Path, PathBuf};

use crate::build_file::{self, AppendMode, AppendOutcome};
use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::module_name::ModuleName;
use crate::scaffold;
use crate::templates::{self, renderer::TemplateRenderer};

/// Per-run knobs that are not part of the project layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub append_mode: AppendMode,
}

/// What a run touched.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub module: ModuleName,
    pub build_file: PathBuf,
    pub build_file_outcome: AppendOutcome,
    pub include_files: Vec<PathBuf>,
    pub src_files: Vec<PathBuf>,
}

/// A single pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AppendBuildFile,
    ScaffoldIncludeFiles,
    ScaffoldSrcFiles,
    WriteBackendHeader,
    WriteBackendSource,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::AppendBuildFile,
        Step::ScaffoldIncludeFiles,
        Step::ScaffoldSrcFiles,
        Step::WriteBackendHeader,
        Step::WriteBackendSource,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Step::AppendBuildFile => "Updating build file",
            Step::ScaffoldIncludeFiles => "Creating include files",
            Step::ScaffoldSrcFiles => "Creating src files",
            Step::WriteBackendHeader => "Rendering backend header",
            Step::WriteBackendSource => "Rendering backend source",
        }
    }
}

/// Progress notification from [`generate_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A step is about to run.
    StepStarted(Step),
    /// The build-file step finished. Sent before any file is created, so the
    /// caller can report the append even if a later step fails.
    BuildFileUpdated {
        path: &'a Path,
        outcome: AppendOutcome,
    },
}

/// Scaffold `name` into the project described by `config`.
pub fn generate(
    config: &ScaffoldConfig,
    name: &ModuleName,
    options: &GenerateOptions,
) -> Result<ScaffoldReport> {
    generate_with_progress(config, name, options, |_| {})
}

/// Like [`generate`], reporting each step and the build-file outcome to `on_progress`.
pub fn generate_with_progress(
    config: &ScaffoldConfig,
    name: &ModuleName,
    options: &GenerateOptions,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<ScaffoldReport> {
    let renderer = TemplateRenderer::new();
    let build_file = config.build_file_path();

    // Nothing may be written if the build file is missing.
    build_file::ensure_exists(&build_file)?;

    on_progress(Progress::StepStarted(Step::AppendBuildFile));
    tracing::info!("module {name}: updating {}", build_file.display());
    let block = templates::render_cmake_block(&renderer, name, config)?;
    let marker = templates::cmake_block_marker(name);
    let build_file_outcome =
        build_file::append_module_block(&build_file, &block, &marker, options.append_mode)?;
    on_progress(Progress::BuildFileUpdated {
        path: &build_file,
        outcome: build_file_outcome,
    });

    let stems = scaffold::support_stems(name);
    let module_dir = name.wrapper_dir();

    on_progress(Progress::StepStarted(Step::ScaffoldIncludeFiles));
    tracing::info!("module {name}: creating include files");
    let include_files = scaffold::create_files(
        &config.include_root(),
        &module_dir,
        &stems,
        scaffold::HEADER_EXT,
    )?;

    on_progress(Progress::StepStarted(Step::ScaffoldSrcFiles));
    tracing::info!("module {name}: creating src files");
    let src_files = scaffold::create_files(
        &config.src_root(),
        &module_dir,
        &stems,
        scaffold::SOURCE_EXT,
    )?;

    on_progress(Progress::StepStarted(Step::WriteBackendHeader));
    scaffold::write_backend_header(config, name, &renderer)?;

    on_progress(Progress::StepStarted(Step::WriteBackendSource));
    scaffold::write_backend_source(config, name, &renderer)?;

    Ok(ScaffoldReport {
        module: name.clone(),
        build_file,
        build_file_outcome,
        include_files,
        src_files,
    })
}
