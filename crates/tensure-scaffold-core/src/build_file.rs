//! Appending module blocks to the build configuration file.
//!
//! The build file is treated as opaque text: it is opened in append mode and
//! never parsed. With [`AppendMode::Always`] a second run for the same module
//! appends a second, identical block. That duplication is expected; CMake
//! itself will then complain about the repeated `add_library` target.

use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// What to do when the build file already has a block for the module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppendMode {
    /// Append unconditionally, even if an identical block is present.
    #[default]
    Always,
    /// Scan for the module's marker line and skip the append if found.
    SkipIfPresent,
}

/// Result of [`append_module_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
}

/// Fail with [`ScaffoldError::BuildFileNotFound`] unless `path` is an existing file.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ScaffoldError::BuildFileNotFound(path.to_path_buf()))
    }
}

/// Whether any line of the build file equals `marker`.
///
/// Bytes that are not valid UTF-8 are replaced before scanning, so a build
/// file with stray Latin-1 comments still gets checked.
pub fn contains_marker(path: &Path, marker: &str) -> Result<bool> {
    let bytes = std::fs::read(path)?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(contents.lines().any(|line| line.trim_end() == marker))
}

/// Append `block` to the build file at `path`.
///
/// `marker` identifies the block for [`AppendMode::SkipIfPresent`]; it is
/// ignored in [`AppendMode::Always`].
pub fn append_module_block(
    path: &Path,
    block: &str,
    marker: &str,
    mode: AppendMode,
) -> Result<AppendOutcome> {
    ensure_exists(path)?;

    if mode == AppendMode::SkipIfPresent && contains_marker(path, marker)? {
        tracing::info!("{} already has '{marker}', skipping", path.display());
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let append_failed = |e| ScaffoldError::AppendFailed {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(append_failed)?;
    file.write_all(block.as_bytes()).map_err(append_failed)?;

    tracing::info!("appended {} bytes to {}", block.len(), path.display());
    Ok(AppendOutcome::Appended)
}
