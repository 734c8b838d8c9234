//! Module directory and file creation.
//!
//! Every module gets the same four files under both roots:
//!
//! ```text
//! <include>/<m>_wrapper/                 <src>/<m>_wrapper/
//! ├── comparator.hpp   (empty)           ├── comparator.cpp   (empty)
//! ├── executor.hpp     (empty)           ├── executor.cpp     (empty)
//! ├── generator.hpp    (empty)           ├── generator.cpp    (empty)
//! └── <m>_backend.hpp  (rendered)        └── <m>_backend.cpp  (rendered)
//! ```
//!
//! Existing files are truncated without asking.

use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::module_name::ModuleName;
use crate::templates::{self, renderer::TemplateRenderer};

/// Stems shared by every module, before the module's own `<m>_backend`.
pub const FIXED_STEMS: [&str; 3] = ["comparator", "executor", "generator"];

pub const HEADER_EXT: &str = "hpp";
pub const SOURCE_EXT: &str = "cpp";

/// The ordered support file set for `name`.
pub fn support_stems(name: &ModuleName) -> Vec<String> {
    FIXED_STEMS
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(name.backend_stem()))
        .collect()
}

/// Create `base/module_dir` and one empty `<stem>.<extension>` per stem inside it.
///
/// Returns the created paths in stem order.
pub fn create_files(
    base: &Path,
    module_dir: &str,
    stems: &[String],
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let module_path = base.join(module_dir);
    std::fs::create_dir_all(&module_path).map_err(|e| ScaffoldError::CreateDir {
        path: module_path.clone(),
        source: e,
    })?;

    let mut created = Vec::with_capacity(stems.len());
    for stem in stems {
        let path = module_path.join(format!("{stem}.{extension}"));
        write_file(&path, "")?;
        created.push(path);
    }
    Ok(created)
}

/// Render and write `<include>/<m>_wrapper/<m>_backend.hpp`.
pub fn write_backend_header(
    config: &ScaffoldConfig,
    name: &ModuleName,
    renderer: &TemplateRenderer,
) -> Result<PathBuf> {
    let path = backend_file(&config.include_root(), name, HEADER_EXT);
    let content = templates::render_header(renderer, name, config)?;
    write_file(&path, &content)?;
    Ok(path)
}

/// Render and write `<src>/<m>_wrapper/<m>_backend.cpp`.
pub fn write_backend_source(
    config: &ScaffoldConfig,
    name: &ModuleName,
    renderer: &TemplateRenderer,
) -> Result<PathBuf> {
    let path = backend_file(&config.src_root(), name, SOURCE_EXT);
    let content = templates::render_source(renderer, name, config)?;
    write_file(&path, &content)?;
    Ok(path)
}

fn backend_file(root: &Path, name: &ModuleName, extension: &str) -> PathBuf {
    root.join(name.wrapper_dir())
        .join(format!("{}.{extension}", name.backend_stem()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    tracing::debug!("writing {} ({} bytes)", path.display(), content.len());
    std::fs::write(path, content).map_err(|e| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_stems_order() {
        let name = ModuleName::parse("Finch").unwrap();
        assert_eq!(
            support_stems(&name),
            vec!["comparator", "executor", "generator", "finch_backend"]
        );
    }

    #[test]
    fn test_create_files_makes_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("include");
        let stems = vec!["comparator".to_string(), "executor".to_string()];

        let created = create_files(&base, "finch_wrapper", &stems, "hpp").unwrap();

        assert_eq!(
            created,
            vec![
                base.join("finch_wrapper/comparator.hpp"),
                base.join("finch_wrapper/executor.hpp"),
            ]
        );
        for path in &created {
            assert_eq!(std::fs::metadata(path).unwrap().len(), 0);
        }
    }

    #[test]
    fn test_create_files_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let module = dir.path().join("src/finch_wrapper");
        std::fs::create_dir_all(&module).unwrap();
        std::fs::write(module.join("executor.cpp"), "hand-written code").unwrap();

        let stems = vec!["executor".to_string()];
        create_files(&dir.path().join("src"), "finch_wrapper", &stems, "cpp").unwrap();

        assert_eq!(std::fs::read_to_string(module.join("executor.cpp")).unwrap(), "");
    }

    #[test]
    fn test_create_files_fails_when_base_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("include");
        std::fs::write(&base, "not a directory").unwrap();

        let err = create_files(&base, "finch_wrapper", &["x".to_string()], "hpp").unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateDir { .. }));
    }

    #[test]
    fn test_backend_files_written_under_roots() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::rooted_at(dir.path());
        let name = ModuleName::parse("finch").unwrap();
        let renderer = TemplateRenderer::new();
        let stems = support_stems(&name);
        create_files(&config.include_root(), &name.wrapper_dir(), &stems, HEADER_EXT).unwrap();
        create_files(&config.src_root(), &name.wrapper_dir(), &stems, SOURCE_EXT).unwrap();

        let header = write_backend_header(&config, &name, &renderer).unwrap();
        let source = write_backend_source(&config, &name, &renderer).unwrap();

        assert_eq!(header, dir.path().join("include/finch_wrapper/finch_backend.hpp"));
        assert_eq!(source, dir.path().join("src/finch_wrapper/finch_backend.cpp"));
        assert!(std::fs::read_to_string(header).unwrap().contains("struct FinchBackend"));
        assert!(std::fs::read_to_string(source)
            .unwrap()
            .contains("FinchBackend::execute_kernel"));
    }
}
