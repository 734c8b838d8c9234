//! Project layout configuration.
//!
//! Every scaffolding operation takes a [`ScaffoldConfig`] instead of assuming
//! the current directory, so the same code runs against a real checkout or a
//! temporary directory in tests.
//!
//! ## Config file
//!
//! An optional `tensure-scaffold.config.json` in the project root can override
//! the defaults. Missing fields keep their default value:
//!
//! ```json
//! {
//!   "include_dir": "include",
//!   "src_dir": "src",
//!   "build_file": "CMakeLists.txt"
//! }
//! ```
//!
//! `include_dir`, `src_dir` and `build_file` are relative to the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Default name of the optional config file.
pub const CONFIG_FILE: &str = "tensure-scaffold.config.json";

/// Paths the scaffolder reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory everything else is resolved against.
    #[serde(skip)]
    pub project_root: PathBuf,
    /// Header root, relative to the project root.
    pub include_dir: PathBuf,
    /// Source root, relative to the project root.
    pub src_dir: PathBuf,
    /// Build configuration file, relative to the project root.
    pub build_file: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            include_dir: PathBuf::from("include"),
            src_dir: PathBuf::from("src"),
            build_file: PathBuf::from("CMakeLists.txt"),
        }
    }
}

impl ScaffoldConfig {
    /// Default layout rooted at `project_root`.
    pub fn rooted_at(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    /// Load overrides from a JSON file. The project root is not part of the
    /// file and is set to `project_root`.
    pub fn load(path: &Path, project_root: impl Into<PathBuf>) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self =
            serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        config.project_root = project_root.into();
        Ok(config)
    }

    /// Load `<project_root>/tensure-scaffold.config.json` if it exists,
    /// otherwise fall back to the defaults.
    pub fn discover(project_root: impl Into<PathBuf>) -> Result<Self> {
        let project_root = project_root.into();
        let path = project_root.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path, project_root)
        } else {
            Ok(Self::rooted_at(project_root))
        }
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn include_root(&self) -> PathBuf {
        self.project_root.join(&self.include_dir)
    }

    pub fn src_root(&self) -> PathBuf {
        self.project_root.join(&self.src_dir)
    }

    pub fn build_file_path(&self) -> PathBuf {
        self.project_root.join(&self.build_file)
    }

    /// `path` with the project root stripped, for display. Paths outside the
    /// root come back unchanged.
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

/// Render a relative directory for use inside CMake, always with `/`.
pub(crate) fn cmake_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.include_dir, PathBuf::from("include"));
        assert_eq!(config.src_dir, PathBuf::from("src"));
        assert_eq!(config.build_file, PathBuf::from("CMakeLists.txt"));
    }

    #[test]
    fn test_rooted_paths() {
        let config = ScaffoldConfig::rooted_at("/work/tensure");
        assert_eq!(config.include_root(), PathBuf::from("/work/tensure/include"));
        assert_eq!(config.src_root(), PathBuf::from("/work/tensure/src"));
        assert_eq!(
            config.build_file_path(),
            PathBuf::from("/work/tensure/CMakeLists.txt")
        );
    }

    #[test]
    fn test_relative_to_root() {
        let config = ScaffoldConfig::default();
        let path = config.include_root().join("finch_wrapper/comparator.hpp");
        assert_eq!(
            config.relative_to_root(&path),
            Path::new("include/finch_wrapper/comparator.hpp")
        );
        assert_eq!(
            config.relative_to_root(&config.build_file_path()),
            Path::new("CMakeLists.txt")
        );

        let rooted = ScaffoldConfig::rooted_at("/work/tensure");
        assert_eq!(
            rooted.relative_to_root(Path::new("/elsewhere/file.cpp")),
            Path::new("/elsewhere/file.cpp")
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "src_dir": "lib" }"#).unwrap();

        let config = ScaffoldConfig::load(&path, dir.path()).unwrap();
        assert_eq!(config.src_dir, PathBuf::from("lib"));
        assert_eq!(config.include_dir, PathBuf::from("include"));
        assert_eq!(config.project_root, dir.path());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = ScaffoldConfig {
            project_root: dir.path().to_path_buf(),
            include_dir: PathBuf::from("headers"),
            src_dir: PathBuf::from("source"),
            build_file: PathBuf::from("cmake/Backends.cmake"),
        };
        config.save(&path).unwrap();
        assert_eq!(ScaffoldConfig::load(&path, dir.path()).unwrap(), config);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::discover(dir.path()).unwrap();
        assert_eq!(config, ScaffoldConfig::rooted_at(dir.path()));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let err = ScaffoldConfig::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ScaffoldConfig::load(Path::new("/tmp/nonexistent_tensure_scaffold.json"), ".");
        assert!(matches!(result, Err(ScaffoldError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_cmake_path_uses_forward_slashes() {
        assert_eq!(cmake_path(Path::new("src")), "src");
        assert_eq!(cmake_path(&Path::new("third_party").join("src")), "third_party/src");
    }
}
