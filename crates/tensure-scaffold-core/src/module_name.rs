//! Backend module names and their derived spellings.
//!
//! A single name supplied on the command line is used in four different
//! casings across the generated tree:
//!
//! | Form | `finch` | `MyModule` | Used for |
//! |------|---------|------------|----------|
//! | [`ModuleName::lower`] | `finch` | `mymodule` | directories, file stems, CMake targets |
//! | [`ModuleName::capitalized`] | `Finch` | `Mymodule` | C++ type names, messages |
//! | [`ModuleName::upper`] | `FINCH` | `MYMODULE` | CMake option and variables |
//! | [`ModuleName::backend_type`] | `FinchBackend` | `MymoduleBackend` | generated struct |
//!
//! Capitalization only touches the first character; the rest is lowercased,
//! so `MyModule` becomes `Mymodule`, not `MyModule`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScaffoldError};

/// A validated backend module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    raw: String,
}

impl ModuleName {
    /// Validate `raw` and wrap it.
    ///
    /// The name ends up both as a path segment and as a C++/CMake identifier,
    /// so only ASCII letters, digits, and `_` are accepted, and the first
    /// character must not be a digit. No trimming is applied.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| ScaffoldError::InvalidModuleName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let first = raw.chars().next().ok_or_else(|| invalid("name is empty"))?;
        if first.is_ascii_digit() {
            return Err(invalid("name must not start with a digit"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(&format!(
                "unexpected character {bad:?} (allowed: ASCII letters, digits, '_')"
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// The name exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> String {
        self.raw.to_ascii_lowercase()
    }

    pub fn upper(&self) -> String {
        self.raw.to_ascii_uppercase()
    }

    /// First character uppercased, the rest lowercased.
    pub fn capitalized(&self) -> String {
        let lower = self.lower();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Directory holding the module's files under both roots: `<lower>_wrapper`.
    pub fn wrapper_dir(&self) -> String {
        format!("{}_wrapper", self.lower())
    }

    /// File stem of the plugin entry point: `<lower>_backend`.
    pub fn backend_stem(&self) -> String {
        format!("{}_backend", self.lower())
    }

    /// Name of the generated C++ struct: `<Capitalized>Backend`.
    pub fn backend_type(&self) -> String {
        format!("{}Backend", self.capitalized())
    }
}

impl FromStr for ModuleName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_forms() {
        let name = ModuleName::parse("finch").unwrap();
        assert_eq!(name.lower(), "finch");
        assert_eq!(name.upper(), "FINCH");
        assert_eq!(name.capitalized(), "Finch");
        assert_eq!(name.wrapper_dir(), "finch_wrapper");
        assert_eq!(name.backend_stem(), "finch_backend");
        assert_eq!(name.backend_type(), "FinchBackend");
    }

    #[test]
    fn test_mixed_case_only_first_char_capitalized() {
        let name = ModuleName::parse("MyModule").unwrap();
        assert_eq!(name.as_str(), "MyModule");
        assert_eq!(name.lower(), "mymodule");
        assert_eq!(name.capitalized(), "Mymodule");
        assert_eq!(name.backend_type(), "MymoduleBackend");
        assert_eq!(name.upper(), "MYMODULE");
    }

    #[test]
    fn test_underscores_and_digits_allowed() {
        let name = ModuleName::parse("taco_v2").unwrap();
        assert_eq!(name.wrapper_dir(), "taco_v2_wrapper");
        assert_eq!(name.capitalized(), "Taco_v2");

        assert!(ModuleName::parse("_private").is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let err = ModuleName::parse("").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidModuleName { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_leading_digit_rejected() {
        let err = ModuleName::parse("9lives").unwrap_err();
        assert!(err.to_string().contains("digit"));
    }

    #[test]
    fn test_path_and_punctuation_rejected() {
        for raw in ["bad-name", "a/b", "..", "with space", " finch", "finch\n", "né"] {
            assert!(ModuleName::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let name: ModuleName = "Sparsifier".parse().unwrap();
        assert_eq!(name.to_string(), "Sparsifier");
    }
}
