//! Compile-time embedded templates for backend scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/tensure-scaffold-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what [`super::module_data`] passes in.

// -------------------------------------------------------
// Plugin entry point (the only non-empty generated files)
// -------------------------------------------------------

pub const BACKEND_HEADER: &str = include_str!("../../../../templates/backend/backend.hpp.hbs");
pub const BACKEND_SOURCE: &str = include_str!("../../../../templates/backend/backend.cpp.hbs");

// -------------------------------------------------------
// Build system
// -------------------------------------------------------

pub const CMAKE_MODULE_BLOCK: &str = include_str!("../../../../templates/cmake/module_block.cmake.hbs");
