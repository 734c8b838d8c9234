//! Template system for backend module scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Built by [`module_data`] for a module name and a [`ScaffoldConfig`]:
//! - `{{module_name}}`: lowercased module name (e.g., `finch`)
//! - `{{display_name}}`: capitalized module name (e.g., `Finch`)
//! - `{{module_upper}}`: uppercased module name (e.g., `FINCH`)
//! - `{{backend_type}}`: generated C++ struct (e.g., `FinchBackend`)
//! - `{{src_var}}`: CMake reference to the module's source list (e.g., `${FINCH_SRC}`)
//! - `{{include_dir}}` / `{{src_dir}}`: configured roots, `/`-separated
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to `embedded.rs` and checked at compile-time.

pub mod embedded;
pub mod renderer;

use serde_json::{json, Value};

use crate::config::{cmake_path, ScaffoldConfig};
use crate::error::Result;
use crate::module_name::ModuleName;
use renderer::TemplateRenderer;

/// Handlebars context shared by every module template.
pub fn module_data(name: &ModuleName, config: &ScaffoldConfig) -> Value {
    json!({
        "module_name": name.lower(),
        "display_name": name.capitalized(),
        "module_upper": name.upper(),
        "backend_type": name.backend_type(),
        "src_var": format!("${{{}_SRC}}", name.upper()),
        "include_dir": cmake_path(&config.include_dir),
        "src_dir": cmake_path(&config.src_dir),
    })
}

/// Render `<module>_backend.hpp`.
pub fn render_header(
    renderer: &TemplateRenderer,
    name: &ModuleName,
    config: &ScaffoldConfig,
) -> Result<String> {
    renderer.render(embedded::BACKEND_HEADER, &module_data(name, config))
}

/// Render `<module>_backend.cpp`.
pub fn render_source(
    renderer: &TemplateRenderer,
    name: &ModuleName,
    config: &ScaffoldConfig,
) -> Result<String> {
    renderer.render(embedded::BACKEND_SOURCE, &module_data(name, config))
}

/// Render the block appended to the build file.
pub fn render_cmake_block(
    renderer: &TemplateRenderer,
    name: &ModuleName,
    config: &ScaffoldConfig,
) -> Result<String> {
    renderer.render(embedded::CMAKE_MODULE_BLOCK, &module_data(name, config))
}

/// Marker line that opens the build-file block for `name`.
pub fn cmake_block_marker(name: &ModuleName) -> String {
    format!("# ==== Auto-generated for module {} ====", name.capitalized())
}
