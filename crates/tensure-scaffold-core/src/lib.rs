//! Core library for tensure-scaffold.
//!
//! Generates the boilerplate for a new tensure fuzz backend plugin: a
//! `<module>_wrapper` directory under the include and src roots, a rendered
//! `<Module>Backend` header/source pair implementing the `FuzzBackend`
//! interface, and a CMake block that builds the module as a shared library.
//!
//! The generated C++ is never compiled or loaded here; the crate only writes text.
//! Use [`generator::generate`] for the whole pipeline or the individual modules
//! for single steps.

pub mod build_file;
pub mod config;
pub mod error;
pub mod generator;
pub mod module_name;
pub mod scaffold;
pub mod templates;
