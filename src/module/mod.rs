//! Module activation.
//!
//! A [`ModuleRegistry`] records which modules are active in this process.
//! [`ModuleLoader`] activates a module together with everything it needs,
//! always starting with the bootstrap (persistence) module.

mod loader;
mod registry;

pub use loader::{BOOTSTRAP_MODULE, LoadError, ModuleLoader};
pub use registry::{DirectoryRegistry, ModuleRegistry};

#[cfg(test)]
pub use registry::MockModuleRegistry;
