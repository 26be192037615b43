use thiserror::Error;

use super::registry::ModuleRegistry;
use crate::package::ModuleManifest;

/// Module providing the storage layer other modules' scripts rely on.
pub const BOOTSTRAP_MODULE: &str = "database";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to load bootstrap module '{name}': {reason}")]
    Bootstrap { name: String, reason: String },

    #[error("failed to load module '{name}': {reason}")]
    Module { name: String, reason: String },

    #[error("failed to load '{name}' required by '{module}': {reason}")]
    Requirement {
        module: String,
        name: String,
        reason: String,
    },
}

/// Activates a module in a fixed order: bootstrap, the module, then its
/// requirements in declared order.
#[derive(Debug, Clone)]
pub struct ModuleLoader {
    bootstrap: String,
}

impl Default for ModuleLoader {
    fn default() -> Self {
        Self::new(BOOTSTRAP_MODULE)
    }
}

impl ModuleLoader {
    pub fn new(bootstrap: impl Into<String>) -> Self {
        Self {
            bootstrap: bootstrap.into(),
        }
    }

    pub fn bootstrap(&self) -> &str {
        &self.bootstrap
    }

    /// Returns every name passed to the registry, in order.
    /// Stops at the first module that cannot be activated.
    #[tracing::instrument(skip(self, registry, manifest), fields(module = %manifest.name))]
    pub fn load(
        &self,
        registry: &mut dyn ModuleRegistry,
        manifest: &ModuleManifest,
    ) -> Result<Vec<String>, LoadError> {
        let mut loaded = Vec::new();

        println!("   loading '{}'", self.bootstrap);
        registry
            .activate(&self.bootstrap)
            .map_err(|e| LoadError::Bootstrap {
                name: self.bootstrap.clone(),
                reason: format!("{:#}", e),
            })?;
        loaded.push(self.bootstrap.clone());

        println!("   loading '{}'", manifest.name);
        registry
            .activate(&manifest.name)
            .map_err(|e| LoadError::Module {
                name: manifest.name.clone(),
                reason: format!("{:#}", e),
            })?;
        loaded.push(manifest.name.clone());

        for name in manifest.require.names() {
            println!("   loading '{}'", name);
            registry
                .activate(name)
                .map_err(|e| LoadError::Requirement {
                    module: manifest.name.clone(),
                    name: name.to_string(),
                    reason: format!("{:#}", e),
                })?;
            loaded.push(name.to_string());
        }

        Ok(loaded)
    }
}
