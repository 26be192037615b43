use anyhow::{Result, bail};
use log::debug;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::runtime::{Runtime, child_dir};

/// Append-only set of active modules. Activating an active module is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleRegistry {
    /// Returns `Ok(true)` when the module was newly activated.
    fn activate(&mut self, name: &str) -> Result<bool>;

    /// Active modules in activation order.
    fn active(&self) -> &[String];
}

/// Registry that activates builtin modules and modules present in one of
/// its search directories (packages first, then vendor).
pub struct DirectoryRegistry<'a, R: Runtime> {
    runtime: &'a R,
    search_dirs: Vec<PathBuf>,
    builtins: HashSet<String>,
    active: Vec<String>,
    index: HashSet<String>,
}

impl<'a, R: Runtime> DirectoryRegistry<'a, R> {
    pub fn new(runtime: &'a R, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            runtime,
            search_dirs,
            builtins: HashSet::new(),
            active: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Register a module that is always available without a directory.
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.builtins.insert(name.into());
        self
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .filter_map(|root| child_dir(root, name))
            .find(|dir| self.runtime.is_dir(dir))
    }
}

impl<R: Runtime> ModuleRegistry for DirectoryRegistry<'_, R> {
    #[tracing::instrument(skip(self))]
    fn activate(&mut self, name: &str) -> Result<bool> {
        if self.index.contains(name) {
            return Ok(false);
        }
        if !self.builtins.contains(name) {
            match self.find(name) {
                Some(dir) => debug!("Activating {} from {}", name, dir.display()),
                None => bail!(
                    "module '{}' not found in {}",
                    name,
                    self.search_dirs
                        .iter()
                        .map(|d| d.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }
        }
        self.index.insert(name.to_string());
        self.active.push(name.to_string());
        Ok(true)
    }

    fn active(&self) -> &[String] {
        &self.active
    }
}
