//! Finds modules that are already unpacked in the packages directory.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::manifest::Manifest;
use crate::runtime::{Runtime, child_dir};

/// Default name of the manifest file inside a module directory.
pub const MANIFEST_FILE: &str = "composer.json";

/// Default name of the install script inside a module directory.
pub const SCRIPT_FILE: &str = "scripts.sh";

/// File names that make up a module on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    pub manifest_file: String,
    pub script_file: String,
}

impl Default for ModuleLayout {
    fn default() -> Self {
        Self {
            manifest_file: MANIFEST_FILE.to_string(),
            script_file: SCRIPT_FILE.to_string(),
        }
    }
}

/// A module found in the packages directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedModule {
    /// The identifier exactly as requested.
    pub identifier: String,
    pub dir: PathBuf,
    pub manifest_path: PathBuf,
    pub script_path: PathBuf,
    /// `None` when the manifest exists but could not be parsed.
    pub manifest: Option<Manifest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Located(LocatedModule),
    NotLocated,
}

pub struct PackageLocator<'a, R: Runtime> {
    runtime: &'a R,
    packages_root: PathBuf,
    layout: ModuleLayout,
}

impl<'a, R: Runtime> PackageLocator<'a, R> {
    pub fn new(runtime: &'a R, packages_root: PathBuf, layout: ModuleLayout) -> Self {
        Self {
            runtime,
            packages_root,
            layout,
        }
    }

    /// Root every module directory is resolved against.
    pub fn packages_root(&self) -> &Path {
        &self.packages_root
    }

    /// Directory a module with this identifier would live in.
    pub fn module_dir(&self, identifier: &str) -> Option<PathBuf> {
        child_dir(&self.packages_root, identifier)
    }

    #[tracing::instrument(skip(self))]
    pub fn locate(&self, identifier: &str) -> Location {
        let Some(dir) = self.module_dir(identifier) else {
            debug!("'{}' cannot name a local module", identifier);
            return Location::NotLocated;
        };
        let manifest_path = dir.join(&self.layout.manifest_file);

        if !self.runtime.is_file(&manifest_path) {
            debug!("No manifest at {:?}", manifest_path);
            return Location::NotLocated;
        }

        let manifest = match Manifest::load(self.runtime, &manifest_path) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!("Failed to parse {}: {}", manifest_path.display(), e);
                None
            }
        };

        Location::Located(LocatedModule {
            identifier: identifier.to_string(),
            script_path: dir.join(&self.layout.script_file),
            dir,
            manifest_path,
            manifest,
        })
    }
}
