//! Package identification and manifests
//!
//! This module decides which requested identifiers are modules already
//! unpacked in the packages directory and which must be fetched, and turns
//! module manifests into the requirement set handed to the package manager.

mod locator;
mod manifest;
mod request;
mod requirements;

pub use locator::{LocatedModule, Location, MANIFEST_FILE, ModuleLayout, PackageLocator, SCRIPT_FILE};
pub use manifest::{Manifest, ManifestError, ModuleManifest, Requirements};
pub use request::{ANY_VERSION, PackageRequest};
pub use requirements::RequirementSet;
