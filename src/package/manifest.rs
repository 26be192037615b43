//! Module manifests.
//!
//! A manifest is a declarative JSON document stored next to a module:
//!
//! ```json
//! { "name": "blog", "require": { "pagekit/auth": "^1.0" } }
//! ```
//!
//! `require` may also be written as a list of `name[:constraint]` tokens.
//! Declared order is preserved because module requirements are loaded in
//! that order.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::request::PackageRequest;
use crate::runtime::Runtime;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest must be a JSON object")]
    NotAnObject,

    #[error("manifest does not declare a module name")]
    MissingName,
}

/// Declared requirements, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements(Vec<PackageRequest>);

impl Requirements {
    pub fn new(requests: Vec<PackageRequest>) -> Self {
        Self(requests)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageRequest> {
        self.0.iter()
    }

    /// Requirement names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.name.as_str())
    }

    /// Interpret a `require` value. Returns `None` when it is not well formed.
    fn from_value(value: Value) -> Option<Self> {
        let requests = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(name, constraint)| match constraint {
                    Value::String(c) if !name.trim().is_empty() => {
                        Some(PackageRequest::new(name.trim(), c))
                    }
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?,
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(token) => token.parse::<PackageRequest>().ok(),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?,
            _ => return None,
        };
        Some(Self(requests))
    }
}

/// A manifest as found on disk. The name may be missing; validation happens
/// when the module is about to be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    /// `None` when absent or malformed.
    pub require: Option<Requirements>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let Value::Object(mut fields) = serde_json::from_str::<Value>(content)? else {
            return Err(ManifestError::NotAnObject);
        };

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name.trim().to_string()),
            _ => None,
        };

        let require = fields.remove("require").and_then(|value| {
            let parsed = Requirements::from_value(value);
            if parsed.is_none() {
                log::warn!("Ignoring malformed 'require' in manifest {:?}", name);
            }
            parsed
        });

        Ok(Manifest { name, require })
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self, ManifestError> {
        let content = runtime
            .read_to_string(path)
            .map_err(|e| ManifestError::Unreadable {
                path: path.to_path_buf(),
                reason: format!("{:#}", e),
            })?;
        Self::parse(&content)
    }

    /// Requirements that take part in aggregation; empty when none are declared.
    pub fn requirements(&self) -> impl Iterator<Item = &PackageRequest> {
        self.require.iter().flat_map(|r| r.iter())
    }

    pub fn validate(self) -> Result<ModuleManifest, ManifestError> {
        let name = self.name.ok_or(ManifestError::MissingName)?;
        Ok(ModuleManifest {
            name,
            require: self.require.unwrap_or_default(),
        })
    }
}

/// A manifest that is known to name its module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleManifest {
    pub name: String,
    pub require: Requirements,
}
