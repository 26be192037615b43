//! Package identifier parsing.

use anyhow::{Result, bail};
use std::str::FromStr;

/// Constraint used when an identifier does not name one.
pub const ANY_VERSION: &str = "*";

/// A requested package with its version constraint.
/// Format: "name" or "name:constraint"
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct PackageRequest {
    pub name: String,
    pub constraint: String,
}

impl PackageRequest {
    pub fn new(name: impl Into<String>, constraint: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            constraint: normalize_constraint(constraint.as_ref()),
        }
    }
}

/// Blank constraints mean "any version".
fn normalize_constraint(constraint: &str) -> String {
    let constraint = constraint.trim();
    if constraint.is_empty() {
        ANY_VERSION.to_string()
    } else {
        constraint.to_string()
    }
}

impl std::fmt::Display for PackageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.constraint)
    }
}

impl FromStr for PackageRequest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, constraint) = s.split_once(':').unwrap_or((s, ""));
        let name = name.trim();
        if name.is_empty() {
            bail!(
                "Invalid package '{}': name cannot be empty. Expected 'name' or 'name:constraint'.",
                s
            );
        }
        Ok(PackageRequest::new(name, constraint))
    }
}
