//! Aggregation of module requirements into a single install set.

use std::collections::BTreeMap;

use super::manifest::Manifest;
use super::request::PackageRequest;

/// Package name to version constraint. Later merges overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet(BTreeMap<String, String>);

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the requirements of every manifest, in order.
    pub fn aggregate<'m, I>(manifests: I) -> Self
    where
        I: IntoIterator<Item = &'m Manifest>,
    {
        let mut set = Self::new();
        for manifest in manifests {
            set.merge(manifest);
        }
        set
    }

    pub fn merge(&mut self, manifest: &Manifest) {
        for request in manifest.requirements() {
            self.insert(request.clone());
        }
    }

    /// Returns the constraint this request replaced, if any.
    pub fn insert(&mut self, request: PackageRequest) -> Option<String> {
        self.0.insert(request.name, request.constraint)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<PackageRequest> for RequirementSet {
    fn from_iter<T: IntoIterator<Item = PackageRequest>>(iter: T) -> Self {
        let mut set = Self::new();
        for request in iter {
            set.insert(request);
        }
        set
    }
}
