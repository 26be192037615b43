use std::path::PathBuf;

/// Default package API endpoint.
pub const DEFAULT_API_URL: &str = "https://repo.packagist.org";

/// Default package manager executable.
pub const DEFAULT_COMPOSER: &str = "composer";

/// Paths and endpoint handed to the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub temp_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub vendor_dir: PathBuf,
    pub artifact_dir: PathBuf,
    pub packages_dir: PathBuf,
    pub api_url: String,
    pub composer: String,
}

impl InstallerConfig {
    /// Layout rooted at `root`: `packages/`, `vendor/` and `tmp/{temp,cache,packages}`.
    pub fn rooted(root: &std::path::Path) -> Self {
        let tmp = root.join("tmp");
        Self {
            temp_dir: tmp.join("temp"),
            cache_dir: tmp.join("cache"),
            vendor_dir: root.join("vendor"),
            artifact_dir: tmp.join("packages"),
            packages_dir: root.join("packages"),
            api_url: DEFAULT_API_URL.to_string(),
            composer: DEFAULT_COMPOSER.to_string(),
        }
    }

    /// Named values in the order they are reported to the user.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("path.temp", self.temp_dir.display().to_string()),
            ("path.cache", self.cache_dir.display().to_string()),
            ("path.vendor", self.vendor_dir.display().to_string()),
            ("path.artifact", self.artifact_dir.display().to_string()),
            ("path.packages", self.packages_dir.display().to_string()),
            ("system.api", self.api_url.clone()),
        ]
    }
}
