//! Package-manager integration.
//!
//! [`RemoteInstaller`] is the boundary to the dependency resolver. The
//! orchestrator only ever talks to this trait; [`ComposerInstaller`] is the
//! shipped implementation driving a `composer` executable.

mod composer;
mod config;

use anyhow::Result;
use async_trait::async_trait;

use crate::package::{PackageRequest, RequirementSet};

pub use composer::ComposerInstaller;
pub use config::InstallerConfig;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteInstaller: Send + Sync {
    /// Install explicitly requested packages.
    async fn install_packages(
        &self,
        requests: &[PackageRequest],
        update_existing: bool,
        prefer_source: bool,
    ) -> Result<()>;

    /// Install a requirement set aggregated from module manifests.
    async fn install_requirements(
        &self,
        requirements: &RequirementSet,
        update_existing: bool,
        dry_run: bool,
        prefer_source: bool,
    ) -> Result<()>;
}
