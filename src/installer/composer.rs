//! Composer-backed [`RemoteInstaller`].
//!
//! The temp directory holds a `composer.json` whose `require` map accumulates
//! every package installed so far. Each call merges its requests into that
//! map and runs `composer update` restricted to the requested names, so
//! packages from earlier calls and earlier runs stay installed.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{InstallerConfig, RemoteInstaller};
use crate::package::{PackageRequest, RequirementSet};
use crate::runtime::{CommandSpec, Runtime};

/// The generated `composer.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct ComposerDocument<'a> {
    minimum_stability: &'a str,
    prefer_stable: bool,
    config: ComposerSettings<'a>,
    repositories: Vec<Repository<'a>>,
    require: &'a BTreeMap<String, String>,
}

/// The part of a previously written `composer.json` that is carried over.
#[derive(Debug, Default, Deserialize)]
struct PersistedDocument {
    #[serde(default)]
    require: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct ComposerSettings<'a> {
    vendor_dir: &'a Path,
    cache_dir: &'a Path,
}

#[derive(Debug, Serialize)]
struct Repository<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
}

pub struct ComposerInstaller<'a, R: Runtime> {
    runtime: &'a R,
    config: InstallerConfig,
}

impl<'a, R: Runtime> ComposerInstaller<'a, R> {
    pub fn new(runtime: &'a R, config: InstallerConfig) -> Self {
        Self { runtime, config }
    }

    fn manifest_path(&self) -> PathBuf {
        self.config.temp_dir.join("composer.json")
    }

    /// Requirements recorded by earlier installs. An unreadable document
    /// starts a fresh map.
    pub fn installed_requirements(&self) -> BTreeMap<String, String> {
        let path = self.manifest_path();
        if !self.runtime.is_file(&path) {
            return BTreeMap::new();
        }
        let parsed = self
            .runtime
            .read_to_string(&path)
            .and_then(|content| Ok(serde_json::from_str::<PersistedDocument>(&content)?));
        match parsed {
            Ok(document) => document.require,
            Err(e) => {
                warn!("Ignoring unreadable {}: {:#}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    /// The composer document describing what to install.
    pub fn composer_json(&self, require: &BTreeMap<String, String>) -> Result<serde_json::Value> {
        let artifact_dir = self
            .config
            .artifact_dir
            .to_str()
            .context("Artifact directory is not valid UTF-8")?;
        let document = ComposerDocument {
            minimum_stability: "dev",
            prefer_stable: true,
            config: ComposerSettings {
                vendor_dir: &self.config.vendor_dir,
                cache_dir: &self.config.cache_dir,
            },
            repositories: vec![
                Repository {
                    kind: "artifact",
                    url: artifact_dir,
                },
                Repository {
                    kind: "composer",
                    url: &self.config.api_url,
                },
            ],
            require,
        };
        Ok(serde_json::to_value(document)?)
    }

    /// `composer update` limited to `requirements`. With `update_existing`
    /// their dependencies may be updated too.
    pub fn command(
        &self,
        requirements: &RequirementSet,
        update_existing: bool,
        dry_run: bool,
        prefer_source: bool,
    ) -> CommandSpec {
        let mut command = CommandSpec::new(&self.config.composer).arg("update");
        for name in requirements.names() {
            command = command.arg(name);
        }
        command = command
            .arg("--working-dir")
            .arg(self.config.temp_dir.display().to_string())
            .arg("--no-interaction");
        if update_existing {
            command = command.arg("--with-dependencies");
        }
        if dry_run {
            command = command.arg("--dry-run");
        }
        if prefer_source {
            command = command.arg("--prefer-source");
        }
        command
            .env("COMPOSER_CACHE_DIR", self.config.cache_dir.display().to_string())
            .env("COMPOSER_VENDOR_DIR", self.config.vendor_dir.display().to_string())
            .env("MODKIT_PACKAGES", self.config.packages_dir.display().to_string())
    }

    fn write_manifest(&self, require: &BTreeMap<String, String>) -> Result<()> {
        let path = self.manifest_path();
        let document = serde_json::to_vec_pretty(&self.composer_json(require)?)?;
        self.runtime
            .write(&path, &document)
            .context("Failed to write composer configuration")?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn prepare_dirs(&self) -> Result<()> {
        for dir in [
            &self.config.temp_dir,
            &self.config.cache_dir,
            &self.config.vendor_dir,
            &self.config.artifact_dir,
        ] {
            if !self.runtime.is_dir(dir) {
                self.runtime.create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, requirements))]
    async fn run(
        &self,
        requirements: &RequirementSet,
        update_existing: bool,
        dry_run: bool,
        prefer_source: bool,
    ) -> Result<()> {
        self.prepare_dirs()?;

        let installed = self.installed_requirements();
        let mut require = installed.clone();
        for (name, constraint) in requirements.iter() {
            require.insert(name.to_string(), constraint.to_string());
        }
        self.write_manifest(&require)?;

        let command = self.command(requirements, update_existing, dry_run, prefer_source);
        info!("Running {}", command);
        let output = self.runtime.run_command(&command).await;

        // A dry run must not leave its requests behind as installed.
        if dry_run {
            self.write_manifest(&installed)?;
        }
        let output = output?;

        for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
            println!("   {}", line);
        }
        debug!("composer stderr:\n{}", output.stderr);

        if !output.success() {
            let status = output
                .status
                .map_or_else(|| "a signal".to_string(), |code| format!("status {}", code));
            bail!(
                "'{}' exited with {}: {}",
                self.config.composer,
                status,
                output.last_error_line().unwrap_or("no error output")
            );
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Runtime> RemoteInstaller for ComposerInstaller<'_, R> {
    async fn install_packages(
        &self,
        requests: &[PackageRequest],
        update_existing: bool,
        prefer_source: bool,
    ) -> Result<()> {
        let requirements: RequirementSet = requests.iter().cloned().collect();
        self.run(&requirements, update_existing, false, prefer_source)
            .await
            .context("Failed to install packages")
    }

    async fn install_requirements(
        &self,
        requirements: &RequirementSet,
        update_existing: bool,
        dry_run: bool,
        prefer_source: bool,
    ) -> Result<()> {
        self.run(requirements, update_existing, dry_run, prefer_source)
            .await
            .context("Failed to install module requirements")
    }
}
