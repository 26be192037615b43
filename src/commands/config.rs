use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::installer::InstallerConfig;
use crate::module::BOOTSTRAP_MODULE;
use crate::package::ModuleLayout;
use crate::runtime::Runtime;
use crate::script::DEFAULT_INTERPRETER;

/// Values taken from the command line (or their environment variables).
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub root: Option<PathBuf>,
    pub packages_dir: Option<PathBuf>,
    pub vendor_dir: Option<PathBuf>,
    pub api_url: Option<String>,
    pub composer: Option<String>,
    pub interpreter: Option<String>,
    pub bootstrap: Option<String>,
}

/// Fully resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub installer: InstallerConfig,
    pub layout: ModuleLayout,
    pub interpreter: String,
    pub bootstrap: String,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, options: ConfigOptions) -> Result<Self> {
        let cwd = runtime.current_dir()?;
        let absolute = |path: PathBuf| if path.is_absolute() { path } else { cwd.join(path) };

        let root = absolute(options.root.unwrap_or_else(|| cwd.clone()));
        debug!("Using site root: {}", root.display());

        let mut installer = InstallerConfig::rooted(&root);
        if let Some(dir) = options.packages_dir {
            installer.packages_dir = absolute(dir);
        }
        if let Some(dir) = options.vendor_dir {
            installer.vendor_dir = absolute(dir);
        }
        if let Some(url) = options.api_url {
            installer.api_url = url;
        }
        if let Some(composer) = options.composer {
            installer.composer = composer;
        }

        Ok(Self {
            root,
            installer,
            layout: ModuleLayout::default(),
            interpreter: options
                .interpreter
                .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
            bootstrap: options
                .bootstrap
                .unwrap_or_else(|| BOOTSTRAP_MODULE.to_string()),
        })
    }

    /// Directories searched when activating modules: packages, then vendor.
    pub fn module_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.installer.packages_dir.clone(),
            self.installer.vendor_dir.clone(),
        ]
    }
}
