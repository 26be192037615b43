use anyhow::Result;

use super::config::Config;
use crate::application::{InstallOptions, InstallOrchestrator};
use crate::installer::ComposerInstaller;
use crate::module::{DirectoryRegistry, ModuleLoader, ModuleRegistry};
use crate::package::PackageLocator;
use crate::runtime::Runtime;
use crate::script::ProcessScriptRunner;

/// Install packages and run the scripts of local modules.
#[tracing::instrument(skip(runtime, config))]
pub async fn install<R: Runtime>(
    runtime: R,
    config: Config,
    packages: &[String],
    options: InstallOptions,
) -> Result<()> {
    let installer = ComposerInstaller::new(&runtime, config.installer.clone());
    let scripts = ProcessScriptRunner::new(&runtime, config.interpreter.as_str());
    let locator = PackageLocator::new(
        &runtime,
        config.installer.packages_dir.clone(),
        config.layout.clone(),
    );
    let loader = ModuleLoader::new(config.bootstrap.as_str());
    let mut registry =
        DirectoryRegistry::new(&runtime, config.module_dirs()).with_builtin(loader.bootstrap());
    let orchestrator = InstallOrchestrator::new(&runtime, locator, &installer, &scripts, loader);

    let report = orchestrator.run(packages, &options, &mut registry).await?;

    if !report.modules.is_empty() {
        let failed = report.failures();
        println!(
            "{} module(s) processed, {} succeeded, {} failed",
            report.modules.len(),
            report.modules.len() - failed,
            failed
        );
    }
    if !registry.active().is_empty() {
        println!("Active modules: {}", registry.active().join(", "));
    }
    Ok(())
}
