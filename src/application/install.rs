//! Install use case - orchestrates the module installation flow.
//!
//! This use case coordinates:
//! - Classification of identifiers (local module or remote package)
//! - Remote installation of requested packages
//! - Aggregation and installation of local modules' requirements
//! - Loading each local module and running its install script
//!
//! Per-module failures become [`ScriptOutcome`] values; only failures of
//! the package manager are returned as errors.

use anyhow::{Context, Result, bail};
use log::{debug, info};

use super::outcome::{InstallReport, ModuleReport, ScriptOutcome};
use crate::installer::RemoteInstaller;
use crate::module::{ModuleLoader, ModuleRegistry};
use crate::package::{LocatedModule, Location, Manifest, PackageLocator, PackageRequest, RequirementSet};
use crate::runtime::Runtime;
use crate::script::{ScriptContext, ScriptRunner};

/// Options for the install use case
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Install from VCS sources instead of dist archives
    pub prefer_source: bool,
    /// Skip the confirmation prompt and run scripts
    pub yes: bool,
    /// Only report what would be installed
    pub dry_run: bool,
}

/// What a run is going to do, split into the two installer tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Packages to fetch, unique by name.
    pub remote: Vec<PackageRequest>,
    /// Modules found in the packages directory, in request order.
    pub available: Vec<LocatedModule>,
    /// Requirements aggregated from the available modules' manifests.
    pub requirements: RequirementSet,
}

impl InstallPlan {
    pub fn available_names(&self) -> Vec<&str> {
        self.available.iter().map(|m| m.identifier.as_str()).collect()
    }

    /// Add a remote request; a later request for the same name replaces the
    /// constraint but keeps the original position.
    fn push_remote(&mut self, request: PackageRequest) {
        match self.remote.iter_mut().find(|r| r.name == request.name) {
            Some(existing) => existing.constraint = request.constraint,
            None => self.remote.push(request),
        }
    }

    pub fn print(&self) {
        for request in &self.remote {
            println!("   remote  {}", request);
        }
        for module in &self.available {
            println!("   local   {}", module.identifier);
        }
        for (name, constraint) in self.requirements.iter() {
            println!("   require {}:{}", name, constraint);
        }
    }
}

pub struct InstallOrchestrator<'a, R: Runtime> {
    runtime: &'a R,
    locator: PackageLocator<'a, R>,
    installer: &'a dyn RemoteInstaller,
    scripts: &'a dyn ScriptRunner,
    loader: ModuleLoader,
}

impl<'a, R: Runtime> InstallOrchestrator<'a, R> {
    pub fn new(
        runtime: &'a R,
        locator: PackageLocator<'a, R>,
        installer: &'a dyn RemoteInstaller,
        scripts: &'a dyn ScriptRunner,
        loader: ModuleLoader,
    ) -> Self {
        Self {
            runtime,
            locator,
            installer,
            scripts,
            loader,
        }
    }

    /// Classify every identifier and aggregate local requirements.
    /// Fails before any side effect if an identifier cannot be parsed,
    /// naming every rejected argument.
    #[tracing::instrument(skip(self, identifiers))]
    pub fn plan(&self, identifiers: &[String]) -> Result<InstallPlan> {
        let mut plan = InstallPlan::default();
        let mut rejected = Vec::new();

        for identifier in identifiers {
            match self.locator.locate(identifier) {
                Location::Located(module) => {
                    println!("   {} found in packages directory", identifier);
                    if !plan.available.iter().any(|m| m.identifier == module.identifier) {
                        plan.available.push(module);
                    }
                }
                Location::NotLocated => match identifier.parse::<PackageRequest>() {
                    Ok(request) => {
                        debug!("'{}' will be fetched as {}", identifier, request);
                        plan.push_remote(request);
                    }
                    Err(e) => rejected.push((identifier.as_str(), e)),
                },
            }
        }

        if !rejected.is_empty() {
            let accepted: Vec<&str> = identifiers
                .iter()
                .map(String::as_str)
                .filter(|id| !rejected.iter().any(|(bad, _)| bad == id))
                .collect();
            let reasons: Vec<String> = rejected.iter().map(|(_, e)| format!("  {}", e)).collect();
            bail!(
                "{} of {} package argument(s) rejected, nothing was installed:\n{}\nAccepted: {}",
                rejected.len(),
                identifiers.len(),
                reasons.join("\n"),
                if accepted.is_empty() { "none".to_string() } else { accepted.join(", ") }
            );
        }

        plan.requirements =
            RequirementSet::aggregate(plan.available.iter().filter_map(|m| m.manifest.as_ref()));
        debug!(
            "Planned {} remote package(s), local modules [{}], {} requirement(s)",
            plan.remote.len(),
            plan.available_names().join(", "),
            plan.requirements.len()
        );

        Ok(plan)
    }

    #[tracing::instrument(skip(self, identifiers, registry))]
    pub async fn run(
        &self,
        identifiers: &[String],
        options: &InstallOptions,
        registry: &mut dyn ModuleRegistry,
    ) -> Result<InstallReport> {
        let plan = self.plan(identifiers)?;
        let mut report = InstallReport {
            plan,
            scripts_confirmed: false,
            modules: Vec::new(),
        };

        if options.dry_run {
            return self.dry_run(report, options).await;
        }

        if !report.plan.remote.is_empty() {
            println!("Installing {} new package(s)", report.plan.remote.len());
            self.installer
                .install_packages(&report.plan.remote, true, options.prefer_source)
                .await
                .context("Remote package installation failed")?;
        }

        if report.plan.requirements.is_empty() {
            debug!("No module requirements to install");
            return Ok(report);
        }

        let confirmed = options.yes || self.runtime.confirm("Install scripts?", true)?;

        println!(
            "Installing {} module requirement(s)",
            report.plan.requirements.len()
        );
        self.installer
            .install_requirements(&report.plan.requirements, true, false, options.prefer_source)
            .await
            .context("Module requirement installation failed")?;

        report.scripts_confirmed = confirmed;
        if !confirmed {
            println!("Skipping install scripts.");
            return Ok(report);
        }

        for module in &report.plan.available {
            let outcome = self.install_module(module, registry).await;
            outcome.print(&module.identifier);
            report.modules.push(ModuleReport {
                module: module.identifier.clone(),
                outcome,
            });
        }

        info!(
            "Processed {} module(s), {} failed",
            report.modules.len(),
            report.failures()
        );
        Ok(report)
    }

    async fn dry_run(&self, report: InstallReport, options: &InstallOptions) -> Result<InstallReport> {
        println!("Install plan:");
        report.plan.print();
        if !report.plan.requirements.is_empty() {
            self.installer
                .install_requirements(&report.plan.requirements, true, true, options.prefer_source)
                .await
                .context("Module requirement installation failed")?;
        }
        Ok(report)
    }

    /// Validate, load and run the script of one module.
    #[tracing::instrument(skip(self, module, registry), fields(module = %module.identifier))]
    async fn install_module(
        &self,
        module: &LocatedModule,
        registry: &mut dyn ModuleRegistry,
    ) -> ScriptOutcome {
        let manifest = match Manifest::load(self.runtime, &module.manifest_path)
            .and_then(Manifest::validate)
        {
            Ok(manifest) => manifest,
            Err(e) => return ScriptOutcome::ManifestInvalid(e.to_string()),
        };

        if !self.runtime.is_file(&module.script_path) {
            return ScriptOutcome::ScriptMissing(module.script_path.clone());
        }

        if let Err(e) = self.loader.load(registry, &manifest) {
            return ScriptOutcome::LoadFailed(e.to_string());
        }

        println!("   installing scripts of {}", manifest.name);
        let context = ScriptContext {
            module: manifest.name,
            module_dir: module.dir.clone(),
            script_path: module.script_path.clone(),
            packages_root: self.locator.packages_root().to_path_buf(),
        };
        match self.scripts.install(&context).await {
            Ok(()) => ScriptOutcome::Success,
            Err(failure) => ScriptOutcome::ScriptFailed(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::MockRemoteInstaller;
    use crate::module::MockModuleRegistry;
    use crate::package::ModuleLayout;
    use crate::runtime::MockRuntime;
    use crate::script::{MockScriptRunner, ScriptFailure};
    use crate::test_utils::test_packages_root;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn module_file(module: &str, file: &str) -> PathBuf {
        test_packages_root().join(module).join(file)
    }

    /// Serve `files` from the mock filesystem; everything else is absent.
    fn mock_files(runtime: &mut MockRuntime, files: &[(PathBuf, &str)]) {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(path, content)| (path.clone(), content.to_string()))
            .collect();
        let existing = files.clone();
        runtime
            .expect_is_file()
            .returning(move |path| existing.contains_key(path));
        runtime.expect_read_to_string().returning(move |path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No such file: {}", path.display()))
        });
    }

    fn orchestrator<'a>(
        runtime: &'a MockRuntime,
        installer: &'a MockRemoteInstaller,
        scripts: &'a MockScriptRunner,
    ) -> InstallOrchestrator<'a, MockRuntime> {
        let locator = PackageLocator::new(runtime, test_packages_root(), ModuleLayout::default());
        InstallOrchestrator::new(runtime, locator, installer, scripts, ModuleLoader::default())
    }

    fn accepting_registry() -> MockModuleRegistry {
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().returning(|_| Ok(true));
        registry
    }

    #[test]
    fn test_plan_partitions_identifiers() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(
                module_file("blog", "composer.json"),
                r#"{"name": "blog", "require": {"auth": "^1.0"}}"#,
            )],
        );
        let installer = MockRemoteInstaller::new();
        let scripts = MockScriptRunner::new();

        let plan = orchestrator(&runtime, &installer, &scripts)
            .plan(&args(&["blog", "foo:1.2.0", "bar", "foo:2.0", "blog"]))
            .unwrap();

        assert_eq!(plan.available_names(), vec!["blog"]);
        assert_eq!(
            plan.remote,
            vec![PackageRequest::new("foo", "2.0"), PackageRequest::new("bar", "*")]
        );
        assert_eq!(plan.requirements.get("auth"), Some("^1.0"));
        // a local identifier is never also requested remotely
        assert!(plan.remote.iter().all(|r| r.name != "blog"));
    }

    #[test]
    fn test_plan_rejects_empty_name_before_side_effects() {
        let mut runtime = MockRuntime::new();
        mock_files(&mut runtime, &[]);
        let installer = MockRemoteInstaller::new();
        let scripts = MockScriptRunner::new();

        let result = orchestrator(&runtime, &installer, &scripts).plan(&args(&[":1.0"]));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rejected_argument_is_named_next_to_accepted_ones() {
        let mut runtime = MockRuntime::new();
        mock_files(&mut runtime, &[]);
        let mut installer = MockRemoteInstaller::new();
        installer.expect_install_packages().never();
        installer.expect_install_requirements().never();
        let scripts = MockScriptRunner::new();
        let mut registry = MockModuleRegistry::new();

        let err = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["foo:1.2.0", ":1.0", "bar"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("1 of 3 package argument(s) rejected"));
        assert!(message.contains("Invalid package ':1.0'"));
        assert!(message.contains("Accepted: foo:1.2.0, bar"));
    }

    #[tokio::test]
    async fn test_remote_only_request() {
        // foo:1.2.0 is not present locally
        let mut runtime = MockRuntime::new();
        mock_files(&mut runtime, &[]);
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_packages()
            .withf(|requests, update, prefer_source| {
                requests == [PackageRequest::new("foo", "1.2.0")] && *update && !*prefer_source
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        installer.expect_install_requirements().never();
        let scripts = MockScriptRunner::new();
        let mut registry = MockModuleRegistry::new();

        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["foo:1.2.0"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap();

        assert!(report.plan.available.is_empty());
        assert!(report.modules.is_empty());
        assert!(!report.scripts_confirmed);
    }

    #[test_log::test(tokio::test)]
    async fn test_local_module_installs_requirements_loads_and_runs_script() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[
                (
                    module_file("blog", "composer.json"),
                    r#"{"name": "blog", "require": ["auth:^1.0"]}"#,
                ),
                (module_file("blog", "scripts.sh"), "#!/bin/sh\n"),
            ],
        );
        runtime
            .expect_confirm()
            .with(eq("Install scripts?"), eq(true))
            .times(1)
            .returning(|_, default| Ok(default));

        let mut installer = MockRemoteInstaller::new();
        installer.expect_install_packages().never();
        installer
            .expect_install_requirements()
            .withf(|set, update, dry_run, prefer_source| {
                set.iter().collect::<Vec<_>>() == vec![("auth", "^1.0")]
                    && *update
                    && !*dry_run
                    && *prefer_source
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut registry = MockModuleRegistry::new();
        let mut seq = Sequence::new();
        for name in ["database", "blog", "auth"] {
            registry
                .expect_activate()
                .with(eq(name))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(true));
        }

        let mut scripts = MockScriptRunner::new();
        scripts
            .expect_install()
            .withf(|ctx| {
                ctx.module == "blog"
                    && ctx.script_path == module_file("blog", "scripts.sh")
                    && ctx.packages_root == test_packages_root()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let options = InstallOptions {
            prefer_source: true,
            ..Default::default()
        };
        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &options, &mut registry)
            .await
            .unwrap();

        assert!(report.scripts_confirmed);
        assert_eq!(report.outcome("blog"), Some(&ScriptOutcome::Success));
    }

    #[tokio::test]
    async fn test_manifest_without_name_is_invalid() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[
                (module_file("blog", "composer.json"), r#"{"require": ["auth:^1.0"]}"#),
                (module_file("blog", "scripts.sh"), "#!/bin/sh\n"),
            ],
        );
        runtime.expect_confirm().returning(|_, _| Ok(true));
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().never();

        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap();

        assert!(matches!(
            report.outcome("blog"),
            Some(ScriptOutcome::ManifestInvalid(reason)) if reason.contains("name")
        ));
    }

    #[tokio::test]
    async fn test_missing_script_checks_real_path() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(
                module_file("blog", "composer.json"),
                r#"{"name": "blog", "require": ["auth"]}"#,
            )],
        );
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .returning(|_, _, _, _| Ok(()));
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().never();

        let options = InstallOptions {
            yes: true,
            ..Default::default()
        };
        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &options, &mut registry)
            .await
            .unwrap();

        assert_eq!(
            report.outcome("blog"),
            Some(&ScriptOutcome::ScriptMissing(module_file("blog", "scripts.sh")))
        );
    }

    #[tokio::test]
    async fn test_script_failure_does_not_stop_next_module() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[
                (module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["auth"]}"#),
                (module_file("blog", "scripts.sh"), ""),
                (module_file("forum", "composer.json"), r#"{"name": "forum"}"#),
                (module_file("forum", "scripts.sh"), ""),
            ],
        );
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .returning(|_, _, _, _| Ok(()));

        let mut scripts = MockScriptRunner::new();
        scripts
            .expect_install()
            .withf(|ctx| ctx.module == "blog")
            .times(1)
            .returning(|ctx| {
                Err(ScriptFailure::new(
                    "table exists",
                    ctx.script_path.display().to_string(),
                ))
            });
        scripts
            .expect_install()
            .withf(|ctx| ctx.module == "forum")
            .times(1)
            .returning(|_| Ok(()));
        let mut registry = accepting_registry();

        let options = InstallOptions {
            yes: true,
            ..Default::default()
        };
        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog", "forum"]), &options, &mut registry)
            .await
            .unwrap();

        match report.outcome("blog") {
            Some(ScriptOutcome::ScriptFailed(failure)) => {
                assert_eq!(failure.message, "table exists");
                assert_eq!(
                    failure.location,
                    module_file("blog", "scripts.sh").display().to_string()
                );
            }
            other => panic!("Expected ScriptFailed, got {:?}", other),
        }
        assert_eq!(report.outcome("forum"), Some(&ScriptOutcome::Success));
        assert_eq!(report.failures(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_skips_script_only_for_that_module() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[
                (module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["ghost"]}"#),
                (module_file("blog", "scripts.sh"), ""),
                (module_file("forum", "composer.json"), r#"{"name": "forum"}"#),
                (module_file("forum", "scripts.sh"), ""),
            ],
        );
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .returning(|_, _, _, _| Ok(()));
        let mut scripts = MockScriptRunner::new();
        scripts
            .expect_install()
            .withf(|ctx| ctx.module == "forum")
            .times(1)
            .returning(|_| Ok(()));
        let mut registry = MockModuleRegistry::new();
        registry
            .expect_activate()
            .with(eq("ghost"))
            .returning(|_| Err(anyhow::anyhow!("module 'ghost' not found")));
        registry.expect_activate().returning(|_| Ok(true));

        let options = InstallOptions {
            yes: true,
            ..Default::default()
        };
        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog", "forum"]), &options, &mut registry)
            .await
            .unwrap();

        assert!(matches!(
            report.outcome("blog"),
            Some(ScriptOutcome::LoadFailed(reason)) if reason.contains("ghost")
        ));
        assert_eq!(report.outcome("forum"), Some(&ScriptOutcome::Success));
    }

    #[tokio::test]
    async fn test_declined_prompt_still_installs_requirements() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["auth"]}"#)],
        );
        runtime.expect_confirm().times(1).returning(|_, _| Ok(false));
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().never();

        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap();

        assert!(!report.scripts_confirmed);
        assert!(report.modules.is_empty());
    }

    #[tokio::test]
    async fn test_module_without_requirements_skips_script_phase() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[
                (module_file("blog", "composer.json"), r#"{"name": "blog"}"#),
                (module_file("blog", "scripts.sh"), ""),
            ],
        );
        runtime.expect_confirm().never();
        let mut installer = MockRemoteInstaller::new();
        installer.expect_install_requirements().never();
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();

        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap();

        assert_eq!(report.plan.available_names(), vec!["blog"]);
        assert!(report.modules.is_empty());
    }

    #[tokio::test]
    async fn test_remote_install_failure_escalates() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["auth"]}"#)],
        );
        runtime.expect_confirm().returning(|_, _| Ok(true));
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_requirements()
            .returning(|_, _, _, _| Err(anyhow::anyhow!("could not resolve auth")));
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().never();

        let err = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog"]), &InstallOptions::default(), &mut registry)
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Module requirement installation failed"));
        assert!(message.contains("could not resolve auth"));
    }

    #[tokio::test]
    async fn test_remote_package_failure_aborts_before_requirements() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["auth"]}"#)],
        );
        runtime.expect_confirm().never();
        let mut installer = MockRemoteInstaller::new();
        installer
            .expect_install_packages()
            .returning(|_, _, _| Err(anyhow::anyhow!("network down")));
        installer.expect_install_requirements().never();
        let scripts = MockScriptRunner::new();
        let mut registry = MockModuleRegistry::new();

        let result = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog", "foo"]), &InstallOptions::default(), &mut registry)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_only_asks_package_manager() {
        let mut runtime = MockRuntime::new();
        mock_files(
            &mut runtime,
            &[(module_file("blog", "composer.json"), r#"{"name": "blog", "require": ["auth"]}"#)],
        );
        runtime.expect_confirm().never();
        let mut installer = MockRemoteInstaller::new();
        installer.expect_install_packages().never();
        installer
            .expect_install_requirements()
            .withf(|_, _, dry_run, _| *dry_run)
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mut scripts = MockScriptRunner::new();
        scripts.expect_install().never();
        let mut registry = MockModuleRegistry::new();
        registry.expect_activate().never();

        let options = InstallOptions {
            dry_run: true,
            ..Default::default()
        };
        let report = orchestrator(&runtime, &installer, &scripts)
            .run(&args(&["blog", "foo"]), &options, &mut registry)
            .await
            .unwrap();

        assert_eq!(report.plan.remote, vec![PackageRequest::new("foo", "*")]);
        assert!(report.modules.is_empty());
    }
}
