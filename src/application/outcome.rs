use std::path::PathBuf;

use super::install::InstallPlan;
use crate::script::ScriptFailure;

/// Result of the script phase for one module. Never aggregated into a
/// batch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    Success,
    ManifestInvalid(String),
    ScriptMissing(PathBuf),
    LoadFailed(String),
    ScriptFailed(ScriptFailure),
}

impl ScriptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScriptOutcome::Success)
    }

    /// Print the outcome as status lines.
    pub fn print(&self, module: &str) {
        match self {
            ScriptOutcome::Success => println!("   success"),
            ScriptOutcome::ManifestInvalid(reason) => println!(
                "Failed to include module '{}' from the package directory: {}",
                module, reason
            ),
            ScriptOutcome::ScriptMissing(path) => println!(
                "Cannot install script of module '{}' because {} does not exist",
                module,
                path.display()
            ),
            ScriptOutcome::LoadFailed(reason) => {
                println!("Failed to load module '{}': {}", module, reason)
            }
            ScriptOutcome::ScriptFailed(failure) => {
                println!("Failed to install script of module '{}'", module);
                println!("   {}", failure.message);
                println!("   at {}", failure.location);
                for (i, line) in failure.trace.iter().enumerate() {
                    println!("   #{} {}", i, line);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    pub module: String,
    pub outcome: ScriptOutcome,
}

/// Everything a run did, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub plan: InstallPlan,
    /// Whether the script phase was confirmed.
    pub scripts_confirmed: bool,
    pub modules: Vec<ModuleReport>,
}

impl InstallReport {
    pub fn outcome(&self, module: &str) -> Option<&ScriptOutcome> {
        self.modules
            .iter()
            .find(|r| r.module == module)
            .map(|r| &r.outcome)
    }

    pub fn failures(&self) -> usize {
        self.modules.iter().filter(|r| !r.outcome.is_success()).count()
    }
}
