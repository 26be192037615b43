//! Application layer - Use cases that coordinate domain services.
//!
//! This layer contains the install orchestration and sits between the CLI
//! layer and the package, module, script and installer services.

mod install;
mod outcome;

pub use install::{InstallOptions, InstallOrchestrator, InstallPlan};
pub use outcome::{InstallReport, ModuleReport, ScriptOutcome};
