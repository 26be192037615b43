//! Post-install scripts.
//!
//! A script run never raises: [`ScriptRunner::install`] returns a
//! [`ScriptFailure`] value so that one module's script cannot abort the batch.

mod process;

use async_trait::async_trait;
use std::path::PathBuf;

pub use process::{DEFAULT_INTERPRETER, ProcessScriptRunner};

/// What a script run needs to know about its module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    pub module: String,
    pub module_dir: PathBuf,
    pub script_path: PathBuf,
    /// Root of the packages directory, which may be several levels above
    /// `module_dir` for `vendor/name` modules.
    pub packages_root: PathBuf,
}

/// Why a script failed, with enough detail to diagnose it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFailure {
    pub message: String,
    /// Where the failure originated (usually the script path).
    pub location: String,
    /// Full causal trace, outermost first.
    pub trace: Vec<String>,
}

impl ScriptFailure {
    pub fn new(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: location.into(),
            trace: Vec::new(),
        }
    }

    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }

    /// Build a failure from an error chain.
    pub fn from_error(error: &anyhow::Error, location: impl Into<String>) -> Self {
        Self {
            message: error.to_string(),
            location: location.into(),
            trace: error.chain().map(|cause| cause.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ScriptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.location)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Run the module's `install` entry point.
    async fn install(&self, context: &ScriptContext) -> Result<(), ScriptFailure>;
}
