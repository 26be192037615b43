//! Runtime abstraction for system operations.
//!
//! Everything the installer touches outside its own memory goes through the
//! [`Runtime`] trait so that use cases can be tested with `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - The working directory
//! - `fs` - File system operations (read, write, directories)
//! - `path` - Lexical path helpers (containment checks)
//! - `process` - External process execution
//! - `user` - User interaction (confirmation prompts)

mod env;
mod fs;
pub mod path;
mod process;
mod user;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub use path::{child_dir, is_path_under};
pub use process::{CommandOutput, CommandSpec};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;

    // Processes
    /// Run an external command to completion, capturing its output.
    /// Returns `Err` only when the process could not be started.
    async fn run_command(&self, command: &CommandSpec) -> Result<CommandOutput>;

    // User interaction
    /// Prompt user for confirmation. An empty answer selects `default`.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    async fn run_command(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.run_command_impl(command).await
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.confirm_impl(prompt, default)
    }
}
