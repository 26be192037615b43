use async_trait::async_trait;
use log::{debug, info};

use super::{ScriptContext, ScriptFailure, ScriptRunner};
use crate::runtime::{CommandSpec, Runtime};

/// Interpreter used for module scripts unless configured otherwise.
pub const DEFAULT_INTERPRETER: &str = "sh";

/// Runs `<interpreter> <script> install` inside the module directory.
pub struct ProcessScriptRunner<'a, R: Runtime> {
    runtime: &'a R,
    interpreter: String,
}

impl<'a, R: Runtime> ProcessScriptRunner<'a, R> {
    pub fn new(runtime: &'a R, interpreter: impl Into<String>) -> Self {
        Self {
            runtime,
            interpreter: interpreter.into(),
        }
    }

    pub fn command(&self, context: &ScriptContext) -> CommandSpec {
        CommandSpec::new(&self.interpreter)
            .arg(context.script_path.display().to_string())
            .arg("install")
            .current_dir(&context.module_dir)
            .env("MODKIT_MODULE", &context.module)
            .env("MODKIT_PACKAGES", context.packages_root.display().to_string())
    }
}

#[async_trait]
impl<R: Runtime> ScriptRunner for ProcessScriptRunner<'_, R> {
    #[tracing::instrument(skip(self, context), fields(module = %context.module))]
    async fn install(&self, context: &ScriptContext) -> Result<(), ScriptFailure> {
        let location = context.script_path.display().to_string();
        let command = self.command(context);

        let output = self
            .runtime
            .run_command(&command)
            .await
            .map_err(|e| ScriptFailure::from_error(&e, location.clone()))?;

        for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
            println!("   {}", line);
        }

        if output.success() {
            info!("Script for {} finished", context.module);
            return Ok(());
        }

        debug!("Script stderr:\n{}", output.stderr);
        let status = output
            .status
            .map_or_else(|| "terminated by signal".to_string(), |code| format!("exited with status {}", code));
        let message = output
            .last_error_line()
            .map(str::to_string)
            .unwrap_or_else(|| status.clone());

        let mut trace: Vec<String> = output
            .stderr
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();
        trace.push(format!("{} {}", location, status));

        Err(ScriptFailure::new(message, location).with_trace(trace))
    }
}
