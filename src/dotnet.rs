//! dotnet ef integration.
//!
//! Builds and runs `dotnet ef migrations add` invocations. Arguments are
//! passed as an argv vector, never through a shell.

use crate::error::{EfmigError, EfmigResult};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Check if the dotnet CLI is installed and available.
pub fn check_dotnet() -> EfmigResult<()> {
    match which::which("dotnet") {
        Ok(path) => {
            debug!("Found dotnet at: {:?}", path);
            Ok(())
        }
        Err(_) => Err(EfmigError::DotnetNotFound),
    }
}

/// A `dotnet ef migrations add` invocation.
#[derive(Debug, Clone)]
pub struct AddMigration {
    pub name: String,
    pub project: PathBuf,
    pub output_dir: PathBuf,
    pub startup_project: PathBuf,
}

impl AddMigration {
    /// Arguments passed to the dotnet CLI, in order.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "ef".to_string(),
            "migrations".to_string(),
            "add".to_string(),
            self.name.clone(),
            "--project".to_string(),
            self.project.display().to_string(),
            "--output-dir".to_string(),
            self.output_dir.display().to_string(),
            "--startup-project".to_string(),
            self.startup_project.display().to_string(),
        ]
    }

    /// The full command line, for logging and --dry-run output.
    pub fn render(&self) -> String {
        let mut line = String::from("dotnet");
        for arg in self.to_args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    /// Run the invocation, inheriting stdio, and return the child's exit code.
    ///
    /// A non-zero child status is not an error here; the caller forwards it
    /// as the process exit code.
    pub fn run(&self) -> EfmigResult<i32> {
        debug!("Running: {}", self.render());

        let mut command = Command::new("dotnet");
        command.args(self.to_args());

        wait_exit_code(&mut command)
    }
}

/// Wait for a command to finish and extract its exit code.
fn wait_exit_code(command: &mut Command) -> EfmigResult<i32> {
    let status = command.status()?;

    // Terminated by a signal: no code to forward.
    Ok(status.code().unwrap_or(1))
}
