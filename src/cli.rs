//! CLI argument definitions using clap derive macros.

use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// Add an Entity Framework Core migration
///
/// Wraps `dotnet ef migrations add` so the project, output directory, and
/// startup project don't have to be typed out every time.
#[derive(Parser, Debug)]
#[command(name = "efmig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name for the new migration (e.g. AddUserTable)
    pub name: String,

    /// Project containing the DbContext
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Directory for generated migration sources
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Startup project used to build and resolve the DbContext
    #[arg(short, long)]
    pub startup_project: Option<PathBuf>,

    /// Print the dotnet ef invocation without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Exit code for a parse failure.
///
/// Help and version requests are not errors; everything else is a usage
/// error and exits 1.
pub fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
