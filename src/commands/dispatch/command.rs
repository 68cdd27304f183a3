//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::cli::Cli;
use idea_factory_core::error::Result;
use idea_factory_core::store::Workspace;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Discover the workspace from the resolved root
    pub fn workspace(&self) -> Result<Workspace> {
        let workspace = Workspace::discover(self.root)?;
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            root = %workspace.root().display(),
            "discover_workspace"
        );
        Ok(workspace)
    }

    /// Local wall-clock time used for dates, ids and note stamps
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("idea-factory {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Capture, search and develop AI-generated story concepts.");
        println!();
        println!("Run `idea-factory --help` for usage information.");
        Ok(())
    }
}
