//! Mapping from parsed subcommands to command implementations

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use idea_factory_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        let workspace = ctx.workspace()?;

        let result = match self {
            Commands::CreateBatch(args) => {
                commands::create::execute_batch(cli, &workspace, args, ctx.now())
            }
            Commands::CreateStory(args) => {
                commands::create::execute_story(cli, &workspace, args, ctx.now())
            }
            Commands::List(args) => commands::list::execute(cli, &workspace, args),
            Commands::Search(args) => commands::search::execute(cli, &workspace, args),
            Commands::Show(args) => commands::show::execute(cli, &workspace, args),
            Commands::Develop(args) => {
                commands::develop::execute(cli, &workspace, args, ctx.now())
            }
            Commands::Note(args) => commands::note::execute(cli, &workspace, args, ctx.now()),
            Commands::Move(args) => commands::relocate::execute(cli, &workspace, args),
            Commands::UpdateIndex => commands::index::execute(cli, &workspace),
            Commands::Stats(args) => commands::stats::execute(cli, &workspace, args),
            Commands::Export(args) => commands::export::execute(cli, &workspace, args),
            Commands::FindSimilar(args) => commands::similar::execute(cli, &workspace, args),
        };

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
