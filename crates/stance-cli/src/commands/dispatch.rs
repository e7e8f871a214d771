use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(args, ctx, flags),
        Commands::Rules { action } => commands::rules::handle(action, ctx, flags),
        Commands::Syndromes => commands::syndromes::handle(ctx, flags),
        Commands::Checklist(args) => commands::checklist::handle(args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
