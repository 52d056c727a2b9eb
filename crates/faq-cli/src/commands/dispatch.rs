use faq_core::enums::VoteKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Categories => commands::categories::handle(ctx, flags).await,
        Commands::Popular(args) => commands::popular::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Like(args) => commands::vote::handle(&args, VoteKind::Like, ctx, flags).await,
        Commands::Dislike(args) => commands::vote::handle(&args, VoteKind::Dislike, ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::Schema(_) | Commands::Config => {
            unreachable!("schema/config are pre-dispatched in main")
        }
    }
}
