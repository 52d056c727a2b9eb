use crate::cli::GlobalFlags;
use crate::cli::root_commands::PopularArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faqdesk popular`.
pub async fn handle(args: &PopularArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(args.top, flags.limit, ctx.config.search.popular_limit);
    let all = ctx.collection().await?;
    output(&faq_search::popular(&all, limit), flags.format)
}
