use anyhow::Context;
use faq_core::links::share_link;
use faq_core::responses::FaqDetailResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faqdesk show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let faq = ctx.find(&args.id).await?;
    let share_link = if ctx.config.site.is_configured() {
        Some(share_link(&ctx.config.site.origin, &faq.id).context("failed to build share link")?)
    } else {
        None
    };

    output(&FaqDetailResponse { faq, share_link }, flags.format)
}
