use faq_search::{compute_categories, sorted_categories};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faqdesk categories`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let all = ctx.collection().await?;
    let mut entries = sorted_categories(&compute_categories(&all));
    if let Some(limit) = flags.row_limit() {
        entries.truncate(limit);
    }
    output(&entries, flags.format)
}
