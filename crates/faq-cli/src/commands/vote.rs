use std::sync::Arc;

use faq_core::enums::VoteKind;
use faq_session::VoteController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VoteArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faqdesk like` and `faqdesk dislike`.
///
/// Counters are seeded from the fetched entry. If the collection is
/// unavailable the vote is still sent, starting from zero.
pub async fn handle(
    args: &VoteArgs,
    kind: VoteKind,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = Arc::new(ctx.client.clone());
    let votes = match ctx.find(&args.id).await {
        Ok(faq) => VoteController::new(&faq, client),
        Err(error) => {
            tracing::warn!(id = %args.id, error = %error, "could not seed vote counters; starting from zero");
            VoteController::with_counts(&args.id, 0, 0, client)
        }
    };

    let outcome = votes.vote(kind).await;
    output(&votes.summary(), flags.format)?;
    outcome.into_result()?;
    Ok(())
}
