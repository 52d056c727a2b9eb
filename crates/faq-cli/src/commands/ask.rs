use std::io::Read;

use anyhow::Context;
use faq_core::entities::NewQuestion;
use faq_core::responses::QuestionReceipt;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faqdesk ask`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = match &args.question {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read question from stdin")?;
            buf
        }
    };

    let question = NewQuestion {
        email: args.email.clone(),
        name: args.name.clone(),
        ..NewQuestion::new(text)
    };

    let message = ctx.client.submit_question(&question).await?;
    output(
        &QuestionReceipt {
            accepted: true,
            message,
        },
        flags.format,
    )
}
