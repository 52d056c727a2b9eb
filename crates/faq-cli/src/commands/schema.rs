use faq_core::entities::{Faq, NewQuestion, VoteCounts};
use faq_core::responses::{FaqListResponse, VoteSummary};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `faqdesk schema`.
const TYPE_NAMES: &[&str] = &["faq", "vote-counts", "new-question", "vote-summary", "faq-list"];

/// Handle `faqdesk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(&args.type_name)?, flags.format)
}

fn schema_value(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.trim().replace('_', "-").as_str() {
        "faq" => schema_for!(Faq),
        "vote-counts" => schema_for!(VoteCounts),
        "new-question" => schema_for!(NewQuestion),
        "vote-summary" => schema_for!(VoteSummary),
        "faq-list" => schema_for!(FaqListResponse),
        _ => anyhow::bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
