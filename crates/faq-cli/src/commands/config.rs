use faq_config::FaqConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `faqdesk config`.
pub fn handle(config: &FaqConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
