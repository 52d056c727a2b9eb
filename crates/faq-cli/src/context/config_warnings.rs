use faq_config::FaqConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FaqConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FaqConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "FAQDESK_API") {
        warnings.push(
            "API config appears default while FAQDESK_API* env vars exist. Use double underscores (example: FAQDESK_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.site.is_configured() && has_single_underscore_key(&env_keys, "FAQDESK_SITE") {
        warnings.push(
            "Site config appears default while FAQDESK_SITE* env vars exist. Use double underscores (example: FAQDESK_SITE__ORIGIN)."
                .to_string(),
        );
    }

    warnings
}

/// `FAQDESK_API_URL` matches, `FAQDESK_API__BASE_URL` does not.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use faq_config::{ApiConfig, FaqConfig, SiteConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &FaqConfig::default(),
            vec![
                ("FAQDESK_API_BASE_URL".to_string(), "https://x".to_string()),
                ("FAQDESK_SITE_ORIGIN".to_string(), "https://site".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("FAQDESK_API__BASE_URL"));
    }

    #[test]
    fn does_not_warn_for_double_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &FaqConfig::default(),
            vec![("FAQDESK_API__BASE_URL".to_string(), String::new())],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = FaqConfig {
            api: ApiConfig {
                base_url: "https://api.example.com/faqs".to_string(),
                ..Default::default()
            },
            site: SiteConfig {
                origin: "https://example.com".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("FAQDESK_API_BASE_URL".to_string(), "x".to_string()),
                ("FAQDESK_SITE_ORIGIN".to_string(), "y".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
