//! Shareable deep links to a single FAQ entry.

use crate::errors::CoreError;

/// Build `{origin}?faq={id}` for the entry, percent-encoding the id.
///
/// A trailing `/` on the origin is kept as given; the site routes both forms.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if `origin` is blank.
pub fn share_link(origin: &str, id: &str) -> Result<String, CoreError> {
    let origin = origin.trim();
    if origin.is_empty() {
        return Err(CoreError::Validation(
            "site origin is not configured".to_string(),
        ));
    }
    Ok(format!("{origin}?faq={}", urlencoding::encode(id)))
}
