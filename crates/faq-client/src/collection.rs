//! FAQ collection retrieval.

use faq_core::entities::Faq;

use crate::{FaqClient, error::FetchError, http::check_response};

impl FaqClient {
    /// Fetch the full FAQ collection from the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::RequestFailed`] on transport failure or a
    /// non-success status. Empty and malformed bodies are not errors; see
    /// [`parse_collection`].
    pub async fn fetch_collection(&self) -> Result<Vec<Faq>, FetchError> {
        let resp = self
            .http
            .get(&self.collection_url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.collection_url, %e, "FAQ collection request failed");
                FetchError::RequestFailed {
                    status: None,
                    reason: e.to_string(),
                }
            })?;

        read_collection(resp, &self.collection_url).await
    }
}

/// Turn a collection response into entries.
pub(crate) async fn read_collection(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<Vec<Faq>, FetchError> {
    let resp = check_response(resp).await.map_err(|failure| {
        tracing::warn!(endpoint, status = failure.status, "FAQ collection returned an error status");
        FetchError::RequestFailed {
            status: Some(failure.status),
            reason: failure.body,
        }
    })?;

    let body = resp.text().await.map_err(|e| FetchError::RequestFailed {
        status: None,
        reason: e.to_string(),
    })?;

    Ok(parse_collection(&body, endpoint))
}

/// Parse a collection body leniently.
///
/// An empty body is a valid, empty collection. A body that does not parse as
/// an array of entries is logged and also treated as empty.
#[must_use]
pub fn parse_collection(body: &str, endpoint: &str) -> Vec<Faq> {
    if body.trim().is_empty() {
        tracing::debug!(endpoint, "FAQ collection body is empty");
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Faq>>(body) {
        Ok(faqs) => {
            tracing::debug!(endpoint, count = faqs.len(), "fetched FAQ collection");
            faqs
        }
        Err(e) => {
            tracing::warn!(endpoint, %e, "failed to parse FAQ collection; treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://api.example.com/faqs";

    const FIXTURE: &str = r#"[
        {
            "id": "1",
            "question": "How do I reset my password?",
            "answer": "Use the link on the sign-in page.",
            "tags": ["account"],
            "likes": 2,
            "dislikes": 0,
            "createdAt": "2024-05-01T10:00:00Z"
        },
        {
            "id": 2,
            "question": "Billing cycle?",
            "answer": "Monthly, on the signup date.",
            "tags": ["billing"],
            "likes": 0,
            "dislikes": 1,
            "createdAt": "2024-05-02T08:15:00",
            "helpfulCount": 9
        }
    ]"#;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn parses_collection_fixture() {
        let faqs = parse_collection(FIXTURE, ENDPOINT);
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].id, "1");
        assert_eq!(faqs[1].id, "2");
        assert_eq!(faqs[1].helpful_count, Some(9));
        assert_eq!(faqs[0].tags, vec!["account".to_string()]);
    }

    #[test]
    fn empty_body_is_empty_collection() {
        assert!(parse_collection("", ENDPOINT).is_empty());
        assert!(parse_collection("  \n", ENDPOINT).is_empty());
    }

    #[test]
    fn malformed_body_degrades_to_empty() {
        assert!(parse_collection("<html>oops</html>", ENDPOINT).is_empty());
        assert!(parse_collection(r#"{"items":[]}"#, ENDPOINT).is_empty());
    }

    #[tokio::test]
    async fn server_error_is_request_failed() {
        let err = read_collection(mock_response(500, "boom"), ENDPOINT)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch FAQs");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn success_with_empty_body_is_ok() {
        let faqs = read_collection(mock_response(200, ""), ENDPOINT)
            .await
            .unwrap();
        assert!(faqs.is_empty());
    }

    #[tokio::test]
    async fn success_with_fixture_is_parsed() {
        let faqs = read_collection(mock_response(200, FIXTURE), ENDPOINT)
            .await
            .unwrap();
        assert_eq!(faqs.len(), 2);
    }
}
