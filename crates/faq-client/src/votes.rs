//! Like/dislike mutations.

use faq_core::entities::VoteCounts;
use faq_core::enums::VoteKind;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{
    FaqClient,
    error::VoteError,
    http::{check_response, extract_error_message},
};

impl FaqClient {
    /// Record a like for entry `id`.
    ///
    /// # Errors
    ///
    /// See [`Self::vote`].
    pub async fn like(&self, id: &str) -> Result<VoteCounts, VoteError> {
        self.vote(id, VoteKind::Like).await
    }

    /// Record a dislike for entry `id`.
    ///
    /// # Errors
    ///
    /// See [`Self::vote`].
    pub async fn dislike(&self, id: &str) -> Result<VoteCounts, VoteError> {
        self.vote(id, VoteKind::Dislike).await
    }

    /// POST `{base}/{like|dislike}/{id}` and return the server's counters.
    ///
    /// # Errors
    ///
    /// Returns [`VoteError`] with a message taken from the error body (or a
    /// generic `Failed to {kind} FAQ: {status}`) on a non-success status, or
    /// a transport message if no response arrived.
    pub async fn vote(&self, id: &str, kind: VoteKind) -> Result<VoteCounts, VoteError> {
        let url = vote_url(&self.collection_url, id, kind);
        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(id, %kind, %e, "vote request failed");
                VoteError::transport()
            })?;

        read_vote(resp, id, kind).await
    }
}

/// Per-action endpoint for a vote.
#[must_use]
pub fn vote_url(collection_url: &str, id: &str, kind: VoteKind) -> String {
    format!("{collection_url}/{kind}/{}", urlencoding::encode(id))
}

pub(crate) async fn read_vote(
    resp: reqwest::Response,
    id: &str,
    kind: VoteKind,
) -> Result<VoteCounts, VoteError> {
    let resp = check_response(resp).await.map_err(|failure| {
        let generic = VoteError::generic_message(kind, failure.status);
        let message = extract_error_message(&failure.body, &generic);
        tracing::warn!(id, %kind, status = failure.status, %message, "vote rejected");
        VoteError::new(message, Some(failure.status))
    })?;

    let body = resp.text().await.unwrap_or_else(|e| {
        tracing::warn!(id, %kind, %e, "failed to read vote response body");
        String::new()
    });

    Ok(parse_vote_body(&body, id, kind))
}

/// Read the counters from a successful vote response.
///
/// - Empty or not JSON: [`VoteCounts::fallback`], since the request
///   succeeded and the single vote just cast is assumed.
/// - A JSON object: each counter that is a non-negative integer.
/// - Any other JSON value: no counters, so the local ones are kept.
#[must_use]
pub fn parse_vote_body(body: &str, id: &str, kind: VoteKind) -> VoteCounts {
    if body.trim().is_empty() {
        tracing::warn!(id, %kind, "vote response body is empty; using fallback counters");
        return VoteCounts::fallback(kind);
    }

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(id, %kind, %e, "vote response is not JSON; using fallback counters");
            return VoteCounts::fallback(kind);
        }
    };

    if !value.is_object() {
        tracing::debug!(id, %kind, "vote response carries no counters");
        return VoteCounts::default();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(id, %kind, %e, "vote response counters unreadable; keeping local counters");
        VoteCounts::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn vote_url_is_keyed_by_action_and_id() {
        let base = "https://api.example.com/faqs";
        assert_eq!(
            vote_url(base, "1", VoteKind::Like),
            "https://api.example.com/faqs/like/1"
        );
        assert_eq!(
            vote_url(base, "a/b", VoteKind::Dislike),
            "https://api.example.com/faqs/dislike/a%2Fb"
        );
    }

    #[tokio::test]
    async fn success_adopts_server_counters() {
        let counts = read_vote(mock_response(200, r#"{"likes":3,"dislikes":0}"#), "1", VoteKind::Like)
            .await
            .unwrap();
        assert_eq!(counts, VoteCounts::new(3, 0));
    }

    #[tokio::test]
    async fn empty_success_body_synthesizes_fallback() {
        let counts = read_vote(mock_response(200, ""), "1", VoteKind::Dislike)
            .await
            .unwrap();
        assert_eq!(counts, VoteCounts::new(0, 1));
    }

    #[tokio::test]
    async fn unparseable_success_body_synthesizes_fallback() {
        let counts = read_vote(mock_response(200, "OK"), "1", VoteKind::Like)
            .await
            .unwrap();
        assert_eq!(counts, VoteCounts::new(1, 0));
    }

    #[test]
    fn string_counters_keep_local_values() {
        let counts = parse_vote_body(r#"{"likes":"42","dislikes":"7"}"#, "1", VoteKind::Like);
        assert_eq!(counts, VoteCounts::default());
    }

    #[test]
    fn mixed_counters_apply_only_numbers() {
        let counts = parse_vote_body(r#"{"likes":4,"dislikes":"7"}"#, "1", VoteKind::Like);
        assert_eq!(counts.apply(2, 3), (4, 3));
    }

    #[test]
    fn non_object_json_keeps_local_values() {
        for body in ["5", "[]", "null", r#""ok""#] {
            assert_eq!(parse_vote_body(body, "1", VoteKind::Dislike), VoteCounts::default(), "{body}");
        }
    }

    #[tokio::test]
    async fn error_body_title_becomes_message() {
        let err = read_vote(
            mock_response(400, r#"{"title":"Bad Request","status":400}"#),
            "1",
            VoteKind::Like,
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Bad Request");
        assert_eq!(err.status, Some(400));
    }

    #[tokio::test]
    async fn raw_error_text_becomes_message() {
        let err = read_vote(mock_response(502, "Bad Gateway"), "1", VoteKind::Dislike)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[tokio::test]
    async fn empty_error_body_uses_generic_message() {
        let err = read_vote(mock_response(500, ""), "1", VoteKind::Like)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to like FAQ: 500");
    }
}
