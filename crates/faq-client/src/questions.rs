//! Visitor question submission.

use faq_core::entities::NewQuestion;

use crate::{
    FaqClient,
    error::{QUESTION_GENERIC_MESSAGE, QuestionError},
    http::{check_response, extract_error_message},
};

/// Acknowledgement shown once a question is accepted.
pub const QUESTION_ACCEPTED_MESSAGE: &str = "Thank you for your question! We'll review it shortly.";

impl FaqClient {
    /// Validate and POST a question to the questions endpoint.
    ///
    /// Returns the acknowledgement message on success.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::Invalid`] without sending anything if the
    /// question fails validation, [`QuestionError::Rejected`] on a
    /// non-success status, or [`QuestionError::Http`] on transport failure.
    pub async fn submit_question(&self, question: &NewQuestion) -> Result<String, QuestionError> {
        question.validate()?;

        let payload = NewQuestion {
            question: question.question.trim().to_string(),
            ..question.clone()
        };

        let resp = self
            .http
            .post(&self.questions_url)
            .json(&payload)
            .send()
            .await?;

        read_submission(resp).await
    }
}

pub(crate) async fn read_submission(resp: reqwest::Response) -> Result<String, QuestionError> {
    check_response(resp).await.map_err(|failure| {
        let message = extract_error_message(&failure.body, QUESTION_GENERIC_MESSAGE);
        tracing::warn!(status = failure.status, %message, "question submission rejected");
        QuestionError::Rejected {
            status: failure.status,
            message,
        }
    })?;

    Ok(QUESTION_ACCEPTED_MESSAGE.to_string())
}
