use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::models::{Feedback, Question};
use crate::protocol::{EVALUATE_PATH, EvaluateRequest, GENERATE_PATH, GenerateRequest};

use super::ApiError;

/// The two remote operations the quiz client depends on.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Generate a new question.
    async fn generate(&self, request: &GenerateRequest) -> Result<Question, ApiError>;

    /// Evaluate a submitted answer.
    async fn evaluate(&self, request: &EvaluateRequest) -> Result<Feedback, ApiError>;
}

/// `QuizBackend` over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "sending request");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        tracing::debug!(%url, %status, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            tracing::warn!(%url, error = %err, "request rejected");
            return Err(err);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<Question, ApiError> {
        self.post(GENERATE_PATH, request).await
    }

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<Feedback, ApiError> {
        self.post(EVALUATE_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = BackendConfig {
            base_url: "http://quiz.local:8000/".to_string(),
            timeout: None,
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://quiz.local:8000");
        assert_eq!(
            backend.endpoint(GENERATE_PATH),
            "http://quiz.local:8000/api/generate"
        );
    }
}
