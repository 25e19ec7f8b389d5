//! Request extractors shared across services.

use crate::error::AppError;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that reports every failure as a 400.
///
/// Unlike `axum::Json`, the `Content-Type` header is not checked and type
/// mismatches are not turned into 422s. The rejection body carries the
/// deserializer's message.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read request body: {}", e))
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejecting malformed JSON body");
            AppError::BadRequest(anyhow::anyhow!(e))
        })?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_body_without_content_type() {
        let JsonBody(sample) =
            JsonBody::<Sample>::from_request(request(r#"{"name":"Pasta","extra":1}"#), &())
                .await
                .unwrap();
        assert_eq!(sample.name, "Pasta");
        assert!(sample.tags.is_empty());
    }

    #[tokio::test]
    async fn type_mismatch_is_bad_request() {
        let err = JsonBody::<Sample>::from_request(request(r#"{"tags":"italian"}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let err = JsonBody::<Sample>::from_request(request("{not json"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
