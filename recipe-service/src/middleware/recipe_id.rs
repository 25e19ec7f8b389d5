use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Recipe identifier taken from the `{id}` path segment.
///
/// A segment that is not a valid ObjectId is rejected as 404, the same as an
/// id that matches nothing. Being a parts extractor, it runs before any body
/// extractor, so a bad id wins over a bad body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeId(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Missing recipe id path segment");
                AppError::NotFound(anyhow::anyhow!(RECIPE_NOT_FOUND))
            })?;

        let id = ObjectId::parse_str(&raw).map_err(|e| {
            tracing::debug!(recipe_id = %raw, error = %e, "Unparseable recipe id");
            AppError::NotFound(anyhow::anyhow!(RECIPE_NOT_FOUND))
        })?;

        Ok(RecipeId(id))
    }
}
