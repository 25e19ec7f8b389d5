use crate::models::{null_as_default, RecipeDocument, RecipeFields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipe as returned over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Pasta")]
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

impl From<RecipeDocument> for Recipe {
    fn from(doc: RecipeDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            tags: doc.tags,
            ingredients: doc.ingredients,
            instructions: doc.instructions,
            published_at: doc.published_at,
        }
    }
}

/// Body accepted by create and update. Missing or `null` fields default to empty;
/// `id` and `publishedAt` are server-owned and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RecipeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Pasta")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = json!(["italian"]))]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = json!(["pasta", "salt"]))]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = json!(["boil", "serve"]))]
    pub instructions: Vec<String>,
}

impl From<RecipeRequest> for RecipeFields {
    fn from(req: RecipeRequest) -> Self {
        Self {
            name: req.name,
            tags: req.tags,
            ingredients: req.ingredients,
            instructions: req.instructions,
        }
    }
}
