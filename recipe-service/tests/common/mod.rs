#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::oid::ObjectId;
use recipe_service::{
    build_router,
    models::{RecipeDocument, RecipeFields},
    services::{MockRecipeStore, RecipeStore},
    AppState,
};
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MockRecipeStore>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let store = Arc::new(MockRecipeStore::new());
        let router = build_router(AppState::new(store.clone()), false);
        Self { router, store }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        send(&self.router, method, uri, body).await
    }
}

/// App wired to a store whose every call fails.
pub fn spawn_with_failing_store() -> Router {
    build_router(AppState::new(Arc::new(FailingStore)), false)
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub const PASTA: &str = r#"{"name":"Pasta","tags":["italian"],"ingredients":["pasta","salt"],"instructions":["boil","serve"]}"#;

pub struct FailingStore;

#[async_trait]
impl RecipeStore for FailingStore {
    async fn find_all(&self) -> anyhow::Result<Vec<RecipeDocument>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_id(&self, _id: ObjectId) -> anyhow::Result<Option<RecipeDocument>> {
        anyhow::bail!("connection refused")
    }

    async fn insert(&self, _recipe: &RecipeDocument) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }

    async fn update_fields(&self, _id: ObjectId, _fields: RecipeFields) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused")
    }

    async fn delete_by_id(&self, _id: ObjectId) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused")
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
}
