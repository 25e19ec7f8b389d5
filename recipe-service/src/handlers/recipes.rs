//! Recipe CRUD handlers.
//!
//! Each handler does one store call. Store failures become 500s whose body
//! carries only the context attached here; the underlying error is logged.

use crate::dtos::{Message, Recipe, RecipeRequest};
use crate::middleware::{RecipeId, RECIPE_NOT_FOUND};
use crate::models::RecipeDocument;
use crate::services::record_recipe_operation;
use crate::AppState;
use axum::{extract::State, http::Uri, Json};
use service_core::error::AppError;
use service_core::extract::JsonBody;

fn store_failure(
    operation: &'static str,
    context: &'static str,
) -> impl FnOnce(anyhow::Error) -> AppError {
    move |err| {
        record_recipe_operation(operation, "error");
        AppError::DatabaseError(err.context(context))
    }
}

/// List every recipe
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "Successful operation", body = [Recipe]),
        (status = 500, description = "Server Error", body = Message)
    ),
    tag = "Recipes"
)]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state
        .store
        .find_all()
        .await
        .map_err(store_failure("list", "Error while listing recipes"))?;

    tracing::debug!(count = recipes.len(), "Listed recipes");
    record_recipe_operation("list", "ok");

    Ok(Json(recipes.into_iter().map(Recipe::from).collect()))
}

/// Get one recipe
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "ID of the recipe")
    ),
    responses(
        (status = 200, description = "Successful operation", body = Recipe),
        (status = 404, description = "Invalid recipe ID", body = Message),
        (status = 500, description = "Server Error", body = Message)
    ),
    tag = "Recipes"
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state
        .store
        .find_by_id(id)
        .await
        .map_err(store_failure("get", "Error while fetching the recipe"))?
        .ok_or_else(|| {
            record_recipe_operation("get", "not_found");
            AppError::NotFound(anyhow::anyhow!(RECIPE_NOT_FOUND))
        })?;

    record_recipe_operation("get", "ok");
    Ok(Json(Recipe::from(recipe)))
}

/// Create a new recipe
///
/// The server assigns `id` and `publishedAt`; values sent by the client are ignored.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Successful operation", body = Recipe),
        (status = 400, description = "Invalid input", body = Message),
        (status = 500, description = "Server Error", body = Message)
    ),
    tag = "Recipes"
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RecipeRequest>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = RecipeDocument::new(payload.into());

    tracing::info!(
        recipe_id = %recipe.id,
        name = %recipe.name,
        "Creating recipe"
    );

    state
        .store
        .insert(&recipe)
        .await
        .map_err(store_failure("create", "Error while inserting a new recipe"))?;

    record_recipe_operation("create", "ok");
    Ok(Json(Recipe::from(recipe)))
}

/// Update an existing recipe
///
/// Only name, tags, ingredients and instructions are written.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "ID of the recipe")
    ),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Successful operation", body = Message),
        (status = 400, description = "Invalid input", body = Message),
        (status = 404, description = "Invalid recipe ID", body = Message),
        (status = 500, description = "Server Error", body = Message)
    ),
    tag = "Recipes"
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
    JsonBody(payload): JsonBody<RecipeRequest>,
) -> Result<Json<Message>, AppError> {
    let matched = state
        .store
        .update_fields(id, payload.into())
        .await
        .map_err(store_failure("update", "Error while updating the recipe"))?;

    // Zero matches is still reported as success.
    tracing::info!(recipe_id = %id, matched, "Updated recipe");
    record_recipe_operation("update", "ok");

    Ok(Json(Message::success("Recipe has been updated")))
}

/// Delete an existing recipe
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "ID of the recipe")
    ),
    responses(
        (status = 200, description = "Successful operation", body = Message),
        (status = 404, description = "Invalid recipe ID", body = Message),
        (status = 500, description = "Server Error", body = Message)
    ),
    tag = "Recipes"
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<Json<Message>, AppError> {
    let deleted = state
        .store
        .delete_by_id(id)
        .await
        .map_err(store_failure("delete", "Error while deleting the recipe"))?;

    tracing::info!(recipe_id = %id, deleted, "Deleted recipe");
    record_recipe_operation("delete", "ok");

    Ok(Json(Message::success("Recipe has been deleted")))
}

/// Unmatched routes. Anything under `/recipes` reads as a missing recipe.
pub async fn not_found(uri: Uri) -> AppError {
    if uri.path().starts_with("/recipes") {
        AppError::NotFound(anyhow::anyhow!(RECIPE_NOT_FOUND))
    } else {
        AppError::NotFound(anyhow::anyhow!("Not found"))
    }
}
