//! Persistence boundary for recipes.
//!
//! Handlers only see [`RecipeStore`]; the MongoDB implementation and an
//! in-memory one used by tests live here.

use crate::models::{RecipeDocument, RecipeFields};
use crate::services::database::{MongoDb, RECIPES_COLLECTION};
use anyhow::Result;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use std::sync::Mutex;

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every recipe, in store iteration order.
    async fn find_all(&self) -> Result<Vec<RecipeDocument>>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<RecipeDocument>>;
    async fn insert(&self, recipe: &RecipeDocument) -> Result<()>;
    /// Overwrite the editable fields of one recipe. Returns how many
    /// documents matched; zero is not an error.
    async fn update_fields(&self, id: ObjectId, fields: RecipeFields) -> Result<u64>;
    /// Returns how many documents were removed; zero is not an error.
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64>;
    async fn health_check(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct MongoRecipeStore {
    db: MongoDb,
    recipes: Collection<RecipeDocument>,
}

impl MongoRecipeStore {
    pub fn new(db: MongoDb) -> Self {
        let recipes = db.database().collection(RECIPES_COLLECTION);
        Self { db, recipes }
    }
}

#[async_trait]
impl RecipeStore for MongoRecipeStore {
    async fn find_all(&self) -> Result<Vec<RecipeDocument>> {
        let mut cursor = self.recipes.find(doc! {}, None).await?;

        let mut recipes = Vec::new();
        while let Some(recipe) = cursor.try_next().await? {
            recipes.push(recipe);
        }
        Ok(recipes)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<RecipeDocument>> {
        let recipe = self.recipes.find_one(doc! { "_id": id }, None).await?;
        Ok(recipe)
    }

    async fn insert(&self, recipe: &RecipeDocument) -> Result<()> {
        self.recipes.insert_one(recipe, None).await?;
        Ok(())
    }

    async fn update_fields(&self, id: ObjectId, fields: RecipeFields) -> Result<u64> {
        let update = doc! {
            "$set": {
                "name": fields.name,
                "tags": fields.tags,
                "ingredients": fields.ingredients,
                "instructions": fields.instructions,
            }
        };
        let result = self
            .recipes
            .update_one(doc! { "_id": id }, update, None)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64> {
        let result = self.recipes.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<()> {
        self.db.health_check().await?;
        Ok(())
    }
}

/// In-memory store keeping insertion order, for tests and local runs.
pub struct MockRecipeStore {
    pub recipes: Mutex<Vec<RecipeDocument>>,
}

impl Default for MockRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRecipeStore {
    pub fn new() -> Self {
        Self {
            recipes: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecipeStore for MockRecipeStore {
    async fn find_all(&self) -> Result<Vec<RecipeDocument>> {
        let recipes = self
            .recipes
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .clone();
        Ok(recipes)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<RecipeDocument>> {
        let recipe = self
            .recipes
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .iter()
            .find(|r| r.id == id)
            .cloned();
        Ok(recipe)
    }

    async fn insert(&self, recipe: &RecipeDocument) -> Result<()> {
        let mut recipes = self
            .recipes
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?;
        if recipes.iter().any(|r| r.id == recipe.id) {
            anyhow::bail!("duplicate key: {}", recipe.id);
        }
        recipes.push(recipe.clone());
        Ok(())
    }

    async fn update_fields(&self, id: ObjectId, fields: RecipeFields) -> Result<u64> {
        let mut recipes = self
            .recipes
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?;
        match recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.apply(fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64> {
        let mut recipes = self
            .recipes
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        Ok((before - recipes.len()) as u64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
