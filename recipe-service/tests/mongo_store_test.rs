use mongodb::bson::oid::ObjectId;
use recipe_service::{
    config::MongoConfig,
    models::{RecipeDocument, RecipeFields},
    services::{MongoDb, MongoRecipeStore, RecipeStore},
};
use uuid::Uuid;

async fn setup_store() -> (MongoDb, MongoRecipeStore, String) {
    dotenvy::dotenv().ok();
    let db_name = format!("recipes_test_{}", Uuid::new_v4().simple());
    let config = MongoConfig {
        uri: std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database: db_name.clone(),
        timeout_secs: 5,
    };

    let db = MongoDb::connect(&config)
        .await
        .expect("Failed to connect to DB");
    let store = MongoRecipeStore::new(db.clone());
    (db, store, db_name)
}

async fn teardown(db: &MongoDb, db_name: &str) {
    db.client().database(db_name).drop(None).await.unwrap();
}

fn fields(name: &str) -> RecipeFields {
    RecipeFields {
        name: name.to_string(),
        tags: vec!["italian".to_string()],
        ingredients: vec!["pasta".to_string(), "salt".to_string()],
        instructions: vec!["boil".to_string(), "serve".to_string()],
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGO_URI)"]
async fn test_mongo_store_lifecycle() {
    let (db, store, db_name) = setup_store().await;

    let recipe = RecipeDocument::new(fields("Pasta"));
    store.insert(&recipe).await.unwrap();

    let stored = store.find_by_id(recipe.id).await.unwrap().unwrap();
    assert_eq!(stored, recipe);

    let matched = store
        .update_fields(recipe.id, fields("Carbonara"))
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let updated = store.find_by_id(recipe.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Carbonara");
    assert_eq!(updated.published_at, recipe.published_at);

    assert_eq!(store.find_all().await.unwrap().len(), 1);

    assert_eq!(store.delete_by_id(recipe.id).await.unwrap(), 1);
    assert!(store.find_by_id(recipe.id).await.unwrap().is_none());

    teardown(&db, &db_name).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB (set MONGO_URI)"]
async fn test_mongo_store_zero_match_is_not_an_error() {
    let (db, store, db_name) = setup_store().await;

    let missing = ObjectId::new();
    assert_eq!(store.update_fields(missing, fields("Ghost")).await.unwrap(), 0);
    assert_eq!(store.delete_by_id(missing).await.unwrap(), 0);
    store.health_check().await.unwrap();

    teardown(&db, &db_name).await;
}

#[tokio::test]
async fn test_connect_fails_fast_when_unreachable() {
    let config = MongoConfig {
        uri: "mongodb://127.0.0.1:1".to_string(),
        database: "recipes_unreachable".to_string(),
        timeout_secs: 1,
    };

    assert!(MongoDb::connect(&config).await.is_err());
}
