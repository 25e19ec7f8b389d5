pub mod database;
pub mod metrics;
pub mod store;

pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics, record_recipe_operation};
pub use store::{MockRecipeStore, MongoRecipeStore, RecipeStore};
