pub mod recipe_id;

pub use recipe_id::{RecipeId, RECIPE_NOT_FOUND};
