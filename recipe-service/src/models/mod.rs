pub mod recipe;

pub use recipe::{null_as_default, RecipeDocument, RecipeFields};
