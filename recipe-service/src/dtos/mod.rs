pub mod message;
pub mod recipe;

pub use message::Message;
pub use recipe::{Recipe, RecipeRequest};
