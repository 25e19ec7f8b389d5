use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same as an absent field. Pair with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// A recipe as stored in the `recipes` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(
        rename = "publishedAt",
        default = "unix_epoch",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub published_at: DateTime<Utc>,
}

/// The caller-editable part of a recipe. Updates write exactly these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFields {
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDocument {
    /// Fresh document with a new id and the current time, at the millisecond
    /// precision BSON datetimes keep.
    pub fn new(fields: RecipeFields) -> Self {
        Self {
            id: ObjectId::new(),
            name: fields.name,
            tags: fields.tags,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            published_at: mongodb::bson::DateTime::now().to_chrono(),
        }
    }

    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            name: self.name.clone(),
            tags: self.tags.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    /// Overwrite the editable fields, leaving id and timestamp untouched.
    pub fn apply(&mut self, fields: RecipeFields) {
        self.name = fields.name;
        self.tags = fields.tags;
        self.ingredients = fields.ingredients;
        self.instructions = fields.instructions;
    }
}
