use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope for operations that return no resource. Exactly one of
/// the two fields is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Recipe has been updated")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Recipe not found")]
    pub error: Option<String>,
}

impl Message {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            message: Some(description.into()),
            error: None,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(description.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error() {
        let json = serde_json::to_value(Message::success("Recipe has been deleted")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Recipe has been deleted" }));
    }

    #[test]
    fn test_error_omits_message() {
        let json = serde_json::to_value(Message::error("Recipe not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Recipe not found" }));
    }
}
