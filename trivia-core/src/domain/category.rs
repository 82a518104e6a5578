use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ids::CategoryId;

/// A read-only question category, e.g. "Science" or "History".
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 255))]
    pub kind: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}
