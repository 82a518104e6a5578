use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trivia_core::{Category, CategoryId};

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            kind: category.kind,
        }
    }
}

/// Category labels keyed by id, as the frontend expects them.
pub fn category_labels(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
    #[serde(rename = "categories_")]
    pub category_list: Vec<CategoryResponse>,
}

impl CategoriesResponse {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: category_labels(&categories),
            category_list: categories.into_iter().map(CategoryResponse::from).collect(),
        }
    }
}
