//! Category catalog
//!
//! The six canonical categories are fixed; the `categories` relation is
//! seeded from the same table by the migrations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical category ids and display names.
pub const CATALOG: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Category row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Display name for a category id, or `None` if the id is not one of the
/// canonical six.
pub fn name_for(id: i32) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

/// Category rows as seeded into a fresh store.
pub fn seed() -> Vec<Category> {
    CATALOG
        .iter()
        .map(|(id, name)| Category {
            id: *id,
            kind: (*name).to_owned(),
        })
        .collect()
}

/// Collapse category rows into an id -> name map ordered by id.
///
/// Serializes as a JSON object keyed by the stringified id.
pub fn by_id(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
