use serde::Deserialize;

pub use entity::item::Model as Item;

fn default_limit() -> u64 {
    100
}

/// Body for both create and full-replace update.
#[derive(Deserialize, Debug, Clone)]
pub struct ItemPayload {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

