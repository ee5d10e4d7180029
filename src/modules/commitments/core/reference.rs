// Reference entities used to classify and fill in commitments.
//
// Purpose
// - Area groups commitments (its name is the category code), Meeting and Responsible feed form pickers.
//
// Notes
// - These tables use the same column names remotely and internally, so they deserialize directly.
// - Read only from the store's point of view.

use crate::shared::core::primitives::deserialize_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsible {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}
