use serde::{Deserialize, Serialize};

/// A concept card pulled out of a notes response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub description: String,
    pub memory_hook: String,
    pub icon: String,
}
