use serde::{Deserialize, Serialize};

/// A named backend deployment target. Selection is a pointer into a fixed
/// list; only the name is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    pub base_url: String,
}

impl Environment {
    pub fn new(name: &str, base_url: &str) -> Self {
        Environment {
            name: name.to_string(),
            base_url: base_url.to_string(),
        }
    }
}
