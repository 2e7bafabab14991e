use serde::{Deserialize, Serialize};

/// The signed-in user, persisted under the `"user"` key after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: String,
    pub fname: String,
    pub lname: String,
    #[serde(default)]
    pub score: f64,
}

