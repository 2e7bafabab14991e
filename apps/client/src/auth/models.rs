use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::user::CurrentUser;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Reply to `POST /users/login`. A failed login may carry only `message`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl LoginResponse {
    pub fn into_user(self) -> CurrentUser {
        CurrentUser {
            user_id: self.user_id.unwrap_or_default(),
            fname: self.fname.unwrap_or_default(),
            lname: self.lname.unwrap_or_default(),
            score: self.score.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}
