//! Login, registration and logout.
//!
//! Each action validates locally, takes the single-flight guard for its
//! operation, and sends at most one request.

use tracing::{info, warn};

use crate::api_client::{LOGIN_PATH, REGISTER_PATH};
use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::auth::validation::{check_login, check_registration};
use crate::errors::AppError;
use crate::guard::Operation;
use crate::models::user::CurrentUser;
use crate::state::AppState;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const REGISTER_SUCCESS: &str = "User registered successfully";

const LOGIN_FALLBACK: &str = "An error occurred during login.";
const REGISTER_FALLBACK: &str = "An error occurred during register.";

/// Non-empty server message, or `fallback`.
fn message_or(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Signs in and stores the user in the session.
///
/// Only the exact "Login successful" message counts as success. A failed
/// session write is logged; the login itself still succeeds.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<CurrentUser, AppError> {
    check_login(email, password)?;
    let _token = state.flights.begin(Operation::Login)?;

    let response: LoginResponse = state
        .api
        .post(LOGIN_PATH, &LoginRequest { email, password })
        .await?;

    if response.message.as_deref() != Some(LOGIN_SUCCESS) {
        return Err(AppError::Rejected(message_or(response.message, LOGIN_FALLBACK)));
    }

    let user = response.into_user();
    info!("Logged in as {}", user.user_id);
    if let Err(e) = state.session.sign_in(user.clone()) {
        warn!("Error saving user to session: {e}");
    }
    Ok(user)
}

/// Creates an account. Returns the server's success message.
pub async fn register(state: &AppState, form: &RegisterRequest) -> Result<String, AppError> {
    check_registration(form)?;
    let _token = state.flights.begin(Operation::Register)?;

    let response: RegisterResponse = state.api.post(REGISTER_PATH, form).await?;

    match response.message {
        Some(message) if message == REGISTER_SUCCESS => {
            info!("Registered {}", form.email);
            Ok(message)
        }
        other => Err(AppError::Rejected(message_or(other, REGISTER_FALLBACK))),
    }
}

/// Forgets the signed-in user.
pub fn logout(state: &AppState) -> Result<(), AppError> {
    state.session.clear()
}
