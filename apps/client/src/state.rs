use std::sync::Arc;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::guard::InFlight;
use crate::session::Session;

/// Shared client state handed to every flow.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    /// Opened once at startup; the only state shared between commands.
    pub session: Arc<Session>,
    pub flights: InFlight,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let api = ApiClient::http(config.api_base_url.clone())?;
        let session = Arc::new(Session::open(config.session_file.clone()));
        Ok(Self {
            api,
            session,
            flights: InFlight::new(),
            config,
        })
    }
}
