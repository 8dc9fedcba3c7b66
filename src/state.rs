use crate::config::Config;
use crate::session::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(config: Config, session: SessionStore) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
            session,
        }
    }
}
