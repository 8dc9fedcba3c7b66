use std::{env, path::PathBuf};

const DEFAULT_AUTH_URL: &str = "https://learn.reboot01.com/api/auth/signin";
const DEFAULT_GRAPHQL_URL: &str = "https://learn.reboot01.com/api/graphql-engine/v1/graphql";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub auth_url: String,
    pub graphql_url: String,
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let auth_url = env::var("AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string());
        let graphql_url =
            env::var("GRAPHQL_URL").unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_string());

        let session_path = env::var("APP_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/session.json"));

        Self {
            port,
            auth_url,
            graphql_url,
            session_path,
        }
    }
}
