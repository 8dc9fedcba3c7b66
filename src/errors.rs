use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use std::fmt;

#[derive(Debug)]
pub enum DashboardError {
    /// Upstream rejected the credentials or returned an unusable token.
    Auth(String),
    /// Upstream profile fetch failed or the envelope was malformed.
    Fetch(String),
    /// No session token where one is required.
    MissingToken,
    Internal(String),
}

impl DashboardError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(message) => write!(f, "authentication failed: {message}"),
            Self::Fetch(message) => write!(f, "profile fetch failed: {message}"),
            Self::MissingToken => write!(f, "no session token"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for DashboardError {}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(message) => (StatusCode::UNAUTHORIZED, message).into_response(),
            Self::Fetch(message) => (StatusCode::BAD_GATEWAY, message).into_response(),
            // A missing token is not an error state for the user; the source
            // system resolves it by sending them back to the login view.
            Self::MissingToken => Redirect::to("/").into_response(),
            Self::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
