use crate::errors::DashboardError;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

#[derive(Debug, Serialize, Deserialize)]
struct SessionData {
    token: String,
}

/// File-backed store for the one session token. Created at startup, written
/// on login, emptied on logout; a token stays valid here until it is
/// explicitly cleared.
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    token: Arc<Mutex<Option<String>>>,
}

impl SessionStore {
    pub async fn open(path: PathBuf) -> Self {
        let token = read_token(&path).await;
        Self {
            path,
            token: Arc::new(Mutex::new(token)),
        }
    }

    pub async fn save(&self, token: &str) -> Result<(), DashboardError> {
        let payload = serde_json::to_vec_pretty(&SessionData {
            token: token.to_string(),
        })
        .map_err(DashboardError::internal)?;
        fs::write(&self.path, payload)
            .await
            .map_err(DashboardError::internal)?;

        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    pub async fn load(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    pub async fn clear(&self) -> Result<(), DashboardError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(DashboardError::internal(err)),
        }

        *self.token.lock().await = None;
        Ok(())
    }
}

async fn read_token(path: &Path) -> Option<String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<SessionData>(&bytes) {
            Ok(data) => Some(data.token),
            Err(err) => {
                error!("failed to parse session file: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read session file: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("xp_dashboard_session_{tag}_{}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = temp_session_path("roundtrip");
        let store = SessionStore::open(path.clone()).await;

        store.save("token-abc").await.unwrap();
        assert_eq!(store.load().await.as_deref(), Some("token-abc"));

        // A fresh store over the same file sees the persisted token.
        let reopened = SessionStore::open(path.clone()).await;
        assert_eq!(reopened.load().await.as_deref(), Some("token-abc"));

        store.clear().await.unwrap();
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn clear_removes_token_and_file() {
        let path = temp_session_path("clear");
        let store = SessionStore::open(path.clone()).await;

        store.save("token-xyz").await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await, None);
        assert_eq!(SessionStore::open(path).await.load().await, None);
    }

    #[tokio::test]
    async fn clear_on_empty_store_is_fine() {
        let store = SessionStore::open(temp_session_path("empty")).await;
        store.clear().await.unwrap();
        assert_eq!(store.load().await, None);
    }
}
