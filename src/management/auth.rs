use std::path::PathBuf;

use chrono::Utc;

use crate::{config, spotify, types::Token};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and re-persisting it first when it
    /// is within four minutes of expiry.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        if self.is_expired() {
            let new_token = spotify::auth::refresh_token(&self.token.refresh_token)
                .await
                .map_err(|e| format!("Token refresh failed: {}", e))?;
            self.token = new_token;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}
