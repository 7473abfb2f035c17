use std::path::PathBuf;

use chrono::Utc;

use crate::types::Token;

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
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns the stored access token while it is unexpired. There is no
    /// refresh flow: an expired token is an error and the user runs
    /// `sprofcli auth` again, which overwrites the cache with a fresh token.
    pub fn valid_token(&self) -> Result<String, String> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_expired_at(now) {
            return Err("access token has expired".to_string());
        }

        Ok(self.token.access_token.clone())
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sprofcli/cache/token.json");
        path
    }
}
