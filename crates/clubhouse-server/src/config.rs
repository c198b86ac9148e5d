use std::path::PathBuf;

/// Process configuration, read from the environment once at startup and
/// passed explicitly into the application state. No ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub token_secret: Vec<u8>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let token_secret = std::env::var("CLUBHOUSE_SECRET")
            .unwrap_or_else(|_| "dev-secret-change-me".into())
            .into_bytes();
        let db_path = std::env::var("CLUBHOUSE_DB_PATH")
            .unwrap_or_else(|_| "clubhouse.db".into())
            .into();
        let host = std::env::var("CLUBHOUSE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("CLUBHOUSE_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()?;

        Ok(Self {
            host,
            port,
            db_path,
            token_secret,
        })
    }
}
