use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub host: String,
    pub port: u16,
    pub cart_store_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = env::var("BACKEND_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cart_store_path = env::var("CART_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cart_store.json"));
        Ok(Self {
            backend_url,
            host,
            port,
            cart_store_path,
        })
    }
}
