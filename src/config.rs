#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_url: String,
    pub bank_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bank_url: std::env::var("BANK_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            bank_timeout_secs: std::env::var("BANK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
