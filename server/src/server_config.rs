use serde::{Deserialize, Serialize};

use common::config::{Validate, load_config_from_yaml_file};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
    /// Pins the bot's corner/edge choices for reproducible sessions.
    /// Absent means a random seed, logged at startup.
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: "static".to_string(),
            rng_seed: None,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<std::net::SocketAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))?;

        if self.static_files_path.is_empty() {
            return Err("Static files path must not be empty".to_string());
        }

        Ok(())
    }
}

pub fn load_server_config(file_path: &str) -> Result<ServerConfig, String> {
    load_config_from_yaml_file(file_path)
}
