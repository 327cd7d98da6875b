//! API server configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Startup artifact locations
    pub artifacts: ArtifactConfig,

    /// Quiz behavior
    pub quiz: QuizConfig,

    /// Session lifecycle
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub bind_addr: SocketAddr,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the serialized regression artifact
    pub model_path: PathBuf,

    /// Path to the question list JSON
    pub questions_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions shown per page
    pub questions_per_page: usize,

    /// Apply reverse scoring to reverse-keyed items. The deployed
    /// model was trained without it; leave off unless retrained.
    pub reverse_scoring: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle seconds before a session is dropped from the store
    pub ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                bind_addr: "0.0.0.0:8080".parse().unwrap(),
                timeout_secs: 30,
            },
            artifacts: ArtifactConfig {
                model_path: PathBuf::from("assets/model.safetensors"),
                questions_path: PathBuf::from("assets/questions.json"),
            },
            quiz: QuizConfig {
                questions_per_page: 5,
                reverse_scoring: false,
            },
            sessions: SessionConfig { ttl_secs: 30 * 60 },
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("BIGFIVE"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("BIGFIVE"))
            .build()?;

        settings.try_deserialize()
    }
}
