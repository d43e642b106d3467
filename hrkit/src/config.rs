//! Environment-based configuration
//!
//! Values are read from the process environment after an optional `.env`
//! file is loaded; real environment variables take precedence over the file.
//!
//! ## Variables
//! - `HRKIT_DATA_DIR`: directory holding the history slot (default `./data`)
//! - `HRKIT_HISTORY_KEY`: history slot name (default `hr_toolkit_history`)
//! - `GOOGLE_API_KEY`, `GEMINI_API_KEY`: creative-text key, optional
//! - `HRKIT_MODEL`: creative-text model
//! - `HRKIT_API_BASE`: creative-text endpoint base URL
//! - `HRKIT_CREATIVE_TIMEOUT_MS`: creative-text request timeout
//! - `HRKIT_LOG_LEVEL`: tracing level (default `info`)

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ToolkitError, ToolkitResult};
use crate::services::creative_text::{CreativeTextConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use crate::services::history_store::DEFAULT_HISTORY_KEY;

const API_KEY_VARS: &[&str] = &["GOOGLE_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, PartialEq)]
pub struct ToolkitConfig {
    pub data_dir: PathBuf,
    pub history_key: String,
    pub creative: CreativeTextConfig,
    pub log_level: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            creative: CreativeTextConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Load from the environment, picking up `.env` if present
    pub fn from_env() -> ToolkitResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ToolkitResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = API_KEY_VARS.iter().find_map(|&name| non_empty(name));

        let timeout = match non_empty("HRKIT_CREATIVE_TIMEOUT_MS") {
            Some(raw) => {
                let millis: u64 = raw
                    .parse()
                    .map_err(|_| ToolkitError::config("HRKIT_CREATIVE_TIMEOUT_MS", format!("not a number: {raw}")))?;
                if millis == 0 {
                    return Err(ToolkitError::config("HRKIT_CREATIVE_TIMEOUT_MS", "must be greater than zero"));
                }
                Duration::from_millis(millis)
            }
            None => DEFAULT_TIMEOUT,
        };

        let history_key = non_empty("HRKIT_HISTORY_KEY").unwrap_or_else(|| DEFAULT_HISTORY_KEY.to_string());
        if history_key.contains(['/', '\\']) {
            return Err(ToolkitError::config("HRKIT_HISTORY_KEY", "must not contain path separators"));
        }

        Ok(Self {
            data_dir: non_empty("HRKIT_DATA_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("./data")),
            history_key,
            creative: CreativeTextConfig {
                api_key,
                model: non_empty("HRKIT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: non_empty("HRKIT_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout,
            },
            log_level: non_empty("HRKIT_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
