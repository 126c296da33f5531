use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines the key catalog records are looked up and published under
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const BRANCH_ENV: &str = "LIBRARY_BRANCH";
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "LIBRARY_LOG_JSON";

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            log_json: true,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Unset or blank values keep their defaults.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Configuration::new(value(BRANCH_ENV).as_deref().unwrap_or("main"));
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = level.to_lowercase();
        }
        if let Some(json) = value(LOG_JSON_ENV) {
            config.log_json = !matches!(json.to_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        config
    }
}
