// Runtime configuration for the command-line host

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the warehouse data lives and how loudly to log.
///
/// Any field missing from a config file takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// `warehouse1,warehouse2,time` file
    pub connections_path: PathBuf,

    /// `warehouse,product,quantity` file
    pub stocks_path: PathBuf,

    /// Used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            connections_path: PathBuf::from("data/connections.csv"),
            stocks_path: PathBuf::from("data/stocks.csv"),
            log_level: "info".to_string(),
        }
    }
}

impl DeliveryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
