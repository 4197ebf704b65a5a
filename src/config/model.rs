//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a devbranch run.
///
/// This struct represents the contents of `.devbranch.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote to fetch before branching (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch the feature branch starts from (default: "main").
    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    /// Long-lived branch holding the local-only dev files (default: "dev").
    #[serde(default = "default_dev_branch")]
    pub dev_branch: String,

    /// Repository-relative paths to copy from the dev branch, in order.
    #[serde(default = "default_dev_files")]
    pub dev_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            main_branch: default_main_branch(),
            dev_branch: default_dev_branch(),
            dev_files: default_dev_files(),
        }
    }
}
