//! Config loading and validation.

use super::model::Config;
use crate::error::{DevBranchError, Result};
use std::collections::HashSet;
use std::path::{Component, Path};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DevBranchError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DevBranchError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if the file exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DevBranchError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `remote`, `main_branch` and `dev_branch` must be non-empty
    /// - `dev_files` entries must be non-empty, relative, free of `..`, normalized, and unique
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("remote", &self.remote),
            ("main_branch", &self.main_branch),
            ("dev_branch", &self.dev_branch),
        ] {
            if value.trim().is_empty() {
                return Err(DevBranchError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.dev_files {
            validate_dev_file(entry)?;
            if !seen.insert(entry.as_str()) {
                return Err(DevBranchError::UserError(format!(
                    "config validation failed: dev_files lists '{}' more than once",
                    entry
                )));
            }
        }

        Ok(())
    }
}

/// A dev file must name a location inside the repository.
fn validate_dev_file(entry: &str) -> Result<()> {
    if entry.is_empty() {
        return Err(DevBranchError::UserError(
            "config validation failed: dev_files entries must be non-empty".to_string(),
        ));
    }

    let path = Path::new(entry);
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(DevBranchError::UserError(format!(
            "config validation failed: dev_files entry '{}' must be a relative path inside the repository",
            entry
        )));
    }

    // Lookups on the dev branch and ledger lines both use the path verbatim,
    // so it must already be in git's normalized `dir/file` form.
    if entry.split('/').any(|segment| segment.is_empty() || segment == ".") {
        return Err(DevBranchError::UserError(format!(
            "config validation failed: dev_files entry '{}' must be a normalized file path (no '.' segments, '//' or trailing '/')",
            entry
        )));
    }

    Ok(())
}
