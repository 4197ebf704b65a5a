//! Configuration constants and default value functions.

/// Config file name looked up at the repository root.
pub const DEFAULT_CONFIG_FILE: &str = ".devbranch.yaml";

/// Local-only files carried over from the dev branch when nothing is configured.
pub const DEFAULT_DEV_FILES: &[&str] = &[".envrc", ".vscode/settings.json", ".vscode/launch.json"];

// Default value functions for serde
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
pub(crate) fn default_main_branch() -> String {
    "main".to_string()
}
pub(crate) fn default_dev_branch() -> String {
    "dev".to_string()
}
pub(crate) fn default_dev_files() -> Vec<String> {
    DEFAULT_DEV_FILES.iter().map(|s| s.to_string()).collect()
}
