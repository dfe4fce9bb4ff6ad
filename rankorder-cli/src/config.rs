/// Config file loading and creation for the rankorder CLI.
///
/// Config lives at ~/.config/rankorder/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RankorderConfig {
    pub missing: Option<String>,
    pub direction: Option<String>,
    pub ties: Option<String>,
    pub one_based: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# rankorder configuration
# All values here can be overridden by CLI flags.

# Where missing scores go, whatever the direction: \"worst\" (last) or \"best\" (first)
# missing = \"worst\"

# Sort direction for present scores: \"asc\" or \"desc\"
# direction = \"asc\"

# Tie-break for equal scores: \"stable\" or \"first\" (both keep input order)
# ties = \"stable\"

# Print 1-based positions instead of 0-based
# one_based = false
";

/// Returns the default config path: ~/.config/rankorder/config.toml
pub fn config_path() -> Result<PathBuf, String> {
    let home = std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?;
    Ok(PathBuf::from(home).join(".config").join("rankorder").join("config.toml"))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> Result<RankorderConfig, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RankorderConfig::default()),
        Err(e) => Err(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file at `path`. Errors if it already exists.
pub fn create_default_config(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .map_err(|e| format!("Failed to write config to {}: {e}", path.display()))
}
