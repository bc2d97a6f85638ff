use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: i64 = 4;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Resolved widget configuration. Immutable for the duration of one render
/// call; supplied by the embedding host (directly or via `ConfigFile`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    pub api_url: String,
    pub items_per_page: i64,
    pub email_label: String,
    pub forename_label: String,
    pub surname_label: String,
    pub exclude_first_name: String,
    pub timeout_seconds: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            email_label: "Email".to_string(),
            forename_label: "Forename".to_string(),
            surname_label: "Surname".to_string(),
            exclude_first_name: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ListingConfig {
    /// Page size is always positive: a zero or negative `items_per_page`
    /// clamps to 1.
    pub fn page_size(&self) -> usize {
        if self.items_per_page < 1 {
            1
        } else {
            self.items_per_page as usize
        }
    }
}

/// On-disk configuration with every field optional; unset fields fall back
/// to the `ListingConfig` defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub items_per_page: Option<i64>,
    pub email_label: Option<String>,
    pub forename_label: Option<String>,
    pub surname_label: Option<String>,
    pub exclude_first_name: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ConfigFile {
    pub fn into_config(self) -> ListingConfig {
        let defaults = ListingConfig::default();
        ListingConfig {
            api_url: self.api_url.unwrap_or(defaults.api_url),
            items_per_page: self.items_per_page.unwrap_or(defaults.items_per_page),
            email_label: self.email_label.unwrap_or(defaults.email_label),
            forename_label: self.forename_label.unwrap_or(defaults.forename_label),
            surname_label: self.surname_label.unwrap_or(defaults.surname_label),
            exclude_first_name: self
                .exclude_first_name
                .unwrap_or(defaults.exclude_first_name),
            timeout_seconds: self.timeout_seconds.unwrap_or(defaults.timeout_seconds),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".userlisting").join("config.yml"))
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_yaml::from_str::<ConfigFile>(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# Users listing config
#
# Location (default):
#   ~/.userlisting/config.yml

# Endpoint (required)
# api_url: https://reqres.in/api/users

# Pagination
items_per_page: 4

# Column labels
email_label: Email
forename_label: Forename
surname_label: Surname

# Filtering (exact first-name match; an empty value matches nothing)
exclude_first_name: ""

# HTTP
timeout_seconds: 5
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(())
}
