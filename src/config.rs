use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, RosterError};
use crate::pager::DEFAULT_PAGE_SIZE;

/// Demo directory used to seed the roster when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Department assigned to fetched records, which carry none of their own.
pub const DEFAULT_DEPARTMENT: &str = "General";

#[derive(Deserialize, Default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub department: Option<String>,
    pub page_size: Option<usize>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| RosterError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| RosterError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "roster")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(RosterError::NoConfigDir)
    }

    /// Seed endpoint with the env var taking precedence over the config file.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = std::env::var("ROSTER_ENDPOINT")
            .ok()
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Url::parse(&raw).map_err(|_| RosterError::InvalidUrl(raw))
    }

    pub fn department(&self) -> String {
        self.department
            .clone()
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string())
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::default();
        assert_eq!(config.department(), "General");
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn configured_endpoint_must_parse_as_a_url() {
        let config = Config {
            endpoint: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.endpoint(),
            Err(RosterError::InvalidUrl(_))
        ));
    }
}
