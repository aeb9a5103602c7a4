// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::queue::RemovalPolicy;

const CONFIG_NAME: &str = "tutshelf";

const DEFAULT_LOG_FILE: &str = "tutshelf.log";

/// Publish dates render as e.g. `Apr 2`.
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%b %-d";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog file to load instead of the bundled one.
    pub catalog_file: Option<String>,
    pub log_file: Option<String>,
    pub date_format: String,
    pub removal_policy: RemovalPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: None,
            log_file: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

impl AppConfig {
    pub(crate) fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(file) => PathBuf::from(file),
            None => env::temp_dir().join(DEFAULT_LOG_FILE),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();

        assert_eq!(config.catalog_file, None);
        assert_eq!(config.date_format, "%b %-d");
        assert_eq!(config.removal_policy, RemovalPolicy::KeepQueued);
        assert_eq!(config.log_path(), env::temp_dir().join("tutshelf.log"));
    }

    #[test]
    fn round_trips_through_confy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutshelf.toml");

        let config = AppConfig {
            catalog_file: Some("/srv/tutorials.json".to_string()),
            removal_policy: RemovalPolicy::ClearQueued,
            ..AppConfig::default()
        };

        confy::store_path(&path, &config).unwrap();
        let loaded: AppConfig = confy::load_path(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
