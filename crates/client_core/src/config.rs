use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
pub const SETTINGS_FILE: &str = "estimator.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub service_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.into(),
        }
    }
}

impl ClientSettings {
    /// Parses `service_url`, forcing a trailing slash so endpoint paths join
    /// under it instead of replacing its last segment.
    pub fn base_url(&self) -> anyhow::Result<Url> {
        let raw = self.service_url.trim();
        let mut url = Url::parse(raw)
            .with_context(|| format!("invalid valuation service url '{raw}'"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("valuation service url '{raw}' must use http or https");
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    fn apply_file_overrides(&mut self, raw: &str) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("service_url") {
                self.service_url = v.clone();
            }
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("ESTIMATOR_SERVICE_URL") {
            self.service_url = v;
        }
        if let Some(v) = lookup("APP__SERVICE_URL") {
            self.service_url = v;
        }
    }
}

pub fn load_client_settings() -> ClientSettings {
    load_client_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

fn load_client_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file_overrides(&raw);
    }
    settings.apply_env_overrides(lookup);
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
