use std::{collections::HashMap, fs};

/// Artifacts shipped with this crate; deployments point `ARTIFACTS_PATH`
/// elsewhere.
pub const DEFAULT_ARTIFACTS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/artifacts/model.json");

#[derive(Debug)]
pub struct Settings {
    pub server_bind: String,
    pub artifacts_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            artifacts_path: DEFAULT_ARTIFACTS_PATH.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string("server.toml").ok();
    settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

fn settings_from(raw_file: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("artifacts_path") {
                settings.artifacts_path = v.clone();
            }
        }
    }

    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("ARTIFACTS_PATH") {
        settings.artifacts_path = v;
    }
    if let Some(v) = lookup("APP__ARTIFACTS_PATH") {
        settings.artifacts_path = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
