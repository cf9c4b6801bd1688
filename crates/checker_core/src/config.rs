//! Endpoint configuration. One externally-supplied URL, layered the usual
//! way: built-in default, then `checker.toml`, then environment overrides.

use std::{collections::HashMap, fs};

use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub endpoint_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: "http://127.0.0.1:8000/verify".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("checker.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("endpoint_url") {
                settings.endpoint_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("CHECKER_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }
    if let Ok(v) = std::env::var("APP__ENDPOINT_URL") {
        settings.endpoint_url = v;
    }

    settings
}

/// Rejects endpoints the HTTP client cannot use before the workflow starts.
pub fn validate_endpoint(raw_endpoint: &str) -> anyhow::Result<String> {
    let raw_endpoint = raw_endpoint.trim();
    let parsed = url::Url::parse(raw_endpoint)
        .with_context(|| format!("invalid verification endpoint url '{raw_endpoint}'"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        other => bail!("verification endpoint must use http or https, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn load_settings_layers_default_then_file_then_env() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();

        let temp_root = env::temp_dir().join(format!("checker_config_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");

        let original_dir = env::current_dir().expect("cwd");
        env::set_current_dir(&temp_root).expect("set cwd");
        env::remove_var("CHECKER_ENDPOINT_URL");
        env::remove_var("APP__ENDPOINT_URL");

        // No file, no env: built-in default.
        assert_eq!(
            load_settings().endpoint_url,
            Settings::default().endpoint_url
        );

        // checker.toml overrides the default.
        fs::write(
            "checker.toml",
            "endpoint_url = \"http://file.example.com/verify\"\n",
        )
        .expect("write checker.toml");
        assert_eq!(
            load_settings().endpoint_url,
            "http://file.example.com/verify"
        );

        // Environment wins over the file.
        env::set_var("CHECKER_ENDPOINT_URL", "http://env.example.com/verify");
        assert_eq!(
            load_settings().endpoint_url,
            "http://env.example.com/verify"
        );

        // The APP__ variant wins over the plain one.
        env::set_var("APP__ENDPOINT_URL", "http://app-env.example.com/verify");
        assert_eq!(
            load_settings().endpoint_url,
            "http://app-env.example.com/verify"
        );

        env::remove_var("CHECKER_ENDPOINT_URL");
        env::remove_var("APP__ENDPOINT_URL");
        env::set_current_dir(original_dir).expect("restore cwd");
        fs::remove_dir_all(temp_root).expect("cleanup");
    }

    #[test]
    fn default_endpoint_is_valid() {
        let settings = Settings::default();
        validate_endpoint(&settings.endpoint_url).expect("default endpoint");
    }

    #[test]
    fn accepts_https_and_trims_whitespace() {
        let validated =
            validate_endpoint("  https://verifier.example.com/verify ").expect("https endpoint");
        assert_eq!(validated, "https://verifier.example.com/verify");
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(validate_endpoint("ftp://verifier.example.com/verify").is_err());
        assert!(validate_endpoint("not a url").is_err());
    }
}
