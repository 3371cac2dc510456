//! Settings loading: file deep-merge and environment overrides.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::errors::Result;
use crate::types::RecapSettings;

/// Environment variable overriding the server port.
pub const ENV_PORT: &str = "RECAP_PORT";
/// Environment variable overriding the upload directory.
pub const ENV_UPLOAD_DIR: &str = "RECAP_UPLOAD_DIR";
/// Environment variable overriding the transcription sidecar base URL.
pub const ENV_TRANSCRIBER_URL: &str = "RECAP_TRANSCRIBER_URL";
/// Environment variable overriding the summarizer base URL.
pub const ENV_SUMMARIZER_URL: &str = "RECAP_SUMMARIZER_URL";
/// Environment variable supplying the summarizer bearer token.
pub const ENV_SUMMARIZER_TOKEN: &str = "RECAP_SUMMARIZER_TOKEN";

/// Source of environment variables, abstracted so tests don't mutate the
/// process environment.
pub trait Env {
    /// Look up a variable, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests.
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    /// Add a variable, builder-style.
    #[must_use]
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        let _ = self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key-by-key; any other value in `overlay` (including `null`)
/// replaces the base value wholesale.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Load settings from a JSON file, deep-merged over compiled defaults, with
/// env overrides applied last.
pub fn load_settings_from_path(path: &Path) -> Result<RecapSettings> {
    let defaults = serde_json::to_value(RecapSettings::default())?;
    let raw = std::fs::read_to_string(path)?;
    let file: Value = serde_json::from_str(&raw)?;
    let merged = deep_merge(defaults, file);
    let mut settings: RecapSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings, &StdEnv);
    Ok(settings)
}

/// Load settings, falling back to defaults (plus env overrides) when the
/// path is absent or the file is unreadable or malformed.
pub fn load_or_default(path: Option<&Path>) -> RecapSettings {
    match path {
        Some(path) => load_settings_from_path(path).unwrap_or_else(|e| {
            warn!(error = %e, ?path, "failed to load settings, using defaults");
            let mut settings = RecapSettings::default();
            apply_env_overrides(&mut settings, &StdEnv);
            settings
        }),
        None => {
            let mut settings = RecapSettings::default();
            apply_env_overrides(&mut settings, &StdEnv);
            settings
        }
    }
}

/// Apply `RECAP_*` environment overrides in place.
pub fn apply_env_overrides(settings: &mut RecapSettings, env: &impl Env) {
    if let Some(port) = env.var(ENV_PORT) {
        match port.parse() {
            Ok(port) => settings.server.port = port,
            Err(_) => warn!(value = %port, "ignoring non-numeric {ENV_PORT}"),
        }
    }
    if let Some(dir) = env.var(ENV_UPLOAD_DIR) {
        settings.server.upload_dir = dir;
    }
    if let Some(url) = env.var(ENV_TRANSCRIBER_URL) {
        settings.transcription.base_url = url;
    }
    if let Some(url) = env.var(ENV_SUMMARIZER_URL) {
        settings.summarizer.base_url = url;
    }
    if let Some(token) = env.var(ENV_SUMMARIZER_TOKEN) {
        settings.summarizer.api_token = Some(token);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_merge_disjoint_keys() {
        let merged = deep_merge(json!({"x": 1}), json!({"y": 2}));
        assert_eq!(merged, json!({"x": 1, "y": 2}));
    }

    #[test]
    fn deep_merge_nested_override() {
        let base = json!({"server": {"port": 8080, "uploadDir": "uploads"}});
        let overlay = json!({"server": {"port": 9999}});
        let merged = deep_merge(base, overlay);
        assert_eq!(merged["server"]["port"], 9999);
        assert_eq!(merged["server"]["uploadDir"], "uploads");
    }

    #[test]
    fn deep_merge_scalar_replaces_object() {
        let merged = deep_merge(json!({"a": {"b": 1}}), json!({"a": 5}));
        assert_eq!(merged["a"], 5);
    }

    #[test]
    fn load_from_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recap.json");
        std::fs::write(&path, r#"{"summarizer": {"model": "custom/model"}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.summarizer.model, "custom/model");
        assert_eq!(settings.server.port, 8080, "defaults preserved");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_settings_from_path(Path::new("/nonexistent/recap.json")).is_err());
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let settings = load_or_default(Some(Path::new("/nonexistent/recap.json")));
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn load_or_default_without_path_uses_defaults() {
        let settings = load_or_default(None);
        assert_eq!(settings.summarizer.model, "facebook/bart-large-cnn");
    }

    #[test]
    fn env_overrides_applied() {
        let env = MapEnv::default()
            .with_var(ENV_PORT, "7070")
            .with_var(ENV_UPLOAD_DIR, "/tmp/up")
            .with_var(ENV_SUMMARIZER_TOKEN, "tok");
        let mut settings = RecapSettings::default();
        apply_env_overrides(&mut settings, &env);
        assert_eq!(settings.server.port, 7070);
        assert_eq!(settings.server.upload_dir, "/tmp/up");
        assert_eq!(settings.summarizer.api_token.as_deref(), Some("tok"));
    }

    #[test]
    fn env_bad_port_ignored() {
        let env = MapEnv::default().with_var(ENV_PORT, "not-a-port");
        let mut settings = RecapSettings::default();
        apply_env_overrides(&mut settings, &env);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn env_urls_override_both_models() {
        let env = MapEnv::default()
            .with_var(ENV_TRANSCRIBER_URL, "http://stt:9000")
            .with_var(ENV_SUMMARIZER_URL, "http://llm:8000");
        let mut settings = RecapSettings::default();
        apply_env_overrides(&mut settings, &env);
        assert_eq!(settings.transcription.base_url, "http://stt:9000");
        assert_eq!(settings.summarizer.base_url, "http://llm:8000");
    }
}
