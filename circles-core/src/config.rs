//! Configuration loading from circles.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{CirclesError, CirclesResult, IoResultExt};
use crate::filter::Filter;

/// Name of the configuration file looked up next to the people file.
pub const CONFIG_FILE: &str = "circles.toml";

/// Main configuration structure for circles.toml.
#[derive(Debug, Deserialize, Default)]
pub struct CirclesConfig {
    /// Filter kind: "any", "male" or "female".
    pub filter: Option<String>,
    /// Field compared by an "any" filter: "name" or "gender".
    pub field: Option<String>,
    /// Value compared by an "any" filter.
    pub value: Option<String>,
    /// Deepest circle emitted (0 = best friends only).
    pub max_depth: Option<usize>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl CirclesConfig {
    /// Filter described by this configuration, the accept-all filter if none.
    pub fn filter(&self) -> CirclesResult<Filter> {
        match &self.filter {
            Some(kind) => Filter::from_parts(kind, self.field.as_deref(), self.value.as_deref()),
            None => Ok(Filter::default()),
        }
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from circles.toml in `dir` if it exists.
pub fn load_config(dir: &Path) -> CirclesResult<Option<CirclesConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| CirclesError::config(&path, format!("Invalid {}: {}", CONFIG_FILE, e)))?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("circles_config_test")
            .join(format!("{}_{}", name, id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = temp_dir("missing");
        assert!(load_config(&dir).unwrap().is_none());
    }

    #[test]
    fn test_full_config() {
        let dir = temp_dir("full");
        fs::write(
            dir.join(CONFIG_FILE),
            "filter = \"male\"\nmax_depth = 1\n\n[output]\nformat = \"JSON\"\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.filter().unwrap(), Filter::Male);
        assert_eq!(cfg.max_depth, Some(1));
        assert!(cfg.wants_json());
    }

    #[test]
    fn test_unknown_filter_in_config() {
        let cfg = CirclesConfig {
            filter: Some("everyone-but-sam".to_string()),
            ..Default::default()
        };
        assert!(matches!(cfg.filter(), Err(CirclesError::InvalidFilterType { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = temp_dir("invalid");
        fs::write(dir.join(CONFIG_FILE), "max_depth = \"deep\"").unwrap();
        let err = load_config(&dir).unwrap_err();
        assert!(matches!(err, CirclesError::Config { .. }));
        assert_eq!(err.path(), Some(&dir.join(CONFIG_FILE)));
        assert!(err.to_string().contains("Invalid circles.toml"));
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(CirclesConfig::default().filter().unwrap(), Filter::default());
        assert!(!CirclesConfig::default().wants_json());
    }
}
