use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::{DEFAULT_SLOTS, DEMO_SLOTS};
use crate::demo::Pattern;
use crate::error::{PatternError, Result};

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";
pub const CONFIG_FILE: &str = "patterns.toml";

/// Settings for the `patterns` runner. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternsConfig {
    pub patterns: Vec<Pattern>,
    pub banner: bool,
    pub remote_slots: usize,
    pub verbose: bool,
    /// File the settings were read from, `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            patterns: Pattern::ALL.to_vec(),
            banner: true,
            remote_slots: DEFAULT_SLOTS,
            verbose: false,
            source: None,
        }
    }
}

impl PatternsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PatternsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            PatternError::InvalidConfig(format!("failed to read {}: {err}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// `$PATTERNS_CONFIG` if set, else `./patterns.toml` if present, else defaults.
    pub fn discover() -> Result<Self> {
        Self::discover_in(env::var_os(CONFIG_ENV).map(PathBuf::from), Path::new("."))
    }

    /// An explicit path must exist; the file in `dir` is only used when present.
    fn discover_in(explicit: Option<PathBuf>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(&path);
        }
        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            Self::load(&local)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.remote_slots < DEMO_SLOTS {
            return Err(PatternError::InvalidConfig(format!(
                "remote_slots must be at least {DEMO_SLOTS}, got {}",
                self.remote_slots
            )));
        }
        if self.patterns.is_empty() {
            return Err(PatternError::InvalidConfig(
                "patterns must name at least one demo".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PatternsConfig::default();
        assert_eq!(config.patterns, Pattern::ALL.to_vec());
        assert!(config.banner);
        assert_eq!(config.remote_slots, 3);
        assert!(!config.verbose);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(
            PatternsConfig::from_toml_str("").unwrap(),
            PatternsConfig::default()
        );
    }

    #[test]
    fn test_overrides() {
        let config = PatternsConfig::from_toml_str(
            r#"
            patterns = ["observer", "singleton"]
            banner = false
            remote_slots = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.patterns, vec![Pattern::Observer, Pattern::Singleton]);
        assert!(!config.banner);
        assert_eq!(config.remote_slots, 5);
    }

    #[test]
    fn test_rejects_too_few_slots() {
        for slots in 0..DEMO_SLOTS {
            let content = format!("remote_slots = {slots}\npatterns = [\"command\"]");
            let err = PatternsConfig::from_toml_str(&content).unwrap_err();
            assert!(matches!(err, PatternError::InvalidConfig(_)), "slots = {slots}");
        }
        assert!(PatternsConfig::from_toml_str("remote_slots = 3").is_ok());
    }

    #[test]
    fn test_rejects_empty_pattern_list() {
        let err = PatternsConfig::from_toml_str("patterns = []").unwrap_err();
        assert!(matches!(err, PatternError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_pattern_and_key() {
        assert!(matches!(
            PatternsConfig::from_toml_str(r#"patterns = ["visitor"]"#),
            Err(PatternError::ConfigParse(_))
        ));
        assert!(matches!(
            PatternsConfig::from_toml_str("colour = true"),
            Err(PatternError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "patterns = [\"command\"]\nverbose = true").unwrap();

        let config = PatternsConfig::load(file.path()).unwrap();
        assert_eq!(config.patterns, vec![Pattern::Command]);
        assert!(config.verbose);
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PatternsConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PatternsConfig::discover_in(None, dir.path()).unwrap();
        assert_eq!(config, PatternsConfig::default());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_discover_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(CONFIG_FILE);
        fs::write(&local, "banner = false").unwrap();

        let config = PatternsConfig::discover_in(None, dir.path()).unwrap();
        assert!(!config.banner);
        assert_eq!(config.source, Some(local));
    }

    #[test]
    fn test_discover_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "banner = false").unwrap();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "remote_slots = 4").unwrap();

        let config =
            PatternsConfig::discover_in(Some(file.path().to_path_buf()), dir.path()).unwrap();
        assert_eq!(config.remote_slots, 4);
        assert!(config.banner);
    }

    // The only test that touches the process environment.
    #[test]
    fn test_discover_uses_env_var() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "patterns = [\"observer\"]").unwrap();

        env::set_var(CONFIG_ENV, file.path());
        let found = PatternsConfig::discover();

        let dir = tempfile::tempdir().unwrap();
        env::set_var(CONFIG_ENV, dir.path().join("absent.toml"));
        let missing = PatternsConfig::discover();
        env::remove_var(CONFIG_ENV);

        assert_eq!(found.unwrap().patterns, vec![Pattern::Observer]);
        assert!(matches!(missing, Err(PatternError::InvalidConfig(_))));
    }
}
