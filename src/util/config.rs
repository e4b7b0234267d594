//! Configuration file support for rolecast.
//!
//! Two locations are read:
//! - Global: `~/.rolecast/config.toml` - user-wide defaults
//! - Project: `rolecast.toml` in the working directory
//!
//! Project config takes precedence over global config. An explicit
//! `--config` path replaces both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::factory::installer::{default_bindings, install_bindings, Binding};
use crate::factory::registry::FactoryRegistry;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// rolecast configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,

    /// Product installation settings
    pub install: InstallConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive (e.g. `rolecast=debug`)
    pub filter: Option<String>,
}

/// Which factories to install before the first lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Install the standard product bindings first (unset means yes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<bool>,

    /// Extra bindings, applied after the defaults (later entries win)
    pub bindings: Vec<Binding>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.log.filter.is_some() {
            self.log.filter = other.log.filter;
        }

        if let Some(defaults) = other.install.defaults {
            self.install.defaults = Some(defaults);
        }
        self.install.bindings.extend(other.install.bindings);
    }

    /// Whether the standard bindings are installed.
    pub fn install_defaults(&self) -> bool {
        self.install.defaults.unwrap_or(true)
    }

    /// Every binding to install, in application order.
    pub fn bindings(&self) -> Vec<Binding> {
        let mut bindings = if self.install_defaults() {
            default_bindings()
        } else {
            Vec::new()
        };
        bindings.extend(self.install.bindings.iter().copied());
        bindings
    }

    /// Populate `registry` according to this configuration.
    pub fn install(&self, registry: &FactoryRegistry) {
        install_bindings(registry, &self.bindings());
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (rolecast.toml)
/// 2. Global config (~/.rolecast/config.toml)
/// 3. Defaults
///
/// Files that fail to load are logged and skipped.
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let (config, warnings) = load_config_reporting(global_path, project_path);
    for warning in &warnings {
        tracing::warn!("{}", warning.message);
    }
    config
}

/// Like [`load_config`], but hands back a warning for each file that was
/// skipped instead of logging it, for callers that report before logging
/// is set up.
pub fn load_config_reporting(
    global_path: Option<&Path>,
    project_path: &Path,
) -> (Config, Vec<Diagnostic>) {
    let mut config = Config::default();
    let mut warnings = Vec::new();

    // Project config overrides global
    for path in global_path.into_iter().chain(std::iter::once(project_path)) {
        if !path.exists() {
            continue;
        }
        match Config::load(path) {
            Ok(loaded) => config.merge(loaded),
            Err(e) => warnings.push(
                Diagnostic::warning(format!(
                    "Failed to load config from {}: {:#}",
                    path.display(),
                    e
                ))
                .with_suggestion(suggestions::FIX_CONFIG),
            ),
        }
    }

    (config, warnings)
}

/// Get the global rolecast config directory (~/.rolecast).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".rolecast"))
}

/// Get the global config path (~/.rolecast/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (rolecast.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join("rolecast.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role_id::RoleId;
    use crate::factory::product::ProductKind;
    use crate::util::diagnostic::Severity;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.log.filter.is_none());
        assert!(config.install_defaults());
        assert_eq!(config.bindings(), default_bindings());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rolecast.toml");
        std::fs::write(
            &path,
            r#"
[log]
filter = "rolecast=debug"

[install]
defaults = false

[[install.bindings]]
id = 7
product = "hybrid"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.filter.as_deref(), Some("rolecast=debug"));
        assert_eq!(
            config.bindings(),
            vec![Binding::new(RoleId::new(7), ProductKind::Hybrid)]
        );
    }

    #[test]
    fn test_config_load_rejects_bad_product() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rolecast.toml");
        std::fs::write(&path, "[[install.bindings]]\nid = 1\nproduct = \"steam\"\n").unwrap();

        assert!(Config::load(&path).is_err());
        assert!(Config::load_or_default(&path).install.bindings.is_empty());
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.log.filter = Some("rolecast=info".to_string());

        let mut other = Config::default();
        other.install.defaults = Some(false);
        other
            .install
            .bindings
            .push(Binding::new(RoleId::new(9), ProductKind::Diesel));

        base.merge(other);
        assert_eq!(base.log.filter.as_deref(), Some("rolecast=info"));
        assert!(!base.install_defaults());
        assert_eq!(base.install.bindings.len(), 1);
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = project_config_path(tmp.path());

        std::fs::write(&global, "[log]\nfilter = \"rolecast=warn\"\n").unwrap();
        std::fs::write(&project, "[log]\nfilter = \"rolecast=debug\"\n").unwrap();

        let config = load_config(Some(&global), &project);
        assert_eq!(config.log.filter.as_deref(), Some("rolecast=debug"));

        let config = load_config(None, &tmp.path().join("missing.toml"));
        assert!(config.log.filter.is_none());
    }

    #[test]
    fn test_project_config_reenables_defaults() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = project_config_path(tmp.path());

        std::fs::write(&global, "[install]\ndefaults = false\n").unwrap();
        std::fs::write(&project, "[install]\ndefaults = true\n").unwrap();

        let config = load_config(Some(&global), &project);
        assert_eq!(config.install.defaults, Some(true));
        assert_eq!(config.bindings(), default_bindings());

        // A project file that leaves the key out keeps the global choice
        std::fs::write(&project, "[log]\nfilter = \"rolecast=info\"\n").unwrap();
        let config = load_config(Some(&global), &project);
        assert!(!config.install_defaults());
        assert!(config.bindings().is_empty());
    }

    #[test]
    fn test_load_config_reports_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = project_config_path(tmp.path());

        std::fs::write(&global, "[log]\nfilter = \"rolecast=debug\"\n").unwrap();
        std::fs::write(&project, "[[install.bindings]]\nid = 1\nproduct = \"steam\"\n").unwrap();

        let (config, warnings) = load_config_reporting(Some(&global), &project);
        assert_eq!(config.log.filter.as_deref(), Some("rolecast=debug"));
        assert!(config.install.bindings.is_empty());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
        assert!(warnings[0].message.starts_with("Failed to load config from"));
        assert!(warnings[0].message.contains("rolecast.toml"));
    }

    #[test]
    fn test_config_install() {
        let mut config = Config::default();
        config
            .install
            .bindings
            .push(Binding::new(RoleId::HYBRID, ProductKind::Hybridic));

        let registry = FactoryRegistry::new();
        config.install(&registry);

        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.find(RoleId::HYBRID).unwrap().kind(),
            ProductKind::Hybridic
        );
    }
}
