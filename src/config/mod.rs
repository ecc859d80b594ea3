//! Configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::nav::{Cta, NavTree};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file with the navigation tree; the built-in Zypp tree when unset
    #[serde(default)]
    pub nav_file: Option<PathBuf>,

    #[serde(default)]
    pub cta: Cta,
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load and validate the navigation tree. A malformed tree is a startup
    /// error, never a click-time one.
    pub fn nav_tree(&self) -> Result<NavTree> {
        match &self.nav_file {
            Some(path) => load_nav_file(path),
            None => Ok(NavTree::zypp_default()),
        }
    }
}

/// Read and validate a navigation tree from a JSON file.
pub fn load_nav_file(path: &Path) -> Result<NavTree> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading navigation file {}", path.display()))?;
    let tree = NavTree::from_json(&json)
        .with_context(|| format!("invalid navigation file {}", path.display()))?;
    tracing::info!(
        "Loaded {} navigation items from {}",
        tree.len(),
        path.display()
    );
    Ok(tree)
}

/// Get config directory (ZYPP_CONFIG_DIR or current directory)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ZYPP_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (ZYPP_PORT, ZYPP_CTA__LABEL, etc.)
        .add_source(
            ::config::Environment::with_prefix("ZYPP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: ZYPP_PORT > PORT > config > default
    if let Ok(port) = std::env::var("ZYPP_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", i64::from(port_num))?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (container platforms)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", i64::from(port_num))?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in ["ZYPP_PORT", "PORT", "ZYPP_CONFIG_DIR", "ZYPP_CTA__LABEL", "ZYPP_NAV_FILE"] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("ZYPP_CONFIG_DIR", "/tmp/zypp-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.nav_file, None);
        assert_eq!(config.cta, Cta::default());
        assert_eq!(config.nav_tree().unwrap(), NavTree::zypp_default());
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("PORT", "8123");
        env::set_var("ZYPP_CONFIG_DIR", "/tmp/zypp-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8123);
    }

    #[test]
    #[serial]
    fn test_zypp_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("PORT", "8123");
        env::set_var("ZYPP_PORT", "9000");
        env::set_var("ZYPP_CONFIG_DIR", "/tmp/zypp-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9000);
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("ZYPP_CONFIG_DIR", "/tmp/zypp-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_config_file_and_nav_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let nav_path = dir.path().join("nav.json");
        std::fs::write(
            &nav_path,
            r#"[{"id": "home", "label": "Home", "href": "/"},
                {"id": "company", "label": "Company",
                 "children": [{"id": "jobs", "label": "Jobs", "href": "/jobs"}]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            format!(
                "port = 4100\nnav_file = {:?}\n\n[cta]\nlabel = \"Admin Login\"\nhref = \"/admin/login\"\n",
                nav_path.to_string_lossy()
            ),
        )
        .unwrap();
        env::set_var("ZYPP_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 4100);
        assert_eq!(config.cta.label, "Admin Login");
        let tree = config.nav_tree().unwrap();
        assert_eq!(tree.len(), 2);
        assert!(tree.find_child("jobs").is_some());
    }

    #[test]
    #[serial]
    fn test_cta_label_from_env_keeps_default_href() {
        clear_env();
        env::set_var("ZYPP_CTA__LABEL", "Ride With Us");
        env::set_var("ZYPP_CONFIG_DIR", "/tmp/zypp-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.cta.label, "Ride With Us");
        assert_eq!(config.cta.href, Cta::default().href);
    }

    #[test]
    fn test_invalid_nav_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let nav_path = dir.path().join("nav.json");
        std::fs::write(&nav_path, r#"[{"id": "broken", "label": "Broken"}]"#).unwrap();

        let err = load_nav_file(&nav_path).unwrap_err();
        assert!(format!("{err:#}").contains("neither href nor children"));
    }
}
