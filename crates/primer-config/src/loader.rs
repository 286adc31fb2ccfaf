//! Configuration loader with multi-source merging

use crate::{Paths, PrimerConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Skip ~/.config/primer/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<PrimerConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = PrimerConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/primer/config.toml)
        if self.user_config
            && let Ok(user_config_file) = Paths::new().user_config_file()
            && user_config_file.exists()
        {
            debug!(path = %user_config_file.display(), "loading user config");
            builder = builder.add_source(
                config::File::from(user_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 3. Project config (primer.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            debug!(path = %project_config_file.display(), "loading project config");
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (primer.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            debug!(path = %local_config_file.display(), "loading local config");
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        let config = builder.build().context("Failed to build configuration")?;

        let primer_config: PrimerConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        primer_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(primer_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CountryEntry, CouponEntry};
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::tempdir;

    fn loader_for(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader_for(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config, PrimerConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[[discounts.coupons]]
code = "WELCOME"
discount = 0.25

[[driving.countries]]
code = "NZ"
minimum_age = 16

[[driving.countries]]
code = "US"
minimum_age = 16
"#;
        fs::write(project_dir.join("primer.toml"), config_content)
            .expect("Failed to write config");

        let config = loader_for(project_dir).load().expect("Failed to load config");

        assert_eq!(
            config.discounts.coupons,
            vec![CouponEntry::new("WELCOME", Decimal::new(25, 2))]
        );
        assert_eq!(
            config.driving.countries,
            vec![CountryEntry::new("NZ", 16), CountryEntry::new("US", 16)]
        );
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("primer.toml"),
            r#"
[[discounts.coupons]]
code = "SAVE10"
discount = 0.1
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("primer.local.toml"),
            r#"
[[discounts.coupons]]
code = "LOCAL"
discount = 0.5
"#,
        )
        .expect("Failed to write local config");

        let config = loader_for(project_dir).load().expect("Failed to load config");

        // Local config replaces the project list wholesale
        assert_eq!(
            config.discounts.coupons,
            vec![CouponEntry::new("LOCAL", Decimal::new(5, 1))]
        );
        // Untouched section keeps its defaults
        assert_eq!(config.driving.countries.len(), 2);
    }

    #[test]
    fn test_invalid_project_config_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("primer.toml"),
            r#"
[[discounts.coupons]]
code = "BROKEN"
discount = 1.5
"#,
        )
        .expect("Failed to write config");

        let err = loader_for(project_dir).load().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed validation"), "{message}");
        assert!(message.contains("BROKEN"), "{message}");
    }

    #[test]
    fn test_local_config_wins_over_project() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("primer.toml"),
            r#"
[[driving.countries]]
code = "NZ"
minimum_age = 16
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("primer.local.toml"),
            r#"
[[driving.countries]]
code = "NZ"
minimum_age = 18
"#,
        )
        .expect("Failed to write local config");

        let config = loader_for(project_dir).load().expect("Failed to load config");

        assert_eq!(config.driving.countries, vec![CountryEntry::new("NZ", 18)]);
    }
}
