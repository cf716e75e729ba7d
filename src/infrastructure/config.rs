use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::catalog::Catalog,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Rows subtracted from the header height when the overlay capability is on
const HEADER_OFFSET: u16 = 1;
/// Top padding used when the overlay capability is off
const DEFAULT_TOP_PADDING: u16 = 1;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Terminal capabilities decided once at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Capabilities {
    /// Draw the dimming overlay after a long press
    #[serde(default = "default_supports_overlay_blur")]
    pub supports_overlay_blur: bool,
    /// Height of the header band above the search bar, in rows
    #[serde(default = "default_header_height")]
    pub header_height: u16,
}

fn default_supports_overlay_blur() -> bool {
    true
}

fn default_header_height() -> u16 {
    2
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            supports_overlay_blur: default_supports_overlay_blur(),
            header_height: default_header_height(),
        }
    }
}

impl Capabilities {
    /// Empty rows above the search bar
    pub fn top_padding(&self) -> u16 {
        if self.supports_overlay_blur {
            self.header_height.saturating_sub(HEADER_OFFSET)
        } else {
            DEFAULT_TOP_PADDING
        }
    }

    /// The loading indicator is drawn small alongside the overlay and large otherwise
    pub fn compact_spinner(&self) -> bool {
        self.supports_overlay_blur
    }
}

/// Behaviour of the in-process search store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Simulated lookup latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_latency_ms() -> u64 {
    250
}

fn default_max_results() -> usize {
    50
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            max_results: default_max_results(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load the user configuration from the default config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Configuration shipped with the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load user configuration files from `config_dir` on top of the defaults.
    ///
    /// Missing files are fine: the defaults are used as they are.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// Fill everything the user left out with the shipped defaults
    fn merge_defaults(&mut self, default_config: Config) {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        if self.catalog.is_empty() {
            self.catalog = default_config.catalog;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::catalog::Shelf, presentation::config::keybindings::Action};

    fn temp_dir(name: &str) -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!(
            "{}-{name}-{}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn test_defaults_parse() -> color_eyre::Result<()> {
        let cfg = Config::defaults()?;

        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)]),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)]),
            Some(&Action::LongPress)
        );
        assert!(!cfg.catalog.items(Shelf::PopularMovies).is_empty());
        assert!(!cfg.catalog.items(Shelf::PopularTv).is_empty());
        assert!(!cfg.catalog.items(Shelf::Family).is_empty());
        assert!(!cfg.catalog.items(Shelf::Documentary).is_empty());
        assert_eq!(cfg.capabilities, Capabilities::default());
        Ok(())
    }

    #[test]
    fn test_load_without_user_file_uses_defaults() -> color_eyre::Result<()> {
        let dir = temp_dir("empty")?;

        let cfg = Config::load(&dir, &dir)?;

        assert_eq!(cfg.catalog, Config::defaults()?.catalog);
        assert_eq!(cfg.config._config_dir, dir);
        assert!(!cfg.keybindings.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_user_file_overrides_capabilities() -> color_eyre::Result<()> {
        let dir = temp_dir("user")?;
        std::fs::write(
            dir.join("config.json5"),
            r#"{
                capabilities: { supports_overlay_blur: false },
                search: { latency_ms: 0 },
            }"#,
        )?;

        let cfg = Config::load(&dir, &dir)?;
        std::fs::remove_file(dir.join("config.json5"))?;

        assert!(!cfg.capabilities.supports_overlay_blur);
        assert_eq!(cfg.capabilities.header_height, 2);
        assert_eq!(cfg.search.latency_ms, 0);
        assert_eq!(cfg.search.max_results, 50);
        assert!(!cfg.catalog.is_empty());
        Ok(())
    }

    #[test]
    fn test_top_padding() {
        let with_overlay = Capabilities {
            supports_overlay_blur: true,
            header_height: 4,
        };
        assert_eq!(with_overlay.top_padding(), 3);
        assert!(with_overlay.compact_spinner());

        let without_overlay = Capabilities {
            supports_overlay_blur: false,
            header_height: 4,
        };
        assert_eq!(without_overlay.top_padding(), 1);
        assert!(!without_overlay.compact_spinner());
    }
}
