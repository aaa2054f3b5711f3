//! Playground configuration and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/swipe-row/config.toml` (default `~/.config/swipe-row/config.toml`).
//! Command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use crate::core::motion::DEFAULT_DRAG_ELASTIC;
use crate::error::{Result, SwipeError};
use crate::ui::swipe_row::DEFAULT_CELL_WIDTH;

/// Tunables for the playground binary.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    /// px represented by one terminal column.
    pub cell_width_px: f64,
    /// Bleed factor past the drag bounds.
    pub drag_elastic: f64,
    /// Frame / tick interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            cell_width_px: DEFAULT_CELL_WIDTH,
            drag_elastic: DEFAULT_DRAG_ELASTIC,
            tick_ms: 16,
        }
    }
}

fn invalid(key: &str, value: &str) -> SwipeError {
    SwipeError::InvalidConfigValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl PlaygroundConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let (config, problems) = Self::parse(&contents);
                for problem in problems {
                    tracing::warn!(path = %path.display(), "skipping config entry: {problem}");
                }
                config
            }
            Err(_) => Self::default(),
        }
    }

    /// Parse config text.  Unknown keys are ignored; known keys with bad
    /// values keep their default and are reported back.
    pub fn parse(s: &str) -> (Self, Vec<SwipeError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if let Err(e) = config.apply(key, value) {
                problems.push(e);
            }
        }

        (config, problems)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cell_width_px" => {
                let v: f64 = value.parse().map_err(|_| invalid(key, value))?;
                if !(1.0..=64.0).contains(&v) {
                    return Err(invalid(key, value));
                }
                self.cell_width_px = v;
            }
            "drag_elastic" => {
                let v: f64 = value.parse().map_err(|_| invalid(key, value))?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(key, value));
                }
                self.drag_elastic = v;
            }
            "tick_ms" => {
                let v: u64 = value.parse().map_err(|_| invalid(key, value))?;
                // Keep this bounded for predictable animation.
                self.tick_ms = v.clamp(5, 200);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/swipe-row/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("swipe-row").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let (config, problems) = PlaygroundConfig::parse("");
        assert_eq!(config, PlaygroundConfig::default());
        assert!(problems.is_empty());
    }

    #[test]
    fn reads_known_keys_and_skips_comments() {
        let text = "# playground\n[playground]\ncell_width_px = 4\ndrag_elastic = 0.25\ntick_ms = 1000\nunknown = 3\n";
        let (config, problems) = PlaygroundConfig::parse(text);
        assert!(problems.is_empty());
        assert_eq!(config.cell_width_px, 4.0);
        assert_eq!(config.drag_elastic, 0.25);
        assert_eq!(config.tick_ms, 200);
    }

    #[test]
    fn bad_values_keep_defaults_and_are_reported() {
        let (config, problems) = PlaygroundConfig::parse("drag_elastic = 3\ncell_width_px = wide\n");
        assert_eq!(config, PlaygroundConfig::default());
        assert_eq!(
            problems,
            vec![
                SwipeError::InvalidConfigValue {
                    key: "drag_elastic".into(),
                    value: "3".into()
                },
                SwipeError::InvalidConfigValue {
                    key: "cell_width_px".into(),
                    value: "wide".into()
                },
            ]
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = PlaygroundConfig::load_from(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(config, PlaygroundConfig::default());
    }
}
