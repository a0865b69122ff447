use crate::params::{DEFAULT_DIMENSION, DEFAULT_INNER_RADIUS, DEFAULT_PADDING};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Corner of the window the calculator panel is pinned to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum PanelPosition {
    #[strum(serialize = "Top Left", serialize = "top-left", serialize = "tl")]
    TopLeft,
    #[strum(serialize = "Top Right", serialize = "top-right", serialize = "tr")]
    TopRight,
    #[strum(serialize = "Bottom Left", serialize = "bottom-left", serialize = "bl")]
    BottomLeft,
    #[default]
    #[strum(serialize = "Bottom Right", serialize = "bottom-right", serialize = "br")]
    BottomRight,
}

impl PanelPosition {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[strum(serialize = "Light")]
    Light,
    #[strum(serialize = "Dark")]
    Dark,
    /// Whatever GTK preferred when rim started. Later changes to the desktop
    /// colour scheme are not tracked.
    #[default]
    #[strum(serialize = "System", serialize = "auto")]
    System,
}

impl ThemePreference {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    /// `None` defers to whatever the platform prefers.
    pub fn prefers_dark(&self) -> Option<bool> {
        match self {
            Self::Light => Some(false),
            Self::Dark => Some(true),
            Self::System => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParameterConfig {
    pub inner_radius: u32,
    pub padding: u32,
    pub dimension: u32,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            inner_radius: DEFAULT_INNER_RADIUS,
            padding: DEFAULT_PADDING,
            dimension: DEFAULT_DIMENSION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PanelConfig {
    pub position: PanelPosition,
    pub collapsed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub parameters: ParameterConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub theme: ThemePreference,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "rim", "rim").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("RIM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

/// Writes the commented default config unless a file is already there.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    write_default_config_to(&path)?;
    Ok(path)
}

fn write_default_config_to(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if path.exists() {
        log::info!("Keeping existing config at {}", path.display());
    } else {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let result = match get_config_path() {
        Ok(config_path) => watch_config(config_path, tx).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::error!("Config watcher error: {}", e);
    }
}

/// Sends `ConfigReload` whenever `config_path` changes. The parent directory
/// is created up front so a file written later by `--init-config` is seen.
async fn watch_config(config_path: PathBuf, tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return Ok(());
    };
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;

    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {}", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rim-{}-{}", name, std::process::id()));
        let _ = fs_err::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_panel_position_deserialization() {
        let cases = vec![
            ("\"bottom-right\"", PanelPosition::BottomRight),
            ("\"Bottom Right\"", PanelPosition::BottomRight),
            ("\"BR\"", PanelPosition::BottomRight),
            ("\"top-left\"", PanelPosition::TopLeft),
            ("\"TOP-LEFT\"", PanelPosition::TopLeft),
            ("\"tr\"", PanelPosition::TopRight),
            ("\"bottom-left\"", PanelPosition::BottomLeft),
        ];

        for (json, expected) in cases {
            let deserialized: PanelPosition = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_theme_deserialization() {
        let cases = vec![
            ("\"light\"", ThemePreference::Light),
            ("\"DARK\"", ThemePreference::Dark),
            ("\"system\"", ThemePreference::System),
            ("\"auto\"", ThemePreference::System),
        ];

        for (json, expected) in cases {
            let deserialized: ThemePreference = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<ThemePreference>("\"sepia\"").is_err());
    }

    #[test]
    fn test_theme_prefers_dark() {
        assert_eq!(ThemePreference::Light.prefers_dark(), Some(false));
        assert_eq!(ThemePreference::Dark.prefers_dark(), Some(true));
        assert_eq!(ThemePreference::System.prefers_dark(), None);
    }

    #[test]
    fn test_enum_index_round_trip() {
        for position in PanelPosition::iter() {
            assert_eq!(PanelPosition::from_index(position.as_index()), Some(position));
        }
        assert_eq!(PanelPosition::from_index(4), None);
        assert_eq!(ThemePreference::from_index(2), Some(ThemePreference::System));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "parameters": { "padding": 8 }, "panel": { "position": "tl" } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.parameters.padding, 8);
        assert_eq!(cfg.parameters.inner_radius, DEFAULT_INNER_RADIUS);
        assert_eq!(cfg.parameters.dimension, DEFAULT_DIMENSION);
        assert_eq!(cfg.panel.position, PanelPosition::TopLeft);
        assert!(!cfg.panel.collapsed);
        assert_eq!(cfg.theme, ThemePreference::System);
    }

    #[test]
    fn test_default_config_file_parses() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.parameters, ParameterConfig::default());
        assert_eq!(cfg.panel, PanelConfig::default());
        assert_eq!(cfg.theme, ThemePreference::System);
    }

    #[test]
    fn test_write_default_config_creates_dirs_and_keeps_existing() {
        let dir = scratch_dir("init");
        let path = dir.join("nested").join("config.toml");

        write_default_config_to(&path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "theme = \"dark\"\n").unwrap();
        write_default_config_to(&path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "theme = \"dark\"\n");

        let _ = fs_err::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_watcher_creates_missing_dir_and_reports_new_file() {
        let dir = scratch_dir("watch");
        let path = dir.join("config.toml");
        assert!(!dir.exists());

        let (tx, rx) = async_channel::unbounded();
        let watcher = tokio::spawn(watch_config(path.clone(), tx));

        // keep touching the file until the watcher is registered and reports it
        let received = tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                if dir.is_dir() {
                    let _ = fs_err::write(&path, "theme = \"dark\"\n");
                }
                tokio::select! {
                    event = rx.recv() => break event,
                    _ = tokio::time::sleep(Duration::from_millis(50)) => {}
                }
            }
        })
        .await;

        watcher.abort();
        let _ = fs_err::remove_dir_all(&dir);

        assert!(matches!(received, Ok(Ok(AppEvent::ConfigReload))));
    }
}
