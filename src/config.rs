use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Keyboard focus the layer surface asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardInteractivity {
    #[default]
    None,
    OnDemand,
    Exclusive,
}

/// Demo settings (settings.json).
///
/// Only the window dressing lives here; layer, anchors and exclusive zone
/// always start from the compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_title")]
    pub title: CompactString,
    #[serde(default = "default_namespace")]
    pub namespace: CompactString,
    #[serde(default)]
    pub keyboard_mode: KeyboardInteractivity,
    #[serde(default = "default_menu_items")]
    pub menu_items: usize,
    #[serde(default = "default_menu_label")]
    pub menu_label: CompactString,
}

fn default_title() -> CompactString {
    "Window".into()
}

fn default_namespace() -> CompactString {
    "layer-shell-demo".into()
}

fn default_menu_items() -> usize {
    3
}

fn default_menu_label() -> CompactString {
    "Menu item {}".into()
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            namespace: default_namespace(),
            keyboard_mode: KeyboardInteractivity::default(),
            menu_items: default_menu_items(),
            menu_label: default_menu_label(),
        }
    }
}

impl DemoSettings {
    /// Load settings, falling back to defaults if the file is missing or broken
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };

        serde_json::from_slice(&data).unwrap_or_else(|e| {
            warn!("Ignoring malformed settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let dir = path.parent().ok_or_else(|| anyhow::anyhow!("Invalid path"))?;
        std::fs::create_dir_all(dir)?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

/// Configuration paths
pub struct ConfigPaths {
    pub settings: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));

        Self {
            settings: config_dir.join("layer-shell-demo/settings.json"),
        }
    }

    /// Use `settings` instead of the default location
    pub fn with_settings(settings: impl Into<PathBuf>) -> Self {
        Self {
            settings: settings.into(),
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
