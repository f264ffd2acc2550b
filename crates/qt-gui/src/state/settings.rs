//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when the opened report
//! changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use qt_client::ClientSettings;
use qt_model::{INITIAL_BATCH, REVEAL_DELAY, ReportId};

use crate::error::GuiError;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Server connection settings.
    pub client: ClientSettings,

    /// Display settings.
    pub display: DisplaySettings,

    /// What the user may change.
    pub permissions: Permissions,
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// A missing file yields defaults silently; an unreadable or corrupt file
    /// yields defaults plus the error to show.
    pub fn load() -> (Self, Option<GuiError>) {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> (Self, Option<GuiError>) {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return (Self::default(), None);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read settings");
                return (
                    Self::default(),
                    Some(GuiError::SettingsLoad {
                        reason: e.to_string(),
                    }),
                );
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => (settings, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt settings file");
                (
                    Self::default(),
                    Some(GuiError::SettingsLoad {
                        reason: e.to_string(),
                    }),
                )
            }
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {e}"),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {e}"),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("nl", "ICTU", "QualityTimeViewer")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Report opened most recently; reopened at startup.
    pub last_report: Option<ReportId>,

    /// Reload the report every this many seconds (0 disables).
    pub refresh_interval_secs: u64,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Subjects rendered immediately when the report view mounts.
    pub initial_batch: usize,

    /// Delay before the remaining subjects are rendered.
    pub reveal_delay_ms: u64,

    /// Use the dark theme.
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            initial_batch: INITIAL_BATCH,
            reveal_delay_ms: u64::try_from(REVEAL_DELAY.as_millis()).unwrap_or(50),
            dark_mode: false,
        }
    }
}

impl DisplaySettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// What the user may change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    /// Show the add, copy, and move controls.
    pub editor: bool,
}

impl Permissions {
    pub fn can_edit(self) -> bool {
        self.editor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, error) = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());
        assert_eq!(settings.display.initial_batch, 3);
        assert_eq!(settings.display.reveal_delay_ms, 50);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.general.last_report = Some(ReportId::new("r-1"));
        settings.client.api_url = "http://qt.example.org".to_string();
        settings.permissions.editor = true;
        settings.save_to(&path).unwrap();

        let (loaded, error) = Settings::load_from(&path);
        assert!(error.is_none());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display]\ninitial_batch = 5\n").unwrap();

        let (settings, error) = Settings::load_from(&path);
        assert!(error.is_none());
        assert_eq!(settings.display.initial_batch, 5);
        assert_eq!(settings.display.reveal_delay_ms, 50);
        assert_eq!(settings.client, ClientSettings::default());
    }

    #[test]
    fn test_corrupt_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display\ninitial_batch = ").unwrap();

        let (settings, error) = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(matches!(error, Some(GuiError::SettingsLoad { .. })));
    }
}
