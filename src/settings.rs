//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::FontScale;

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// When true, use the colorblind-friendly chart palette
    #[serde(default)]
    pub color_blind_mode: bool,
    /// UI font scale
    #[serde(default)]
    pub font_scale: FontScale,
    /// Skip the hero reveal animation and show the finished illustration
    #[serde(default)]
    pub skip_intro: bool,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            color_blind_mode: false,
            font_scale: FontScale::default(),
            skip_intro: false,
        }
    }
}

impl UserSettings {
    /// Get the config directory path for Folio
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("Folio"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("Folio"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("folio"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk. Missing or corrupt files yield defaults.
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings JSON, falling back to defaults on any error.
    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_json()?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = UserSettings {
            version: 1,
            color_blind_mode: true,
            font_scale: FontScale::Large,
            skip_intro: true,
        };

        let json = settings.to_json().unwrap();
        let restored = UserSettings::from_json(&json);
        assert!(restored.color_blind_mode);
        assert_eq!(restored.font_scale, FontScale::Large);
        assert!(restored.skip_intro);
    }

    #[test]
    fn test_corrupt_json_yields_defaults() {
        let restored = UserSettings::from_json("{not valid json");
        assert!(!restored.color_blind_mode);
        assert_eq!(restored.font_scale, FontScale::Medium);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let restored = UserSettings::from_json(r#"{"version": 1}"#);
        assert!(!restored.skip_intro);
        assert_eq!(restored.font_scale, FontScale::Medium);
    }
}
