//! User settings persistence — save/load config to JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted user settings. Saved to `Documents/Layfinder/settings.json`.
#[derive(Resource, Serialize, Deserialize, Clone)]
pub struct UserSettings {
    /// Pixel size of the good icons in the entry list and info panel.
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,
    /// Whether the info panel starts open.
    #[serde(default = "default_true")]
    pub info_open: bool,
    /// Keep rendering at full rate when the window loses focus.
    #[serde(default)]
    pub background_fps: bool,
    /// Override for the catalog table location.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

fn default_true() -> bool { true }
fn default_icon_size() -> f32 { 18.0 }

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            icon_size: 18.0,
            info_open: true,
            background_fps: false,
            catalog_path: None,
        }
    }
}

impl UserSettings {
    /// Catalog table location: the configured override, or the shipped
    /// table.
    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("assets/catalog.json"),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .ok()?;
    let dir = PathBuf::from(home).join("Documents").join("Layfinder");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

pub fn save_settings(settings: &UserSettings) {
    let Some(path) = settings_path() else { return };
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

pub fn load_settings() -> UserSettings {
    let Some(path) = settings_path() else { return UserSettings::default() };
    match std::fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => UserSettings::default(),
    }
}
