//! Visual theme: every color the board uses, as CSS strings, plus
//! stroke weights and corner radii. Loadable from JSON so a setup can
//! restyle the board without rebuilding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Window clear color behind the raster's transparent pixels.
    pub background: String,
    pub tower_fill: String,
    pub tower_stroke: String,
    pub base_stroke: String,
    pub base_fill: String,
    pub disk_stroke: String,
    pub tower_stroke_weight: i32,
    pub disk_stroke_weight: i32,
    pub tower_corner_radius: i32,
    pub disk_corner_radius: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: String::from("#fdf6e3"),
            tower_fill: String::from("#8d6e63"),
            tower_stroke: String::from("#4e342e"),
            base_stroke: String::from("#3e2723"),
            base_fill: String::from("#a1887f"),
            disk_stroke: String::from("black"),
            tower_stroke_weight: 2,
            disk_stroke_weight: 2,
            tower_corner_radius: 6,
            disk_corner_radius: 8,
        }
    }
}

impl Theme {
    /// Load a theme from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Save the theme to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}
