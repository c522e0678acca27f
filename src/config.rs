use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use crate::error::ConfigError;

// Moon measurements (scene units)
pub const MOON_RADIUS: f32 = 3.0;
pub const MOON_SEGMENTS: u32 = 64;
pub const DISPLACEMENT_SCALE: f32 = 0.06;
pub const BUMP_SCALE: f32 = 0.04;

// Skydome
pub const SKYDOME_RADIUS: f32 = 50.0;
pub const SKYDOME_SEGMENTS: u32 = 64;

// Rotation speeds, radians per frame
pub const MOON_SPIN_Y: f32 = 0.01;
pub const MOON_SPIN_X: f32 = 0.0005;
pub const SKYDOME_SPIN_Y: f32 = 0.001;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 10.0;
pub const PIXEL_RATIO: f32 = 2.0;

// Light
pub const LIGHT_INTENSITY: f32 = 1.25;
pub const LUX_PER_INTENSITY: f32 = 2_000.0; // unit intensity -> illuminance
pub const LIGHT_POSITION: Vec3 = Vec3::new(-100.0, 10.0, 50.0);

// Entrance timeline, seconds
pub const INTRO_DURATION: f32 = 1.0;

// UI
pub const TITLE_FONT_SIZE: f32 = 32.0;
pub const QUOTE_FONT_SIZE: f32 = 20.0;
pub const BUTTON_FONT_SIZE: f32 = 16.0;
pub const NAV_FONT_SIZE: f32 = 14.0;

// Asset URLs
pub const MOON_COLOR_URL: &str = "https://s3-us-west-2.amazonaws.com/s.cdpn.io/17271/lroc_color_poles_1k.jpg";
pub const MOON_DISPLACEMENT_URL: &str = "https://s3-us-west-2.amazonaws.com/s.cdpn.io/17271/ldem_3_8bit.jpg";
pub const SKYDOME_URL: &str = "https://s3-us-west-2.amazonaws.com/s.cdpn.io/17271/hipp8_s.jpg";

pub const CONFIG_ENV: &str = "MOONSCAPE_CONFIG";
pub const CONFIG_FILE: &str = "moonscape.ron";

/// Runtime overrides, read from a RON file at startup.
/// Any field left out of the file keeps its default.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub color_map_url: String,
    pub displacement_map_url: String,
    pub skydome_map_url: String,

    pub window_width: f32,
    pub window_height: f32,

    // font with CJK coverage, relative to assets/
    pub ui_font: Option<String>,

    // orbit distance limits, unbounded unless set
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            color_map_url: MOON_COLOR_URL.to_string(),
            displacement_map_url: MOON_DISPLACEMENT_URL.to_string(),
            skydome_map_url: SKYDOME_URL.to_string(),
            window_width: 1280.0,
            window_height: 720.0,
            ui_font: None,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
        }
    }
}

impl SceneConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        ron::from_str(source).map_err(ConfigError::Parse)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::parse(&source)
    }

    /// Env var path first, then `moonscape.ron` next to the binary's cwd.
    /// Errors are logged and fall back to defaults.
    pub fn load() -> Self {
        let path: PathBuf = match std::env::var_os(CONFIG_ENV) {
            Some(path) => path.into(),
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    info!("no {} found, using default scene config", CONFIG_FILE);
                    return Self::default();
                }
                local.to_path_buf()
            }
        };

        match Self::from_file(&path) {
            Ok(config) => {
                info!("loaded scene config from {}", path.display());
                config
            }
            Err(e) => {
                error!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }
}
