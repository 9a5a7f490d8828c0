//! Dashboard Configuration
//!
//! Defaults can be overridden by a `window.DARK_WHALE_CONFIG` object set
//! before the WASM bundle loads. Missing fields keep their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{DashboardError, DashboardResult};

/// Global object read at startup
pub const CONFIG_GLOBAL: &str = "DARK_WHALE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Synthetic loading delay after switching sections
    pub loading_delay_ms: u32,
    pub hero_scene_url: String,
    pub hero_height_px: u32,
    /// Number of day cells in the content calendar
    pub calendar_days: u8,
    pub calendar_month: String,
    pub currency_symbol: String,
    pub avatar_url: String,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 450,
            hero_scene_url: "https://prod.spline.design/41MGRk-UDPKO-l6W/scene.splinecode".to_string(),
            hero_height_px: 260,
            calendar_days: 21,
            calendar_month: "Nov".to_string(),
            currency_symbol: "€".to_string(),
            avatar_url: "https://i.pravatar.cc/64?img=12".to_string(),
            log_level: "info".to_string(),
            log_capacity: 500,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        serde_json::from_str(json).map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Read the page-provided config, falling back to defaults.
///
/// Runs before the logger is installed, so problems go straight to the console.
pub fn load_config() -> DashboardConfig {
    match read_global_config() {
        Ok(Some(config)) => config,
        Ok(None) => DashboardConfig::default(),
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] {}; using defaults", e).into());
            DashboardConfig::default()
        }
    }
}

fn read_global_config() -> DashboardResult<Option<DashboardConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| DashboardError::Config(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| DashboardError::Config(e.to_string()))
}
