//! Game balance and tuning values
//!
//! Defaults come from [`crate::consts`]. A JSON document may override any
//! subset of fields; missing fields keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading or validating tuning data
#[derive(Debug)]
pub enum TuningError {
    /// The JSON document could not be parsed
    Parse(serde_json::Error),
    /// A value is outside the range the simulation can handle
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Data-driven simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Visible area ===
    pub view_width: f32,
    pub view_height: f32,

    // === Player physics ===
    pub gravity: f32,
    pub max_jump_power: f32,
    pub charge_step: f32,
    pub move_step: f32,
    pub landing_band: f32,

    // === Population ===
    pub max_platforms: usize,
    pub disappear_ticks: u32,
    pub obstacle_score_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            gravity: GRAVITY,
            max_jump_power: MAX_JUMP_POWER,
            charge_step: CHARGE_STEP,
            move_step: MOVE_STEP,
            landing_band: LANDING_BAND,

            max_platforms: MAX_PLATFORMS,
            disappear_ticks: DISAPPEAR_TICKS,
            obstacle_score_interval: OBSTACLE_SCORE_INTERVAL,
        }
    }
}

impl Tuning {
    /// Environment variable naming a tuning JSON file (native)
    pub const ENV_VAR: &'static str = "SKY_HOP_TUNING";

    /// LocalStorage key holding tuning JSON (wasm)
    pub const STORAGE_KEY: &'static str = "sky_hop_tuning";

    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Use `json` when given and valid, otherwise log why and use defaults
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(tuning)) => {
                log::info!("Loaded custom tuning");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("{}; using default tuning", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load tuning from LocalStorage, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        Self::from_json_or_default(json.as_deref())
    }

    /// Load tuning from the file named by [`Self::ENV_VAR`], falling back
    /// to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(path) => Self::load_file(std::path::Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Failed to read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Half of the visible height; the camera keeps the player at or below it
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.view_height / 2.0
    }

    /// Check that spawn ranges and caps are non-degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("gravity", self.gravity),
            ("max_jump_power", self.max_jump_power),
            ("charge_step", self.charge_step),
            ("move_step", self.move_step),
            ("landing_band", self.landing_band),
        ];
        if let Some((field, value)) = floats.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::Invalid {
                field,
                reason: format!("must be finite, got {}", value),
            });
        }

        let min_width = PLATFORM_MARGIN_LEFT + PLATFORM_MARGIN_RIGHT;
        if !(self.view_width > min_width) {
            return Err(TuningError::Invalid {
                field: "view_width",
                reason: format!("must exceed {} (platform spawn margins)", min_width),
            });
        }
        if !(self.view_height > 0.0) {
            return Err(TuningError::Invalid {
                field: "view_height",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.gravity > 0.0) {
            return Err(TuningError::Invalid {
                field: "gravity",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.max_jump_power >= 0.0) {
            return Err(TuningError::Invalid {
                field: "max_jump_power",
                reason: "must not be negative".to_string(),
            });
        }
        if !(self.charge_step >= 0.0) {
            return Err(TuningError::Invalid {
                field: "charge_step",
                reason: "must not be negative".to_string(),
            });
        }
        if !(self.landing_band >= 0.0) {
            return Err(TuningError::Invalid {
                field: "landing_band",
                reason: "must not be negative".to_string(),
            });
        }
        if self.max_platforms == 0 {
            return Err(TuningError::Invalid {
                field: "max_platforms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.obstacle_score_interval == 0 {
            return Err(TuningError::Invalid {
                field: "obstacle_score_interval",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
