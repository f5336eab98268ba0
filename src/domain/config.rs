//! Field configuration
//!
//! Hosts usually pass this as a JSON object, camelCase keys, every key optional:
//! `{"pixelSize": 4, "pushRadius": 30, "settlePolicy": "deviation"}`

use serde::{Deserialize, Serialize};

use super::particle::SettlePolicy;

pub const DEFAULT_PIXEL_SIZE: u32 = 4;
pub const DEFAULT_PUSH_RADIUS: f32 = 30.0;
pub const DEFAULT_FRICTION: f32 = 0.75;
pub const DEFAULT_EASE: f32 = 0.6;
pub const DEFAULT_MAX_ACTIVE: usize = 65_536;
pub const DEFAULT_INITIAL_ACTIVE_CAPACITY: usize = 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Sampling stride in source pixels.
    pub pixel_size: u32,
    /// Pointer influence radius in surface pixels.
    pub push_radius: f32,
    pub friction: f32,
    pub ease: f32,
    /// Drawn particle size; `pixel_size / 2` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_size: Option<f32>,
    /// Hard cap on survivors carried into the next tick.
    pub max_active: usize,
    pub initial_active_capacity: usize,
    pub settle_policy: SettlePolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            pixel_size: DEFAULT_PIXEL_SIZE,
            push_radius: DEFAULT_PUSH_RADIUS,
            friction: DEFAULT_FRICTION,
            ease: DEFAULT_EASE,
            particle_size: None,
            max_active: DEFAULT_MAX_ACTIVE,
            initial_active_capacity: DEFAULT_INITIAL_ACTIVE_CAPACITY,
            settle_policy: SettlePolicy::default(),
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FieldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pixel_size == 0 {
            return Err("pixelSize must be at least 1".to_string());
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(format!("friction must be in (0, 1), got {}", self.friction));
        }
        if !(self.ease > 0.0 && self.ease < 1.0) {
            return Err(format!("ease must be in (0, 1), got {}", self.ease));
        }
        if !self.push_radius.is_finite() || self.push_radius < 0.0 {
            return Err(format!("pushRadius must be finite and >= 0, got {}", self.push_radius));
        }
        if let Some(size) = self.particle_size {
            if !size.is_finite() || size < 0.0 {
                return Err(format!("particleSize must be finite and >= 0, got {}", size));
            }
        }
        if self.max_active == 0 {
            return Err("maxActive must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn resolved_particle_size(&self) -> f32 {
        self.particle_size
            .unwrap_or(self.pixel_size as f32 * 0.5)
    }
}
