use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};
use crate::domain::rule::Rule;

pub const DEFAULT_WIDTH: u32 = 160;
pub const DEFAULT_HEIGHT: u32 = 120;
pub const DEFAULT_RULE: &str = "B5678/S45678";
pub const DEFAULT_FILL_RATIO: f64 = 0.45;
pub const DEFAULT_MAX_ITERATIONS: u32 = 15;
pub const DEFAULT_SMOKE_LIFETIME: f32 = 6.0;
pub const DEFAULT_SMOKE_DECAY: f32 = 0.5;

/// Smallest side that still leaves one interior cell inside the border
pub const MIN_SIDE: u32 = 3;

/// Engine configuration. Every JSON field is optional:
///
/// ```json
/// { "width": 200, "height": 150, "rule": "B678/S345678", "fillRatio": 0.5, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub width: u32,
    pub height: u32,
    pub rule: String,
    pub fill_ratio: f64,
    pub max_iterations: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub elements: ElementParams,
}

/// Tunables read by the element behaviors every step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementParams {
    /// Timer given to smoke born from fire (or placed by hand)
    pub smoke_lifetime: f32,
    /// Subtracted from every smoke timer once per step
    pub smoke_decay: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rule: DEFAULT_RULE.to_string(),
            fill_ratio: DEFAULT_FILL_RATIO,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            elements: ElementParams::default(),
        }
    }
}

impl Default for ElementParams {
    fn default() -> Self {
        Self {
            smoke_lifetime: DEFAULT_SMOKE_LIFETIME,
            smoke_decay: DEFAULT_SMOKE_DECAY,
        }
    }
}

impl EngineSettings {
    pub fn new(width: u32, height: u32, rule: &str, fill_ratio: f64) -> Self {
        Self {
            width,
            height,
            rule: rule.to_string(),
            fill_ratio,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Settings(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check everything setup depends on and hand back the parsed rule.
    pub fn validate(&self) -> EngineResult<Rule> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(EngineError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(EngineError::InvalidFillRatio(self.fill_ratio));
        }
        self.elements.validate()?;
        Rule::parse(&self.rule)
    }
}

impl ElementParams {
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.smoke_lifetime.is_finite() && self.smoke_lifetime > 0.0) {
            return Err(EngineError::Settings(format!(
                "smokeLifetime must be positive, got {}",
                self.smoke_lifetime
            )));
        }
        if !(self.smoke_decay.is_finite() && self.smoke_decay > 0.0) {
            return Err(EngineError::Settings(format!(
                "smokeDecay must be positive, got {}",
                self.smoke_decay
            )));
        }
        Ok(())
    }
}
