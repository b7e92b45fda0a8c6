use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the per-point vertical perturbation is applied each tick.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ParticleMotion {
    /// Add `sin(t + i) * jitter` to the stored coordinate every tick.
    /// Points random-walk away from their spawn height over a long session.
    #[default]
    Cumulative,
    /// Recompute `base + sin(t + i) * jitter` from the spawn height every
    /// tick. Bounded.
    Anchored,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
/// Per-item particle cloud parameters. Read once when an item is created.
pub struct ParticleOptions {
    /// Points per item.
    #[schemars(title = "Count", range(min = 0, max = 1000))]
    pub count: usize,
    /// Size of the spawn box (x, y, z), centered on the item origin.
    #[schemars(skip)]
    pub extent: [f32; 3],
    /// Amplitude of the vertical perturbation per tick.
    #[schemars(title = "Jitter", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub jitter: f32,
    /// Rigid rotation of the whole cloud about the vertical axis per tick.
    #[schemars(title = "Spin", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub spin: f32,
    /// Perturbation model.
    #[schemars(title = "Motion")]
    pub motion: ParticleMotion,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 100,
            extent: [400.0, 500.0, 100.0],
            jitter: 0.5,
            spin: 0.01,
            motion: ParticleMotion::Cumulative,
        }
    }
}
