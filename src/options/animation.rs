use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Per-frame motion parameters shared by every item.
pub struct AnimationOptions {
    /// Fraction of the remaining distance to target covered per tick.
    ///
    /// Applied once per `tick` call regardless of wall-clock `dt`, so the
    /// settle time scales with the host frame rate.
    #[schemars(title = "Convergence", range(min = 0.005, max = 0.5), extend("step" = 0.005))]
    pub convergence_factor: f32,
    /// Peak vertical displacement of the floating bob.
    #[schemars(title = "Float Amplitude", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub float_amplitude: f32,
    /// Width of the interval per-item spin rates are drawn from, centered
    /// on zero (radians per tick).
    #[schemars(title = "Spin Range", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub spin_range: f32,
    /// Star-field rotation added every tick about x, y and z.
    #[schemars(skip)]
    pub backdrop_spin: [f32; 3],
    /// Master seed for per-item random constants. `None` draws one from
    /// the thread RNG at gallery construction.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            convergence_factor: 0.05,
            float_amplitude: 20.0,
            spin_range: 0.01,
            backdrop_spin: [0.0001, 0.0002, 0.0],
            seed: None,
        }
    }
}
