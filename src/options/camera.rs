use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and pointer-follow parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position the camera starts at and resets to.
    #[schemars(skip)]
    pub home_eye: [f32; 3],
    /// Fraction of the remaining offset toward the pointer goal covered
    /// per tick.
    #[schemars(title = "Follow Speed", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub follow_factor: f32,
    /// Eye offset reached when the pointer sits at a viewport edge.
    #[schemars(title = "Follow Range", range(min = 0.0, max = 500.0), extend("step" = 10.0))]
    pub follow_range: f32,
    /// Distance moved by one keyboard nudge.
    #[schemars(title = "Nudge Step", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub nudge_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 10000.0,
            home_eye: [0.0, 0.0, 1000.0],
            follow_factor: 0.02,
            follow_range: 100.0,
            nudge_step: 50.0,
        }
    }
}
