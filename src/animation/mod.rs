//! Per-frame motion: damped convergence toward layout targets, the idle
//! float and spin, and each item's particle cloud.

pub mod driver;
pub mod motion;
pub mod particles;
pub mod transform;

pub use driver::AnimationDriver;
pub use motion::ItemMotion;
pub use particles::ParticleField;
pub use transform::{damp, Transform};
