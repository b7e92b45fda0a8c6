//! Per-frame transform updates for every item.

use glam::Vec3;

use crate::options::AnimationOptions;
use crate::store::{ItemStore, MediaItem};

/// Steps items toward their targets and layers the idle motion on top.
///
/// The convergence factor is applied once per [`advance`](Self::advance)
/// call. It is not scaled by frame duration: a host running at 120 Hz
/// settles twice as fast in wall-clock terms as one running at 60 Hz.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    convergence_factor: f32,
    float_amplitude: f32,
    backdrop_spin: Vec3,
    backdrop_rotation: Vec3,
    ticks: u64,
}

impl AnimationDriver {
    /// Driver configured from `options`.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            convergence_factor: options.convergence_factor,
            float_amplitude: options.float_amplitude,
            backdrop_spin: Vec3::from_array(options.backdrop_spin),
            backdrop_rotation: Vec3::ZERO,
            ticks: 0,
        }
    }

    /// Per-tick convergence weight.
    #[must_use]
    pub fn convergence_factor(&self) -> f32 {
        self.convergence_factor
    }

    /// Star-field rotation accumulated so far.
    #[must_use]
    pub fn backdrop_rotation(&self) -> Vec3 {
        self.backdrop_rotation
    }

    /// Number of completed [`advance`](Self::advance) calls.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance every item, its particles, and the backdrop by one frame at
    /// absolute time `elapsed` (seconds).
    pub fn advance(&mut self, store: &mut ItemStore, elapsed: f64) {
        for item in store.iter_mut() {
            self.step_item(item, elapsed);
            item.particles_mut().tick(elapsed);
        }
        self.backdrop_rotation += self.backdrop_spin;
        self.ticks += 1;
    }

    /// One frame for one item, in order: position damping, orientation
    /// damping, float bob, spin.
    ///
    /// Items that have never been arranged have no target and skip the
    /// damping steps. The bob and the spin are stored apart from the damped
    /// transform: the bob is neither damped nor accumulated, and the spin
    /// accumulates without ever being pulled back toward the target roll.
    pub fn step_item(&self, item: &mut MediaItem, elapsed: f64) {
        let motion = item.motion();
        let factor = self.convergence_factor;
        if let Some(target) = item.target() {
            let current = item.current_mut();
            current.damp_position(target.position, factor);
            current.damp_orientation(target.orientation, factor);
        }
        let bob = motion.float_offset(elapsed, self.float_amplitude);
        item.set_float_offset(bob);
        item.advance_spin(motion.spin_rate);
    }
}
