//! Per-item drifting point cloud.

use glam::Vec3;
use rand::Rng;

use crate::options::{ParticleMotion, ParticleOptions};

/// A fixed set of points owned by one item, in that item's local frame.
///
/// Points are generated once from uniform offsets inside a box centered on
/// the item origin and are never regenerated. Each tick perturbs their
/// vertical coordinate and spins the whole cloud about the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    points: Vec<Vec3>,
    spawn: Vec<Vec3>,
    rotation_y: f32,
    jitter: f32,
    spin: f32,
    motion: ParticleMotion,
}

impl ParticleField {
    /// Scatter `options.count` points inside `options.extent`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        options: &ParticleOptions,
    ) -> Self {
        let extent = Vec3::from_array(options.extent);
        let points: Vec<Vec3> = (0..options.count)
            .map(|_| {
                let unit = Vec3::new(
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                );
                (unit - Vec3::splat(0.5)) * extent
            })
            .collect();
        Self {
            spawn: points.clone(),
            points,
            rotation_y: 0.0,
            jitter: options.jitter,
            spin: options.spin,
            motion: options.motion,
        }
    }

    /// Advance one frame at absolute time `elapsed` (seconds).
    ///
    /// Point `i` moves vertically by `sin(elapsed + i) * jitter`. Under
    /// [`ParticleMotion::Cumulative`] that amount is added to the stored
    /// coordinate, so heights random-walk over a long session; under
    /// [`ParticleMotion::Anchored`] it is measured from the spawn height.
    pub fn tick(&mut self, elapsed: f64) {
        let jitter = f64::from(self.jitter);
        for (i, (point, spawn)) in
            self.points.iter_mut().zip(&self.spawn).enumerate()
        {
            let wave = ((elapsed + i as f64).sin() * jitter) as f32;
            point.y = match self.motion {
                ParticleMotion::Cumulative => point.y + wave,
                ParticleMotion::Anchored => spawn.y + wave,
            };
        }
        self.rotation_y += self.spin;
    }

    /// Current point positions in the item's local frame, before the
    /// group rotation.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Positions the points were generated at.
    #[must_use]
    pub fn spawn_points(&self) -> &[Vec3] {
        &self.spawn
    }

    /// Accumulated rotation of the whole cloud about the vertical axis.
    #[must_use]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point positions as tightly packed `f32` triples, ready for a vertex
    /// buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}
