//! Position + Euler orientation pair and its damped interpolation.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Where an item sits and how it is turned.
///
/// `orientation` holds XYZ Euler angles in radians. Angles are not wrapped:
/// a presented roll carries the item's spin, which grows without bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians.
    pub orientation: Vec3,
}

impl Transform {
    /// Origin, no rotation. Every item starts here.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Vec3::ZERO,
    };

    /// Transform from its two parts.
    #[must_use]
    pub const fn new(position: Vec3, orientation: Vec3) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Move the position `factor` of the way toward `target`.
    #[inline]
    pub fn damp_position(&mut self, target: Vec3, factor: f32) {
        self.position = damp(self.position, target, factor);
    }

    /// Move each orientation axis independently `factor` of the way toward
    /// `target`.
    #[inline]
    pub fn damp_orientation(&mut self, target: Vec3, factor: f32) {
        self.orientation = damp(self.orientation, target, factor);
    }

    /// Copy raised by `dy` on the vertical axis.
    #[must_use]
    pub fn lifted(self, dy: f32) -> Self {
        Self {
            position: self.position + Vec3::Y * dy,
            ..self
        }
    }

    /// Orientation as a quaternion (intrinsic X, then Y, then Z).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        )
    }

    /// Model matrix: rotate, then translate.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }
}

/// One step of exponential approach: `current + (target - current) * factor`.
///
/// Repeated `n` times against a fixed target the remaining distance is
/// `(1 - factor)^n` of the original; it shrinks geometrically but never
/// reaches zero for `0 < factor < 1`.
#[inline]
#[must_use]
pub fn damp(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damp_covers_the_requested_fraction() {
        let v = damp(Vec3::ZERO, Vec3::new(10.0, -20.0, 40.0), 0.25);
        assert!((v - Vec3::new(2.5, -5.0, 10.0)).length() < 1e-6);
    }

    #[test]
    fn distance_decays_geometrically() {
        let target = Vec3::new(300.0, -120.0, 75.0);
        let f = 0.05;
        let mut t = Transform::IDENTITY;
        let d0 = t.position.distance(target);
        for n in 1..=100 {
            t.damp_position(target, f);
            let expected = (1.0f64 - f64::from(f)).powi(n) * f64::from(d0);
            let actual = f64::from(t.position.distance(target));
            assert!(actual > 0.0, "reached target at tick {n}");
            assert!(
                (actual - expected).abs() <= expected * 1e-3 + 1e-4,
                "tick {n}: {actual} vs {expected}"
            );
        }
    }

    #[test]
    fn distance_eventually_drops_below_any_epsilon() {
        let target = Vec3::new(800.0, 0.0, 0.0);
        let mut t = Transform::IDENTITY;
        let mut ticks = 0;
        while t.position.distance(target) > 0.01 {
            t.damp_position(target, 0.05);
            ticks += 1;
            assert!(ticks < 1000, "did not converge");
        }
        // (0.95)^n * 800 < 0.01  =>  n >= 220
        assert!((200..=240).contains(&ticks), "{ticks}");
    }

    #[test]
    fn orientation_axes_damp_independently() {
        let mut t = Transform::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0));
        t.damp_orientation(Vec3::new(0.0, 2.0, -1.0), 0.5);
        assert!((t.orientation - Vec3::new(0.5, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn lifted_only_moves_vertically() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        let up = t.lifted(4.0);
        assert_eq!(up.position, Vec3::new(1.0, 6.0, 3.0));
        assert_eq!(up.orientation, t.orientation);
    }

    #[test]
    fn identity_matrix_for_identity_transform() {
        assert!(Transform::IDENTITY.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }
}
