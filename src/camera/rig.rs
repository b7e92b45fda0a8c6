use glam::Vec3;

use super::core::Camera;
use crate::input::PointerSample;
use crate::options::CameraOptions;

/// Direction of a discrete keyboard camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NudgeDirection {
    /// Toward the scene (-Z).
    Forward,
    /// Away from the scene (+Z).
    Back,
    /// -X.
    Left,
    /// +X.
    Right,
}

impl NudgeDirection {
    fn unit(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::NEG_Z,
            Self::Back => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
        }
    }
}

/// Owns the [`Camera`] and moves its eye: pointer follow each tick, plus
/// keyboard nudges and a home reset between ticks.
///
/// The camera always looks at the world origin, so its orientation follows
/// from where the eye is.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: Camera,
    home: Vec3,
    follow_factor: f32,
    follow_range: f32,
    nudge_step: f32,
}

impl CameraRig {
    /// Rig at the configured home position.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            camera: Camera::from_options(options, aspect),
            home: Vec3::from_array(options.home_eye),
            follow_factor: options.follow_factor,
            follow_range: options.follow_range,
            nudge_step: options.nudge_step,
        }
    }

    /// The camera as of the last update.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// One follow step toward the pointer.
    ///
    /// The eye's x/y move `follow_factor` of the way toward
    /// `(x, -y) * follow_range`. While a drag is active nothing moves and
    /// the eye stays where it was. Returns whether the eye was updated.
    pub fn follow(&mut self, pointer: PointerSample) -> bool {
        if pointer.drag_active {
            return false;
        }
        let goal_x = pointer.x * self.follow_range;
        let goal_y = -pointer.y * self.follow_range;
        let eye = &mut self.camera.eye;
        eye.x += (goal_x - eye.x) * self.follow_factor;
        eye.y += (goal_y - eye.y) * self.follow_factor;
        self.look_at_origin();
        true
    }

    /// Move the eye one `nudge_step` in `direction`.
    pub fn nudge(&mut self, direction: NudgeDirection) {
        self.camera.eye += direction.unit() * self.nudge_step;
        self.look_at_origin();
        log::debug!("camera nudged {direction:?} to {}", self.camera.eye);
    }

    /// Put the eye back at its home position.
    pub fn reset(&mut self) {
        self.camera.eye = self.home;
        self.look_at_origin();
        log::debug!("camera reset to {}", self.home);
    }

    /// Update the aspect ratio after a viewport resize. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    fn look_at_origin(&mut self) {
        self.camera.target = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default(), 1.0)
    }

    fn pointer(x: f32, y: f32, drag_active: bool) -> PointerSample {
        PointerSample { x, y, drag_active }
    }

    #[test]
    fn follow_damps_toward_pointer_goal() {
        let mut r = rig();
        assert!(r.follow(pointer(1.0, 1.0, false)));
        // goal (100, -100), 2% of the way
        assert!((r.eye() - Vec3::new(2.0, -2.0, 1000.0)).length() < 1e-4);

        for _ in 0..2000 {
            let _ = r.follow(pointer(1.0, 1.0, false));
        }
        assert!((r.eye().x - 100.0).abs() < 0.01);
        assert!((r.eye().y + 100.0).abs() < 0.01);
        assert_eq!(r.camera().target, Vec3::ZERO);
    }

    #[test]
    fn drag_freezes_without_reset() {
        let mut r = rig();
        for _ in 0..10 {
            let _ = r.follow(pointer(0.5, -0.5, false));
        }
        let frozen = r.eye();
        for _ in 0..50 {
            assert!(!r.follow(pointer(-1.0, 1.0, true)));
        }
        assert_eq!(r.eye(), frozen);

        let _ = r.follow(pointer(-1.0, 1.0, false));
        assert_ne!(r.eye(), frozen);
    }

    #[test]
    fn nudges_and_reset() {
        let mut r = rig();
        r.nudge(NudgeDirection::Forward);
        r.nudge(NudgeDirection::Forward);
        r.nudge(NudgeDirection::Right);
        assert_eq!(r.eye(), Vec3::new(50.0, 0.0, 900.0));
        r.nudge(NudgeDirection::Back);
        r.nudge(NudgeDirection::Left);
        assert_eq!(r.eye(), Vec3::new(0.0, 0.0, 950.0));
        r.reset();
        assert_eq!(r.eye(), Vec3::new(0.0, 0.0, 1000.0));
    }

    #[test]
    fn resize_ignores_zero_area() {
        let mut r = rig();
        r.resize(1920, 1080);
        assert!((r.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
        r.resize(0, 1080);
        assert!((r.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
