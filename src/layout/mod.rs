//! Spatial formations for gallery items.
//!
//! [`compute`] is the whole layout engine: a pure function from
//! `(kind, index, total)` to a target [`Transform`]. It reads no state and
//! no options, so recomputing with the same arguments always yields the
//! same bits. [`ViewController`] owns the active [`LayoutKind`] and writes
//! the results back onto items.
//!
//! Orientations are XYZ Euler angles in radians (pitch, yaw, roll).

mod view;

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewController;

use crate::animation::Transform;
use crate::error::GalleryError;

/// Radius of the sphere formation.
pub const SPHERE_RADIUS: f32 = 800.0;
/// Outer radius of the spiral formation (index 0).
pub const SPIRAL_RADIUS: f32 = 600.0;
/// Vertical distance between consecutive spiral items.
pub const SPIRAL_PITCH: f32 = 200.0;
/// Full turns of the spiral, expressed as a sweep angle.
pub const SPIRAL_SWEEP: f32 = 4.0 * TAU;
/// Edge length of the cube formation.
pub const CUBE_EXTENT: f32 = 600.0;
/// Radius of the portal ring.
pub const PORTAL_RADIUS: f32 = 400.0;

/// One of the four supported spatial arrangements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Even distribution over a sphere.
    #[default]
    Sphere,
    /// Descending helix that narrows toward its last item.
    Spiral,
    /// Axis-aligned 3-D grid.
    Cube,
    /// Horizontal ring, every item facing the center.
    Portal,
}

impl LayoutKind {
    /// Every kind, in menu order.
    pub const ALL: [LayoutKind; 4] =
        [Self::Sphere, Self::Spiral, Self::Cube, Self::Portal];

    /// Lower-case name used at the control boundary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Spiral => "spiral",
            Self::Cube => "cube",
            Self::Portal => "portal",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GalleryError::UnknownLayout(s.to_owned()))
    }
}

/// Target transform for item `index` of `total` in formation `kind`.
///
/// Returns `None` when `total == 0` or `index >= total`; there is nothing
/// to place.
#[must_use]
pub fn compute(
    kind: LayoutKind,
    index: usize,
    total: usize,
) -> Option<Transform> {
    if index >= total {
        return None;
    }
    let placement = match kind {
        LayoutKind::Sphere => sphere(index, total),
        LayoutKind::Spiral => spiral(index, total),
        LayoutKind::Cube => cube(index, total),
        LayoutKind::Portal => portal(index, total),
    };
    Some(placement)
}

fn sphere(index: usize, total: usize) -> Transform {
    let phi = (-1.0 + 2.0 * index as f32 / total as f32).acos();
    let theta = (total as f32 * PI).sqrt() * phi;
    let position = Vec3::new(
        SPHERE_RADIUS * theta.cos() * phi.sin(),
        SPHERE_RADIUS * theta.sin() * phi.sin(),
        SPHERE_RADIUS * phi.cos(),
    );
    Transform::new(position, Vec3::new(phi, theta, 0.0))
}

fn spiral(index: usize, total: usize) -> Transform {
    let fraction = index as f32 / total as f32;
    let angle = fraction * SPIRAL_SWEEP;
    let radius = SPIRAL_RADIUS * (1.0 - fraction);
    let height = (index as f32 - total as f32 / 2.0) * SPIRAL_PITCH;
    let position =
        Vec3::new(radius * angle.cos(), height, radius * angle.sin());
    Transform::new(position, Vec3::new(0.0, -angle, 0.0))
}

fn cube(index: usize, total: usize) -> Transform {
    let side = grid_side(total);
    let cell = [index % side, (index / side) % side, index / (side * side)];
    let position = Vec3::from_array(cell.map(|c| grid_coordinate(c, side)));
    Transform::new(position, Vec3::ZERO)
}

fn portal(index: usize, total: usize) -> Transform {
    let angle = index as f32 / total as f32 * TAU;
    let position = Vec3::new(
        PORTAL_RADIUS * angle.cos(),
        0.0,
        PORTAL_RADIUS * angle.sin(),
    );
    Transform::new(position, Vec3::new(0.0, -angle + FRAC_PI_2, 0.0))
}

/// Smallest `n` with `n³ >= total`, i.e. `ceil(cbrt(total))` without the
/// float rounding that turns `cbrt(27)` into `3.0000000000000004`.
#[must_use]
pub fn grid_side(total: usize) -> usize {
    let mut side = 1;
    while side * side * side < total {
        side += 1;
    }
    side
}

/// Grid cell `c` of `side` cells mapped onto `[-EXTENT/2, EXTENT/2]`.
fn grid_coordinate(c: usize, side: usize) -> f32 {
    if side == 1 {
        return 0.0;
    }
    let span = (side - 1) as f32;
    (c as f32 / span - 0.5) * CUBE_EXTENT
}
