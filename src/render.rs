//! The boundary between the gallery and whatever draws it.
//!
//! The gallery never owns GPU resources. Each tick it pushes transforms
//! through a [`RenderSink`]; the host maps those onto its own scene objects,
//! usually by uploading [`ItemInstance`]s and a
//! [`CameraUniform`](crate::camera::CameraUniform).

use glam::Vec3;

use crate::animation::{ParticleField, Transform};
use crate::camera::Camera;

/// Opaque id of a drawable the renderer created for one item once its asset
/// finished decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableHandle(pub u64);

/// Receives the frame's transforms.
///
/// Only [`apply_item`](Self::apply_item) is required; a sink that draws no
/// particles, fixed camera, or no star field can ignore the rest.
pub trait RenderSink {
    /// Place the drawable `handle` at `transform` (float bob included).
    fn apply_item(&mut self, handle: RenderableHandle, transform: &Transform);

    /// Update the particle cloud attached to `handle`.
    fn apply_particles(
        &mut self,
        _handle: RenderableHandle,
        _particles: &ParticleField,
    ) {
    }

    /// Update the view.
    fn apply_camera(&mut self, _camera: &Camera) {}

    /// Rotate the star-field backdrop to `rotation` (Euler radians).
    fn apply_backdrop(&mut self, _rotation: Vec3) {}
}

/// Per-item instance data, laid out for a vertex buffer with
/// `step_mode: Instance`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ItemInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

impl ItemInstance {
    /// Instance for an item presented at `transform`.
    #[must_use]
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
        }
    }
}

/// Sink that collects one [`ItemInstance`] per applied item, in apply
/// order, for a single instanced draw call.
#[derive(Debug, Default, Clone)]
pub struct InstanceCollector {
    handles: Vec<RenderableHandle>,
    instances: Vec<ItemInstance>,
    particle_points: usize,
    backdrop: Vec3,
}

impl InstanceCollector {
    /// Empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame, keeping allocations.
    pub fn clear(&mut self) {
        self.handles.clear();
        self.instances.clear();
        self.particle_points = 0;
    }

    /// Handles applied this frame, parallel to [`instances`](Self::instances).
    #[must_use]
    pub fn handles(&self) -> &[RenderableHandle] {
        &self.handles
    }

    /// Instances applied this frame.
    #[must_use]
    pub fn instances(&self) -> &[ItemInstance] {
        &self.instances
    }

    /// Instance data as bytes for a buffer upload.
    #[must_use]
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Total particle points applied this frame.
    #[must_use]
    pub fn particle_points(&self) -> usize {
        self.particle_points
    }

    /// Last backdrop rotation received.
    #[must_use]
    pub fn backdrop(&self) -> Vec3 {
        self.backdrop
    }
}

impl RenderSink for InstanceCollector {
    fn apply_item(&mut self, handle: RenderableHandle, transform: &Transform) {
        self.handles.push(handle);
        self.instances.push(ItemInstance::from_transform(transform));
    }

    fn apply_particles(
        &mut self,
        _handle: RenderableHandle,
        particles: &ParticleField,
    ) {
        self.particle_points += particles.len();
    }

    fn apply_backdrop(&mut self, rotation: Vec3) {
        self.backdrop = rotation;
    }
}
