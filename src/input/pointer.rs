/// Pointer state handed to the gallery once per tick.
///
/// Coordinates are normalized device coordinates: `x` runs -1 (left edge)
/// to 1 (right edge), `y` runs -1 (bottom) to 1 (top).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Horizontal NDC.
    pub x: f32,
    /// Vertical NDC, up positive.
    pub y: f32,
    /// Whether any mouse button is held.
    pub drag_active: bool,
}

impl PointerSample {
    /// Compass angle of the pointer about the viewport center, in degrees
    /// (`atan2(y, x)`, so 0 is right and 90 is up).
    #[must_use]
    pub fn heading_degrees(&self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}
