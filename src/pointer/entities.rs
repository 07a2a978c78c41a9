use bevy::prelude::*;

/// World-space point the tiles react to.
///
/// Written only by the pointer projector; tiles read it once per frame.
#[derive(Resource, Clone, Copy, Debug, Reflect)]
pub struct PointerTarget {
    position: Vec3,
}

impl PointerTarget {
    /// A target parked at `position`.
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Current target point.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub(super) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
