use glam::DVec2;

/// Latest pointer position in surface coordinates.
///
/// Moves between two frames collapse to the last one. Coordinates are stored
/// as delivered, including positions outside the surface. Before the first
/// move the pointer sits at the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputBridge {
    pointer: DVec2,
}

impl InputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    #[inline]
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }
}
