/// A rubber-band rectangle in pixels, origin at the top-left of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub top_left: [f32; 2],
    pub size: [f32; 2],
}

impl SelectionBox {
    pub fn new(top_left: [f32; 2], size: [f32; 2]) -> Self {
        Self { top_left, size }
    }

    /// The box spanned by a drag from `start` to `end`, in any direction.
    pub fn from_corners(start: [f32; 2], end: [f32; 2]) -> Self {
        Self {
            top_left: [start[0].min(end[0]), start[1].min(end[1])],
            size: [(end[0] - start[0]).abs(), (end[1] - start[1]).abs()],
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, pixel: [f32; 2]) -> bool {
        pixel[0] >= self.top_left[0]
            && pixel[1] >= self.top_left[1]
            && pixel[0] <= self.top_left[0] + self.size[0]
            && pixel[1] <= self.top_left[1] + self.size[1]
    }
}
