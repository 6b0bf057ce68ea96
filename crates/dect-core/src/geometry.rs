/// Physical placement of an image grid: origin, per-axis spacing and a
/// direction cosine matrix.
///
/// Arithmetic never reads these values; they travel unchanged from an input
/// image into every derived image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry<const D: usize> {
    origin: [f64; D],
    spacing: [f64; D],
    direction: [[f64; D]; D],
}

impl<const D: usize> Geometry<D> {
    pub fn new(origin: [f64; D], spacing: [f64; D], direction: [[f64; D]; D]) -> Self {
        Self {
            origin,
            spacing,
            direction,
        }
    }

    pub fn origin(&self) -> &[f64; D] {
        &self.origin
    }

    pub fn spacing(&self) -> &[f64; D] {
        &self.spacing
    }

    pub fn direction(&self) -> &[[f64; D]; D] {
        &self.direction
    }

    pub fn with_origin(mut self, origin: [f64; D]) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: [f64; D]) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<const D: usize> Default for Geometry<D> {
    /// Zero origin, unit spacing, identity direction.
    fn default() -> Self {
        Self {
            origin: [0.0; D],
            spacing: [1.0; D],
            direction: core::array::from_fn(|r| {
                core::array::from_fn(|c| if r == c { 1.0 } else { 0.0 })
            }),
        }
    }
}
