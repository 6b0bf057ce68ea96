use crate::Error;
use crate::geometry::Geometry;
use crate::sample::Sample;

/// Owned `D`-dimensional image with contiguous samples.
///
/// Samples are stored with axis 0 varying fastest, so the linear index of
/// `[i0, i1, ..]` is `i0 + e0 * (i1 + e1 * (..))`. Extent and rank are fixed
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T, const D: usize> {
    extent: [usize; D],
    geometry: Geometry<D>,
    data: Vec<T>,
}

impl<T, const D: usize> Image<T, D> {
    pub fn from_vec(extent: [usize; D], data: Vec<T>) -> Result<Self, Error> {
        let expected = element_count(&extent).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            extent,
            geometry: Geometry::default(),
            data,
        })
    }

    pub fn with_geometry(mut self, geometry: Geometry<D>) -> Self {
        self.geometry = geometry;
        self
    }

    pub const fn rank(&self) -> usize {
        D
    }

    pub fn extent(&self) -> &[usize; D] {
        &self.extent
    }

    pub fn geometry(&self) -> &Geometry<D> {
        &self.geometry
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        let mut linear = 0usize;
        for axis in (0..D).rev() {
            if index[axis] >= self.extent[axis] {
                return None;
            }
            linear = linear * self.extent[axis] + index[axis];
        }
        self.data.get(linear)
    }

    /// Applies `f` to every sample, keeping extent and geometry.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Image<U, D> {
        Image {
            extent: self.extent,
            geometry: self.geometry,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combines index-matched samples of two images of equal extent.
    ///
    /// The output inherits the geometry of `self`.
    pub fn zip_map<U, V>(
        &self,
        other: &Image<U, D>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Image<V, D>, Error> {
        if self.extent != other.extent {
            return Err(Error::ExtentMismatch {
                left: self.extent.to_vec(),
                right: other.extent.to_vec(),
            });
        }

        Ok(Image {
            extent: self.extent,
            geometry: self.geometry,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Clone, const D: usize> Image<T, D> {
    pub fn new_fill(extent: [usize; D], value: T) -> Self {
        let len = element_count(&extent).expect("image size overflow");
        Self {
            extent,
            geometry: Geometry::default(),
            data: vec![value; len],
        }
    }
}

impl<const D: usize> Image<f64, D> {
    /// Image whose samples count up from zero in storage order.
    pub fn gradient(extent: [usize; D]) -> Self {
        let len = element_count(&extent).expect("image size overflow");
        Self {
            extent,
            geometry: Geometry::default(),
            data: (0..len).map(|i| i as f64).collect(),
        }
    }
}

impl<T: Sample, const D: usize> Image<T, D> {
    pub fn to_f64(&self) -> Image<f64, D> {
        self.map(|&v| v.to_f64())
    }
}

pub(crate) fn element_count(extent: &[usize]) -> Option<usize> {
    extent.iter().try_fold(1usize, |acc, &e| acc.checked_mul(e))
}
