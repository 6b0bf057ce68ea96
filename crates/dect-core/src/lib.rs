//! Foundational image types for dual-energy CT arithmetic.
//!
//! ## Images and Rank
//! [`Image<T, D>`] is an owned, contiguous `D`-dimensional grid of scalar
//! samples. Axis 0 varies fastest in storage. Rank and extent never change
//! after construction.
//!
//! ## Runtime Tags
//! Images arriving from outside usually carry their sample type and rank as
//! runtime facts. [`RankedImage<D>`] tags the sample type for a known rank and
//! [`DynImage`] tags the rank on top of that. The supported rank set is
//! exactly `1..=4`; constructing a [`DynImage`] of any other rank fails with
//! [`Error::UnsupportedDimension`].
//!
//! ## Geometry
//! [`Geometry<D>`] (origin, spacing, direction) rides along with every image.
//! Arithmetic copies it into derived images and never reads it.

mod dyn_image;
mod error;
mod geometry;
mod image;
mod sample;

pub use dyn_image::{DynImage, RankedImage};
pub use error::Error;
pub use geometry::Geometry;
pub use image::Image;
pub use sample::{PixelType, Sample};
