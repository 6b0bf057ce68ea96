use dect_core::{DynImage, Error, Image, RankedImage, Sample, match_rank, match_sample};
use log::debug;

use crate::pairwise::add_images;
use crate::scalar::{add_scalar, divide_scalar, multiply_scalar};

/// Pointwise operation between every sample and one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarOp {
    Add,
    Multiply,
    Divide,
}

/// Resolves the rank and sample type of `image`, then runs `op` with `v`.
pub fn apply_scalar_dyn(image: &DynImage, op: ScalarOp, v: f64) -> DynImage {
    debug!(
        "{op:?} by {v}: {}-D {} image, {} samples",
        image.rank(),
        image.pixel_type(),
        image.len()
    );
    match_rank!(image, ranked => DynImage::from(apply_scalar_ranked(ranked, op, v)))
}

pub fn add_scalar_dyn(image: &DynImage, v: f64) -> DynImage {
    apply_scalar_dyn(image, ScalarOp::Add, v)
}

pub fn multiply_scalar_dyn(image: &DynImage, v: f64) -> DynImage {
    apply_scalar_dyn(image, ScalarOp::Multiply, v)
}

pub fn divide_scalar_dyn(image: &DynImage, v: f64) -> DynImage {
    apply_scalar_dyn(image, ScalarOp::Divide, v)
}

/// Sums two runtime-typed images.
///
/// Both ranks are resolved first; unequal ranks fail with
/// [`Error::DimensionMismatch`]. Within one rank every pairing of sample
/// types is routed to its own [`add_images`] instantiation.
pub fn add_images_dyn(a: &DynImage, b: &DynImage) -> Result<DynImage, Error> {
    debug!(
        "add images: {}-D {} + {}-D {}",
        a.rank(),
        a.pixel_type(),
        b.rank(),
        b.pixel_type()
    );
    match (a, b) {
        (DynImage::D1(x), DynImage::D1(y)) => add_ranked(x, y).map(DynImage::from),
        (DynImage::D2(x), DynImage::D2(y)) => add_ranked(x, y).map(DynImage::from),
        (DynImage::D3(x), DynImage::D3(y)) => add_ranked(x, y).map(DynImage::from),
        (DynImage::D4(x), DynImage::D4(y)) => add_ranked(x, y).map(DynImage::from),
        _ => Err(Error::DimensionMismatch {
            left: a.rank(),
            right: b.rank(),
        }),
    }
}

fn apply_scalar_ranked<const D: usize>(
    image: &RankedImage<D>,
    op: ScalarOp,
    v: f64,
) -> Image<f64, D> {
    match_sample!(image, img => apply_scalar_typed(img, op, v))
}

fn apply_scalar_typed<T: Sample, const D: usize>(
    image: &Image<T, D>,
    op: ScalarOp,
    v: f64,
) -> Image<f64, D> {
    match op {
        ScalarOp::Add => add_scalar(image, v),
        ScalarOp::Multiply => multiply_scalar(image, v),
        ScalarOp::Divide => divide_scalar(image, v),
    }
}

fn add_ranked<const D: usize>(
    a: &RankedImage<D>,
    b: &RankedImage<D>,
) -> Result<Image<f64, D>, Error> {
    match_sample!(a, lhs => match_sample!(b, rhs => add_images(lhs, rhs)))
}
