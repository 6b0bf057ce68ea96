use dect_arith::{add_images_dyn, multiply_scalar_dyn};
use dect_core::{DynImage, Error};
use log::debug;

/// Blends two acquisitions of the same rank into one volume.
///
/// Fails with [`Error::DimensionMismatch`] before any arithmetic runs when
/// the ranks differ, and with [`Error::ExtentMismatch`] when the extents do.
pub fn alpha_blend(high: &DynImage, low: &DynImage, alpha: f64) -> Result<DynImage, Error> {
    if high.rank() != low.rank() {
        return Err(Error::DimensionMismatch {
            left: high.rank(),
            right: low.rank(),
        });
    }

    debug!(
        "alpha blend with alpha={alpha}: {}-D {:?}",
        high.rank(),
        high.extent()
    );

    let weighted_high = multiply_scalar_dyn(high, alpha);
    let weighted_low = multiply_scalar_dyn(low, 1.0 - alpha);
    add_images_dyn(&weighted_high, &weighted_low)
}
