use dect_arith::{add_scalar_dyn, divide_scalar_dyn};
use dect_core::DynImage;
use log::debug;

pub const HU_TO_RED_DIVISOR: f64 = 1000.0;
pub const HU_TO_RED_OFFSET: f64 = 1.0;

/// Converts a HU volume to relative electron density.
///
/// Evaluated as two separately rounded steps, `hu / 1000` then `+ 1`. Do not
/// fuse into a single multiply-add; results must match data produced that
/// way bit for bit.
pub fn convert_to_relative_density(hu: &DynImage) -> DynImage {
    debug!(
        "HU to RED: {}-D {} image, {} samples",
        hu.rank(),
        hu.pixel_type(),
        hu.len()
    );
    let scaled = divide_scalar_dyn(hu, HU_TO_RED_DIVISOR);
    add_scalar_dyn(&scaled, HU_TO_RED_OFFSET)
}
