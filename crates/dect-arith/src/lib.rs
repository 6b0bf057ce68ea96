//! Elementwise arithmetic primitives for scalar images.
//!
//! Every primitive allocates a new image and leaves its inputs untouched.
//! Samples are widened to `f64` before the operation and results are always
//! stored as `f64`, whatever the input sample type.
//!
//! Division follows IEEE-754 in `f64` for all input types, integer images
//! included: dividing by zero yields `±inf`, and `0 / 0` yields `NaN`.
//!
//! Two entry layers:
//! - Typed kernels ([`add_scalar`], [`multiply_scalar`], [`divide_scalar`],
//!   [`add_images`]) operate on [`Image<T, D>`](dect_core::Image) and are
//!   monomorphized per sample type and rank.
//! - `*_dyn` functions take [`DynImage`](dect_core::DynImage), resolve the
//!   runtime rank and sample type, and route to the matching typed kernel.

mod dispatch;
mod pairwise;
mod scalar;

pub use dispatch::{
    ScalarOp, add_images_dyn, add_scalar_dyn, apply_scalar_dyn, divide_scalar_dyn,
    multiply_scalar_dyn,
};
pub use pairwise::add_images;
pub use scalar::{add_scalar, divide_scalar, multiply_scalar};
