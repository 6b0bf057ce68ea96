//! Dual-energy CT blending built from `dect-arith` primitives.
//!
//! - [`alpha_blend`] mixes a high-kV and a low-kV acquisition into a single
//!   HU volume: `high * alpha + low * (1 - alpha)`. `alpha` is used as given;
//!   values outside `[0, 1]` extrapolate.
//! - [`convert_to_relative_density`] maps HU to relative electron density
//!   with `hu / 1000 + 1`, evaluated as a division followed by an addition.
//!
//! Both return freshly allocated `f64` images carrying the geometry of their
//! first input.

mod blend;
mod density;
mod derived;

pub use blend::alpha_blend;
pub use density::{HU_TO_RED_DIVISOR, HU_TO_RED_OFFSET, convert_to_relative_density};
pub use derived::DerivedKind;
