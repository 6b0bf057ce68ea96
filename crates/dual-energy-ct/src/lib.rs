//! Umbrella crate for the `dual-energy-ct` workspace.
//!
//! Re-exports the image types, arithmetic primitives, blending operations
//! and the alpha table, and adds [`DualEnergyTool`], the single handle an
//! application holds to run blends and manage coefficients.

mod tool;

pub use dect_arith::*;
pub use dect_blend::*;
pub use dect_config::*;
pub use dect_core::*;
pub use tool::{CUSTOM_MODE_LABEL, DualEnergyTool};
