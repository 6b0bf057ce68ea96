//! Labelled alpha coefficients for dual-energy blending.
//!
//! The table is seeded from a bundled XML resource and can be extended or
//! replaced by an external file of the same schema:
//!
//! ```xml
//! <AlphaBlendingTool>
//!   <Mode description="Mixed 0.3" alphaValue="0.3"/>
//!   <Mode description="Mixed 0.6" alphaValue="0.6"/>
//! </AlphaBlendingTool>
//! ```
//!
//! Load failures come back as [`ConfigError`] and never modify the table.
//! [`ConfigError::is_structural`] separates documents that parsed but had the
//! wrong layout from unreadable or malformed files. [`load_status_code`]
//! flattens a result to the `0` / `-1` convention.
//!
//! The table is not synchronized. It is independent of the arithmetic crates
//! and only supplies coefficients to present before a blend is run.

mod document;
mod error;
mod prefs;
mod table;

pub use document::{ALPHA_ATTR, AlphaEntry, LABEL_ATTR, ROOT_TAG, parse_document};
pub use error::ConfigError;
pub use prefs::{ExternalResourcePrefs, load_prefs};
pub use table::{AlphaChoice, AlphaTable, LOAD_FAILED, LOAD_OK, LoadMode, load_status_code};
