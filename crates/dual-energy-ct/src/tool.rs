use std::path::Path;

use dect_blend::{alpha_blend, convert_to_relative_density};
use dect_config::{AlphaChoice, AlphaTable, ConfigError, ExternalResourcePrefs, LoadMode};
use dect_core::{DynImage, Error};
use log::{info, warn};

/// Label of the trailing selection-list entry that lets the user type an
/// alpha value instead of picking a preset.
pub const CUSTOM_MODE_LABEL: &str = "custom alphaValue";

/// Blending engine plus its coefficient table.
///
/// Construct one per application view and keep it; the blend and conversion
/// calls are pure and take `&self`, table changes take `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct DualEnergyTool {
    table: AlphaTable,
}

impl DualEnergyTool {
    /// Creates a tool with the bundled alpha table loaded.
    pub fn new() -> Self {
        let table = AlphaTable::with_defaults();
        info!("dual-energy tool initialized with {} alpha presets", table.len());
        Self { table }
    }

    /// Drops any external entries and restores the bundled alpha table.
    pub fn reset(&mut self) {
        self.table.reset();
    }

    /// `high * alpha + low * (1 - alpha)`, see [`dect_blend::alpha_blend`].
    pub fn alpha_blend(
        &self,
        high: &DynImage,
        low: &DynImage,
        alpha: f64,
    ) -> Result<DynImage, Error> {
        alpha_blend(high, low, alpha)
    }

    /// `hu / 1000 + 1`, see [`dect_blend::convert_to_relative_density`].
    pub fn convert_to_relative_density(&self, hu: &DynImage) -> DynImage {
        convert_to_relative_density(hu)
    }

    pub fn load_external(
        &mut self,
        path: impl AsRef<Path>,
        mode: LoadMode,
    ) -> Result<usize, ConfigError> {
        self.table.load_external(path, mode)
    }

    /// Applies external-resource preferences to the table.
    ///
    /// An `Err` is the caller's cue to warn the user that the configured file
    /// was not used.
    pub fn apply_preferences(
        &mut self,
        prefs: &ExternalResourcePrefs,
    ) -> Result<usize, ConfigError> {
        self.table.apply_preferences(prefs).inspect_err(|e| {
            warn!(
                "could not read external alpha resource {}: {e}",
                prefs.alpha_path.display()
            );
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.table.entries()
    }

    pub fn table(&self) -> &AlphaTable {
        &self.table
    }

    pub fn resolve(&self, choice: &AlphaChoice) -> Option<f64> {
        self.table.resolve(choice)
    }

    /// Preset labels in table order followed by [`CUSTOM_MODE_LABEL`].
    pub fn mode_labels(&self) -> Vec<String> {
        self.table
            .labels()
            .map(str::to_string)
            .chain(std::iter::once(CUSTOM_MODE_LABEL.to_string()))
            .collect()
    }
}

impl Default for DualEnergyTool {
    fn default() -> Self {
        Self::new()
    }
}
