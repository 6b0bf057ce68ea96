use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{error, info, warn};

use crate::ConfigError;
use crate::document::{AlphaEntry, parse_document};
use crate::prefs::ExternalResourcePrefs;

const DEFAULT_RESOURCE: &str = include_str!("../resources/alpha_parameters.xml");

pub const LOAD_OK: i32 = 0;
pub const LOAD_FAILED: i32 = -1;

/// How a successfully parsed external table combines with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Restore the defaults, then add the file's entries; the file wins on
    /// label collisions.
    Append,
    /// Drop everything, defaults included, and keep only the file's entries.
    Overwrite,
}

impl LoadMode {
    pub fn from_append(append: bool) -> Self {
        if append {
            Self::Append
        } else {
            Self::Overwrite
        }
    }
}

/// A coefficient picked either from the table or typed in directly.
#[derive(Debug, Clone, PartialEq)]
pub enum AlphaChoice {
    Preset(String),
    Custom(f64),
}

/// Label to blend coefficient table, ordered by label.
///
/// [`AlphaTable::new`] starts empty; [`AlphaTable::with_defaults`] starts from
/// the bundled resource. Mutation needs `&mut self`; share across threads
/// behind a lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlphaTable {
    entries: BTreeMap<String, f64>,
}

impl AlphaTable {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.load_default();
        table
    }

    /// XML text of the bundled default table.
    pub fn default_resource() -> &'static str {
        DEFAULT_RESOURCE
    }

    /// Merges the bundled defaults into the table and returns how many
    /// entries were read.
    pub fn load_default(&mut self) -> usize {
        match parse_document(DEFAULT_RESOURCE) {
            Ok(entries) => self.merge(entries),
            Err(e) => {
                error!("bundled alpha table is unusable: {e}");
                0
            }
        }
    }

    /// Clears the table and reloads the bundled defaults.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.load_default();
    }

    /// Reads an external alpha table from `path` and applies it with `mode`.
    ///
    /// On any failure the table is left exactly as it was. Returns the number
    /// of entries read from the file.
    pub fn load_external(
        &mut self,
        path: impl AsRef<Path>,
        mode: LoadMode,
    ) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let loaded = self.load_str(&xml, mode)?;
        info!(
            "loaded {loaded} alpha entries from {} ({mode:?}), table has {}",
            path.display(),
            self.len()
        );
        Ok(loaded)
    }

    /// Same as [`AlphaTable::load_external`] for an in-memory document.
    pub fn load_str(&mut self, xml: &str, mode: LoadMode) -> Result<usize, ConfigError> {
        let entries = parse_document(xml).inspect_err(|e| {
            if e.is_structural() {
                warn!("external alpha table ignored: {e}");
            }
        })?;

        match mode {
            LoadMode::Append => self.reset(),
            LoadMode::Overwrite => self.entries.clear(),
        }
        Ok(self.merge(entries))
    }

    /// Applies the external-resource preferences: load the configured file
    /// when enabled, otherwise fall back to the defaults.
    ///
    /// An `Err` means the configured file could not be used and the table
    /// kept its previous contents.
    pub fn apply_preferences(
        &mut self,
        prefs: &ExternalResourcePrefs,
    ) -> Result<usize, ConfigError> {
        if prefs.enable_external {
            self.load_external(&prefs.alpha_path, prefs.load_mode())
        } else {
            self.reset();
            Ok(self.len())
        }
    }

    fn merge(&mut self, entries: Vec<AlphaEntry>) -> usize {
        let count = entries.len();
        for entry in entries {
            self.entries.insert(entry.label, entry.alpha);
        }
        count
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    pub fn resolve(&self, choice: &AlphaChoice) -> Option<f64> {
        match choice {
            AlphaChoice::Preset(label) => self.get(label),
            AlphaChoice::Custom(alpha) => Some(*alpha),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(label, &alpha)| (label.as_str(), alpha))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps a load result onto the `0` / `-1` status convention.
pub fn load_status_code<T>(result: &Result<T, ConfigError>) -> i32 {
    match result {
        Ok(_) => LOAD_OK,
        Err(_) => LOAD_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{AlphaChoice, AlphaTable, LOAD_FAILED, LOAD_OK, LoadMode, load_status_code};
    use crate::{ConfigError, ExternalResourcePrefs};

    const EXTERNAL: &str = r#"<AlphaBlendingTool>
        <Mode description="Mixed 0.3" alphaValue="0.35"/>
        <Mode description="Site calibration" alphaValue="1.45"/>
    </AlphaBlendingTool>"#;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("dect-config-table-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    fn defaults() -> Vec<(String, f64)> {
        AlphaTable::with_defaults()
            .entries()
            .map(|(l, a)| (l.to_string(), a))
            .collect()
    }

    #[test]
    fn bundled_defaults_parse() {
        let table = AlphaTable::with_defaults();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get("Mixed 0.3"), Some(0.3));
        assert_eq!(table.get("High kV only"), Some(1.0));
        assert_eq!(table.get("Low kV only"), Some(0.0));
    }

    #[test]
    fn new_table_is_empty_until_defaults_load() {
        let mut table = AlphaTable::new();
        assert!(table.is_empty());
        assert_eq!(table.load_default(), 5);
        assert_eq!(table, AlphaTable::with_defaults());
    }

    #[test]
    fn entries_are_ordered_by_label() {
        let table = AlphaTable::with_defaults();
        let labels: Vec<&str> = table.labels().collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn append_keeps_defaults_and_file_wins() {
        init_logger();
        let path = temp_file("append.xml", EXTERNAL);
        let mut table = AlphaTable::with_defaults();

        let loaded = table.load_external(&path, LoadMode::Append).expect("valid file");
        assert_eq!(loaded, 2);
        assert_eq!(table.len(), 6);
        assert_eq!(table.get("Mixed 0.3"), Some(0.35));
        assert_eq!(table.get("Site calibration"), Some(1.45));
        assert_eq!(table.get("Mixed 0.6"), Some(0.6));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn append_discards_previous_external_entries() {
        let mut table = AlphaTable::with_defaults();
        table
            .load_str(
                r#"<AlphaBlendingTool><M description="old" alphaValue="9"/></AlphaBlendingTool>"#,
                LoadMode::Append,
            )
            .expect("valid document");
        assert_eq!(table.get("old"), Some(9.0));

        table.load_str(EXTERNAL, LoadMode::Append).expect("valid document");
        assert_eq!(table.get("old"), None);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn overwrite_keeps_only_file_entries() {
        let path = temp_file("overwrite.xml", EXTERNAL);
        let mut table = AlphaTable::with_defaults();

        table.load_external(&path, LoadMode::Overwrite).expect("valid file");
        let entries: Vec<(&str, f64)> = table.entries().collect();
        assert_eq!(entries, vec![("Mixed 0.3", 0.35), ("Site calibration", 1.45)]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn duplicate_labels_last_write_wins() {
        let mut table = AlphaTable::new();
        table
            .load_str(
                r#"<AlphaBlendingTool>
                    <Mode description="x" alphaValue="0.1"/>
                    <Mode description="x" alphaValue="0.9"/>
                </AlphaBlendingTool>"#,
                LoadMode::Overwrite,
            )
            .expect("valid document");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some(0.9));
    }

    #[test]
    fn failures_leave_table_untouched() {
        init_logger();
        let mut table = AlphaTable::with_defaults();
        table.load_str(EXTERNAL, LoadMode::Append).expect("valid document");
        let before = table.clone();

        let result = table.load_external(" ", LoadMode::Overwrite);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
        assert_eq!(table, before);

        let wrong_root = temp_file(
            "wrong-root.xml",
            r#"<Modes><M description="a" alphaValue="1"/></Modes>"#,
        );
        let result = table.load_external(&wrong_root, LoadMode::Overwrite);
        assert!(matches!(result, Err(ConfigError::MissingRoot { .. })));
        assert_eq!(table, before);

        let empty = temp_file("empty.xml", "<AlphaBlendingTool/>");
        let result = table.load_external(&empty, LoadMode::Append);
        assert!(matches!(result, Err(ConfigError::EmptyRoot)));
        assert_eq!(table, before);

        let malformed = temp_file("malformed.xml", "<AlphaBlendingTool><Mode description=");
        let result = table.load_external(&malformed, LoadMode::Overwrite);
        assert!(matches!(result, Err(ConfigError::Xml(_))));
        assert_eq!(table, before);

        for path in [wrong_root, empty, malformed] {
            fs::remove_file(&path).ok();
        }
    }

    #[test]
    fn all_invalid_entries_keep_previous_table() {
        init_logger();
        let mut table = AlphaTable::with_defaults();
        let before = table.clone();
        let xml = r#"<AlphaBlendingTool><Mode description="a" alphaValue="x"/><Mode alphaValue="0.1"/></AlphaBlendingTool>"#;

        for mode in [LoadMode::Overwrite, LoadMode::Append] {
            let result = table.load_str(xml, mode);
            assert!(matches!(result, Err(ConfigError::NoValidEntries { skipped: 2 })));
            assert_eq!(load_status_code(&result), LOAD_FAILED);
            assert_eq!(table, before);
        }
    }

    #[test]
    fn blank_path_reports_failure_status() {
        let mut table = AlphaTable::with_defaults();
        let result = table.load_external(" ", LoadMode::Overwrite);
        assert_eq!(load_status_code(&result), LOAD_FAILED);
        assert_eq!(LOAD_FAILED, -1);

        let result = table.load_str(EXTERNAL, LoadMode::Overwrite);
        assert_eq!(load_status_code(&result), LOAD_OK);
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut table = AlphaTable::with_defaults();
        table.load_str(EXTERNAL, LoadMode::Overwrite).expect("valid document");
        assert_ne!(table.len(), 5);

        table.reset();
        let entries: Vec<(String, f64)> =
            table.entries().map(|(l, a)| (l.to_string(), a)).collect();
        assert_eq!(entries, defaults());
    }

    #[test]
    fn resolve_presets_and_custom_values() {
        let table = AlphaTable::with_defaults();
        assert_eq!(table.resolve(&AlphaChoice::Preset("Mixed 0.5".into())), Some(0.5));
        assert_eq!(table.resolve(&AlphaChoice::Preset("unknown".into())), None);
        assert_eq!(table.resolve(&AlphaChoice::Custom(1.45)), Some(1.45));
    }

    #[test]
    fn preferences_drive_external_loading() {
        let path = temp_file("prefs.xml", EXTERNAL);
        let mut table = AlphaTable::with_defaults();

        let prefs = ExternalResourcePrefs {
            enable_external: true,
            alpha_path: path.clone(),
            append_values: false,
        };
        assert_eq!(table.apply_preferences(&prefs).expect("valid file"), 2);
        assert_eq!(table.len(), 2);

        let disabled = ExternalResourcePrefs::default();
        assert_eq!(table.apply_preferences(&disabled).expect("defaults"), 5);
        assert_eq!(table, AlphaTable::with_defaults());

        let missing = ExternalResourcePrefs {
            enable_external: true,
            ..ExternalResourcePrefs::default()
        };
        assert!(table.apply_preferences(&missing).is_err());
        assert_eq!(table, AlphaTable::with_defaults());

        fs::remove_file(&path).ok();
    }
}
