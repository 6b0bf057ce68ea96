/// Kind of volume derived from a source acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKind {
    /// Alpha-blended HU volume.
    HuCube,
    /// Relative electron density volume.
    RedCube,
}

impl DerivedKind {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::HuCube => "HU",
            Self::RedCube => "rED",
        }
    }

    /// Display name for a volume derived from `source`, e.g. `"abdomen (HU)"`.
    pub fn name_for(self, source: &str) -> String {
        format!("{source} ({})", self.suffix())
    }
}
