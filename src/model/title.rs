//! Case-insensitive title keys

/// Normalised form of a title used for every membership comparison.
///
/// Two titles are the same entry when their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn new(title: &str) -> Self {
        Self(title.trim().to_lowercase())
    }

    /// Does `title` normalise to this key
    pub fn matches(&self, title: &str) -> bool {
        *self == TitleKey::new(title)
    }
}

/// Case-insensitive title comparison
pub fn same_title(a: &str, b: &str) -> bool {
    TitleKey::new(a) == TitleKey::new(b)
}
