//! Inline style maps and class lists.
//!
//! Caller overrides always win: a merged map holds every base property, with
//! any property present in the override replaced by the override's value.

use std::collections::BTreeMap;

/// Property → value map, e.g. `{"width": "100px"}`.
///
/// Keys are kebab-case CSS property names; the map is ordered so snapshots
/// and debug output stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Merge `overrides` on top of `base`.
pub fn merge_styles(base: &StyleMap, overrides: Option<&StyleMap>) -> StyleMap {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (k, v) in overrides.iter() {
            merged.set(k, v);
        }
    }
    merged
}

/// Join class names, skipping empty parts, with single spaces.
pub fn merge_class_names<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a px length the way an inline style would (`80px`, `12.5px`).
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_base_survives() {
        let base = StyleMap::new().with("width", "80px").with("color", "white");
        let over = StyleMap::new().with("color", "black").with("opacity", "0.5");
        let merged = merge_styles(&base, Some(&over));
        assert_eq!(merged.get("width"), Some("80px"));
        assert_eq!(merged.get("color"), Some("black"));
        assert_eq!(merged.get("opacity"), Some("0.5"));
        assert_eq!(merge_styles(&base, None), base);
    }

    #[test]
    fn class_names_trim_and_skip_empty() {
        assert_eq!(merge_class_names([Some("container"), None]), "container");
        assert_eq!(
            merge_class_names([Some("container"), Some("  wide  row ")]),
            "container wide row"
        );
        assert_eq!(merge_class_names([Some(""), Some("")]), "");
    }

    #[test]
    fn px_drops_trailing_zero() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(12.5), "12.5px");
    }
}
