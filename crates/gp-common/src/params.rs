//! Coercion of raw query values into valid selections.
//!
//! Requests never fail on unknown values: anything outside the catalog is
//! replaced by a deterministic default.

use std::collections::BTreeMap;

/// Query-string values keyed by name, keeping the first value of a repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    values: BTreeMap<String, String>,
}

impl QueryArgs {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in pairs {
            values.entry(key).or_insert(value);
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Return `value` if it is a member of `catalog`, else the first element.
///
/// An empty catalog yields an empty string so callers never index into it.
pub fn pick_or_first(value: Option<&str>, catalog: &[String]) -> String {
    if let Some(v) = value {
        if catalog.iter().any(|c| c == v) {
            return v.to_string();
        }
        tracing::debug!(value = %v, "Value not in catalog, using default");
    }
    catalog.first().cloned().unwrap_or_default()
}

/// Checkbox semantics: true only for the literal `"on"`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("on")
}

/// A closed enumeration selected through a query parameter.
pub trait ClosedChoice: Copy + Default + PartialEq + 'static {
    /// Every variant, in display order.
    const VARIANTS: &'static [Self];

    /// Value used on the wire (query string and form fields).
    fn as_str(&self) -> &'static str;

    /// Label shown in the UI.
    fn label(&self) -> &'static str {
        self.as_str()
    }

    /// Match the wire value exactly, falling back to the default variant.
    fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|r| Self::VARIANTS.iter().copied().find(|v| v.as_str() == r))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec!["dec6".to_string(), "jan31".to_string()]
    }

    #[test]
    fn test_pick_member_is_kept() {
        assert_eq!(pick_or_first(Some("jan31"), &catalog()), "jan31");
    }

    #[test]
    fn test_pick_unknown_falls_back_to_first() {
        assert_eq!(pick_or_first(Some("../etc"), &catalog()), "dec6");
        assert_eq!(pick_or_first(None, &catalog()), "dec6");
    }

    #[test]
    fn test_pick_is_case_sensitive() {
        assert_eq!(pick_or_first(Some("JAN31"), &catalog()), "dec6");
    }

    #[test]
    fn test_pick_from_empty_catalog() {
        assert_eq!(pick_or_first(Some("dec6"), &[]), "");
    }

    #[test]
    fn test_flag_only_on() {
        assert!(parse_flag(Some("on")));
        assert!(!parse_flag(Some("ON")));
        assert!(!parse_flag(Some("true")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_query_args_keep_first_value() {
        let args = QueryArgs::from_pairs(vec![
            ("date".to_string(), "jan31".to_string()),
            ("var".to_string(), "pH".to_string()),
            ("date".to_string(), "dec6".to_string()),
        ]);
        assert_eq!(args.get("date"), Some("jan31"));
        assert_eq!(args.get("var"), Some("pH"));
        assert_eq!(args.get("kernel"), None);
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    enum Shade {
        #[default]
        Light,
        Dark,
    }

    impl ClosedChoice for Shade {
        const VARIANTS: &'static [Self] = &[Shade::Light, Shade::Dark];

        fn as_str(&self) -> &'static str {
            match self {
                Shade::Light => "light",
                Shade::Dark => "dark",
            }
        }
    }

    #[test]
    fn test_closed_choice_parse() {
        assert_eq!(Shade::parse_or_default(Some("dark")), Shade::Dark);
        assert_eq!(Shade::parse_or_default(Some("Dark")), Shade::Light);
        assert_eq!(Shade::parse_or_default(None), Shade::Light);
    }
}
