//! Read-only access to deployment descriptor parameters
//!
//! The initializer lookup never owns its configuration: it reads
//! through [`InitParams`], which the application startup sequence
//! supplies.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Names the initializer to use, overriding the default selection.
pub const INITIALIZER_CLASS_NAME: &str = "initializer-class-name";

/// Enables or disables JSP support during default selection.
pub const SUPPORT_JSP: &str = "support-jsp";

/// The only token accepted as affirmative when `support-jsp` is set.
const TRUE_LITERAL: &str = "true";

/// Key-value lookup over deployment descriptor parameters.
pub trait InitParams {
    /// Look up a parameter, returning `None` when it is not set.
    fn init_parameter(&self, key: &str) -> Option<&str>;
}

impl InitParams for HashMap<String, String> {
    fn init_parameter(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl InitParams for BTreeMap<String, String> {
    fn init_parameter(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Owned, ordered set of context parameters.
///
/// # Example
///
/// ```
/// use faces_config::{ContextParams, InitParams, SUPPORT_JSP};
///
/// let params = ContextParams::new().with(SUPPORT_JSP, "false");
/// assert_eq!(params.init_parameter(SUPPORT_JSP), Some("false"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, ParamValue>")]
pub struct ContextParams {
    values: BTreeMap<String, String>,
}

impl ContextParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl InitParams for ContextParams {
    fn init_parameter(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContextParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Scalar accepted as a parameter value in a descriptor file.
///
/// Descriptors written by hand often use native booleans
/// (`support-jsp = false`); they are kept as their string form. Floats
/// are rejected since their string form would not match the source text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParamValue {
    Null,
    Text(String),
    Bool(bool),
    Integer(i64),
}

impl From<ParamValue> for String {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Null => String::new(),
            ParamValue::Text(s) => s,
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Integer(i) => i.to_string(),
        }
    }
}

impl From<BTreeMap<String, ParamValue>> for ContextParams {
    fn from(raw: BTreeMap<String, ParamValue>) -> Self {
        raw.into_iter().map(|(k, v)| (k, String::from(v))).collect()
    }
}

/// Check whether a value is absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// The configured initializer override, if any.
///
/// Only an empty value counts as unset. Whitespace is a name like any
/// other and must resolve.
pub fn configured_initializer(params: &dyn InitParams) -> Option<&str> {
    params
        .init_parameter(INITIALIZER_CLASS_NAME)
        .filter(|name| !name.is_empty())
}

/// Whether JSP support is enabled for default selection.
///
/// Unset or blank means enabled. A set value must equal `"true"` exactly;
/// `"TRUE"` or `" true"` disable it.
pub fn support_jsp_enabled(params: &dyn InitParams) -> bool {
    let value = params.init_parameter(SUPPORT_JSP);
    is_blank(value) || value == Some(TRUE_LITERAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("   "), true)]
    #[case(Some("\t\n"), true)]
    #[case(Some("x"), false)]
    #[case(Some(" x "), false)]
    fn test_is_blank(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_blank(value), expected);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("  "), true)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(Some("TRUE"), false)]
    #[case(Some("True"), false)]
    #[case(Some(" true"), false)]
    #[case(Some("yes"), false)]
    #[case(Some("1"), false)]
    fn test_support_jsp_enabled(#[case] value: Option<&str>, #[case] expected: bool) {
        let mut params = ContextParams::new();
        if let Some(v) = value {
            params.set(SUPPORT_JSP, v);
        }
        assert_eq!(support_jsp_enabled(&params), expected);
    }

    #[test]
    fn test_configured_initializer_present() {
        let params = ContextParams::new().with(INITIALIZER_CLASS_NAME, "app.CustomInitializer");
        assert_eq!(
            configured_initializer(&params),
            Some("app.CustomInitializer")
        );
    }

    #[test]
    fn test_configured_initializer_empty_is_unset() {
        assert_eq!(configured_initializer(&ContextParams::new()), None);

        let params = ContextParams::new().with(INITIALIZER_CLASS_NAME, "");
        assert_eq!(configured_initializer(&params), None);
    }

    #[test]
    fn test_configured_initializer_whitespace_is_kept() {
        let params = ContextParams::new().with(INITIALIZER_CLASS_NAME, "   ");
        assert_eq!(configured_initializer(&params), Some("   "));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut params = ContextParams::new();
        params.set(SUPPORT_JSP, "true");
        params.set(SUPPORT_JSP, "false");
        assert_eq!(params.len(), 1);
        assert_eq!(params.init_parameter(SUPPORT_JSP), Some("false"));
    }

    #[test]
    fn test_hash_map_accessor() {
        let mut map = HashMap::new();
        map.insert(SUPPORT_JSP.to_string(), "false".to_string());
        assert!(!support_jsp_enabled(&map));
        assert_eq!(map.init_parameter("missing"), None);
    }
}
