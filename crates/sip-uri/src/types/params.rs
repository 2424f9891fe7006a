//! Ordered URI-parameters (`;name[=value]`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::check_component;
use crate::parser::uri::{pname, pvalue};

/// The `uri-parameters` of a SIP URI, in textual order.
///
/// A parameter without `=value` is a flag and carries `None`. Duplicate
/// names are kept as separate entries; lookups resolve to the first one.
///
/// # Examples
///
/// ```
/// use rvoip_sip_uri::prelude::*;
///
/// let uri = SipUri::parse("sip:192.168.0.1;lr;param=value;param1").unwrap();
/// let params = uri.params();
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("lr"), Some(None));
/// assert_eq!(params.get("param"), Some(Some("value")));
/// assert_eq!(params.get("missing"), None);
/// ```
///
/// Deserialization checks every name and value against `pname`/`pvalue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<(String, Option<String>)>",
    into = "Vec<(String, Option<String>)>"
)]
pub struct UriParams(Vec<(String, Option<String>)>);

impl UriParams {
    /// Creates an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a parameter by name (ASCII case-insensitive).
    ///
    /// Returns `None` if absent, `Some(None)` for a flag parameter and
    /// `Some(Some(value))` otherwise. With duplicate names the first
    /// occurrence wins.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_deref())
    }

    /// Returns `true` if a parameter with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, value)` pairs in textual order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<(String, Option<String>)> {
        self.0
    }
}

impl<N, V> FromIterator<(N, Option<V>)> for UriParams
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Option<V>)>>(iter: I) -> Self {
        UriParams(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.map(Into::into)))
                .collect(),
        )
    }
}

/// Validates each pair against `pname` and `pvalue`
impl TryFrom<Vec<(String, Option<String>)>> for UriParams {
    type Error = Error;

    fn try_from(pairs: Vec<(String, Option<String>)>) -> Result<Self> {
        for (name, value) in &pairs {
            check_component("pname", pname, name)?;
            if let Some(value) = value {
                check_component("pvalue", pvalue, value)?;
            }
        }
        Ok(UriParams(pairs))
    }
}

impl From<UriParams> for Vec<(String, Option<String>)> {
    fn from(params: UriParams) -> Self {
        params.0
    }
}

/// Writes every parameter with its leading ';'
impl fmt::Display for UriParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            match value {
                Some(value) => write!(f, ";{}={}", name, value)?,
                None => write!(f, ";{}", name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UriParams {
        vec![
            ("transport", Some("tcp")),
            ("lr", None),
            ("Transport", Some("udp")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_first_occurrence_case_insensitive() {
        let params = sample();
        assert_eq!(params.get("transport"), Some(Some("tcp")));
        assert_eq!(params.get("TRANSPORT"), Some(Some("tcp")));
        assert_eq!(params.get("LR"), Some(None));
        assert!(params.contains("lr"));
        assert!(!params.contains("maddr"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let params = sample();
        assert_eq!(params.len(), 3);
        assert_eq!(
            params.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["transport", "lr", "Transport"]
        );
    }

    #[test]
    fn test_try_from_checks_grammar() {
        let params = UriParams::try_from(vec![
            ("lr".to_string(), None),
            ("maddr".to_string(), Some("10.0.0.1".to_string())),
        ])
        .unwrap();
        assert_eq!(params.get("maddr"), Some(Some("10.0.0.1")));

        assert!(matches!(
            UriParams::try_from(vec![("a;b".to_string(), None)]),
            Err(Error::InvalidComponent { ref component, .. }) if component == "pname"
        ));
        assert!(matches!(
            UriParams::try_from(vec![("p".to_string(), Some(String::new()))]),
            Err(Error::InvalidComponent { ref component, .. }) if component == "pvalue"
        ));
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"[["transport","tcp"],["lr",null],["Transport","udp"]]"#);
        assert_eq!(serde_json::from_str::<UriParams>(&json).unwrap(), sample());
        assert!(serde_json::from_str::<UriParams>(r#"[["bad name",null]]"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), ";transport=tcp;lr;Transport=udp");
        assert_eq!(UriParams::new().to_string(), "");
    }
}
