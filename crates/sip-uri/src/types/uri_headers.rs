use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::check_component;
use crate::parser::uri::{hname, hvalue};

/// The `headers` component of a SIP URI (`?name=value&...`), in textual order.
///
/// Values may be empty. Duplicate names are kept; lookups resolve to the
/// first occurrence. Deserialization checks names and values against
/// `hname`/`hvalue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct UriHeaders(Vec<(String, String)>);

impl UriHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first header with this name (ASCII case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, value)` pairs in textual order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<N, V> FromIterator<(N, V)> for UriHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        UriHeaders(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl TryFrom<Vec<(String, String)>> for UriHeaders {
    type Error = Error;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
        for (name, value) in &pairs {
            check_component("hname", hname, name)?;
            check_component("hvalue", hvalue, value)?;
        }
        Ok(UriHeaders(pairs))
    }
}

impl From<UriHeaders> for Vec<(String, String)> {
    fn from(headers: UriHeaders) -> Self {
        headers.0
    }
}

/// Writes `?a=b&c=d`, or nothing when there are no headers
impl fmt::Display for UriHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_lookup_and_display() {
        let headers: UriHeaders = vec![("Subject", "Meeting"), ("X-Empty", ""), ("subject", "Other")]
            .into_iter()
            .collect();
        assert_eq!(headers.get("subject"), Some("Meeting"));
        assert_eq!(headers.get("x-empty"), Some(""));
        assert_eq!(headers.get("Priority"), None);
        assert_eq!(headers.to_string(), "?Subject=Meeting&X-Empty=&subject=Other");
        assert_eq!(UriHeaders::new().to_string(), "");
    }

    #[test]
    fn test_serde_validates() {
        let headers: UriHeaders = serde_json::from_str(r#"[["Subject","Hi"],["X-Empty",""]]"#).unwrap();
        assert_eq!(headers.get("x-empty"), Some(""));
        assert!(serde_json::from_str::<UriHeaders>(r#"[["h","a&b"]]"#).is_err());
        assert!(matches!(
            UriHeaders::try_from(vec![(String::new(), "v".to_string())]),
            Err(Error::InvalidComponent { ref component, .. }) if component == "hname"
        ));
    }
}
