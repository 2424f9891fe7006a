//! SIP-URI / SIPS-URI grammar (RFC 3261 §25.1, with the RFC 5954 IPv4 and
//! IPv6 corrections) and the whole-string matcher built on top of it.

pub mod headers;
pub mod host;
pub mod hostname;
pub mod ipv4;
pub mod ipv6;
pub mod params;
pub mod userinfo;

pub use headers::{header, hname, hvalue, uri_headers};
pub use host::{host, port};
pub use hostname::hostname;
pub use ipv4::ipv4_address;
pub use ipv6::{ipv6_address, ipv6_reference};
pub use params::{pname, pvalue, uri_parameter, uri_parameters};
pub use userinfo::{password, user, userinfo};

use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::{eof, map, opt, recognize},
    sequence::{preceded, terminated, tuple},
};

use crate::parser::ParseResult;
use crate::types::uri::Scheme;

use self::headers::uri_headers_span;
use self::params::uri_parameters_span;

/// Raw, undecomposed substrings of a matched SIP or SIPS URI.
///
/// Every slice borrows from the matched text, and joining them with the
/// scheme prefix and the `:` before the port gives back that text exactly.
/// Only [`split`] produces a `Captures`; callers read it through the
/// accessors.
///
/// ```
/// use rvoip_sip_uri::{split, Scheme};
///
/// let captures = split("sip:alice@atlanta.com:5060;lr").unwrap();
/// assert_eq!(captures.scheme(), Scheme::Sip);
/// assert_eq!(captures.userinfo(), Some("alice@"));
/// assert_eq!(captures.host(), "atlanta.com");
/// assert_eq!(captures.port(), Some("5060"));
/// assert_eq!(captures.params(), ";lr");
/// assert_eq!(captures.headers(), None);
/// ```
///
/// Captures cannot be assembled by hand:
///
/// ```compile_fail
/// use rvoip_sip_uri::{Captures, Scheme};
///
/// let captures = Captures {
///     scheme: Scheme::Sip,
///     userinfo: None,
///     host: "not a host",
///     port: None,
///     params: "",
///     headers: None,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'a> {
    pub(crate) scheme: Scheme,
    pub(crate) userinfo: Option<&'a str>,
    pub(crate) host: &'a str,
    pub(crate) port: Option<&'a str>,
    pub(crate) params: &'a str,
    pub(crate) headers: Option<&'a str>,
}

impl<'a> Captures<'a> {
    /// Scheme selected by the literal prefix
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// `user[:password]@`, trailing '@' included
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Host token (hostname, IPv4 literal or bracketed IPv6 reference)
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// Port digits, without the leading ':'
    pub fn port(&self) -> Option<&'a str> {
        self.port
    }

    /// All `;name[=value]` segments, leading ';' included; may be empty
    pub fn params(&self) -> &'a str {
        self.params
    }

    /// `?name=value(&name=value)*`, leading '?' included
    pub fn headers(&self) -> Option<&'a str> {
        self.headers
    }
}

impl Captures<'_> {
    /// Rebuilds the text that followed the scheme prefix.
    pub fn remainder(&self) -> String {
        let mut out = String::new();
        if let Some(userinfo) = self.userinfo {
            out.push_str(userinfo);
        }
        out.push_str(self.host);
        if let Some(port) = self.port {
            out.push(':');
            out.push_str(port);
        }
        out.push_str(self.params);
        if let Some(headers) = self.headers {
            out.push_str(headers);
        }
        out
    }
}

// SIP-URI  = "sip:"  [ userinfo ] hostport uri-parameters [ headers ]
// SIPS-URI = "sips:" [ userinfo ] hostport uri-parameters [ headers ]
//
// One grammar parameterized by the scheme; only the literal prefix differs.
fn scheme_uri<'a>(scheme: Scheme) -> impl FnMut(&'a str) -> ParseResult<'a, Captures<'a>> {
    map(
        terminated(
            tuple((
                preceded(tag(scheme.prefix()), opt(recognize(userinfo))),
                host,
                opt(preceded(char(':'), recognize(port))),
                uri_parameters_span,
                opt(uri_headers_span),
            )),
            eof,
        ),
        move |(userinfo, host, port, params, headers)| Captures {
            scheme,
            userinfo,
            host,
            port,
            params,
            headers,
        },
    )
}

/// Matches `text` against the SIP or SIPS grammar selected by its prefix.
///
/// The match is anchored at both ends; anything short of a complete match
/// (including an unknown scheme) yields `None`.
pub fn split(text: &str) -> Option<Captures<'_>> {
    let scheme = Scheme::from_prefix(text)?;
    scheme_uri(scheme)(text).ok().map(|(_, captures)| captures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_all_components() {
        let text = "sips:bob:pw@[fe80::1]:5061;transport=tls;lr?Subject=Hello&Priority=";
        let captures = split(text).expect("should match");
        assert_eq!(captures.scheme(), Scheme::Sips);
        assert_eq!(captures.userinfo(), Some("bob:pw@"));
        assert_eq!(captures.host(), "[fe80::1]");
        assert_eq!(captures.port(), Some("5061"));
        assert_eq!(captures.params(), ";transport=tls;lr");
        assert_eq!(captures.headers(), Some("?Subject=Hello&Priority="));
        assert_eq!(captures.remainder(), &text["sips:".len()..]);
    }

    #[test]
    fn test_split_minimal() {
        let captures = split("sip:example.com").unwrap();
        assert_eq!(captures.scheme(), Scheme::Sip);
        assert_eq!(captures.userinfo(), None);
        assert_eq!(captures.host(), "example.com");
        assert_eq!(captures.port(), None);
        assert_eq!(captures.params(), "");
        assert_eq!(captures.headers(), None);
    }

    #[test]
    fn test_split_userinfo_keeps_semicolons() {
        let captures = split("sip:alice;day=tuesday@atlanta.com").unwrap();
        assert_eq!(captures.userinfo(), Some("alice;day=tuesday@"));
        assert_eq!(captures.host(), "atlanta.com");
        assert_eq!(captures.params(), "");
    }

    #[test]
    fn test_split_user_like_host_is_not_userinfo() {
        let captures = split("sip:example.com:5060;user=phone").unwrap();
        assert_eq!(captures.userinfo(), None);
        assert_eq!(captures.host(), "example.com");
        assert_eq!(captures.port(), Some("5060"));
        assert_eq!(captures.params(), ";user=phone");
    }

    #[test]
    fn test_split_is_anchored() {
        assert!(split("sip:").is_none());
        assert!(split("sip:example.com:").is_none());
        assert!(split("sip:example.com:65536").is_none());
        assert!(split("sip:example.com;").is_none());
        assert!(split("sip:example.com?").is_none());
        assert!(split("sip:example.com junk").is_none());
        assert!(split("sip:[::1").is_none());
        assert!(split("sip:alice@").is_none());
        assert!(split(" sip:example.com").is_none());
    }

    #[test]
    fn test_split_scheme_prefix_is_literal() {
        assert!(split("SIP:example.com").is_none());
        assert!(split("tel:+1-212-555-0101").is_none());
        assert!(split("sipx:example.com").is_none());
        assert!(split("example.com").is_none());
    }
}
