//! # SIP URI value type
//!
//! Structured representation of SIP and SIPS URIs as defined in
//! [RFC 3261](https://tools.ietf.org/html/rfc3261) §19.1, with the IPv4/IPv6
//! grammar of [RFC 5954](https://tools.ietf.org/html/rfc5954).
//!
//! ```text
//! sip:user:password@host:port;uri-parameters?headers
//! ```
//!
//! Components are stored exactly as they appear in the URI: escaped octets
//! (`%XX`) are kept as-is and nothing is case-normalized.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rvoip_sip_uri::prelude::*;
//!
//! let uri = SipUri::parse("sip:alice@atlanta.com:5060;transport=udp?subject=meeting").unwrap();
//!
//! assert_eq!(uri.scheme(), Scheme::Sip);
//! assert_eq!(uri.user(), Some("alice"));
//! assert_eq!(uri.host().as_str(), "atlanta.com");
//! assert_eq!(uri.host().kind(), HostKind::Hostname);
//! assert_eq!(uri.port(), Some(5060));
//! assert_eq!(uri.param("transport"), Some(Some("udp")));
//! assert_eq!(uri.header("subject"), Some("meeting"));
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::parser::uri::host::classify_host;
use crate::parser::{decompose, split};
use crate::types::params::UriParams;
use crate::types::uri_headers::UriHeaders;

/// Default port for `sip:` URIs
pub const SIP_DEFAULT_PORT: u16 = 5060;
/// Default port for `sips:` URIs
pub const SIPS_DEFAULT_PORT: u16 = 5061;

/// SIP URI scheme
///
/// The two schemes share every grammar rule. They differ only in the literal
/// prefix and in the port used when the URI carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// `sip:`
    Sip,
    /// `sips:` (secure SIP, TLS)
    Sips,
}

impl Scheme {
    /// Returns the scheme token ("sip" or "sips")
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_sip_uri::Scheme;
    ///
    /// assert_eq!(Scheme::Sip.as_str(), "sip");
    /// assert_eq!(Scheme::Sips.as_str(), "sips");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
        }
    }

    /// Literal prefix a URI of this scheme starts with, colon included
    pub const fn prefix(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip:",
            Scheme::Sips => "sips:",
        }
    }

    /// Port implied when the URI has none
    pub const fn default_port(&self) -> u16 {
        match self {
            Scheme::Sip => SIP_DEFAULT_PORT,
            Scheme::Sips => SIPS_DEFAULT_PORT,
        }
    }

    pub const fn is_secure(&self) -> bool {
        matches!(self, Scheme::Sips)
    }

    /// Scheme whose literal (case-sensitive) prefix `text` starts with
    pub fn from_prefix(text: &str) -> Option<Self> {
        [Scheme::Sip, Scheme::Sips]
            .into_iter()
            .find(|scheme| text.starts_with(scheme.prefix()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a bare scheme token. Tokens are case-insensitive (RFC 3261 §19.1.4).
impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("sip") {
            Ok(Scheme::Sip)
        } else if s.eq_ignore_ascii_case("sips") {
            Ok(Scheme::Sips)
        } else {
            Err(Error::UnsupportedScheme(s.to_string()))
        }
    }
}

/// Which of the three host productions a [`Host`] matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostKind {
    Hostname,
    Ipv4,
    Ipv6Reference,
}

/// The host part of a SIP URI, classified by the grammar it satisfies.
///
/// The text is kept verbatim; an IPv6 reference keeps its brackets.
///
/// # Examples
///
/// ```
/// use rvoip_sip_uri::prelude::*;
/// use std::net::Ipv4Addr;
///
/// let host: Host = "[::ffff:c000:280]".parse().unwrap();
/// assert_eq!(host.kind(), HostKind::Ipv6Reference);
///
/// let host = Host::from(Ipv4Addr::new(127, 0, 0, 1));
/// assert_eq!(host, Host::Ipv4("127.0.0.1".to_string()));
///
/// // A dotted-numeric prefix does not make a literal
/// let host: Host = "1.2.3.4.example.com".parse().unwrap();
/// assert_eq!(host.kind(), HostKind::Hostname);
/// ```
///
/// Serializes as its text and deserializes through the same classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Host {
    /// A domain name (e.g., "atlanta.com")
    Hostname(String),
    /// A dotted-quad IPv4 literal (e.g., "192.0.2.1")
    Ipv4(String),
    /// A bracketed IPv6 literal (e.g., "[2001:db8::1]")
    Ipv6Reference(String),
}

impl Host {
    pub fn kind(&self) -> HostKind {
        match self {
            Host::Hostname(_) => HostKind::Hostname,
            Host::Ipv4(_) => HostKind::Ipv4,
            Host::Ipv6Reference(_) => HostKind::Ipv6Reference,
        }
    }

    /// The host text as it appears in the URI
    pub fn as_str(&self) -> &str {
        match self {
            Host::Hostname(text) | Host::Ipv4(text) | Host::Ipv6Reference(text) => text,
        }
    }

    /// The literal address, for IPv4 and IPv6 hosts
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self {
            Host::Hostname(_) => None,
            Host::Ipv4(text) => text.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
            Host::Ipv6Reference(text) => text
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|inner| inner.parse::<Ipv6Addr>().ok())
                .map(IpAddr::V6),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        classify_host(s).ok_or_else(|| {
            Error::invalid_component(
                "host",
                format!("{s:?} is not a hostname, IPv4 address or IPv6 reference"),
            )
        })
    }
}

impl TryFrom<String> for Host {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        match host {
            Host::Hostname(text) | Host::Ipv4(text) | Host::Ipv6Reference(text) => text,
        }
    }
}

impl From<Ipv4Addr> for Host {
    fn from(addr: Ipv4Addr) -> Self {
        Host::Ipv4(addr.to_string())
    }
}

impl From<Ipv6Addr> for Host {
    fn from(addr: Ipv6Addr) -> Self {
        Host::Ipv6Reference(format!("[{}]", addr))
    }
}

impl From<IpAddr> for Host {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => addr.into(),
            IpAddr::V6(addr) => addr.into(),
        }
    }
}

/// `user[:password]` from the userinfo component, still escaped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: String,
    /// Deprecated by RFC 3261 but still part of the grammar
    pub password: Option<String>,
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user)?;
        if let Some(password) = &self.password {
            write!(f, ":{}", password)?;
        }
        Ok(())
    }
}

/// A parsed SIP or SIPS URI.
///
/// Immutable once built. The only ways to obtain one are
/// [`SipUri::parse`] and [`SipUri::build`], and both validate every
/// component against its grammar. To change a URI, take its
/// [`to_fields`](SipUri::to_fields), adjust them and build a new one.
///
/// Serializes as its textual form and deserializes through the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SipUri {
    scheme: Scheme,
    userinfo: Option<UserInfo>,
    host: Host,
    port: Option<u16>,
    params: UriParams,
    headers: UriHeaders,
}

impl SipUri {
    /// Parses a complete `sip:` or `sips:` URI.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedScheme`] if the text does not start with
    ///   `sip:` or `sips:` (case-sensitive)
    /// - [`Error::MalformedUri`] if the text as a whole does not match the
    ///   grammar
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_sip_uri::prelude::*;
    ///
    /// let uri = SipUri::parse("sip:alice;day=tuesday@atlanta.com").unwrap();
    /// assert_eq!(uri.user(), Some("alice;day=tuesday"));
    /// assert!(uri.params().is_empty());
    ///
    /// assert!(matches!(SipUri::parse("sip:"), Err(Error::MalformedUri(_))));
    /// assert!(matches!(SipUri::parse("tel:+1234"), Err(Error::UnsupportedScheme(_))));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        trace!(uri = text, "parsing SIP URI");

        if Scheme::from_prefix(text).is_none() {
            let token = text.split_once(':').map_or(text, |(token, _)| token);
            debug!(uri = text, "unsupported URI scheme");
            return Err(Error::UnsupportedScheme(token.to_string()));
        }

        let captures = split(text).ok_or_else(|| {
            debug!(uri = text, "URI does not match the SIP-URI grammar");
            Error::MalformedUri(text.to_string())
        })?;

        Ok(decompose(captures))
    }

    pub(crate) fn from_parts(
        scheme: Scheme,
        userinfo: Option<UserInfo>,
        host: Host,
        port: Option<u16>,
        params: UriParams,
        headers: UriHeaders,
    ) -> Self {
        SipUri {
            scheme,
            userinfo,
            host,
            port,
            params,
            headers,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns `true` for `sips:` URIs
    pub fn is_secure(&self) -> bool {
        self.scheme.is_secure()
    }

    pub fn userinfo(&self) -> Option<&UserInfo> {
        self.userinfo.as_ref()
    }

    /// The user part, still escaped
    pub fn user(&self) -> Option<&str> {
        self.userinfo.as_ref().map(|info| info.user.as_str())
    }

    pub fn password(&self) -> Option<&str> {
        self.userinfo
            .as_ref()
            .and_then(|info| info.password.as_deref())
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// The port written in the URI, if any
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The written port, or the scheme default (5060 for sip, 5061 for sips)
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_sip_uri::SipUri;
    ///
    /// assert_eq!(SipUri::parse("sip:example.com").unwrap().effective_port(), 5060);
    /// assert_eq!(SipUri::parse("sips:example.com").unwrap().effective_port(), 5061);
    /// assert_eq!(SipUri::parse("sips:example.com:8443").unwrap().effective_port(), 8443);
    /// ```
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }

    /// `host[:port]` as written
    pub fn hostport(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.to_string(),
        }
    }

    pub fn params(&self) -> &UriParams {
        &self.params
    }

    /// Looks up a URI parameter; see [`UriParams::get`]
    pub fn param(&self, name: &str) -> Option<Option<&str>> {
        self.params.get(name)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    pub fn headers(&self) -> &UriHeaders {
        &self.headers
    }

    /// Looks up a URI header; see [`UriHeaders::get`]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub(crate) fn into_parts(self) -> (Scheme, Option<UserInfo>, Host, Option<u16>, UriParams, UriHeaders) {
        (
            self.scheme,
            self.userinfo,
            self.host,
            self.port,
            self.params,
            self.headers,
        )
    }
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme.prefix())?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}{}", self.params, self.headers)
    }
}

impl FromStr for SipUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SipUri::parse(s)
    }
}

impl TryFrom<&str> for SipUri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        SipUri::parse(s)
    }
}

impl TryFrom<String> for SipUri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        SipUri::parse(&s)
    }
}

impl From<SipUri> for String {
    fn from(uri: SipUri) -> Self {
        uri.to_string()
    }
}
