//! SIP and SIPS URI parsing for rvoip
//!
//! This crate parses `sip:` and `sips:` URIs (RFC 3261 §19.1 and §25.1,
//! with the IPv4/IPv6 address grammar corrected by RFC 5954) into a typed,
//! immutable [`SipUri`], and builds validated URIs from individual
//! components.
//!
//! Parsing runs in two stages: the matcher ([`split`]) checks the whole
//! string against the grammar and captures raw substrings, and an internal
//! decomposer turns those captures into the typed value.
//!
//! ```rust
//! use rvoip_sip_uri::prelude::*;
//!
//! let uri: SipUri = "sips:bob@[2001:db8::10]:5061;transport=tls".parse().unwrap();
//! assert!(uri.is_secure());
//! assert_eq!(uri.host().kind(), HostKind::Ipv6Reference);
//! assert_eq!(uri.param("transport"), Some(Some("tls")));
//! ```

// Declare modules
pub mod error;
pub mod handler;
pub mod parser;
pub mod prelude;
pub mod types;

// Re-export key public items
pub use error::{Error, Result};
pub use handler::{SchemeHandler, SipSchemeHandler, SCHEME_TOKENS};
pub use parser::{split, Captures};
pub use types::{
    Host, HostKind, Scheme, SipUri, UriFields, UriHeaders, UriParams, UserInfo,
    SIPS_DEFAULT_PORT, SIP_DEFAULT_PORT,
};
