//! Scheme registration for URI frameworks that dispatch on the scheme token.
//!
//! A framework that understands many URI schemes splits `scheme:remainder`
//! itself, finds the handler that [`handles`](SchemeHandler::handles) the
//! token and passes it the remainder. [`SipSchemeHandler`] owns `sip` and
//! `sips`.

use tracing::debug;

use crate::error::Result;
use crate::types::uri::{Scheme, SipUri};

/// Scheme tokens handled by [`SipSchemeHandler`]
pub const SCHEME_TOKENS: [&str; 2] = ["sip", "sips"];

/// A parser for the URIs of one or more schemes
pub trait SchemeHandler {
    /// The parsed URI type
    type Output;

    /// Lowercase scheme tokens this handler owns
    fn schemes(&self) -> &'static [&'static str];

    /// Returns `true` if `token` names one of [`schemes`](Self::schemes).
    /// Scheme tokens compare case-insensitively.
    fn handles(&self, token: &str) -> bool {
        self.schemes()
            .iter()
            .any(|scheme| scheme.eq_ignore_ascii_case(token))
    }

    /// Parses the text following `scheme:`
    fn parse_remainder(&self, scheme: &str, remainder: &str) -> Result<Self::Output>;
}

/// Handler for the `sip` and `sips` schemes
///
/// # Examples
///
/// ```
/// use rvoip_sip_uri::prelude::*;
///
/// let handler = SipSchemeHandler;
/// assert!(handler.handles("SIPS"));
///
/// let uri = handler.parse_remainder("SIPS", "bob@biloxi.com").unwrap();
/// assert_eq!(uri.scheme(), Scheme::Sips);
/// assert_eq!(uri.to_string(), "sips:bob@biloxi.com");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SipSchemeHandler;

impl SchemeHandler for SipSchemeHandler {
    type Output = SipUri;

    fn schemes(&self) -> &'static [&'static str] {
        &SCHEME_TOKENS
    }

    fn parse_remainder(&self, scheme: &str, remainder: &str) -> Result<SipUri> {
        let scheme: Scheme = scheme.parse().map_err(|err| {
            debug!(scheme, "scheme token not handled by the SIP handler");
            err
        })?;
        SipUri::parse(&format!("{}{}", scheme.prefix(), remainder))
    }
}
