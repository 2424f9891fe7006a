//! Second parsing stage: turns the raw [`Captures`] of a successful match
//! into a typed [`SipUri`].
//!
//! Every capture handed in here has already matched its grammar, so each
//! step re-applies that same grammar and cannot fail on real input. A
//! failure means the matcher and the decomposer disagree about the grammar;
//! that is a bug in this crate and is raised as a panic, never as a parse
//! error.

use nom::combinator::all_consuming;
use tracing::error;

use crate::parser::uri::{host::classify_host, params::uri_parameters, port, uri_headers, userinfo};
use crate::parser::Captures;
use crate::types::params::UriParams;
use crate::types::uri::{SipUri, UserInfo};
use crate::types::uri_headers::UriHeaders;

/// Decomposes matcher captures into a [`SipUri`].
///
/// # Panics
///
/// Panics if a capture does not satisfy the grammar it was matched with.
pub(crate) fn decompose(captures: Captures<'_>) -> SipUri {
    let userinfo = captures.userinfo.map(split_userinfo);

    let host = classify_host(captures.host)
        .unwrap_or_else(|| invariant_violation("host", captures.host));

    let port = captures.port.map(|digits| match all_consuming(port)(digits) {
        Ok((_, port)) => port,
        Err(_) => invariant_violation("port", digits),
    });

    let params = split_params(captures.params);
    let headers = captures.headers.map(split_headers).unwrap_or_default();

    SipUri::from_parts(captures.scheme, userinfo, host, port, params, headers)
}

// "user[:password]@" -> UserInfo
fn split_userinfo(raw: &str) -> UserInfo {
    match all_consuming(userinfo)(raw) {
        Ok((_, (user, password))) => UserInfo {
            user: user.to_string(),
            password: password.map(str::to_string),
        },
        Err(_) => invariant_violation("userinfo", raw),
    }
}

// ";name[=value]..." -> ordered (name, value) pairs
fn split_params(raw: &str) -> UriParams {
    match all_consuming(uri_parameters)(raw) {
        Ok((_, pairs)) => pairs.into_iter().collect(),
        Err(_) => invariant_violation("uri-parameters", raw),
    }
}

// "?name=value&..." -> ordered (name, value) pairs
fn split_headers(raw: &str) -> UriHeaders {
    match all_consuming(uri_headers)(raw) {
        Ok((_, pairs)) => pairs.into_iter().collect(),
        Err(_) => invariant_violation("headers", raw),
    }
}

#[cold]
fn invariant_violation(component: &str, raw: &str) -> ! {
    error!(component, raw, "matched capture rejected by its own grammar");
    panic!("SIP URI grammar invariant violated: {component} capture {raw:?} does not re-parse");
}
