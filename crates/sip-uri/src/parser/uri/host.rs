use nom::{
    branch::alt,
    character::complete::{digit1, satisfy},
    combinator::{all_consuming, map_res, not},
    sequence::terminated,
};

use crate::parser::ParseResult;
use crate::types::uri::Host;

use super::hostname::{hostname, is_hostname_char};
use super::ipv4::ipv4_address;
use super::ipv6::ipv6_reference;

// host = hostname / IPv4address / IPv6reference
//
// Tried most specific first. An IPv4 literal only counts when it is the whole
// host token; "1.2.3.4.example.com" is a hostname, not a literal followed by
// junk.
pub fn host(input: &str) -> ParseResult<&str> {
    alt((
        ipv6_reference,
        terminated(ipv4_address, not(satisfy(is_hostname_char))),
        hostname,
    ))(input)
}

// port = 1*DIGIT
// Digit runs that do not fit in 16 bits are rejected here, so a matched
// port always converts.
pub fn port(input: &str) -> ParseResult<u16> {
    map_res(digit1, |digits: &str| digits.parse::<u16>())(input)
}

/// Classify a complete host token into its variant, in the same order the
/// `host` production tries them.
pub(crate) fn classify_host(text: &str) -> Option<Host> {
    if all_consuming(ipv6_reference)(text).is_ok() {
        Some(Host::Ipv6Reference(text.to_string()))
    } else if all_consuming(ipv4_address)(text).is_ok() {
        Some(Host::Ipv4(text.to_string()))
    } else if all_consuming(hostname)(text).is_ok() {
        Some(Host::Hostname(text.to_string()))
    } else {
        None
    }
}
