use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::char,
    combinator::{not, opt, recognize},
    multi::{count, many_m_n},
    sequence::{delimited, pair, terminated, tuple},
};

use super::ipv4::ipv4_address;
use crate::parser::ParseResult;

// h16 = 1*4HEXDIG
fn h16(input: &str) -> ParseResult<&str> {
    take_while_m_n(1, 4, |c: char| c.is_ascii_hexdigit())(input)
}

// h16 ":"
fn h16_colon(input: &str) -> ParseResult<&str> {
    recognize(terminated(h16, char(':')))(input)
}

// ls32 = ( h16 ":" h16 ) / IPv4address
// An IPv4 octet is never followed by ':', so the first branch cannot eat one.
fn ls32(input: &str) -> ParseResult<&str> {
    alt((recognize(tuple((h16, char(':'), h16))), ipv4_address))(input)
}

/// `[ *(max - 1)( h16 ":" ) h16 ] "::"`
///
/// Inside the optional prefix an `h16 ":"` may not be followed by a second
/// ':', otherwise the repetition would swallow the first half of "::" and
/// the trailing `h16` could never match.
fn compressed<'a>(max: usize) -> impl FnMut(&'a str) -> ParseResult<'a, &'a str> {
    let prefix_group = recognize(terminated(h16, terminated(char(':'), not(char(':')))));
    recognize(pair(
        opt(pair(many_m_n(0, max.saturating_sub(1), prefix_group), h16)),
        tag("::"),
    ))
}

// IPv6address =                            6( h16 ":" ) ls32
//             /                       "::" 5( h16 ":" ) ls32
//             / [               h16 ] "::" 4( h16 ":" ) ls32
//             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
//             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
//             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
//             / [ *4( h16 ":" ) h16 ] "::"              ls32
//             / [ *5( h16 ":" ) h16 ] "::"              h16
//             / [ *6( h16 ":" ) h16 ] "::"
//
// Alternatives are ordered by the number of groups after "::", largest
// first, so the first alternative that succeeds is the one that consumes
// the whole address.
pub fn ipv6_address(input: &str) -> ParseResult<&str> {
    alt((
        recognize(pair(count(h16_colon, 6), ls32)),
        recognize(tuple((tag("::"), count(h16_colon, 5), ls32))),
        recognize(tuple((compressed(1), count(h16_colon, 4), ls32))),
        recognize(tuple((compressed(2), count(h16_colon, 3), ls32))),
        recognize(tuple((compressed(3), count(h16_colon, 2), ls32))),
        recognize(tuple((compressed(4), h16_colon, ls32))),
        recognize(pair(compressed(5), ls32)),
        recognize(pair(compressed(6), h16)),
        compressed(7),
    ))(input)
}

// IPv6reference = "[" IPv6address "]"
pub fn ipv6_reference(input: &str) -> ParseResult<&str> {
    recognize(delimited(char('['), ipv6_address, char(']')))(input)
}
