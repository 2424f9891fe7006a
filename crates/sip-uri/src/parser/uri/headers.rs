use nom::{
    character::complete::char,
    combinator::recognize,
    multi::separated_list1,
    sequence::{preceded, separated_pair},
};

use crate::parser::common_chars::{escaped_or0, escaped_or1, is_hnv_unreserved, is_unreserved};
use crate::parser::ParseResult;

// hchar = hnv-unreserved / unreserved / escaped
fn is_hchar(c: char) -> bool {
    is_unreserved(c) || is_hnv_unreserved(c)
}

// hname = 1*( hnv-unreserved / unreserved / escaped )
pub fn hname(input: &str) -> ParseResult<&str> {
    escaped_or1(is_hchar)(input)
}

// hvalue = *( hnv-unreserved / unreserved / escaped )
pub fn hvalue(input: &str) -> ParseResult<&str> {
    escaped_or0(is_hchar)(input)
}

// header = hname "=" hvalue
pub fn header(input: &str) -> ParseResult<(&str, &str)> {
    separated_pair(hname, char('='), hvalue)(input)
}

// headers = "?" header *( "&" header )
pub fn uri_headers(input: &str) -> ParseResult<Vec<(&str, &str)>> {
    preceded(char('?'), separated_list1(char('&'), header))(input)
}

/// Recognizes `headers` as a single slice, leading '?' included.
pub(crate) fn uri_headers_span(input: &str) -> ParseResult<&str> {
    recognize(uri_headers)(input)
}
