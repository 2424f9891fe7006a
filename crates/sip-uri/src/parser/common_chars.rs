use nom::{
    branch::alt,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{char, satisfy},
    combinator::recognize,
    multi::{many0_count, many1_count},
    sequence::preceded,
};

use crate::parser::ParseResult;

// Core Rules (RFC 2234) & Basic Rules (RFC 3261) Character Sets

// mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
pub(crate) fn is_mark(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

// unreserved = alphanum / mark
pub(crate) fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_mark(c)
}

// param-unreserved = "[" / "]" / "/" / ":" / "&" / "+" / "$"
pub(crate) fn is_param_unreserved(c: char) -> bool {
    matches!(c, '[' | ']' | '/' | ':' | '&' | '+' | '$')
}

// hnv-unreserved = "[" / "]" / "/" / "?" / ":" / "+" / "$"
pub(crate) fn is_hnv_unreserved(c: char) -> bool {
    matches!(c, '[' | ']' | '/' | '?' | ':' | '+' | '$')
}

// user-unreserved = "&" / "=" / "+" / "$" / "," / ";" / "?" / "/"
pub(crate) fn is_user_unreserved(c: char) -> bool {
    matches!(c, '&' | '=' | '+' | '$' | ',' | ';' | '?' | '/')
}

// The unescaped half of password = *( unreserved / escaped / "&" / "=" / "+" / "$" / "," )
pub(crate) fn is_password_unreserved(c: char) -> bool {
    matches!(c, '&' | '=' | '+' | '$' | ',')
}

pub(crate) fn digit_char(input: &str) -> ParseResult<char> {
    satisfy(|c| c.is_ascii_digit())(input)
}

// escaped = "%" HEXDIG HEXDIG
pub fn escaped(input: &str) -> ParseResult<&str> {
    recognize(preceded(
        char('%'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))(input)
}

/// `1*( escaped / <class> )`, recognized as a single slice.
///
/// `%` never belongs to a character class, so the alternation is
/// deterministic and never backtracks.
pub(crate) fn escaped_or1<'a, F>(class: F) -> impl FnMut(&'a str) -> ParseResult<'a, &'a str>
where
    F: Fn(char) -> bool + Copy,
{
    recognize(many1_count(alt((escaped, take_while1(class)))))
}

/// `*( escaped / <class> )`, recognized as a single (possibly empty) slice.
pub(crate) fn escaped_or0<'a, F>(class: F) -> impl FnMut(&'a str) -> ParseResult<'a, &'a str>
where
    F: Fn(char) -> bool + Copy,
{
    recognize(many0_count(alt((escaped, take_while1(class)))))
}
