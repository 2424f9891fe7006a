use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, one_of},
    combinator::recognize,
    sequence::{pair, tuple},
};

use crate::parser::common_chars::digit_char;
use crate::parser::ParseResult;

// dec-octet = "25" %x30-35        ; 250-255
//           / "2" %x30-34 DIGIT   ; 200-249
//           / "1" 2DIGIT          ; 100-199
//           / %x31-39 DIGIT       ; 10-99
//           / DIGIT               ; 0-9
// Longest alternatives first, so a run of digits is matched whole.
fn dec_octet(input: &str) -> ParseResult<&str> {
    alt((
        recognize(pair(tag("25"), one_of("012345"))),
        recognize(tuple((char('2'), one_of("01234"), digit_char))),
        recognize(tuple((char('1'), digit_char, digit_char))),
        recognize(pair(one_of("123456789"), digit_char)),
        recognize(digit_char),
    ))(input)
}

// IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet  (RFC 5954)
pub fn ipv4_address(input: &str) -> ParseResult<&str> {
    recognize(tuple((
        dec_octet,
        char('.'),
        dec_octet,
        char('.'),
        dec_octet,
        char('.'),
        dec_octet,
    )))(input)
}
