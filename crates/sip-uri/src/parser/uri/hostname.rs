use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{opt, recognize, verify},
    multi::separated_list1,
    sequence::pair,
};

use crate::parser::ParseResult;

pub(crate) fn is_hostname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

// domainlabel = alphanum / alphanum *( alphanum / "-" ) alphanum
fn domainlabel(input: &str) -> ParseResult<&str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
        |label: &str| !label.starts_with('-') && !label.ends_with('-'),
    )(input)
}

// toplabel = ALPHA / ALPHA *( alphanum / "-" ) alphanum
// Every toplabel is also a domainlabel, so only the leading ALPHA needs checking.
fn ends_in_toplabel(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    name.rsplit('.')
        .next()
        .and_then(|label| label.chars().next())
        .map_or(false, |c| c.is_ascii_alphabetic())
}

// hostname = *( domainlabel "." ) toplabel [ "." ]
pub fn hostname(input: &str) -> ParseResult<&str> {
    verify(
        recognize(pair(separated_list1(char('.'), domainlabel), opt(char('.')))),
        ends_in_toplabel,
    )(input)
}
