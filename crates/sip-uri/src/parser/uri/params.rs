use nom::{
    character::complete::char,
    combinator::{opt, recognize},
    multi::{many0, many0_count},
    sequence::{pair, preceded},
};

use crate::parser::common_chars::{escaped_or1, is_param_unreserved, is_unreserved};
use crate::parser::ParseResult;

// paramchar = param-unreserved / unreserved / escaped
fn is_paramchar(c: char) -> bool {
    is_unreserved(c) || is_param_unreserved(c)
}

// pname = 1*paramchar
pub fn pname(input: &str) -> ParseResult<&str> {
    escaped_or1(is_paramchar)(input)
}

// pvalue = 1*paramchar
pub fn pvalue(input: &str) -> ParseResult<&str> {
    escaped_or1(is_paramchar)(input)
}

// uri-parameter = pname [ "=" pvalue ]
// The named RFC 3261 parameters (transport-param, lr-param, ...) are all
// instances of other-param, so one production covers them.
pub fn uri_parameter(input: &str) -> ParseResult<(&str, Option<&str>)> {
    pair(pname, opt(preceded(char('='), pvalue)))(input)
}

// uri-parameters = *( ";" uri-parameter )
pub fn uri_parameters(input: &str) -> ParseResult<Vec<(&str, Option<&str>)>> {
    many0(preceded(char(';'), uri_parameter))(input)
}

/// Recognizes `uri-parameters` without collecting the individual pairs.
pub(crate) fn uri_parameters_span(input: &str) -> ParseResult<&str> {
    recognize(many0_count(preceded(char(';'), uri_parameter)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_parameters_ordered_with_flags() {
        let (rem, params) = uri_parameters(";lr;param=value;param1").unwrap();
        assert!(rem.is_empty());
        assert_eq!(
            params,
            vec![("lr", None), ("param", Some("value")), ("param1", None)]
        );
    }

    #[test]
    fn test_uri_parameters_empty() {
        assert_eq!(uri_parameters(""), Ok(("", vec![])));
        assert_eq!(uri_parameters("?h=v"), Ok(("?h=v", vec![])));
    }

    #[test]
    fn test_param_unreserved_chars() {
        let (rem, params) = uri_parameters(";maddr=[::1];x=a/b:c&d+e$;t=%3B").unwrap();
        assert!(rem.is_empty());
        assert_eq!(
            params,
            vec![
                ("maddr", Some("[::1]")),
                ("x", Some("a/b:c&d+e$")),
                ("t", Some("%3B")),
            ]
        );
    }

    #[test]
    fn test_uri_parameters_stop_at_invalid() {
        // pvalue must not be empty; the '=' is left for the caller to reject
        assert_eq!(uri_parameters(";a=;b"), Ok(("=;b", vec![("a", None)])));
        assert_eq!(uri_parameters(";;a"), Ok((";;a", vec![])));
        assert_eq!(uri_parameters_span(";lr;ttl=5?x=y"), Ok(("?x=y", ";lr;ttl=5")));
    }

    #[test]
    fn test_uri_parameters_keep_duplicates() {
        let (_, params) = uri_parameters(";p=1;p=2").unwrap();
        assert_eq!(params, vec![("p", Some("1")), ("p", Some("2"))]);
    }
}
