use nom::{
    character::complete::char,
    combinator::opt,
    sequence::{pair, preceded, terminated},
};

use crate::parser::common_chars::{
    escaped_or0, escaped_or1, is_password_unreserved, is_unreserved, is_user_unreserved,
};
use crate::parser::ParseResult;

fn is_user_char(c: char) -> bool {
    is_unreserved(c) || is_user_unreserved(c)
}

fn is_password_char(c: char) -> bool {
    is_unreserved(c) || is_password_unreserved(c)
}

// user = 1*( unreserved / escaped / user-unreserved )
// Returns the raw (still escaped) slice
pub fn user(input: &str) -> ParseResult<&str> {
    escaped_or1(is_user_char)(input)
}

// password = *( unreserved / escaped / "&" / "=" / "+" / "$" / "," )
pub fn password(input: &str) -> ParseResult<&str> {
    escaped_or0(is_password_char)(input)
}

// userinfo = user [ ":" password ] "@"
// Neither user nor password may contain ':' or '@', so the first ':' is
// always the delimiter and the first '@' always terminates the segment.
pub fn userinfo(input: &str) -> ParseResult<(&str, Option<&str>)> {
    terminated(pair(user, opt(preceded(char(':'), password))), char('@'))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_user_only() {
        let (rem, (user, pass)) = userinfo("alice@atlanta.com").unwrap();
        assert_eq!(rem, "atlanta.com");
        assert_eq!(user, "alice");
        assert_eq!(pass, None);
    }

    #[test]
    fn test_userinfo_with_password() {
        let (rem, (user, pass)) = userinfo("alice:secret%21@host").unwrap();
        assert_eq!(rem, "host");
        assert_eq!(user, "alice");
        assert_eq!(pass, Some("secret%21"));
    }

    #[test]
    fn test_userinfo_empty_password() {
        let (_, (user, pass)) = userinfo("alice:@host").unwrap();
        assert_eq!(user, "alice");
        assert_eq!(pass, Some(""));
    }

    #[test]
    fn test_user_unreserved_delimiters_stay_in_user() {
        let (rem, (user, _)) = userinfo("alice;day=tuesday@atlanta.com").unwrap();
        assert_eq!(rem, "atlanta.com");
        assert_eq!(user, "alice;day=tuesday");

        let (_, (user, _)) = userinfo("+1-212-555-1212;postd=pp22?x&y=z,/$@gw").unwrap();
        assert_eq!(user, "+1-212-555-1212;postd=pp22?x&y=z,/$");
    }

    #[test]
    fn test_userinfo_rejects() {
        // No terminating '@'
        assert!(userinfo("alice").is_err());
        // Empty user
        assert!(userinfo("@host").is_err());
        assert!(userinfo(":pw@host").is_err());
        // ';' is not a password character
        assert!(userinfo("alice:pw;x@host").is_err());
        // Broken escape
        assert!(userinfo("al%4ice@host").is_err());
    }
}
