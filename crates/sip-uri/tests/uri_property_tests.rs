use std::net::Ipv6Addr;

use proptest::prelude::*;
use rvoip_sip_uri::prelude::*;
use rvoip_sip_uri::split;

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]([a-z0-9\\-]{0,6}[a-z0-9])?", 0..3).prop_flat_map(|labels| {
        "[a-z]([a-z0-9\\-]{0,6}[a-z0-9])?".prop_map(move |top| {
            let mut name = labels.join(".");
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&top);
            name
        })
    })
}

fn host_strategy() -> impl Strategy<Value = (String, HostKind)> {
    prop_oneof![
        hostname_strategy().prop_map(|name| (name, HostKind::Hostname)),
        any::<[u8; 4]>().prop_map(|octets| {
            let text = octets
                .iter()
                .map(|octet| octet.to_string())
                .collect::<Vec<_>>()
                .join(".");
            (text, HostKind::Ipv4)
        }),
        any::<[u16; 8]>().prop_map(|groups| {
            let addr = Ipv6Addr::from(groups);
            (format!("[{}]", addr), HostKind::Ipv6Reference)
        }),
    ]
}

fn param_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    (
        "[a-z][a-z0-9\\-]{0,7}",
        proptest::option::of("([a-zA-Z0-9.!~*'()\\-_]|%[0-9A-F]{2}){1,8}"),
    )
}

fn header_strategy() -> impl Strategy<Value = (String, String)> {
    ("[A-Za-z][A-Za-z0-9\\-]{0,7}", "([a-zA-Z0-9]|%20){0,8}")
}

prop_compose! {
    fn uri_fields()(
        user in proptest::option::of("([a-z0-9+.\\-]|%40){1,10}"),
        password in proptest::option::of("[a-z0-9]{0,6}"),
        (host, _) in host_strategy(),
        port in proptest::option::of(any::<u16>()),
        params in prop::collection::vec(param_strategy(), 0..4),
        headers in prop::collection::vec(header_strategy(), 0..3),
    ) -> UriFields {
        let mut fields = UriFields::new(host);
        if let Some(user) = user {
            fields = fields.with_user(user);
            if let Some(password) = password {
                fields = fields.with_password(password);
            }
        }
        if let Some(port) = port {
            fields = fields.with_port(port);
        }
        fields.params = params;
        fields.headers = headers;
        fields
    }
}

proptest! {
    /// Generated hosts of every kind are classified as generated.
    #[test]
    fn host_kinds_classified(
        sips in prop::bool::ANY,
        (host, kind) in host_strategy(),
        port in proptest::option::of(any::<u16>()),
    ) {
        let scheme = if sips { Scheme::Sips } else { Scheme::Sip };
        let port_part = port.map(|p| format!(":{}", p)).unwrap_or_default();
        let text = format!("{}{}{}", scheme.prefix(), host, port_part);

        let uri = SipUri::parse(&text);
        prop_assert!(uri.is_ok(), "Failed to parse: {}", text);
        let uri = uri.unwrap();
        prop_assert_eq!(uri.scheme(), scheme);
        prop_assert_eq!(uri.host().kind(), kind);
        prop_assert_eq!(uri.host().as_str(), host.as_str());
        prop_assert_eq!(uri.port(), port);
        prop_assert_eq!(uri.effective_port(), port.unwrap_or(scheme.default_port()));
    }

    /// Built URIs print as text that parses back to the same value, and the
    /// matcher's captures rebuild that text.
    #[test]
    fn display_parse_fixpoint(sips in prop::bool::ANY, fields in uri_fields()) {
        let scheme = if sips { Scheme::Sips } else { Scheme::Sip };
        let uri = SipUri::build(scheme, fields.clone());
        prop_assert!(uri.is_ok(), "Failed to build {:?}: {:?}", fields, uri);
        let uri = uri.unwrap();

        let text = uri.to_string();
        let reparsed = SipUri::parse(&text);
        prop_assert!(reparsed.is_ok(), "Failed to reparse: {}", text);
        prop_assert_eq!(reparsed.unwrap(), uri.clone());

        let captures = split(&text).expect("printed URI should match");
        prop_assert_eq!(captures.remainder(), &text[scheme.prefix().len()..]);
        prop_assert_eq!(uri.to_fields(), fields);
    }

    /// Anything outside the two literal prefixes is an unsupported scheme.
    #[test]
    fn foreign_schemes_rejected(token in "[a-z][a-z0-9+.\\-]{0,8}", rest in "[a-z]{1,8}") {
        prop_assume!(token != "sip" && token != "sips");
        let text = format!("{}:{}", token, rest);
        prop_assert_eq!(SipUri::parse(&text), Err(Error::UnsupportedScheme(token)));
    }

    /// Arbitrary input never panics; it parses or returns an error.
    #[test]
    fn arbitrary_input_does_not_panic(rest in "[ -~]{0,40}") {
        let text = format!("sip:{}", rest);
        match SipUri::parse(&text) {
            Ok(uri) => prop_assert_eq!(SipUri::parse(&uri.to_string()), Ok(uri)),
            Err(err) => prop_assert!(matches!(err, Error::MalformedUri(_))),
        }
    }
}
