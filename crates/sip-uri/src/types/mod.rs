//! Value types produced by the parser and the builder.

pub mod builder;
pub mod params;
pub mod uri;
pub mod uri_headers;

pub use builder::UriFields;
pub use params::UriParams;
pub use uri::{Host, HostKind, Scheme, SipUri, UserInfo, SIPS_DEFAULT_PORT, SIP_DEFAULT_PORT};
pub use uri_headers::UriHeaders;
