//! # Prelude
//!
//! The `rvoip_sip_uri` prelude brings the URI value types and the scheme
//! handler into scope.
//!
//! This is typically imported with `use rvoip_sip_uri::prelude::*;`

pub use crate::error::{Error, Result};
pub use crate::handler::{SchemeHandler, SipSchemeHandler};
pub use crate::types::builder::UriFields;
pub use crate::types::params::UriParams;
pub use crate::types::uri::{Host, HostKind, Scheme, SipUri, UserInfo};
pub use crate::types::uri_headers::UriHeaders;
