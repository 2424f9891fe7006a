//! Building a [`SipUri`] from individually supplied components.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::check_component as check;
use crate::parser::uri::{password, port, user};
use crate::types::params::UriParams;
use crate::types::uri::{Host, Scheme, SipUri, UserInfo};
use crate::types::uri_headers::UriHeaders;

/// Components from which [`SipUri::build`] assembles a URI.
///
/// Only `host` is mandatory. Values are taken verbatim (already escaped),
/// exactly as they would appear in URI text. `port` is textual so that a
/// non-numeric or out-of-range value can be reported rather than silently
/// truncated.
///
/// # Examples
///
/// ```
/// use rvoip_sip_uri::prelude::*;
///
/// let fields = UriFields::new("atlanta.com")
///     .with_user("alice")
///     .with_port(5070)
///     .with_flag("lr")
///     .with_param("transport", "tcp")
///     .with_header("subject", "project%20x");
///
/// let uri = SipUri::build(Scheme::Sip, fields).unwrap();
/// assert_eq!(uri.to_string(), "sip:alice@atlanta.com:5070;lr;transport=tcp?subject=project%20x");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriFields {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: Option<String>,
    pub params: Vec<(String, Option<String>)>,
    pub headers: Vec<(String, String)>,
}

impl UriFields {
    /// Fields with the mandatory host and nothing else
    pub fn new(host: impl Into<String>) -> Self {
        UriFields {
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port.to_string());
        self
    }

    /// Sets the port from text; validated when the URI is built
    pub fn with_port_text(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn without_port(mut self) -> Self {
        self.port = None;
        self
    }

    /// Appends a `name=value` parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), Some(value.into())));
        self
    }

    /// Appends a flag parameter (e.g. `lr`)
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.params.push((name.into(), None));
        self
    }

    /// Removes every parameter with this name (ASCII case-insensitive)
    pub fn without_param(mut self, name: &str) -> Self {
        self.params.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl SipUri {
    /// Builds a URI from explicit components.
    ///
    /// Each supplied field is validated on its own against its grammar: the
    /// host against the host productions, the port against `port`, every
    /// parameter name/value against `pname`/`pvalue` and every header
    /// name/value against `hname`/`hvalue`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidComponent`] naming the first field that fails. A
    /// password without a user is also rejected.
    pub fn build(scheme: Scheme, fields: UriFields) -> Result<Self> {
        let UriFields {
            user: user_field,
            password: password_field,
            host: host_field,
            port: port_field,
            params: param_fields,
            headers: header_fields,
        } = fields;

        let userinfo = match (user_field, password_field) {
            (Some(user_text), password_text) => {
                check("user", user, &user_text)?;
                if let Some(password_text) = &password_text {
                    check("password", password, password_text)?;
                }
                Some(UserInfo {
                    user: user_text,
                    password: password_text,
                })
            }
            (None, Some(_)) => {
                return Err(Error::invalid_component(
                    "password",
                    "a password requires a user",
                ))
            }
            (None, None) => None,
        };

        let host: Host = host_field.parse()?;

        let port_number = port_field
            .as_deref()
            .map(|text| check("port", port, text))
            .transpose()?;

        let params = UriParams::try_from(param_fields)?;
        let headers = UriHeaders::try_from(header_fields)?;

        Ok(SipUri::from_parts(
            scheme,
            userinfo,
            host,
            port_number,
            params,
            headers,
        ))
    }

    /// A copy of this URI's components, ready to be adjusted and rebuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_sip_uri::prelude::*;
    ///
    /// let uri = SipUri::parse("sip:alice@atlanta.com;transport=udp").unwrap();
    /// let moved = SipUri::build(
    ///     uri.scheme(),
    ///     uri.to_fields().with_host("biloxi.com").with_port(5070),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(moved.to_string(), "sip:alice@biloxi.com:5070;transport=udp");
    /// ```
    pub fn to_fields(&self) -> UriFields {
        let (_, userinfo, host, port, params, headers) = self.clone().into_parts();
        let (user, password) = match userinfo {
            Some(UserInfo { user, password }) => (Some(user), password),
            None => (None, None),
        };
        UriFields {
            user,
            password,
            host: host.as_str().to_string(),
            port: port.map(|port| port.to_string()),
            params: params.into_vec(),
            headers: headers.into_vec(),
        }
    }
}
