//! Socket endpoint resolution.
//!
//! The endpoint is a pure function of the page location: a secure page maps
//! to the secure socket scheme, and the page path is carried over unchanged
//! under the `/ws` prefix. No memoization: callers may resolve repeatedly
//! and must see the current location each time.

use thiserror::Error;
use url::Url;

/// Errors that can occur while resolving a socket endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// Page scheme is neither `http` nor `https`.
    #[error("unsupported page scheme: {scheme}")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },

    /// Page URL has no host component.
    #[error("page location has no host")]
    MissingHost,
}

/// The parts of a page location that determine the socket endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Page was served over `https`.
    secure: bool,
    /// Host, including the port when one is explicit.
    host: String,
    /// Path component, including the leading slash.
    path: String,
}

impl PageLocation {
    /// Extract the relevant parts from a page URL.
    pub fn from_page_url(page: &Url) -> Result<Self, EndpointError> {
        let secure = match page.scheme() {
            "https" => true,
            "http" => false,
            other => {
                return Err(EndpointError::UnsupportedScheme { scheme: other.to_owned() });
            },
        };

        let host = page.host_str().ok_or(EndpointError::MissingHost)?;
        let host = match page.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };

        Ok(Self { secure, host, path: page.path().to_owned() })
    }

    /// Resolve the socket endpoint: `ws://<host>/ws<path>`, or `wss` when
    /// the page is secure.
    pub fn endpoint(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{scheme}://{}/ws{}", self.host, self.path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resolve(page: &str) -> Result<String, EndpointError> {
        let url = Url::parse(page).unwrap();
        PageLocation::from_page_url(&url).map(|location| location.endpoint())
    }

    #[test]
    fn insecure_page_maps_to_ws() {
        assert_eq!(resolve("http://host/path/").unwrap(), "ws://host/ws/path/");
    }

    #[test]
    fn secure_page_maps_to_wss() {
        assert_eq!(resolve("https://host/dialogs/u7").unwrap(), "wss://host/ws/dialogs/u7");
    }

    #[test]
    fn explicit_port_is_kept() {
        assert_eq!(resolve("http://localhost:8000/dialogs/").unwrap(), "ws://localhost:8000/ws/dialogs/");
    }

    #[test]
    fn root_path_keeps_leading_slash() {
        assert_eq!(resolve("http://host/").unwrap(), "ws://host/ws/");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert_eq!(
            resolve("ftp://host/path"),
            Err(EndpointError::UnsupportedScheme { scheme: "ftp".into() })
        );
    }
}
