// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Routing(RoutingError),
}

/// Reasons a route calculation can fail.
///
/// None of these are shown to the user: the screen logs them and leaves the
/// map as it was before the request.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// The provider answered but found no route between the two points
    NoRoute,

    /// Transport-level failure (DNS, TLS, connection reset, non-2xx status)
    Http(String),

    /// The provider answered with a body we could not understand
    InvalidResponse(String),

    /// The provider reported an error code of its own
    Provider { code: String, message: String },
}

impl RoutingError {
    /// Maps a provider status code (OSRM `code` field) to an error.
    pub fn from_provider_code(code: &str, message: Option<&str>) -> Self {
        match code {
            "NoRoute" | "NoSegment" => RoutingError::NoRoute,
            other => RoutingError::Provider {
                code: other.to_string(),
                message: message.unwrap_or_default().to_string(),
            },
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::NoRoute => write!(f, "No route found"),
            RoutingError::Http(msg) => write!(f, "HTTP error: {}", msg),
            RoutingError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            RoutingError::Provider { code, message } if message.is_empty() => {
                write!(f, "Provider error: {}", code)
            }
            RoutingError::Provider { code, message } => {
                write!(f, "Provider error: {} ({})", code, message)
            }
        }
    }
}

impl std::error::Error for RoutingError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Routing(e) => write!(f, "Routing Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RoutingError> for Error {
    fn from(err: RoutingError) -> Self {
        Error::Routing(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for RoutingError {
    fn from(err: serde_json::Error) -> Self {
        RoutingError::InvalidResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn routing_error_wraps_into_error() {
        let err: Error = RoutingError::NoRoute.into();
        assert!(matches!(err, Error::Routing(RoutingError::NoRoute)));
        assert_eq!(format!("{}", err), "Routing Error: No route found");
    }

    #[test]
    fn provider_code_no_route_maps_to_no_route() {
        assert_eq!(
            RoutingError::from_provider_code("NoRoute", Some("Impossible route")),
            RoutingError::NoRoute
        );
        assert_eq!(
            RoutingError::from_provider_code("NoSegment", None),
            RoutingError::NoRoute
        );
    }

    #[test]
    fn provider_code_other_keeps_code_and_message() {
        let err = RoutingError::from_provider_code("InvalidQuery", Some("bad coordinates"));
        assert_eq!(
            err,
            RoutingError::Provider {
                code: "InvalidQuery".into(),
                message: "bad coordinates".into(),
            }
        );
        assert_eq!(
            format!("{}", err),
            "Provider error: InvalidQuery (bad coordinates)"
        );
    }

    #[test]
    fn provider_error_without_message_omits_parentheses() {
        let err = RoutingError::from_provider_code("TooBig", None);
        assert_eq!(format!("{}", err), "Provider error: TooBig");
    }

    #[test]
    fn json_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RoutingError = json_err.into();
        assert!(matches!(err, RoutingError::InvalidResponse(_)));
    }
}
