//! HTTP verbs a route can be declared for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of request methods.
///
/// Declaration order is the expansion order for routes declared without
/// explicit methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl RequestMethod {
    /// Every method, in expansion order.
    pub const ALL: [RequestMethod; 8] = [
        RequestMethod::Get,
        RequestMethod::Head,
        RequestMethod::Post,
        RequestMethod::Put,
        RequestMethod::Patch,
        RequestMethod::Delete,
        RequestMethod::Options,
        RequestMethod::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Head => "HEAD",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method name outside [`RequestMethod::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported request method `{0}`")]
pub struct MethodParseError(pub String);

impl FromStr for RequestMethod {
    type Err = MethodParseError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MethodParseError(s.to_string()))
    }
}

impl TryFrom<&http::Method> for RequestMethod {
    type Error = MethodParseError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl From<RequestMethod> for http::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => http::Method::GET,
            RequestMethod::Head => http::Method::HEAD,
            RequestMethod::Post => http::Method::POST,
            RequestMethod::Put => http::Method::PUT,
            RequestMethod::Patch => http::Method::PATCH,
            RequestMethod::Delete => http::Method::DELETE,
            RequestMethod::Options => http::Method::OPTIONS,
            RequestMethod::Trace => http::Method::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("get".parse::<RequestMethod>(), Ok(RequestMethod::Get));
        assert_eq!("Patch".parse::<RequestMethod>(), Ok(RequestMethod::Patch));
        assert_eq!(
            "CONNECT".parse::<RequestMethod>(),
            Err(MethodParseError("CONNECT".to_string()))
        );
    }

    #[test]
    fn test_http_method_interop() {
        assert_eq!(
            RequestMethod::try_from(&http::Method::DELETE),
            Ok(RequestMethod::Delete)
        );
        assert!(RequestMethod::try_from(&http::Method::CONNECT).is_err());
        for method in RequestMethod::ALL {
            let converted: http::Method = method.into();
            assert_eq!(converted.as_str(), method.as_str());
        }
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&RequestMethod::Options).unwrap();
        assert_eq!(json, "\"OPTIONS\"");
        let parsed: RequestMethod = serde_json::from_str("\"TRACE\"").unwrap();
        assert_eq!(parsed, RequestMethod::Trace);
    }
}
