use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Debug, Deserialize, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct HttpMethodParseError;

impl FromStr for HttpMethod {
    type Err = HttpMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "DELETE" => Ok(HttpMethod::DELETE),
            _ => Err(HttpMethodParseError),
        }
    }
}

pub fn convert_http_method(input: HttpMethod) -> Method {
    match input {
        HttpMethod::GET => Method::GET,
        HttpMethod::POST => Method::POST,
        HttpMethod::PUT => Method::PUT,
        HttpMethod::DELETE => Method::DELETE,
    }
}

/// One entry of the static endpoint catalog. The example fields hold
/// illustrative JSON bodies for display; actual schemas are owned by the
/// backend and are not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub description: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_example: Option<String>,
}
