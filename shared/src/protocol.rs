use crate::{AuthPayload, WebLog, WebLogKind};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// `GET` requests carry their fields in the query string, `POST` requests as a JSON body.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path, relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

/// Ask the backend whether the session cookie is still valid.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckAuthRequest {}

impl ApiRequest for CheckAuthRequest {
    type Response = AuthPayload;
    const PATH: &'static str = "/api/v1/login/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthPayload;
    const PATH: &'static str = "/api/v1/login/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Ends the server-side session. The response body is ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LogoutRequest {}

impl ApiRequest for LogoutRequest {
    type Response = ();
    const PATH: &'static str = "/api/v1/logout/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebLogRequest {
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: WebLogKind,
}

impl ApiRequest for WebLogRequest {
    type Response = WebLog;
    const PATH: &'static str = "/api/v1/list/web-log/";
    const METHOD: HttpMethod = HttpMethod::Get;
}
