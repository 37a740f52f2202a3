//! Runtime configuration handed from the host to the browser client.
//!
//! The host serves a [`ClientConfig`] at [`CLIENT_CONFIG_PATH`]; the client
//! fetches it once on startup and passes it to every component that talks to
//! the backend. Nothing reads the backend origin from global state.

use serde::{Deserialize, Serialize};

/// Path the host serves the client configuration on.
pub const CLIENT_CONFIG_PATH: &str = "/config.json";

/// Backend endpoints used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetServices,
    PutService,
    ForwardApplication,
    ApproveApplication,
    FetchData,
    GetSendOut,
    GetToMe,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GetServices => "/get_services",
            Endpoint::PutService => "/put_service",
            Endpoint::ForwardApplication => "/forward_application",
            Endpoint::ApproveApplication => "/approve_application",
            Endpoint::FetchData => "/fetch_data",
            Endpoint::GetSendOut => "/get_sendOut",
            Endpoint::GetToMe => "/get_toMe",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host and port of the marketplace backend, without a trailing
    /// slash. Empty means "same origin as the page".
    pub backend_origin: String,
}

impl ClientConfig {
    pub fn new(backend_origin: &str) -> Self {
        Self {
            backend_origin: backend_origin.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.backend_origin, endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_origin_and_path() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.url(Endpoint::GetToMe), "http://localhost:5000/get_toMe");
        assert_eq!(
            config.url(Endpoint::ApproveApplication),
            "http://localhost:5000/approve_application"
        );
    }

    #[test]
    fn empty_origin_yields_relative_paths() {
        let config = ClientConfig::default();
        assert_eq!(config.url(Endpoint::FetchData), "/fetch_data");
    }

    #[test]
    fn decodes_host_payload() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"backend_origin": "http://api:5000"}"#).unwrap();
        assert_eq!(config.url(Endpoint::GetServices), "http://api:5000/get_services");
    }
}
