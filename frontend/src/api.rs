//! Calls to the marketplace backend.
//!
//! Every function takes the [`ClientConfig`] it should use, resolves the
//! endpoint against the configured origin and maps failures onto
//! [`ApiError`]. Callers log the error; nothing here retries.

use common::config::{ClientConfig, Endpoint, CLIENT_CONFIG_PATH};
use common::model::application::Application;
use common::model::service::Service;
use common::requests::{ApprovalRequest, FetchDataRequest, ForwardApplicationRequest, PutServiceRequest};
use common::responses::{ApplicationsResponse, FetchDataResponse, PutServiceResponse, ServicesResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got an answer (network down, CORS, bad URL).
    #[error("request to {path} failed: {message}")]
    Transport { path: &'static str, message: String },

    #[error("{path} answered with status {status}")]
    Status { path: &'static str, status: u16 },

    #[error("could not decode {path} response: {message}")]
    Decode { path: &'static str, message: String },
}

/// Loads the client configuration from the host that served the page.
pub async fn load_client_config() -> Result<ClientConfig, ApiError> {
    let response = send_get(CLIENT_CONFIG_PATH, CLIENT_CONFIG_PATH).await?;
    decode(CLIENT_CONFIG_PATH, response).await
}

pub async fn get_services(config: &ClientConfig) -> Result<Vec<Service>, ApiError> {
    let response: ServicesResponse = get_json(config, Endpoint::GetServices).await?;
    Ok(response.services)
}

pub async fn put_service(
    config: &ClientConfig,
    request: &PutServiceRequest,
) -> Result<PutServiceResponse, ApiError> {
    let path = Endpoint::PutService.path();
    let response = send_post(path, &config.url(Endpoint::PutService), request).await?;
    decode(path, response).await
}

pub async fn forward_application(
    config: &ClientConfig,
    request: &ForwardApplicationRequest,
) -> Result<(), ApiError> {
    post_expect_ok(config, Endpoint::ForwardApplication, request).await
}

pub async fn approve_application(
    config: &ClientConfig,
    request: &ApprovalRequest,
) -> Result<(), ApiError> {
    post_expect_ok(config, Endpoint::ApproveApplication, request).await
}

pub async fn fetch_data(
    config: &ClientConfig,
    request: &FetchDataRequest,
) -> Result<FetchDataResponse, ApiError> {
    let path = Endpoint::FetchData.path();
    let response = send_post(path, &config.url(Endpoint::FetchData), request).await?;
    decode(path, response).await
}

pub async fn get_send_out(config: &ClientConfig) -> Result<Vec<Application>, ApiError> {
    let response: ApplicationsResponse = get_json(config, Endpoint::GetSendOut).await?;
    Ok(response.applications)
}

pub async fn get_to_me(config: &ClientConfig) -> Result<Vec<Application>, ApiError> {
    let response: ApplicationsResponse = get_json(config, Endpoint::GetToMe).await?;
    Ok(response.applications)
}

async fn get_json<T: DeserializeOwned>(
    config: &ClientConfig,
    endpoint: Endpoint,
) -> Result<T, ApiError> {
    let response = send_get(endpoint.path(), &config.url(endpoint)).await?;
    decode(endpoint.path(), response).await
}

async fn post_expect_ok<B: Serialize>(
    config: &ClientConfig,
    endpoint: Endpoint,
    body: &B,
) -> Result<(), ApiError> {
    send_post(endpoint.path(), &config.url(endpoint), body)
        .await
        .map(|_| ())
}

async fn send_get(path: &'static str, url: &str) -> Result<Response, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| transport(path, e))?;
    check_status(path, response)
}

async fn send_post<B: Serialize>(
    path: &'static str,
    url: &str,
    body: &B,
) -> Result<Response, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| transport(path, e))?
        .send()
        .await
        .map_err(|e| transport(path, e))?;
    check_status(path, response)
}

fn check_status(path: &'static str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            path,
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(path: &'static str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        path,
        message: e.to_string(),
    })
}

fn transport(path: &'static str, error: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        path,
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_endpoint() {
        let err = ApiError::Status {
            path: Endpoint::ApproveApplication.path(),
            status: 500,
        };
        assert_eq!(err.to_string(), "/approve_application answered with status 500");

        let err = ApiError::Decode {
            path: Endpoint::GetToMe.path(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "could not decode /get_toMe response: expected value");
    }
}
