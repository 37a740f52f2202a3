//! Request bodies sent to the marketplace backend.
//!
//! Field names follow the backend contract verbatim, which is why casing is
//! mixed across structs (`serviceName` for registration, `ServiceID` for the
//! application workflow).

use serde::Serialize;

use crate::model::application::ApplicationStatus;
use crate::model::service::Service;

/// Body of `POST /put_service`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutServiceRequest {
    #[serde(rename = "serviceName")]
    pub service_name: String,
    /// Always equal to `headers.len()`.
    pub header_num: usize,
    pub headers: Vec<String>,
    #[serde(rename = "sellerURL")]
    pub seller_url: String,
    #[serde(rename = "sellerPublicKey")]
    pub seller_public_key: String,
    pub comment: String,
}

impl PutServiceRequest {
    /// Builds a registration from raw form input. `headers_text` holds one
    /// column header per line; blank lines are skipped and entries trimmed.
    pub fn new(
        service_name: &str,
        headers_text: &str,
        seller_url: &str,
        seller_public_key: &str,
        comment: &str,
    ) -> Self {
        let headers: Vec<String> = headers_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            service_name: service_name.trim().to_string(),
            header_num: headers.len(),
            headers,
            seller_url: seller_url.trim().to_string(),
            seller_public_key: seller_public_key.trim().to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Body of `POST /forward_application`: the registry row as displayed, with
/// the public key restored to its full value and the submission time the
/// consumer assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardApplicationRequest {
    #[serde(rename = "ServiceName")]
    pub service_name: String,
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "PublisherURL")]
    pub publisher_url: String,
    #[serde(rename = "PublisherPublicKey")]
    pub publisher_public_key: String,
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "TransactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "ApplicationTime")]
    pub application_time: String,
}

/// Body of `POST /approve_application`. Built through
/// [`Application::decide`](crate::model::application::Application::decide).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalRequest {
    #[serde(rename = "InitiatorID")]
    pub initiator_id: String,
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "Status")]
    pub status: ApplicationStatus,
    #[serde(rename = "ApplicationTime")]
    pub application_time: String,
    #[serde(rename = "ProcessTime")]
    pub process_time: String,
}

/// Body of `POST /fetch_data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchDataRequest {
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    /// Left out of the body when unknown, e.g. for an outgoing application
    /// the backend listed without a publisher.
    #[serde(rename = "PublisherURL", skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
}

impl FetchDataRequest {
    pub fn new(service_id: impl Into<String>, publisher_url: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            publisher_url: Some(publisher_url.into()),
        }
    }

    pub fn without_publisher(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            publisher_url: None,
        }
    }
}

impl From<&Service> for FetchDataRequest {
    fn from(service: &Service) -> Self {
        Self::new(service.service_id.clone(), service.publisher_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_count_follows_parsed_lines() {
        let request = PutServiceRequest::new(
            " Weather ",
            "temp\n\n humidity \r\nwind\n",
            "http://seller.example.com",
            "key",
            "hourly readings",
        );
        assert_eq!(request.headers, ["temp", "humidity", "wind"]);
        assert_eq!(request.header_num, 3);
        assert_eq!(request.service_name, "Weather");
    }

    #[test]
    fn put_service_uses_registration_field_names() {
        let request = PutServiceRequest::new("Weather", "temp", "http://s", "key", "c");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "serviceName": "Weather",
                "header_num": 1,
                "headers": ["temp"],
                "sellerURL": "http://s",
                "sellerPublicKey": "key",
                "comment": "c"
            })
        );
    }

    #[test]
    fn fetch_request_carries_id_and_url() {
        let request = FetchDataRequest::new("S1", "http://seller");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "ServiceID": "S1", "PublisherURL": "http://seller" })
        );
    }

    #[test]
    fn fetch_request_omits_unknown_publisher() {
        let request = FetchDataRequest::without_publisher("S1");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "ServiceID": "S1" }));
    }
}
