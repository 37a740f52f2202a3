use serde::{Deserialize, Deserializer, Serialize};

use crate::model::application::Application;
use crate::model::service::Service;

/// Response of `GET /get_services`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<Service>,
}

/// Response of `POST /put_service`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutServiceResponse {
    #[serde(rename = "transactionHash", default)]
    pub transaction_hash: String,
    #[serde(rename = "serviceID")]
    pub service_id: String,
}

/// Response of `GET /get_sendOut` and `GET /get_toMe`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub applications: Vec<Application>,
}

/// Response of `POST /fetch_data`. `data` is itself JSON text holding an
/// array of records; see [`crate::table::DataTable::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchDataResponse {
    pub data: String,
}

// Some backends encode an empty list as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::application::ApplicationStatus;

    #[test]
    fn null_service_list_is_empty() {
        let response: ServicesResponse = serde_json::from_str(r#"{"services": null}"#).unwrap();
        assert!(response.services.is_empty());
    }

    #[test]
    fn decodes_application_queue() {
        let raw = r#"{"applications": [
            {"ServiceID": "S1", "ServiceName": "Weather", "InitiatorID": "U1",
             "ApplicationTime": "t0", "ProcessTime": null, "Status": 0},
            {"ServiceID": "S2", "ServiceName": "Traffic", "InitiatorID": "U1",
             "ApplicationTime": "t1", "ProcessTime": "t2", "Status": 2}
        ]}"#;
        let response: ApplicationsResponse = serde_json::from_str(raw).unwrap();
        let statuses: Vec<_> = response.applications.iter().map(|a| a.status).collect();
        assert_eq!(statuses, [ApplicationStatus::Pending, ApplicationStatus::Rejected]);
    }

    #[test]
    fn fetch_envelope_requires_string_data() {
        assert!(serde_json::from_str::<FetchDataResponse>(r#"{"data": "[]"}"#).is_ok());
        assert!(serde_json::from_str::<FetchDataResponse>(r#"{"data": [[1, 2]]}"#).is_err());
    }

    #[test]
    fn put_service_response_uses_camel_case() {
        let response: PutServiceResponse =
            serde_json::from_str(r#"{"transactionHash": "0x1", "serviceID": "ID005"}"#).unwrap();
        assert_eq!(response.service_id, "ID005");
        assert_eq!(response.transaction_hash, "0x1");
    }
}
