use serde::{Deserialize, Serialize};

use crate::display::{transaction_hash_label, truncate_public_key};
use crate::requests::PutServiceRequest;
use crate::responses::PutServiceResponse;

/// A data service published to the registry.
///
/// Services are created by a publisher through `/put_service` and listed by
/// `/get_services`. The client never edits or deletes one; the only field
/// expected to change after creation is `transaction_hash`, which stays empty
/// until the backend finalizes the registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Backend-assigned unique identifier.
    #[serde(rename = "ServiceID")]
    pub service_id: String,

    #[serde(rename = "ServiceName")]
    pub service_name: String,

    /// Endpoint the backend contacts when mediating a data fetch.
    #[serde(rename = "PublisherURL")]
    pub publisher_url: String,

    /// Full publisher key. Only ever shortened for display.
    #[serde(rename = "PublisherPublicKey")]
    pub publisher_public_key: String,

    #[serde(rename = "Comment", default)]
    pub comment: String,

    #[serde(rename = "TransactionHash", default)]
    pub transaction_hash: Option<String>,

    /// Local marker for services the current consumer already applied to.
    /// Informational only; the server state is not re-checked.
    #[serde(default)]
    pub approved: bool,
}

impl Service {
    /// Builds the registry entry for a service that was just registered by
    /// this client, using the identifiers returned by the backend.
    pub fn from_registration(request: &PutServiceRequest, response: PutServiceResponse) -> Self {
        Self {
            service_id: response.service_id,
            service_name: request.service_name.clone(),
            publisher_url: request.seller_url.clone(),
            publisher_public_key: request.seller_public_key.clone(),
            comment: request.comment.clone(),
            transaction_hash: Some(response.transaction_hash).filter(|hash| !hash.is_empty()),
            approved: false,
        }
    }

    pub fn display_public_key(&self) -> String {
        truncate_public_key(&self.publisher_public_key)
    }

    pub fn display_transaction_hash(&self) -> &str {
        transaction_hash_label(self.transaction_hash.as_deref())
    }
}
