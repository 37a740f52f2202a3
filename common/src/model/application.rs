//! Access requests and the one-way status machine they follow.
//!
//! An [`Application`] is created when a consumer applies to a service and is
//! decided exactly once by the publisher. The wire representation keeps the
//! backend's integer status codes (`0`, `1`, `2`); anything else is rejected
//! while decoding so a renderer never sees an unknown state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::display::NOT_APPLICABLE;
use crate::requests::ApprovalRequest;

/// Status of an application. Encoded on the wire as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Publisher action on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid application status code {0}")]
pub struct InvalidStatus(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("application is already {from}; cannot {decision}")]
pub struct TransitionError {
    pub from: ApplicationStatus,
    pub decision: Decision,
}

impl ApplicationStatus {
    pub fn code(self) -> u8 {
        match self {
            ApplicationStatus::Pending => 0,
            ApplicationStatus::Approved => 1,
            ApplicationStatus::Rejected => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn is_pending(self) -> bool {
        self == ApplicationStatus::Pending
    }

    /// Moves a pending status to the one selected by `decision`.
    ///
    /// Decided statuses are final: every call on `Approved` or `Rejected`
    /// fails, including one that would land on the same status.
    pub fn apply(self, decision: Decision) -> Result<Self, TransitionError> {
        if !self.is_pending() {
            return Err(TransitionError {
                from: self,
                decision,
            });
        }
        Ok(decision.target())
    }
}

impl TryFrom<u8> for ApplicationStatus {
    type Error = InvalidStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ApplicationStatus::Pending),
            1 => Ok(ApplicationStatus::Approved),
            2 => Ok(ApplicationStatus::Rejected),
            other => Err(InvalidStatus(other)),
        }
    }
}

impl From<ApplicationStatus> for u8 {
    fn from(status: ApplicationStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Decision {
    pub fn target(self) -> ApplicationStatus {
        match self {
            Decision::Approve => ApplicationStatus::Approved,
            Decision::Reject => ApplicationStatus::Rejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Identity of an application. The same initiator may apply to the same
/// service more than once; the submission time tells the requests apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationKey {
    pub service_id: String,
    pub initiator_id: String,
    pub application_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "ServiceID")]
    pub service_id: String,

    #[serde(rename = "ServiceName", default)]
    pub service_name: String,

    #[serde(rename = "InitiatorID")]
    pub initiator_id: String,

    /// Only present in the outgoing queue; used to fetch the service data.
    #[serde(rename = "PublisherURL", default, skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,

    #[serde(rename = "ApplicationTime")]
    pub application_time: String,

    /// Not meaningful while the status is pending.
    #[serde(rename = "ProcessTime", default)]
    pub process_time: Option<String>,

    #[serde(rename = "Status")]
    pub status: ApplicationStatus,
}

impl Application {
    pub fn key(&self) -> ApplicationKey {
        ApplicationKey {
            service_id: self.service_id.clone(),
            initiator_id: self.initiator_id.clone(),
            application_time: self.application_time.clone(),
        }
    }

    /// Process time as shown to users. Pending applications always read
    /// `N/A`, whatever value the backend sent along.
    pub fn display_process_time(&self) -> &str {
        if self.status.is_pending() {
            return NOT_APPLICABLE;
        }
        self.process_time.as_deref().unwrap_or_default()
    }

    /// Builds the `/approve_application` body for `decision`, stamped with
    /// `process_time`. Fails if the application has already been decided.
    pub fn decide(
        &self,
        decision: Decision,
        process_time: impl Into<String>,
    ) -> Result<ApprovalRequest, TransitionError> {
        let status = self.status.apply(decision)?;
        Ok(ApprovalRequest {
            initiator_id: self.initiator_id.clone(),
            service_id: self.service_id.clone(),
            status,
            application_time: self.application_time.clone(),
            process_time: process_time.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    fn pending(service: &str, initiator: &str, time: &str) -> Application {
        Application {
            service_id: service.to_string(),
            service_name: "Weather".to_string(),
            initiator_id: initiator.to_string(),
            publisher_url: None,
            application_time: time.to_string(),
            process_time: None,
            status: ApplicationStatus::Pending,
        }
    }

    #[test]
    fn only_pending_can_be_decided() {
        for from in ALL {
            for decision in [Decision::Approve, Decision::Reject] {
                let result = from.apply(decision);
                if from.is_pending() {
                    assert_eq!(result, Ok(decision.target()));
                } else {
                    assert_eq!(result, Err(TransitionError { from, decision }));
                }
            }
        }
    }

    #[test]
    fn no_transition_returns_to_pending() {
        for from in ALL {
            for decision in [Decision::Approve, Decision::Reject] {
                if let Ok(to) = from.apply(decision) {
                    assert_ne!(to, ApplicationStatus::Pending);
                }
            }
        }
    }

    #[test]
    fn labels_cover_every_code() {
        let labels: Vec<_> = (0u8..=2)
            .map(|code| ApplicationStatus::try_from(code).unwrap().label())
            .collect();
        assert_eq!(labels, ["Pending", "Approved", "Rejected"]);
        assert_eq!(ApplicationStatus::try_from(3), Err(InvalidStatus(3)));
    }

    #[test]
    fn unknown_status_code_fails_to_decode() {
        let raw = json!({
            "ServiceID": "S1",
            "InitiatorID": "U1",
            "ApplicationTime": "t0",
            "Status": 7
        });
        assert!(serde_json::from_value::<Application>(raw).is_err());
    }

    #[test]
    fn pending_hides_stored_process_time() {
        let mut application = pending("S1", "U1", "t0");
        application.process_time = Some("2024-05-01 10:00".to_string());
        assert_eq!(application.display_process_time(), "N/A");

        application.status = ApplicationStatus::Approved;
        assert_eq!(application.display_process_time(), "2024-05-01 10:00");
    }

    #[test]
    fn approve_builds_request_with_identity_fields() {
        let application = pending("S1", "U1", "t0");
        let request = application.decide(Decision::Approve, "now").unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "InitiatorID": "U1",
                "ServiceID": "S1",
                "Status": 1,
                "ApplicationTime": "t0",
                "ProcessTime": "now"
            })
        );
    }

    #[test]
    fn reject_sets_status_two() {
        let application = pending("S1", "U1", "t0");
        let request = application.decide(Decision::Reject, "now").unwrap();
        assert_eq!(request.status.code(), 2);
    }

    #[test]
    fn decided_application_cannot_be_decided_again() {
        let mut application = pending("S1", "U1", "t0");
        application.status = ApplicationStatus::Rejected;
        let err = application.decide(Decision::Approve, "now").unwrap_err();
        assert_eq!(err.to_string(), "application is already Rejected; cannot approve");
    }

    #[test]
    fn repeat_requests_have_distinct_keys() {
        let first = pending("S1", "U1", "t0");
        let second = pending("S1", "U1", "t1");
        assert_ne!(first.key(), second.key());
        assert_eq!(first.key(), pending("S1", "U1", "t0").key());
    }
}
