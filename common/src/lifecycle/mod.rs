//! Client-side state of an outbound request attached to a table row.
//!
//! A row's control is disabled as soon as its request is issued and is only
//! re-enabled when the request fails, which both reflects the submission
//! immediately and suppresses duplicate clicks.

/// Lifecycle of one outbound request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Submitted, waiting for the backend.
    Pending,
    /// The backend accepted the request.
    Succeeded,
    /// The request failed. Contains the logged error message.
    Failed(String),
}

impl RequestState {
    /// Whether a new submission may be issued from this state.
    pub fn can_submit(&self) -> bool {
        matches!(self, RequestState::Idle | RequestState::Failed(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Marks the request as issued. Returns `false` and leaves the state
    /// untouched if a submission is not allowed right now.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        *self = RequestState::Pending;
        true
    }

    /// Records the outcome of a pending request. Outcomes arriving for a
    /// request that is not pending are ignored.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_pending() {
            return;
        }
        *self = match outcome {
            Ok(()) => RequestState::Succeeded,
            Err(message) => RequestState::Failed(message),
        };
    }
}
