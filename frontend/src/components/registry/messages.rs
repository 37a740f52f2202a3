use common::model::service::Service;

/// Inputs of the add-service form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    ServiceName,
    Headers,
    SellerUrl,
    SellerPublicKey,
    Comment,
}

pub enum Msg {
    Load,
    ServicesLoaded(Vec<Service>),
    /// Apply to the service on the row at this index.
    Apply(usize),
    ApplyFinished {
        index: usize,
        outcome: Result<(), String>,
    },
    ViewData(usize),
    OpenAddService,
    CloseAddService,
    UpdateField(FormField, String),
    SubmitService,
    ServiceRegistered(Service),
    RegistrationFailed(String),
}
