//! State of the registry view: one row per loaded service plus the optional
//! add-service form.
//!
//! Rows are only ever appended. Loading the same list twice yields two row
//! sets; there is no de-duplication by service id.

use common::lifecycle::RequestState;
use common::model::service::Service;
use common::requests::{FetchDataRequest, ForwardApplicationRequest, PutServiceRequest};

use super::messages::FormField;
use crate::components::columns::{self, render_cells, SERVICE_COLUMNS};

pub struct RegistryView {
    pub rows: Vec<RegistryRow>,

    /// Set once the first `/get_services` answer arrived.
    pub loaded: bool,

    /// `Some` while the add-service dialog is open.
    pub form: Option<AddServiceForm>,

    /// Lifecycle of the pending `/put_service` call, if any.
    pub registration: RequestState,
}

impl RegistryView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            loaded: false,
            form: None,
            registration: RequestState::Idle,
        }
    }

    pub fn append_services(&mut self, services: Vec<Service>) {
        self.rows.extend(services.into_iter().map(RegistryRow::new));
    }
}

/// Label and enablement of a row's Apply button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyControl {
    pub label: &'static str,
    pub disabled: bool,
}

pub struct RegistryRow {
    pub service: Service,
    /// Rendered once through `SERVICE_COLUMNS` when the row is created.
    pub cells: Vec<String>,
    pub apply: RequestState,
}

impl RegistryRow {
    pub fn new(service: Service) -> Self {
        let cells = render_cells(SERVICE_COLUMNS, &service);
        Self {
            service,
            cells,
            apply: RequestState::Idle,
        }
    }

    pub fn can_apply(&self) -> bool {
        !self.service.approved && self.apply.can_submit()
    }

    pub fn apply_control(&self) -> ApplyControl {
        if self.service.approved {
            return ApplyControl { label: "Approved", disabled: true };
        }
        match self.apply {
            RequestState::Idle | RequestState::Failed(_) => ApplyControl { label: "Apply", disabled: false },
            RequestState::Pending => ApplyControl { label: "Applying…", disabled: true },
            RequestState::Succeeded => ApplyControl { label: "Applied", disabled: true },
        }
    }

    /// Packages the displayed row into a `/forward_application` body. The
    /// public key is the one value sent in full rather than as displayed.
    pub fn forward_request(&self, application_time: String) -> ForwardApplicationRequest {
        let service = &self.service;
        ForwardApplicationRequest {
            service_name: columns::service_name(service),
            service_id: columns::service_id(service),
            publisher_url: columns::publisher_url(service),
            publisher_public_key: service.publisher_public_key.clone(),
            comment: columns::comment(service),
            transaction_hash: columns::transaction_hash(service),
            application_time,
        }
    }

    pub fn fetch_request(&self) -> FetchDataRequest {
        FetchDataRequest::from(&self.service)
    }
}

/// Raw input of the add-service dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddServiceForm {
    pub service_name: String,
    /// One column header per line.
    pub headers: String,
    pub seller_url: String,
    pub seller_public_key: String,
    pub comment: String,
}

impl AddServiceForm {
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ServiceName => &mut self.service_name,
            FormField::Headers => &mut self.headers,
            FormField::SellerUrl => &mut self.seller_url,
            FormField::SellerPublicKey => &mut self.seller_public_key,
            FormField::Comment => &mut self.comment,
        };
        *slot = value;
    }

    /// First required input left blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("Service name", &self.service_name),
            ("Publisher URL", &self.seller_url),
            ("Publisher public key", &self.seller_public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }

    pub fn to_request(&self) -> PutServiceRequest {
        PutServiceRequest::new(
            &self.service_name,
            &self.headers,
            &self.seller_url,
            &self.seller_public_key,
            &self.comment,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str) -> Service {
        Service {
            service_id: id.to_string(),
            service_name: "Weather".to_string(),
            publisher_url: "http://seller1.example.com".to_string(),
            publisher_public_key: "abcdefghij1234567890".to_string(),
            comment: "hourly".to_string(),
            transaction_hash: None,
            approved: false,
        }
    }

    #[test]
    fn loading_twice_appends_two_row_sets() {
        let mut view = RegistryView::new();
        let services = vec![service("ID001"), service("ID002")];
        view.append_services(services.clone());
        view.append_services(services);

        let ids: Vec<_> = view.rows.iter().map(|row| row.service.service_id.as_str()).collect();
        assert_eq!(ids, ["ID001", "ID002", "ID001", "ID002"]);
    }

    #[test]
    fn forward_request_sends_full_key_and_displayed_hash() {
        let row = RegistryRow::new(service("ID001"));
        assert_eq!(row.cells[3], "abcde...67890");

        let request = row.forward_request("2024-05-01T10:00:00.000Z".to_string());
        assert_eq!(request.publisher_public_key, "abcdefghij1234567890");
        assert_eq!(request.transaction_hash, "Pending");
        assert_eq!(request.service_id, "ID001");
        assert_eq!(request.application_time, "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn approved_flag_locks_the_apply_button() {
        let mut approved = service("ID001");
        approved.approved = true;
        let row = RegistryRow::new(approved);

        assert_eq!(row.apply_control(), ApplyControl { label: "Approved", disabled: true });
        assert!(!row.can_apply());
    }

    #[test]
    fn apply_button_follows_request_lifecycle() {
        let mut row = RegistryRow::new(service("ID001"));
        assert!(!row.apply_control().disabled);

        assert!(row.apply.begin());
        assert!(row.apply_control().disabled, "disabled as soon as the click is handled");
        assert!(!row.can_apply());

        row.apply.finish(Err("status 502".to_string()));
        assert_eq!(row.apply_control(), ApplyControl { label: "Apply", disabled: false });

        row.apply.begin();
        row.apply.finish(Ok(()));
        assert_eq!(row.apply_control(), ApplyControl { label: "Applied", disabled: true });
    }

    #[test]
    fn form_reports_first_missing_field() {
        let mut form = AddServiceForm::default();
        assert_eq!(form.missing_field(), Some("Service name"));

        form.set(FormField::ServiceName, "Weather".to_string());
        form.set(FormField::SellerUrl, "http://seller".to_string());
        assert_eq!(form.missing_field(), Some("Publisher public key"));

        form.set(FormField::SellerPublicKey, "key".to_string());
        assert_eq!(form.missing_field(), None);
    }

    #[test]
    fn form_builds_registration_request() {
        let mut form = AddServiceForm::default();
        form.set(FormField::ServiceName, "Weather".to_string());
        form.set(FormField::Headers, "temp\nhumidity".to_string());
        form.set(FormField::SellerUrl, "http://seller".to_string());
        form.set(FormField::SellerPublicKey, "key".to_string());

        let request = form.to_request();
        assert_eq!(request.header_num, 2);
        assert_eq!(request.seller_url, "http://seller");
    }
}
