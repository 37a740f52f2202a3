//! Typed column layouts for the registry and the two application queues.
//!
//! A table is an ordered slice of [`Column`]s, each pairing a header with the
//! function that renders one record field. Headers and cells are both produced
//! from the same slice, so a column's position is decided in one place.

use common::model::application::Application;
use common::model::service::Service;

pub struct Column<R> {
    pub title: &'static str,
    pub render: fn(&R) -> String,
}

impl<R> Column<R> {
    pub fn cell(&self, record: &R) -> String {
        (self.render)(record)
    }
}

pub fn render_cells<R>(columns: &[Column<R>], record: &R) -> Vec<String> {
    columns.iter().map(|column| column.cell(record)).collect()
}

pub fn titles<R>(columns: &[Column<R>]) -> impl Iterator<Item = &'static str> + '_ {
    columns.iter().map(|column| column.title)
}

pub const SERVICE_COLUMNS: &[Column<Service>] = &[
    Column { title: "ServiceName", render: service_name },
    Column { title: "ServiceID", render: service_id },
    Column { title: "PublisherURL", render: publisher_url },
    Column { title: "PublisherPublicKey", render: publisher_public_key },
    Column { title: "Comment", render: comment },
    Column { title: "TransactionHash", render: transaction_hash },
];

pub const SENT_COLUMNS: &[Column<Application>] = &[
    Column { title: "ServiceName", render: application_service_name },
    Column { title: "ServiceID", render: application_service_id },
    Column { title: "InitiatorID", render: initiator_id },
    Column { title: "ApplicationTime", render: application_time },
    Column { title: "ProcessTime", render: process_time },
    Column { title: "Status", render: status },
];

/// The incoming queue has no process-time column; a pending row has none
/// and a decided row can no longer be acted on.
pub const TO_ME_COLUMNS: &[Column<Application>] = &[
    Column { title: "ServiceName", render: application_service_name },
    Column { title: "ServiceID", render: application_service_id },
    Column { title: "InitiatorID", render: initiator_id },
    Column { title: "ApplicationTime", render: application_time },
    Column { title: "Status", render: status },
];

pub fn service_name(service: &Service) -> String {
    service.service_name.clone()
}

pub fn service_id(service: &Service) -> String {
    service.service_id.clone()
}

pub fn publisher_url(service: &Service) -> String {
    service.publisher_url.clone()
}

pub fn publisher_public_key(service: &Service) -> String {
    service.display_public_key()
}

pub fn comment(service: &Service) -> String {
    service.comment.clone()
}

pub fn transaction_hash(service: &Service) -> String {
    service.display_transaction_hash().to_string()
}

fn application_service_name(application: &Application) -> String {
    application.service_name.clone()
}

fn application_service_id(application: &Application) -> String {
    application.service_id.clone()
}

fn initiator_id(application: &Application) -> String {
    application.initiator_id.clone()
}

fn application_time(application: &Application) -> String {
    application.application_time.clone()
}

fn process_time(application: &Application) -> String {
    application.display_process_time().to_string()
}

fn status(application: &Application) -> String {
    application.status.label().to_string()
}
