//! Data retrieval: fetches a service's payload through the backend and shows
//! it as a generic table in an overlay.
//!
//! Fetching never caches. Any failure (transport, status, outer or inner
//! decoding, shape validation) yields an error and no table, so the caller
//! never opens an overlay with partial data.

use common::config::ClientConfig;
use common::requests::FetchDataRequest;
use common::responses::FetchDataResponse;
use common::table::{DataTable, TableError};
use thiserror::Error;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::overlay::modal::Modal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unusable /fetch_data payload: {0}")]
    Payload(#[from] TableError),
}

pub async fn fetch_table(
    config: &ClientConfig,
    request: &FetchDataRequest,
) -> Result<DataTable, GateError> {
    table_from(api::fetch_data(config, request).await)
}

/// Second half of [`fetch_table`]: validates the answer of `/fetch_data`.
pub fn table_from(response: Result<FetchDataResponse, ApiError>) -> Result<DataTable, GateError> {
    let envelope = response?;
    Ok(DataTable::from_envelope(&envelope)?)
}

/// Overlay presenting a decoded table for `service_id`.
pub fn data_overlay(service_id: &str, table: &DataTable, on_close: Callback<()>) -> Html {
    html! {
        <Modal on_close={on_close} title={Some(format!("Data of {}", service_id))}>
            { data_table(table) }
        </Modal>
    }
}

fn data_table(table: &DataTable) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for table.header.iter().map(|key| html! { <th>{ key.clone() }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    if table.is_empty() {
                        html! { <tr><td class="empty">{ "No records" }</td></tr> }
                    } else {
                        html! {
                            <>
                                { for table.rows.iter().map(|row| html! {
                                    <tr>
                                        { for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                                    </tr>
                                }) }
                            </>
                        }
                    }
                }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(data: &str) -> Result<FetchDataResponse, ApiError> {
        Ok(FetchDataResponse { data: data.to_string() })
    }

    #[test]
    fn api_errors_pass_through() {
        let status = ApiError::Status { path: "/fetch_data", status: 403 };
        assert_eq!(table_from(Err(status.clone())), Err(GateError::Api(status)));
    }

    #[test]
    fn malformed_payloads_fail_closed() {
        assert!(matches!(table_from(envelope("not json")), Err(GateError::Payload(_))));
        assert_eq!(
            table_from(envelope(r#"{"a": 1}"#)),
            Err(GateError::Payload(TableError::NotAnArray))
        );
    }

    #[test]
    fn record_list_becomes_table() {
        let table = table_from(envelope(r#"[{"a": 1, "b": "x"}]"#)).unwrap();
        assert_eq!(table.header, ["a", "b"]);
        assert_eq!(table.rows, [["1", "x"]]);
    }
}
