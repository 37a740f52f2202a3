//! Root component.
//!
//! Loads the client configuration from the host before mounting any view, so
//! every view receives the backend origin through its props. Also owns the
//! data overlay: the registry and the sent queue only emit a fetch request,
//! and whichever fetch completes last is the one displayed.

use std::rc::Rc;

use common::config::ClientConfig;
use common::requests::FetchDataRequest;
use common::table::DataTable;
use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::applications::sent::SentView;
use crate::components::applications::to_me::ToMeView;
use crate::components::data_gate::{data_overlay, fetch_table, GateError};
use crate::components::registry::RegistryView;
use crate::helpers::show_toast;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Registry,
    Sent,
    ToMe,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Registry, Tab::Sent, Tab::ToMe];

    fn label(self) -> &'static str {
        match self {
            Tab::Registry => "Registry",
            Tab::Sent => "Sent",
            Tab::ToMe => "To me",
        }
    }
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    SetTab(Tab),
    ViewData(FetchDataRequest),
    DataLoaded { service_id: String, table: DataTable },
    CloseData,
}

pub struct App {
    config: Option<Rc<ClientConfig>>,
    active_tab: Tab,
    data: Option<(String, DataTable)>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: None,
            active_tab: Tab::Registry,
            data: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(Rc::new(config));
                true
            }
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::ViewData(request) => {
                let Some(config) = self.config.clone() else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let service_id = request.service_id.clone();
                    match data_loaded(service_id.clone(), fetch_table(&config, &request).await) {
                        Ok(msg) => link.send_message(msg),
                        Err(e) => {
                            error!(format!("Fetching data for {} failed: {}", service_id, e));
                            show_toast("The data could not be retrieved.");
                        }
                    }
                });
                false
            }
            Msg::DataLoaded { service_id, table } => {
                self.data = Some((service_id, table));
                true
            }
            Msg::CloseData => {
                self.data = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <nav class="tab-bar">
                    { for Tab::ALL.into_iter().map(|tab| html! {
                        <button
                            class={classes!("tab-btn", (tab == self.active_tab).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }) }
                </nav>
                {
                    match &self.config {
                        Some(config) => self.active_view(config, link),
                        None => html! { <p class="loading">{ "Loading…" }</p> },
                    }
                }
                {
                    match &self.data {
                        Some((service_id, table)) => {
                            data_overlay(service_id, table, link.callback(|_| Msg::CloseData))
                        }
                        None => html! {},
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = match api::load_client_config().await {
                    Ok(config) => config,
                    Err(e) => {
                        error!(format!("Loading client config failed, using page origin: {}", e));
                        ClientConfig::default()
                    }
                };
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}

/// Only a validated table opens the overlay; every failure stays an error.
fn data_loaded(service_id: String, result: Result<DataTable, GateError>) -> Result<Msg, GateError> {
    result.map(|table| Msg::DataLoaded { service_id, table })
}

impl App {
    fn active_view(&self, config: &Rc<ClientConfig>, link: &Scope<Self>) -> Html {
        let on_view_data = link.callback(Msg::ViewData);
        match self.active_tab {
            Tab::Registry => html! {
                <RegistryView config={config.clone()} on_view_data={on_view_data} />
            },
            Tab::Sent => html! {
                <SentView config={config.clone()} on_view_data={on_view_data} />
            },
            Tab::ToMe => html! {
                <ToMeView config={config.clone()} />
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use common::table::TableError;

    #[test]
    fn failed_fetch_never_opens_overlay() {
        let status = ApiError::Status { path: "/fetch_data", status: 500 };
        assert!(matches!(
            data_loaded("S1".to_string(), Err(GateError::Api(status))),
            Err(GateError::Api(ApiError::Status { status: 500, .. }))
        ));

        let decode = ApiError::Decode { path: "/fetch_data", message: "expected value".to_string() };
        assert!(data_loaded("S1".to_string(), Err(GateError::Api(decode))).is_err());

        let payload = GateError::Payload(TableError::NotAnArray);
        assert!(data_loaded("S1".to_string(), Err(payload)).is_err());
    }

    #[test]
    fn valid_table_opens_overlay_for_its_service() {
        let table = DataTable::decode(r#"[{"a": 1}]"#).unwrap();
        match data_loaded("S1".to_string(), Ok(table.clone())) {
            Ok(Msg::DataLoaded { service_id, table: loaded }) => {
                assert_eq!(service_id, "S1");
                assert_eq!(loaded, table);
            }
            _ => panic!("expected DataLoaded"),
        }
    }
}
