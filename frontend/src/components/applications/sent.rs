use common::model::application::Application;
use common::requests::FetchDataRequest;
use gloo_console::{error, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::QueueProps;
use crate::api;
use crate::components::columns::{render_cells, titles, SENT_COLUMNS};

pub enum Msg {
    Load,
    Loaded(Vec<Application>),
    ViewData(usize),
}

/// Outgoing queue ("sent").
pub struct SentView {
    applications: Vec<Application>,
    loaded: bool,
}

impl Component for SentView {
    type Message = Msg;
    type Properties = QueueProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            applications: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let config = ctx.props().config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::get_send_out(&config).await {
                        Ok(applications) => link.send_message(Msg::Loaded(applications)),
                        Err(e) => error!(format!("Loading sent applications failed: {}", e)),
                    }
                });
                false
            }
            Msg::Loaded(applications) => {
                self.applications = applications;
                self.loaded = true;
                true
            }
            Msg::ViewData(index) => {
                // Offered whatever the status; the backend decides whether a
                // pending or rejected application may read the data.
                if let Some(application) = self.applications.get(index) {
                    if application.publisher_url.is_none() {
                        warn!(format!("No PublisherURL listed for {}", application.service_id));
                    }
                    ctx.props().on_view_data.emit(fetch_request(application));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="sent">
                <div class="toolbar">
                    <button class="button-style" onclick={link.callback(|_| Msg::Load)}>{ "Reload" }</button>
                </div>
                <table id="applicationTable">
                    <thead>
                        <tr>
                            { for titles(SENT_COLUMNS).map(|title| html! { <th>{ title }</th> }) }
                            <th>{ "Operation" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.applications.iter().enumerate().map(|(index, application)| html! {
                            <tr>
                                { for render_cells(SENT_COLUMNS, application).into_iter().map(|cell| html! { <td>{ cell }</td> }) }
                                <td>
                                    <button class="button-style" onclick={link.callback(move |_| Msg::ViewData(index))}>
                                        { "ViewData" }
                                    </button>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                {
                    if self.loaded && self.applications.is_empty() {
                        html! { <p class="empty">{ "No applications sent." }</p> }
                    } else {
                        html! {}
                    }
                }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}

fn fetch_request(application: &Application) -> FetchDataRequest {
    match &application.publisher_url {
        Some(url) => FetchDataRequest::new(application.service_id.clone(), url.clone()),
        None => FetchDataRequest::without_publisher(application.service_id.clone()),
    }
}
