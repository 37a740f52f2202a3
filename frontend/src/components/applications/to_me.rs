use common::lifecycle::RequestState;
use common::model::application::{Application, ApplicationKey, Decision};
use gloo_console::{error, log};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::QueueProps;
use crate::api;
use crate::components::columns::{render_cells, titles, TO_ME_COLUMNS};
use crate::helpers::{now_timestamp, show_toast};

pub enum Msg {
    Load,
    Loaded(Vec<Application>),
    Decide(usize, Decision),
    DecisionFinished {
        index: usize,
        key: ApplicationKey,
        outcome: Result<(), String>,
    },
}

/// Incoming queue ("to me"): the publisher approves or rejects here.
pub struct ToMeView {
    rows: Vec<IncomingRow>,
    loaded: bool,
}

pub struct IncomingRow {
    pub application: Application,
    pub cells: Vec<String>,
    pub decision: RequestState,
}

impl IncomingRow {
    pub fn new(application: Application) -> Self {
        let cells = render_cells(TO_ME_COLUMNS, &application);
        Self {
            application,
            cells,
            decision: RequestState::Idle,
        }
    }

    /// Approve and Reject are live only for a pending application with no
    /// decision in flight. Both controls always share this state.
    pub fn controls_enabled(&self) -> bool {
        self.application.status.is_pending() && self.decision.can_submit()
    }
}

impl Component for ToMeView {
    type Message = Msg;
    type Properties = QueueProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            rows: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let config = ctx.props().config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::get_to_me(&config).await {
                        Ok(applications) => link.send_message(Msg::Loaded(applications)),
                        Err(e) => error!(format!("Loading incoming applications failed: {}", e)),
                    }
                });
                false
            }
            Msg::Loaded(applications) => {
                self.rows = applications.into_iter().map(IncomingRow::new).collect();
                self.loaded = true;
                true
            }
            Msg::Decide(index, decision) => self.decide(ctx, index, decision),
            Msg::DecisionFinished { index, key, outcome } => {
                let Some(row) = self.row_for(index, &key) else {
                    return false;
                };
                match outcome {
                    Ok(()) => {
                        row.decision.finish(Ok(()));
                        ctx.link().send_message(Msg::Load);
                    }
                    Err(message) => {
                        show_toast("The decision could not be submitted.");
                        row.decision.finish(Err(message));
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="to-me">
                <div class="toolbar">
                    <button class="button-style" onclick={link.callback(|_| Msg::Load)}>{ "Reload" }</button>
                </div>
                <table id="applicationTable">
                    <thead>
                        <tr>
                            { for titles(TO_ME_COLUMNS).map(|title| html! { <th>{ title }</th> }) }
                            <th>{ "Operation" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.rows.iter().enumerate().map(|(index, row)| incoming_row(index, row, link)) }
                    </tbody>
                </table>
                {
                    if self.loaded && self.rows.is_empty() {
                        html! { <p class="empty">{ "No applications to review." }</p> }
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

impl ToMeView {
    /// The row a finished decision belongs to. The key guards against the
    /// list having been reloaded while the request was in flight.
    fn row_for(&mut self, index: usize, key: &ApplicationKey) -> Option<&mut IncomingRow> {
        self.rows
            .get_mut(index)
            .filter(|row| row.application.key() == *key)
    }

    /// Disables the row's controls and posts the decision. A decision on an
    /// application that is no longer pending is logged and dropped.
    fn decide(&mut self, ctx: &Context<Self>, index: usize, decision: Decision) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        if !row.decision.can_submit() {
            return false;
        }

        let request = match row.application.decide(decision, now_timestamp()) {
            Ok(request) => request,
            Err(e) => {
                error!(format!("Refusing decision on {}: {}", row.application.service_id, e));
                return false;
            }
        };
        row.decision.begin();

        let key = row.application.key();
        let config = ctx.props().config.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = match api::approve_application(&config, &request).await {
                Ok(()) => {
                    log!(format!(
                        "Application of {} for {} marked {}",
                        request.initiator_id, request.service_id, request.status
                    ));
                    Ok(())
                }
                Err(e) => {
                    error!(format!("Submitting decision failed: {}", e));
                    Err(e.to_string())
                }
            };
            link.send_message(Msg::DecisionFinished { index, key, outcome });
        });
        true
    }
}

fn incoming_row(index: usize, row: &IncomingRow, link: &Scope<ToMeView>) -> Html {
    let enabled = row.controls_enabled();
    let class = if enabled { "button-style" } else { "button-disabled" };

    html! {
        <tr>
            { for row.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
            <td class="operation">
                <div class="button-container">
                    <button
                        class={class}
                        disabled={!enabled}
                        onclick={link.callback(move |_| Msg::Decide(index, Decision::Approve))}
                    >
                        { Decision::Approve.label() }
                    </button>
                    <button
                        class={class}
                        disabled={!enabled}
                        onclick={link.callback(move |_| Msg::Decide(index, Decision::Reject))}
                    >
                        { Decision::Reject.label() }
                    </button>
                </div>
            </td>
        </tr>
    }
}
