//! View rendering for the registry.
//!
//! Header cells come from `SERVICE_COLUMNS`; each row shows the cells it
//! rendered when it was created, followed by its Apply and View controls.

use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::add_service::add_service_dialog;
use super::messages::Msg;
use super::state::{RegistryRow, RegistryView};
use crate::components::columns::{titles, SERVICE_COLUMNS};

pub fn view(component: &RegistryView, ctx: &Context<RegistryView>) -> Html {
    let link = ctx.link();

    html! {
        <section class="registry">
            <div class="toolbar">
                <button
                    class="button-style"
                    disabled={component.registration.is_pending()}
                    onclick={link.callback(|_| Msg::OpenAddService)}
                >
                    { "Add service" }
                </button>
            </div>
            <table id="servicesTable">
                <thead>
                    <tr>
                        { for titles(SERVICE_COLUMNS).map(|title| html! { <th>{ title }</th> }) }
                        <th>{ "Application" }</th>
                        <th>{ "Data" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.rows.iter().enumerate().map(|(index, row)| service_row(index, row, link)) }
                </tbody>
            </table>
            {
                if component.loaded && component.rows.is_empty() {
                    html! { <p class="empty">{ "No services published yet." }</p> }
                } else {
                    html! {}
                }
            }
            {
                match &component.form {
                    Some(form) => add_service_dialog(form, link),
                    None => html! {},
                }
            }
        </section>
    }
}

fn service_row(index: usize, row: &RegistryRow, link: &Scope<RegistryView>) -> Html {
    let apply = row.apply_control();
    let apply_class = if apply.disabled { "button-disabled" } else { "button-style" };

    html! {
        <tr>
            { for row.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
            <td>
                <button
                    class={apply_class}
                    disabled={apply.disabled}
                    onclick={link.callback(move |_| Msg::Apply(index))}
                >
                    { apply.label }
                </button>
            </td>
            <td>
                <button class="button-style" onclick={link.callback(move |_| Msg::ViewData(index))}>
                    { "View" }
                </button>
            </td>
        </tr>
    }
}
