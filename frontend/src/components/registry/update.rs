//! Update function for the registry view.
//!
//! Network calls are spawned with `spawn_local` and report back through
//! messages; the row or form they belong to tracks the call in a
//! `RequestState`, so a control is disabled from the click until the backend
//! answers and comes back only if the call failed.

use common::model::service::Service;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AddServiceForm, RegistryRow, RegistryView};
use crate::api;
use crate::helpers::{now_timestamp, show_toast};

pub fn update(component: &mut RegistryView, ctx: &Context<RegistryView>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_services(&config).await {
                    Ok(services) => link.send_message(Msg::ServicesLoaded(services)),
                    Err(e) => error!(format!("Loading services failed: {}", e)),
                }
            });
            false
        }
        Msg::ServicesLoaded(services) => {
            component.append_services(services);
            component.loaded = true;
            true
        }
        Msg::Apply(index) => {
            let Some(row) = component.rows.get_mut(index) else {
                return false;
            };
            if !row.can_apply() || !row.apply.begin() {
                return false;
            }

            let request = row.forward_request(now_timestamp());
            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = match api::forward_application(&config, &request).await {
                    Ok(()) => {
                        log!(format!("Forwarded application for {}", request.service_id));
                        Ok(())
                    }
                    Err(e) => {
                        error!(format!("Forwarding application failed: {}", e));
                        Err(e.to_string())
                    }
                };
                link.send_message(Msg::ApplyFinished { index, outcome });
            });
            true
        }
        Msg::ApplyFinished { index, outcome } => {
            let Some(row) = component.rows.get_mut(index) else {
                return false;
            };
            if outcome.is_err() {
                show_toast("The application could not be sent.");
            }
            row.apply.finish(outcome);
            true
        }
        Msg::ViewData(index) => {
            if let Some(row) = component.rows.get(index) {
                ctx.props().on_view_data.emit(row.fetch_request());
            }
            false
        }
        Msg::OpenAddService => {
            component.form = Some(AddServiceForm::default());
            true
        }
        Msg::CloseAddService => {
            component.form = None;
            true
        }
        Msg::UpdateField(field, value) => {
            if let Some(form) = component.form.as_mut() {
                form.set(field, value);
            }
            true
        }
        Msg::SubmitService => submit_service(component, ctx),
        Msg::ServiceRegistered(service) => {
            component.registration = Default::default();
            component.rows.push(RegistryRow::new(service));
            true
        }
        Msg::RegistrationFailed(message) => {
            component.registration.finish(Err(message));
            true
        }
    }
}

/// Validates the open form and posts it to `/put_service`. The dialog closes
/// once the request is issued; the new row shows up only when the backend
/// returns its identifiers.
fn submit_service(component: &mut RegistryView, ctx: &Context<RegistryView>) -> bool {
    let Some(form) = component.form.as_ref() else {
        return false;
    };
    if let Some(field) = form.missing_field() {
        show_toast(&format!("{} is required.", field));
        return false;
    }
    if !component.registration.begin() {
        return false;
    }

    let request = form.to_request();
    component.form = None;

    let config = ctx.props().config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::put_service(&config, &request).await {
            Ok(response) => {
                log!(format!(
                    "Registered service {} (transaction {})",
                    response.service_id, response.transaction_hash
                ));
                show_toast(&format!(
                    "Service added successfully. Transaction hash: {}",
                    response.transaction_hash
                ));
                link.send_message(Msg::ServiceRegistered(Service::from_registration(
                    &request, response,
                )));
            }
            Err(e) => {
                error!(format!("Registering service failed: {}", e));
                show_toast("Failed to add service.");
                link.send_message(Msg::RegistrationFailed(e.to_string()));
            }
        }
    });
    true
}
