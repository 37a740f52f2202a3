//! Publisher-side registration form, posted to `/put_service`.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::registry::messages::{FormField, Msg};
use crate::components::registry::state::{AddServiceForm, RegistryView};
use crate::overlay::modal::Modal;

pub fn add_service_dialog(form: &AddServiceForm, link: &Scope<RegistryView>) -> Html {
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitService
    });

    html! {
        <Modal on_close={link.callback(|()| Msg::CloseAddService)} title={Some("Add service".to_string())}>
            <form class="add-service-form" onsubmit={on_submit}>
                { text_input("Service name", FormField::ServiceName, &form.service_name, link) }
                <label>
                    { "Headers (one per line)" }
                    <textarea
                        rows="4"
                        value={form.headers.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            Msg::UpdateField(FormField::Headers, value)
                        })}
                    />
                </label>
                { text_input("Publisher URL", FormField::SellerUrl, &form.seller_url, link) }
                { text_input("Publisher public key", FormField::SellerPublicKey, &form.seller_public_key, link) }
                { text_input("Comment", FormField::Comment, &form.comment, link) }
                <button type="submit" class="button-style">{ "Submit" }</button>
            </form>
        </Modal>
    }
}

fn text_input(label: &'static str, field: FormField, value: &str, link: &Scope<RegistryView>) -> Html {
    html! {
        <label>
            { label }
            <input
                type="text"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateField(field, value)
                })}
            />
        </label>
    }
}
