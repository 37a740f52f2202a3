use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Dismissible overlay.
///
/// The backdrop covers the page; clicking it or the close control emits
/// `on_close`. Clicks inside the content region never reach the backdrop.
/// There is no other way to dismiss it (no escape key, no timeout).
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<String>,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
        let on_close_button = props.on_close.reform(|_: MouseEvent| ());
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal" onclick={on_backdrop}>
                <div class="modal-content" onclick={keep_open}>
                    <span class="close" title="Close" onclick={on_close_button}>{ "×" }</span>
                    {
                        if let Some(title) = &props.title {
                            html! { <h3>{ title.clone() }</h3> }
                        } else {
                            html! {}
                        }
                    }
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
