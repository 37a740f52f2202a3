//! Registry view: lists published services and turns a row into an
//! outbound application.
//!
//! Wires the Yew `Component` implementation to the submodules for state,
//! update logic and view rendering. The service list is requested once,
//! after the first render.

use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistryProps;
pub use state::RegistryView;

impl Component for RegistryView {
    type Message = Msg;
    type Properties = RegistryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RegistryView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
