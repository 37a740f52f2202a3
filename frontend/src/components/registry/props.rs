//! Properties of the `RegistryView`.

use std::rc::Rc;

use common::config::ClientConfig;
use common::requests::FetchDataRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegistryProps {
    /// Backend location, injected by the `App` once the host config is loaded.
    pub config: Rc<ClientConfig>,

    /// Invoked with the row's service id and publisher URL when "View" is
    /// clicked. The `App` owns the data overlay.
    pub on_view_data: Callback<FetchDataRequest>,
}
