//! The two application queues.
//!
//! - `sent`: applications this party sent out, read-only, with a ViewData
//!   action per row.
//! - `to_me`: applications addressed to this party as publisher, with
//!   Approve and Reject controls on pending rows.
//!
//! Both views replace their rows on every load; a successful decision in the
//! incoming queue reloads it from the backend instead of patching the row.

use std::rc::Rc;

use common::config::ClientConfig;
use common::requests::FetchDataRequest;
use yew::prelude::*;

pub mod sent;
pub mod to_me;

#[derive(Properties, PartialEq, Clone)]
pub struct QueueProps {
    pub config: Rc<ClientConfig>,
    #[prop_or_default]
    pub on_view_data: Callback<FetchDataRequest>,
}
