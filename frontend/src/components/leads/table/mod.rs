//! Lead table: sort and filter controls, the debounced name search and the
//! rows themselves.
//!
//! The table owns a `LeadListViewModel`; every control change or reload
//! yields a fetch ticket, and `update::fetch` runs it and reports back with
//! the ticket's sequence number so late responses are dropped.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadsTableProps;
pub use state::LeadsTable;

impl Component for LeadsTable {
    type Message = Msg;
    type Properties = LeadsTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        LeadsTable::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().reload != old_props.reload {
            if let Some(ticket) = self.list.set_reload_token(ctx.props().reload) {
                update::fetch(ctx, ticket);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let ticket = self.list.start();
            update::fetch(ctx, ticket);
        }
    }
}
