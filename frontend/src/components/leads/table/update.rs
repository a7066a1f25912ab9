//! Update function of the lead table.
//!
//! Control changes go through the view model, which decides whether a fetch
//! is needed. The search box is debounced: each keystroke moves the deadline,
//! and a single timer wakes up, commits the text when the deadline has passed
//! or sleeps again until the moved deadline.

use common::view::lead_list::{FetchOutcome, FetchTicket};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadsTable;
use crate::components::helpers::now_ms;

pub fn update(table: &mut LeadsTable, ctx: &Context<LeadsTable>, msg: Msg) -> bool {
    let ticket = match msg {
        Msg::SetSortBy(value) => value
            .parse()
            .ok()
            .and_then(|field| table.list.set_sort_by(field)),
        Msg::SetOrder(value) => value
            .parse()
            .ok()
            .and_then(|order| table.list.set_order(order)),
        Msg::SetStatus(value) => table.list.set_status_filter(value.parse().ok()),
        Msg::SetPriority(value) => table.list.set_priority_filter(value.parse().ok()),
        Msg::SearchInput(text) => {
            let now = now_ms();
            let deadline = table.list.input_search(text, now);
            if !table.search_timer_armed {
                table.search_timer_armed = true;
                wake_at(ctx, deadline.saturating_sub(now));
            }
            None
        }
        Msg::SearchQuiet => {
            table.search_timer_armed = false;
            let now = now_ms();
            let ticket = table.list.poll_search(now);
            if ticket.is_none() {
                if let Some(deadline) = table.list.search_deadline() {
                    table.search_timer_armed = true;
                    wake_at(ctx, deadline.saturating_sub(now));
                }
            }
            ticket
        }
        Msg::Loaded(seq, result) => {
            if table.list.apply(seq, result) == FetchOutcome::Unauthorized {
                ctx.props().on_unauthorized.emit(());
            }
            None
        }
    };

    if let Some(ticket) = ticket {
        fetch(ctx, ticket);
    }
    true
}

pub fn fetch(ctx: &Context<LeadsTable>, ticket: FetchTicket) {
    debug!("fetching leads #{}", ticket.seq);
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.list_leads(&ticket.query).await;
        link.send_message(Msg::Loaded(ticket.seq, result));
    });
}

fn wake_at(ctx: &Context<LeadsTable>, delay_ms: u64) {
    let link = ctx.link().clone();
    let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        link.send_message(Msg::SearchQuiet);
    });
}
