//! The protected lead management page: the lead form on top, the filterable
//! table below, and a details sheet with the activity log of one lead.

mod details;
mod form;
mod table;

use common::error::HttpError;
use common::model::lead::Lead;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::ApiHandle;
use crate::components::helpers::{confirm, show_toast};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use details::LeadDetails;
use form::LeadFormComponent;
use table::LeadsTable;

const DELETE_ERROR: &str = "Failed to delete lead.";

#[derive(Properties, PartialEq)]
pub struct LeadsPageProps {
    pub api: ApiHandle,
    pub search_debounce_ms: u64,
    pub on_logout: Callback<()>,
}

pub enum Msg {
    Edit(Lead),
    CancelEdit,
    Saved,
    Delete(i64),
    Deleted(i64, Result<(), HttpError>),
    ShowDetails(Lead),
    /// Sent by the sheet once it has slid out; carries the lead it showed.
    CloseDetails(i64),
    SessionRejected,
}

pub struct LeadsPage {
    /// Bumped to make the table reload.
    reload: u64,
    selected: Option<Lead>,
    details: Option<Lead>,
    details_ref: NodeRef,
}

impl Component for LeadsPage {
    type Message = Msg;
    type Properties = LeadsPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            reload: 0,
            selected: None,
            details: None,
            details_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(lead) => {
                self.selected = Some(lead);
                true
            }
            Msg::CancelEdit => {
                self.selected = None;
                true
            }
            Msg::Saved => {
                self.selected = None;
                self.reload += 1;
                true
            }
            Msg::Delete(id) => {
                if confirm("Are you sure you want to delete this lead?") {
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.delete_lead(id).await;
                        link.send_message(Msg::Deleted(id, result));
                    });
                }
                false
            }
            Msg::Deleted(id, Ok(())) => {
                if self.selected.as_ref().is_some_and(|lead| lead.id == id) {
                    self.selected = None;
                }
                if self.details.as_ref().is_some_and(|lead| lead.id == id) {
                    self.details = None;
                }
                self.reload += 1;
                true
            }
            Msg::Deleted(id, Err(err)) => {
                warn!("deleting lead {} failed: {}", id, err);
                if err.is_unauthorized() {
                    ctx.props().on_logout.emit(());
                } else {
                    show_toast(&err.user_message(DELETE_ERROR));
                }
                false
            }
            Msg::ShowDetails(lead) => {
                self.details = Some(lead);
                true
            }
            Msg::CloseDetails(id) => {
                if showing(self.details.as_ref(), id) {
                    self.details = None;
                    true
                } else {
                    false
                }
            }
            Msg::SessionRejected => {
                ctx.props().on_logout.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let on_logout = props.on_logout.clone();

        html! {
            <div class="leads-page">
                <header class="leads-header">
                    <h1>{ "Leads" }</h1>
                    <button onclick={Callback::from(move |_: MouseEvent| on_logout.emit(()))}>{ "Logout" }</button>
                </header>

                <LeadFormComponent
                    api={props.api.clone()}
                    lead={self.selected.clone()}
                    on_success={link.callback(|_| Msg::Saved)}
                    on_cancel={link.callback(|_| Msg::CancelEdit)}
                />

                <LeadsTable
                    api={props.api.clone()}
                    reload={self.reload}
                    search_debounce_ms={props.search_debounce_ms}
                    on_edit={link.callback(Msg::Edit)}
                    on_delete={link.callback(Msg::Delete)}
                    on_details={link.callback(Msg::ShowDetails)}
                    on_unauthorized={link.callback(|_| Msg::SessionRejected)}
                />

                if let Some(lead) = &self.details {
                    <YwMaterialTopSheet
                        node_ref={self.details_ref.clone()}
                        title={format!("Lead: {}", lead.name)}
                        on_close={link.callback({
                            let id = lead.id;
                            move |_| Msg::CloseDetails(id)
                        })}
                    >
                        <LeadDetails api={props.api.clone()} lead={lead.clone()} />
                    </YwMaterialTopSheet>
                }
            </div>
        }
    }
}

/// A close notice only applies to the lead the sheet still shows.
fn showing(details: Option<&Lead>, id: i64) -> bool {
    details.is_some_and(|lead| lead.id == id)
}
