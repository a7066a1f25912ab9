use common::error::HttpError;
use common::forms::ActivityField;
use common::model::activity::Activity;
use common::model::lead::Lead;
use common::view::activity_panel::ActivityPanel;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::ApiHandle;
use crate::components::helpers::{confirm, format_date, format_date_time, input_value};

#[derive(Properties, PartialEq)]
pub struct LeadDetailsProps {
    pub api: ApiHandle,
    pub lead: Lead,
}

pub enum Msg {
    Loaded(u64, Result<Vec<Activity>, HttpError>),
    Set(ActivityField, String),
    Add,
    Added(Result<Activity, HttpError>),
    Delete(i64),
    Deleted(Result<(), HttpError>),
}

/// Lead summary plus its activity log.
pub struct LeadDetails {
    panel: ActivityPanel,
}

impl LeadDetails {
    fn load(&mut self, ctx: &Context<Self>) {
        let seq = self.panel.begin_load();
        let lead_id = self.panel.lead_id();
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api.list_activities(lead_id).await;
            link.send_message(Msg::Loaded(seq, result));
        });
    }
}

impl Component for LeadDetails {
    type Message = Msg;
    type Properties = LeadDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            panel: ActivityPanel::new(ctx.props().lead.id),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.load(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lead.id != old_props.lead.id {
            self.panel.switch_lead(ctx.props().lead.id);
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(seq, result) => self.panel.apply_load(seq, result),
            Msg::Set(field, value) => {
                self.panel.form_mut().set(field, &value);
                true
            }
            Msg::Add => {
                if let Some(activity) = self.panel.prepare_add() {
                    let lead_id = self.panel.lead_id();
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.add_activity(lead_id, &activity).await;
                        link.send_message(Msg::Added(result));
                    });
                }
                true
            }
            Msg::Added(result) => {
                if self.panel.finish_add(result) {
                    self.load(ctx);
                }
                true
            }
            Msg::Delete(id) => {
                if confirm("Are you sure you want to delete this activity?") {
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.delete_activity(id).await;
                        link.send_message(Msg::Deleted(result));
                    });
                }
                false
            }
            Msg::Deleted(result) => {
                if self.panel.finish_delete(result) {
                    self.load(ctx);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let lead = &ctx.props().lead;
        let form = self.panel.form();
        let field = |field: ActivityField, kind: &'static str, placeholder: &'static str| {
            html! {
                <input
                    type={kind}
                    placeholder={placeholder}
                    value={form.value(field).to_string()}
                    oninput={link.callback(move |e: InputEvent| Msg::Set(field, input_value(e)))}
                />
            }
        };

        html! {
            <div class="lead-details">
                <dl>
                    <dt>{ "Email" }</dt><dd>{ lead.email.clone() }</dd>
                    <dt>{ "Phone" }</dt><dd>{ lead.phone.clone().unwrap_or_default() }</dd>
                    <dt>{ "Status" }</dt><dd>{ lead.status.to_string() }</dd>
                    <dt>{ "Priority" }</dt><dd>{ lead.priority.map(|p| p.to_string()).unwrap_or_default() }</dd>
                    <dt>{ "Created" }</dt><dd>{ format_date(lead.created_at.as_deref()) }</dd>
                    <dt>{ "Notes" }</dt><dd>{ lead.notes.clone().unwrap_or_default() }</dd>
                </dl>

                <h3>{ "Activities" }</h3>
                if let Some(error) = self.panel.error() {
                    <p class="error">{ error }</p>
                }
                if self.panel.loading() {
                    <p>{ "Loading activities..." }</p>
                } else if self.panel.activities().is_empty() {
                    <p>{ "No activities yet." }</p>
                }
                <ul class="activities">
                    { for self.panel.activities().iter().map(|activity| {
                        let id = activity.id;
                        html! {
                            <li key={id}>
                                <span class="kind">{ activity.kind.clone() }</span>
                                <span class="date">{ format_date_time(&activity.date) }</span>
                                <span>{ activity.description.clone() }</span>
                                <button onclick={link.callback(move |_| Msg::Delete(id))}>{ "Delete" }</button>
                            </li>
                        }
                    }) }
                </ul>

                <form class="activity-form" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Add
                })}>
                    if let Some(error) = form.error() {
                        <p class="error">{ error }</p>
                    }
                    { field(ActivityField::Description, "text", "Description") }
                    { field(ActivityField::Kind, "text", "Type (Call, Email, Meeting)") }
                    { field(ActivityField::Date, "datetime-local", "") }
                    <button type="submit" disabled={form.is_submitting()}>{ "Add Activity" }</button>
                </form>
            </div>
        }
    }
}
