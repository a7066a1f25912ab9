use common::error::HttpError;
use common::forms::{LeadField, LeadForm};
use common::model::lead::{Lead, LeadStatus, Priority};
use strum::IntoEnumIterator;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::ApiHandle;
use crate::components::helpers::{input_value, select_value, show_toast, textarea_value};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub api: ApiHandle,
    /// Lead being edited; `None` puts the form in create mode.
    #[prop_or_default]
    pub lead: Option<Lead>,
    pub on_success: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    Set(LeadField, String),
    Submit,
    Finished(Result<Lead, HttpError>),
}

pub struct LeadFormComponent {
    form: LeadForm,
}

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::from_lead(ctx.props().lead.as_ref()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lead != old_props.lead {
            self.form = LeadForm::from_lead(ctx.props().lead.as_ref());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => self.form.set(field, &value),
            Msg::Submit => {
                if let Some(payload) = self.form.prepare() {
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.save_lead(&payload).await;
                        link.send_message(Msg::Finished(result));
                    });
                }
            }
            Msg::Finished(result) => {
                if let Some(message) = self.form.finish(result) {
                    show_toast(message);
                    self.form = LeadForm::new();
                    ctx.props().on_success.emit(());
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text = |field: LeadField, kind: &'static str| {
            html! {
                <input
                    type={kind}
                    value={self.form.value(field)}
                    oninput={link.callback(move |e: InputEvent| Msg::Set(field, input_value(e)))}
                />
            }
        };
        let status = self.form.value(LeadField::Status);
        let priority = self.form.value(LeadField::Priority);
        let on_cancel = ctx.props().on_cancel.clone();

        html! {
            <div class="lead-form">
                <h2>{ self.form.title() }</h2>
                if let Some(error) = self.form.error() {
                    <p class="error">{ error }</p>
                }
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label>{ "Name" }{ text(LeadField::Name, "text") }</label>
                    <label>{ "Email" }{ text(LeadField::Email, "email") }</label>
                    <label>{ "Phone" }{ text(LeadField::Phone, "tel") }</label>
                    <label>
                        { "Status" }
                        <select onchange={link.callback(|e: Event| Msg::Set(LeadField::Status, select_value(e)))}>
                            { for LeadStatus::iter().map(|s| html! {
                                <option value={s.to_string()} selected={status == s.as_ref()}>{ s.to_string() }</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        { "Priority" }
                        <select onchange={link.callback(|e: Event| Msg::Set(LeadField::Priority, select_value(e)))}>
                            <option value="" selected={priority.is_empty()}>{ "None" }</option>
                            { for Priority::iter().map(|p| html! {
                                <option value={p.to_string()} selected={priority == p.as_ref()}>{ p.to_string() }</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        { "Notes" }
                        <textarea
                            value={self.form.value(LeadField::Notes)}
                            oninput={link.callback(|e: InputEvent| Msg::Set(LeadField::Notes, textarea_value(e)))}
                        />
                    </label>
                    <button type="submit" disabled={self.form.is_submitting()}>{ self.form.submit_label() }</button>
                    if self.form.is_edit() {
                        <button type="button" onclick={Callback::from(move |_: MouseEvent| on_cancel.emit(()))}>{ "Cancel" }</button>
                    }
                </form>
            </div>
        }
    }
}
