use common::error::HttpError;
use common::forms::CredentialsForm;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::view::{credentials_form, CredentialsCallbacks};
use crate::app::{ApiHandle, Route};
use crate::components::helpers::{input_value, show_toast};

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub api: ApiHandle,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<(), HttpError>),
}

pub struct RegisterPage {
    form: CredentialsForm,
}

impl Component for RegisterPage {
    type Message = Msg;
    type Properties = RegisterPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CredentialsForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => self.form.set_username(&value),
            Msg::SetPassword(value) => self.form.set_password(&value),
            Msg::Submit => {
                if let Some(credentials) = self.form.prepare() {
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.register(&credentials).await;
                        link.send_message(Msg::Finished(result));
                    });
                }
            }
            Msg::Finished(result) => {
                if let Some(message) = self.form.finish_register(result) {
                    show_toast(message);
                    ctx.props().on_navigate.emit(Route::Login);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();
        let footer = html! {
            <p>
                { "Already registered? " }
                <a href="#" onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(Route::Login);
                })}>{ "Login" }</a>
            </p>
        };

        credentials_form(
            "Register",
            "Register",
            &self.form,
            CredentialsCallbacks {
                on_username: link.callback(|e: InputEvent| Msg::SetUsername(input_value(e))),
                on_password: link.callback(|e: InputEvent| Msg::SetPassword(input_value(e))),
                on_submit: link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                }),
            },
            footer,
        )
    }
}
