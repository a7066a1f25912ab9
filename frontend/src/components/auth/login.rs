use common::error::HttpError;
use common::forms::CredentialsForm;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::view::{credentials_form, CredentialsCallbacks};
use crate::app::{ApiHandle, Route};
use crate::components::helpers::input_value;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api: ApiHandle,
    /// Receives the session token of a successful login.
    pub on_login: Callback<String>,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<String, HttpError>),
}

pub struct LoginPage {
    form: CredentialsForm,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginPageProps;

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
                        let result = api.login(&credentials).await;
                        link.send_message(Msg::Finished(result));
                    });
                }
            }
            Msg::Finished(result) => {
                if let Some(token) = self.form.finish_login(result) {
                    ctx.props().on_login.emit(token);
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
                { "No account yet? " }
                <a href="#" onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(Route::Register);
                })}>{ "Register" }</a>
            </p>
        };

        credentials_form(
            "Login",
            "Login",
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
