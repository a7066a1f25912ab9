use common::forms::CredentialsForm;
use yew::prelude::*;

pub struct CredentialsCallbacks {
    pub on_username: Callback<InputEvent>,
    pub on_password: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,
}

pub fn credentials_form(
    title: &str,
    submit_label: &str,
    form: &CredentialsForm,
    callbacks: CredentialsCallbacks,
    footer: Html,
) -> Html {
    html! {
        <div class="auth-page">
            <h2>{ title }</h2>
            if let Some(error) = form.error() {
                <p class="error">{ error }</p>
            }
            <form onsubmit={callbacks.on_submit}>
                <label>
                    { "Username" }
                    <input
                        type="text"
                        value={form.username().to_string()}
                        oninput={callbacks.on_username}
                    />
                </label>
                <label>
                    { "Password" }
                    <input
                        type="password"
                        value={form.password().to_string()}
                        oninput={callbacks.on_password}
                    />
                </label>
                <button type="submit" disabled={form.is_submitting()}>{ submit_label }</button>
            </form>
            { footer }
        </div>
    }
}
