use common::session::{guard, GuardDecision, SessionState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub state: SessionState,
    /// Fired after a render that found no session.
    pub on_redirect: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only for an authenticated session.
pub struct ProtectedRoute;

impl Component for ProtectedRoute {
    type Message = ();
    type Properties = ProtectedRouteProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match guard(ctx.props().state) {
            GuardDecision::Pending => html! { <div class="loading">{ "Loading..." }</div> },
            GuardDecision::Render => ctx.props().children.clone(),
            GuardDecision::RedirectToLogin => html! {},
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if guard(ctx.props().state) == GuardDecision::RedirectToLogin {
            ctx.props().on_redirect.emit(());
        }
    }
}
