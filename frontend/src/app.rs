//! Application shell: owns the session, the API client and the current route.

use std::ops::Deref;
use std::rc::Rc;

use common::api::{Dispatcher, LeadsApi};
use common::config::ClientConfig;
use common::session::{SessionManager, SessionState, SessionStore, Subscription};
use log::{info, warn};
use wasm_bindgen::JsValue;
use yew::{html, Callback, Component, Context, Html};

use crate::components::auth::{LoginPage, RegisterPage};
use crate::components::leads::LeadsPage;
use crate::components::protected_route::ProtectedRoute;
use crate::platform::{BrowserSessionStore, GlooTransport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Leads,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Leads => "/leads",
        }
    }

    /// Unknown paths land on the lead list, which is protected.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            _ => Route::Leads,
        }
    }
}

/// Shared handle on the API client, compared by identity so it can travel
/// in component properties.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<LeadsApi>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = LeadsApi;

    fn deref(&self) -> &LeadsApi {
        &self.0
    }
}

pub enum Msg {
    SessionChanged(SessionState),
    Navigate(Route),
    LoggedIn(String),
    Logout,
}

pub struct App {
    config: ClientConfig,
    session: Rc<SessionManager>,
    api: ApiHandle,
    state: SessionState,
    route: Route,
    _subscription: Subscription,
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Leads)
}

fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if history
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
        .is_err()
    {
        warn!("could not update the address bar for {}", route.path());
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ClientConfig::default().with_api_base_url(option_env!("LEADS_API_URL"));
        info!("using API at {}", config.api_base_url);

        let store: Rc<dyn SessionStore> = Rc::new(BrowserSessionStore::new(&config.session_key));
        let session = Rc::new(SessionManager::new(store.clone()));
        let dispatcher = Dispatcher::new(config.api_base_url.clone(), store, Rc::new(GlooTransport));

        let link = ctx.link().clone();
        let subscription = session.subscribe(move |state| {
            link.send_message(Msg::SessionChanged(state));
        });

        Self {
            state: session.state(),
            config,
            session,
            api: ApiHandle(Rc::new(LeadsApi::new(dispatcher))),
            route: current_route(),
            _subscription: subscription,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.session.initialize();
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(state) => {
                self.state = state;
                true
            }
            Msg::Navigate(route) => {
                if self.route != route {
                    push_history(route);
                    self.route = route;
                }
                true
            }
            Msg::LoggedIn(token) => {
                self.session.login(&token);
                push_history(Route::Leads);
                self.route = Route::Leads;
                true
            }
            Msg::Logout => {
                self.session.logout();
                push_history(Route::Login);
                self.route = Route::Login;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate: Callback<Route> = link.callback(Msg::Navigate);

        match self.route {
            Route::Login => html! {
                <LoginPage
                    api={self.api.clone()}
                    on_login={link.callback(Msg::LoggedIn)}
                    on_navigate={on_navigate}
                />
            },
            Route::Register => html! {
                <RegisterPage api={self.api.clone()} on_navigate={on_navigate} />
            },
            Route::Leads => html! {
                <ProtectedRoute
                    state={self.state}
                    on_redirect={link.callback(|_| Msg::Navigate(Route::Login))}
                >
                    <LeadsPage
                        api={self.api.clone()}
                        search_debounce_ms={self.config.search_debounce_ms}
                        on_logout={link.callback(|_| Msg::Logout)}
                    />
                </ProtectedRoute>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/register/"), Route::Register);
        assert_eq!(Route::from_path("/leads"), Route::Leads);
        assert_eq!(Route::from_path("/"), Route::Leads);
        assert_eq!(Route::from_path("/somewhere"), Route::Leads);
    }

    #[test]
    fn route_paths_round_trip() {
        for route in [Route::Login, Route::Register, Route::Leads] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
