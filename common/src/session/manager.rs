//! Owner of the authenticated flag.
//!
//! `SessionManager` is the only place where the session state changes. Views
//! read it through [`SessionManager::state`] or get notified through
//! [`SessionManager::subscribe`]; the token itself lives in the
//! [`SessionStore`] shared with the request dispatcher.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::info;

use super::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Startup state, before the store has been consulted.
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }

    pub fn is_loading(self) -> bool {
        self == SessionState::Unknown
    }
}

type Listener = Rc<dyn Fn(SessionState)>;
type Listeners = RefCell<Vec<(u64, Listener)>>;

pub struct SessionManager {
    store: Rc<dyn SessionStore>,
    state: Cell<SessionState>,
    listeners: Rc<Listeners>,
    next_listener_id: Cell<u64>,
}

impl SessionManager {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: Cell::new(SessionState::Unknown),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Seeds the state from the store. Only the first call while the state is
    /// still `Unknown` has an effect.
    pub fn initialize(&self) -> SessionState {
        if self.state() != SessionState::Unknown {
            return self.state();
        }
        let next = if self.store.get().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };
        self.transition(next);
        next
    }

    pub fn login(&self, token: &str) {
        self.store.set(token);
        info!("session started");
        self.transition(SessionState::Authenticated);
    }

    pub fn logout(&self) {
        self.store.clear();
        info!("session ended");
        self.transition(SessionState::Unauthenticated);
    }

    /// Registers `listener` for every later state change. The listener stays
    /// registered for as long as the returned [`Subscription`] is alive.
    pub fn subscribe(&self, listener: impl Fn(SessionState) + 'static) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn transition(&self, next: SessionState) {
        self.state.set(next);
        // Listeners may subscribe or drop subscriptions while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(next);
        }
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn manager_with(store: MemorySessionStore) -> (SessionManager, Rc<MemorySessionStore>) {
        let store = Rc::new(store);
        (SessionManager::new(store.clone()), store)
    }

    #[test]
    fn starts_unknown_and_loading() {
        let (manager, _) = manager_with(MemorySessionStore::new());
        assert_eq!(manager.state(), SessionState::Unknown);
        assert!(manager.loading());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn initialize_reads_the_store_once() {
        let (manager, store) = manager_with(MemorySessionStore::with_token("abc"));
        assert_eq!(manager.initialize(), SessionState::Authenticated);

        store.clear();
        assert_eq!(manager.initialize(), SessionState::Authenticated);
        assert!(!manager.loading());
    }

    #[test]
    fn initialize_without_token_is_unauthenticated() {
        let (manager, _) = manager_with(MemorySessionStore::new());
        assert_eq!(manager.initialize(), SessionState::Unauthenticated);
    }

    #[test]
    fn login_and_logout_persist_and_broadcast() {
        let (manager, store) = manager_with(MemorySessionStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = manager.subscribe(move |state| sink.borrow_mut().push(state));

        manager.initialize();
        manager.login("token-1");
        assert_eq!(store.get().as_deref(), Some("token-1"));
        assert!(manager.is_authenticated());

        manager.logout();
        assert_eq!(store.get(), None);
        assert_eq!(manager.state(), SessionState::Unauthenticated);

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionState::Unauthenticated,
                SessionState::Authenticated,
                SessionState::Unauthenticated,
            ]
        );
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let (manager, _) = manager_with(MemorySessionStore::new());
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let subscription = manager.subscribe(move |_| counter.set(counter.get() + 1));

        manager.login("t");
        drop(subscription);
        manager.logout();

        assert_eq!(count.get(), 1);
    }
}
