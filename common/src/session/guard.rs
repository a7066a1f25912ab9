use super::SessionState;

/// What a protected view should do for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The initial check has not run yet; show a neutral placeholder.
    Pending,
    Render,
    RedirectToLogin,
}

pub fn guard(state: SessionState) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Pending,
        SessionState::Authenticated => GuardDecision::Render,
        SessionState::Unauthenticated => GuardDecision::RedirectToLogin,
    }
}
