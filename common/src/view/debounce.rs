/// A cancellable quiet-period timer.
///
/// Time is passed in by the caller as milliseconds, so the owner decides
/// where the clock comes from (`Date.now()` in the browser, plain numbers in
/// tests). Restarting replaces the pending value and pushes the deadline out;
/// only the latest value can ever be released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer<T> {
    window_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> DebounceTimer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Arms the timer with `value`, dropping whatever was pending. Returns the
    /// new deadline.
    pub fn restart(&mut self, value: T, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(self.window_ms);
        self.pending = Some((value, deadline));
        deadline
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending value once its deadline has been reached.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now_ms >= deadline => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_only_after_the_quiet_window() {
        let mut timer = DebounceTimer::new(800);
        assert_eq!(timer.restart("a", 0), 800);

        assert_eq!(timer.poll(799), None);
        assert_eq!(timer.poll(800), Some("a"));
        assert_eq!(timer.poll(5_000), None);
    }

    #[test]
    fn restart_cancels_the_previous_value() {
        let mut timer = DebounceTimer::new(800);
        timer.restart("J", 0);
        timer.restart("Jo", 500);

        assert_eq!(timer.poll(900), None);
        assert_eq!(timer.deadline(), Some(1_300));
        assert_eq!(timer.poll(1_300), Some("Jo"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut timer = DebounceTimer::new(10);
        timer.restart(1, 0);
        assert_eq!(timer.cancel(), Some(1));
        assert_eq!(timer.poll(100), None);
    }
}
