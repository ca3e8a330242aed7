//! Delay services used to execute scheduled wizard actions.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc, time::Duration};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service that resolves after a delay.
///
/// Delays are not cancellable once requested.
pub trait TimerService {
    /// Resolves once `delay` has elapsed.
    fn sleep(&self, delay: Duration) -> TimerFuture<'_>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer that resolves immediately; for headless hosts that do not simulate latency.
pub struct ImmediateTimerService;

impl TimerService for ImmediateTimerService {
    fn sleep(&self, _delay: Duration) -> TimerFuture<'_> {
        Box::pin(async {})
    }
}

#[derive(Debug, Clone, Default)]
/// Timer that resolves immediately and records every requested delay.
pub struct MemoryTimerService {
    requested: Rc<RefCell<Vec<Duration>>>,
}

impl MemoryTimerService {
    /// Returns the requested delays, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }

    /// Sum of all requested delays.
    pub fn total_requested(&self) -> Duration {
        self.requested.borrow().iter().sum()
    }
}

impl TimerService for MemoryTimerService {
    fn sleep(&self, delay: Duration) -> TimerFuture<'_> {
        Box::pin(async move {
            self.requested.borrow_mut().push(delay);
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_timer_records_requested_delays() {
        let timers = MemoryTimerService::default();
        let timers_obj: &dyn TimerService = &timers;

        block_on(timers_obj.sleep(Duration::from_millis(2000)));
        block_on(timers_obj.sleep(Duration::from_millis(500)));

        assert_eq!(
            timers.requested(),
            vec![Duration::from_millis(2000), Duration::from_millis(500)]
        );
        assert_eq!(timers.total_requested(), Duration::from_millis(2500));
    }

    #[test]
    fn immediate_timer_resolves() {
        block_on(ImmediateTimerService.sleep(Duration::from_secs(3600)));
    }
}
