//! Logout redirect — return to the login page after a fixed delay.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use faqhub_domain::route::Route;

use crate::ports::{Navigator, ScheduledTask, Scheduler};

/// A pending redirect to [`Route::Login`].
///
/// The view that schedules the redirect must call [`cancel`](Self::cancel)
/// from its teardown path so that leaving the page early never triggers a
/// stale navigation.
pub struct LogoutRedirect<T> {
    task: T,
    fired: Rc<Cell<bool>>,
}

impl<T: ScheduledTask> LogoutRedirect<T> {
    /// Schedule a navigation to [`Route::Login`] after `delay`.
    pub fn schedule<S, N>(scheduler: &S, navigator: N, delay: Duration) -> Self
    where
        S: Scheduler<Task = T>,
        N: Navigator + 'static,
    {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        tracing::debug!(delay_ms = delay.as_millis(), "logout redirect scheduled");
        let task = scheduler.schedule(delay, move || {
            flag.set(true);
            tracing::info!(route = %Route::Login, "redirecting to login");
            navigator.navigate(Route::Login);
        });
        Self { task, fired }
    }

    /// Whether the redirect has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.fired.get()
    }

    /// Abandon the redirect. No-op if it already fired.
    pub fn cancel(self) {
        if self.is_pending() {
            tracing::debug!("logout redirect cancelled");
        }
        self.task.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqhub_domain::route::LOGOUT_REDIRECT_DELAY;
    use std::cell::RefCell;

    type Callback = Box<dyn FnOnce()>;

    struct Pending {
        due: Duration,
        cancelled: Rc<Cell<bool>>,
        callback: Option<Callback>,
    }

    /// Deterministic scheduler driven by [`advance`](Self::advance).
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        pending: RefCell<Vec<Pending>>,
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let now = self.now.get() + by;
            self.now.set(now);
            let due: Vec<Callback> = self
                .pending
                .borrow_mut()
                .iter_mut()
                .filter(|p| p.due <= now && !p.cancelled.get())
                .filter_map(|p| p.callback.take())
                .collect();
            for callback in due {
                callback();
            }
        }
    }

    struct ManualTask {
        cancelled: Rc<Cell<bool>>,
    }

    impl ScheduledTask for ManualTask {
        fn cancel(self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule<F>(&self, delay: Duration, callback: F) -> ManualTask
        where
            F: FnOnce() + 'static,
        {
            let cancelled = Rc::new(Cell::new(false));
            self.pending.borrow_mut().push(Pending {
                due: self.now.get() + delay,
                cancelled: Rc::clone(&cancelled),
                callback: Some(Box::new(callback)),
            });
            ManualTask { cancelled }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[test]
    fn should_navigate_to_login_once_after_full_delay() {
        let scheduler = ManualScheduler::default();
        let navigator = Rc::new(RecordingNavigator::default());

        let redirect =
            LogoutRedirect::schedule(&scheduler, Rc::clone(&navigator), LOGOUT_REDIRECT_DELAY);
        scheduler.advance(Duration::from_secs(3));
        scheduler.advance(Duration::from_secs(10));

        assert!(!redirect.is_pending());
        assert_eq!(*navigator.visited.borrow(), [Route::Login]);
    }

    #[test]
    fn should_not_navigate_before_delay_elapses() {
        let scheduler = ManualScheduler::default();
        let navigator = Rc::new(RecordingNavigator::default());

        let redirect =
            LogoutRedirect::schedule(&scheduler, Rc::clone(&navigator), LOGOUT_REDIRECT_DELAY);
        scheduler.advance(Duration::from_millis(2999));

        assert!(redirect.is_pending());
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn should_not_navigate_when_cancelled_before_delay() {
        let scheduler = ManualScheduler::default();
        let navigator = Rc::new(RecordingNavigator::default());

        let redirect =
            LogoutRedirect::schedule(&scheduler, Rc::clone(&navigator), LOGOUT_REDIRECT_DELAY);
        scheduler.advance(Duration::from_secs(1));
        redirect.cancel();
        scheduler.advance(Duration::from_secs(5));

        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn should_tolerate_cancel_after_redirect_fired() {
        let scheduler = ManualScheduler::default();
        let navigator = Rc::new(RecordingNavigator::default());

        let redirect =
            LogoutRedirect::schedule(&scheduler, Rc::clone(&navigator), LOGOUT_REDIRECT_DELAY);
        scheduler.advance(LOGOUT_REDIRECT_DELAY);
        redirect.cancel();

        assert_eq!(navigator.visited.borrow().len(), 1);
    }
}
