//! Browser implementations of the `faqhub-app` ports.

use std::rc::Rc;
use std::time::Duration;

use faqhub_app::ports::{DocumentTheme, Navigator, PreferenceStore, ScheduledTask, Scheduler};
use faqhub_domain::error::StorageError;
use faqhub_domain::route::Route;
use faqhub_domain::theme::{DARK_CLASS, ThemePreference};
use gloo_timers::callback::Timeout;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// [`PreferenceStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected {
                key: key.to_string(),
            })
    }
}

/// [`DocumentTheme`] that toggles the `dark` class on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootElementTheme;

impl DocumentTheme for RootElementTheme {
    fn apply(&self, theme: ThemePreference) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            leptos::logging::warn!("no document element, theme not applied");
            return;
        };

        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = result {
            leptos::logging::warn!("failed to apply {theme} theme: {err:?}");
        }
    }
}

/// [`Navigator`] driving the Leptos router.
///
/// Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn from_router() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: Route) {
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// [`Scheduler`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout` callback.
pub struct BrowserTask(Timeout);

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn schedule<F>(&self, delay: Duration, callback: F) -> BrowserTask
    where
        F: FnOnce() + 'static,
    {
        BrowserTask(Timeout::new(timeout_millis(delay), callback))
    }
}

impl ScheduledTask for BrowserTask {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

/// `setTimeout` takes a `u32` of milliseconds; longer delays saturate.
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqhub_domain::route::LOGOUT_REDIRECT_DELAY;

    #[test]
    fn should_convert_logout_delay_to_milliseconds() {
        assert_eq!(timeout_millis(LOGOUT_REDIRECT_DELAY), 3000);
    }

    #[test]
    fn should_saturate_oversized_delay() {
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
