//! Theme service — load, toggle and persist the light/dark preference.

use std::cell::Cell;

use faqhub_domain::theme::{STORAGE_KEY, ThemePreference};

use crate::ports::{DocumentTheme, PreferenceStore};

/// Owns the current theme preference for one mounted view tree.
///
/// Every change is applied to the document and written back to the store
/// synchronously. Storage failures are logged and otherwise ignored: the
/// preference still applies for the current page, it just does not survive a
/// reload.
pub struct ThemeService<S, D> {
    store: S,
    document: D,
    current: Cell<ThemePreference>,
}

impl<S: PreferenceStore, D: DocumentTheme> ThemeService<S, D> {
    /// Read the persisted preference once and apply it to the document.
    ///
    /// A missing, unreadable or unrecognised value yields
    /// [`ThemePreference::Light`].
    #[tracing::instrument(skip_all)]
    pub fn mount(store: S, document: D) -> Self {
        let current = match store.get(STORAGE_KEY) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::warn!(%err, "theme preference unreadable, using default");
                ThemePreference::default()
            }
        };
        tracing::debug!(theme = %current, "theme mounted");
        document.apply(current);

        Self {
            store,
            document,
            current: Cell::new(current),
        }
    }

    /// The preference currently in effect.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    /// Switch to the opposite preference and return it.
    pub fn toggle(&self) -> ThemePreference {
        self.set(self.current().toggled())
    }

    /// Apply and persist `theme`, returning it.
    #[tracing::instrument(skip(self))]
    pub fn set(&self, theme: ThemePreference) -> ThemePreference {
        self.current.set(theme);
        self.document.apply(theme);
        if let Err(err) = self.store.set(STORAGE_KEY, theme.as_str()) {
            tracing::warn!(%err, "theme preference not persisted");
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqhub_domain::error::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct InMemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl InMemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn value(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for InMemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[derive(Default)]
    struct RecordingDocument {
        applied: RefCell<Vec<ThemePreference>>,
    }

    impl DocumentTheme for RecordingDocument {
        fn apply(&self, theme: ThemePreference) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn should_default_to_light_when_nothing_stored() {
        let document = Rc::new(RecordingDocument::default());
        let svc = ThemeService::mount(InMemoryStore::default(), Rc::clone(&document));

        assert_eq!(svc.current(), ThemePreference::Light);
        assert_eq!(*document.applied.borrow(), [ThemePreference::Light]);
    }

    #[test]
    fn should_restore_persisted_dark_theme_on_mount() {
        let document = Rc::new(RecordingDocument::default());
        let svc = ThemeService::mount(InMemoryStore::with("theme", "dark"), Rc::clone(&document));

        assert_eq!(svc.current(), ThemePreference::Dark);
        assert_eq!(*document.applied.borrow(), [ThemePreference::Dark]);
    }

    #[test]
    fn should_not_write_to_store_on_mount() {
        let store = Rc::new(InMemoryStore::default());
        let _svc = ThemeService::mount(Rc::clone(&store), RecordingDocument::default());

        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn should_persist_dark_after_one_toggle_from_light() {
        let store = Rc::new(InMemoryStore::default());
        let svc = ThemeService::mount(Rc::clone(&store), RecordingDocument::default());

        assert_eq!(svc.toggle(), ThemePreference::Dark);
        assert_eq!(store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_restore_original_value_after_two_toggles() {
        let store = Rc::new(InMemoryStore::with("theme", "light"));
        let svc = ThemeService::mount(Rc::clone(&store), RecordingDocument::default());

        svc.toggle();
        svc.toggle();

        assert_eq!(svc.current(), ThemePreference::Light);
        assert_eq!(store.value("theme").as_deref(), Some("light"));
    }

    #[test]
    fn should_apply_every_change_to_document() {
        let document = Rc::new(RecordingDocument::default());
        let svc = ThemeService::mount(InMemoryStore::default(), Rc::clone(&document));

        svc.toggle();
        svc.set(ThemePreference::Light);

        assert_eq!(
            *document.applied.borrow(),
            [
                ThemePreference::Light,
                ThemePreference::Dark,
                ThemePreference::Light
            ]
        );
    }

    #[test]
    fn should_ignore_unknown_stored_value() {
        let svc = ThemeService::mount(
            InMemoryStore::with("theme", "solarized"),
            RecordingDocument::default(),
        );
        assert_eq!(svc.current(), ThemePreference::Light);
    }

    #[test]
    fn should_keep_working_when_storage_is_unavailable() {
        let document = Rc::new(RecordingDocument::default());
        let svc = ThemeService::mount(UnavailableStore, Rc::clone(&document));

        assert_eq!(svc.current(), ThemePreference::Light);
        assert_eq!(svc.toggle(), ThemePreference::Dark);
        assert_eq!(svc.current(), ThemePreference::Dark);
        assert_eq!(document.applied.borrow().last(), Some(&ThemePreference::Dark));
    }
}
