//! Capabilities handed to every screen: notifications and navigation
//!
//! Screens receive an [`AppServices`] value as a prop instead of reaching for
//! globals, so tests can substitute recording implementations.

use leptos::prelude::{LocalStorage, StoredValue};
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Fire-and-forget user notification
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Replaces the current screen
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone)]
pub struct AppServices {
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

impl AppServices {
    pub fn new(notifier: impl Notifier + 'static, navigator: impl Navigator + 'static) -> Self {
        Self {
            notifier: Rc::new(notifier),
            navigator: Rc::new(navigator),
        }
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    pub fn navigate(&self, path: &str) {
        self.navigator.navigate(path);
    }
}

/// Copyable handle to the services of the current screen tree.
///
/// The services hold `Rc`s, so they live in local storage and reactive
/// closures capture only this handle.
pub type ServicesHandle = StoredValue<AppServices, LocalStorage>;

/// Navigator backed by the router of the enclosing `<Router>`
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Must be called inside a `<Router>`
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate: {}", path);
        (self.navigate)(path);
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording doubles for notifier and navigator

    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub messages: Rc<RefCell<Vec<(String, Severity)>>>,
    }

    impl RecordingNotifier {
        pub fn take(&self) -> Vec<(String, Severity)> {
            self.messages.borrow_mut().drain(..).collect()
        }

        pub fn count(&self, severity: Severity) -> usize {
            self.messages
                .borrow()
                .iter()
                .filter(|(_, s)| *s == severity)
                .count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.messages.borrow_mut().push((message.to_string(), severity));
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        pub paths: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    /// Services wired to fresh recorders, returned alongside them
    pub fn recording_services() -> (AppServices, RecordingNotifier, RecordingNavigator) {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let services = AppServices::new(notifier.clone(), navigator.clone());
        (services, notifier, navigator)
    }
}
