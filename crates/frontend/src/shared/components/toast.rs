use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::icons::icon;
use crate::shared::services::{Notifier, Severity};

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
}

/// Stack of visible notifications; each one dismisses itself after a while
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, message: &str, severity: Severity) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.to_string(),
                severity,
            })
        });
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("toast: {}", message),
            Severity::Warning => log::warn!("toast: {}", message),
            Severity::Success => log::info!("toast: {}", message),
        }
        let id = self.push(message, severity);
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }
}

#[component]
pub fn Toaster(service: ToastService) -> impl IntoView {
    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.severity.as_str())>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
