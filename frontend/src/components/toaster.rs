//! Transient toast notifications.
//!
//! [`Toasts`] is provided once at the top of the app; any component can push
//! to it. Each toast removes itself after [`TOAST_DURATION_MS`].

use gloo_timers::callback::Timeout;
use launchpad::Notification;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::types::{Toast, ToastLevel};

/// Shared toast queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show a workflow notification.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.show(Toast::from_notification(id, notification, timestamp));
    }

    /// Show an informational toast that did not come from the workflow.
    pub fn info(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.show(Toast {
            id,
            level: ToastLevel::Info,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        });
    }

    fn show(&self, toast: Toast) {
        let id = toast.id;
        self.toasts.update(|toasts| {
            toasts.push(toast);
            // Keep max toasts on screen
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let this = *self;
        Timeout::new(TOAST_DURATION_MS, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the toast queue and make it available to descendants.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class={toast.level.css_class()} on:click=move |_| toasts.dismiss(id)>
                            <span class="toast-icon">{toast.level.emoji()}</span>
                            <span class="toast-message">{toast.message}</span>
                            <span class="toast-time">{toast.timestamp}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
