use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Visible time of a notification, in ms.
pub const AUTO_HIDE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Severity::Success => "notification notification--success",
            Severity::Warning => "notification notification--warning",
            Severity::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    generation: u64,
}

/// One transient message at a time; a newer one replaces the current and
/// restarts the hide timer.
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
    generation: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Severity::Success, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(Severity::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Severity::Error, message.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, severity: Severity, message: String) {
        self.generation.update_value(|g| *g += 1);
        let generation = self.generation.get_value();
        self.current.set(Some(Notification {
            severity,
            message,
            generation,
        }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_HIDE_MS).await;
            let expired = current
                .try_with_untracked(|n| n.as_ref().is_some_and(|n| n.generation == generation))
                .unwrap_or(false);
            if expired {
                current.set(None);
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || {
            service.current.get().map(|n| view! {
                <div class=n.severity.class() role="status">
                    <span class="notification__message">{n.message}</span>
                    <button
                        class="notification__close"
                        title="Cerrar"
                        on:click=move |_| service.dismiss()
                    >
                        {icon("x")}
                    </button>
                </div>
            })
        }}
    }
}
