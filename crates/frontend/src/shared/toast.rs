//! Transient notifications shown in the corner of the screen.

use crate::shared::api_utils::ApiError;
use crate::shared::config::TOAST_TIMEOUT_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            ToastKind::Success => MessageBarIntent::Success,
            ToastKind::Info => MessageBarIntent::Info,
            ToastKind::Warning => MessageBarIntent::Warning,
            ToastKind::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        };
        match kind {
            ToastKind::Error => log::warn!("toast: {} - {}", toast.title, toast.message),
            _ => log::debug!("toast: {} - {}", toast.title, toast.message),
        }
        self.toasts.update(|t| t.push(toast));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, "Berhasil", message);
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Warning, title, message);
    }

    /// Error toast whose heading depends on the error category.
    pub fn api_error(&self, context: &str, error: &ApiError) {
        self.show(
            ToastKind::Error,
            error.title(),
            format!("{}: {}", context, error),
        );
    }

    pub fn dismiss(&self, id: u64) {
        // The root owner outlives every toast, but timers may still fire during teardown
        let _ = self.toasts.try_update(|t| t.retain(|x| x.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack. Mounted once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div class="toast-host__item">
                            <MessageBar intent=t.kind.intent()>
                                <MessageBarBody>
                                    <MessageBarTitle>{t.title}</MessageBarTitle>
                                    {t.message}
                                </MessageBarBody>
                                <MessageBarActions>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| svc.dismiss(id)
                                    >
                                        "×"
                                    </Button>
                                </MessageBarActions>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
