//! Modal stack for create/edit forms and order details.
//!
//! Escape and overlay clicks close only the topmost modal. Removal is deferred
//! one tick so the DOM event that triggered it finishes dispatching first.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type Builder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    builder: Builder,
    can_close: Option<CloseGuard>,
}

/// Lets modal content close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn open<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push(title.into(), Arc::new(builder), None)
    }

    /// Like [`open`](Self::open), but Escape and overlay clicks are ignored while
    /// `can_close` returns `false` (e.g. during a save).
    pub fn open_guarded<F, G>(&self, title: impl Into<String>, can_close: G, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.push(title.into(), Arc::new(builder), Some(Arc::new(can_close)))
    }

    fn push(&self, title: String, builder: Builder, can_close: Option<CloseGuard>) -> ModalHandle {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title,
                builder,
                can_close,
            })
        });
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn top_closable(&self) -> Option<u64> {
        self.stack.with_untracked(|s| {
            s.last()
                .filter(|e| e.can_close.as_ref().map(|f| f()).unwrap_or(true))
                .map(|e| e.id)
        })
    }
}

/// Native confirmation dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not found")
}

/// Renders the stack; mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                if let Some(id) = svc.top_closable() {
                    svc.close_deferred(id);
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let can_close = entry.can_close.clone();
                    let request_close = Callback::new(move |_: ()| {
                        if can_close.as_ref().map(|f| f()).unwrap_or(true) {
                            svc.close_deferred(id);
                        }
                    });
                    let body = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame z_index={1000 + idx as i32} title=entry.title on_close=request_close>
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

/// Overlay plus dialog surface. Closes only when press and release both land on the overlay.
#[component]
fn ModalFrame(z_index: i32, title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct(&ev))
            on:click=move |ev| {
                let close = overlay_mouse_down.get_untracked() && is_direct(&ev);
                overlay_mouse_down.set(false);
                if close {
                    on_close.run(());
                }
            }
        >
            <div class="modal" style="position: relative;" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" title="Tutup" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
