//! Toast notifications.
//!
//! [`Toaster`] is provided as context by the app; any component can push a
//! [`Notice`] and it disappears after [`TOAST_DURATION_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use reviewhi::Notice;

use crate::types::Toast;
use crate::TOAST_DURATION_MS;

/// Handle on the toast queue.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show a notice and schedule its removal.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("Toast: {} - {}", notice.title, notice.description);
        self.toasts.update(|list| list.push(Toast { id, notice }));

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toaster.dismiss(id);
        });
    }

    pub fn push_all(&self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// The toaster from context. Panics if the app did not provide one.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the toast stack.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notice.kind.css_class())
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
