//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Pages push toasts for load/update outcomes; the `Toaster` component renders
//! the queue and schedules dismissal. The queue is capped so a burst of
//! failures cannot grow it without bound.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// How long a toast stays visible, in milliseconds.
pub const TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Drops the oldest beyond `MAX_TOASTS`.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Push a toast into the context-provided queue and schedule its dismissal.
pub fn notify(toasts: leptos::prelude::RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    use leptos::prelude::Update;

    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });

    #[cfg(not(feature = "csr"))]
    let _ = id;
}

pub fn notify_success(toasts: leptos::prelude::RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: leptos::prelude::RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}
