use std::sync::atomic::{AtomicU32, Ordering};

use dominator::{Dom, events, html};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use shared::constants::MESSAGE_TIMEOUT_MS;

use crate::constants::TAG_DIV;
use crate::state::LOGIN_MESSAGE;
use crate::types::{Toast, ToastKind};

static TOASTS: Lazy<MutableVec<Toast>> = Lazy::new(|| {
    MutableVec::new()
});

static TOAST_ID: AtomicU32 = AtomicU32::new(1);

fn css_class(label: &str) -> String {
    format!("app-message__{label}")
}

pub fn toast_success(text: &str) {
    toast_push(ToastKind::Success, text);
}

pub fn toast_error(text: &str) {
    toast_push(ToastKind::Error, text);
}

fn toast_push(kind: ToastKind, text: &str) {
    let id = TOAST_ID.fetch_add(1, Ordering::Relaxed);
    TOASTS.lock_mut().push_cloned(Toast { id, kind, text: text.to_string() });
    Timeout::new(MESSAGE_TIMEOUT_MS, move || toast_remove(id)).forget();
}

fn toast_remove(id: u32) {
    TOASTS.lock_mut().retain(|row| row.id != id);
}

pub fn toasts() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children_signal_vec(TOASTS.signal_vec_cloned().map(toast))
    })
}

fn toast(row: Toast) -> Dom {
    let id = row.id;
    html!(TAG_DIV, {
        .class(css_class("toast"))
        .class(match row.kind {
            ToastKind::Success => css_class("success"),
            ToastKind::Error => css_class("error"),
        })
        .text(&row.text)
        .event(move|_: events::Click| toast_remove(id))
    })
}

pub fn login_message() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("inline"))
        .text_signal(LOGIN_MESSAGE.signal_cloned())
    })
}
