use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use once_cell::sync::Lazy;

use crate::constants::{TAG_BUTTON, TAG_DIV};

pub static DIALOGS: Lazy<MutableVec<Dialog>> = Lazy::new(|| {
    MutableVec::new()
});

#[derive(Clone, Debug)]
pub struct Dialog {
    pub type_: DialogType,
    pub title: String,
    pub message: String,
    pub form: fn() -> Dom,
    /// The dialog stays open when this returns false.
    pub confirm: fn() -> bool,
    pub cancel: fn(),
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            type_: DialogType::Confirm,
            title: "".to_string(),
            message: "".to_string(),
            form: || html!(TAG_DIV),
            confirm: || true,
            cancel: || {},
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DialogType {
    Confirm,
    Form,
}

impl Dialog {
    pub fn confirm(message: &str, confirm: fn() -> bool, cancel: fn()) {
        DIALOGS.lock_mut().push_cloned(Self {
            type_: DialogType::Confirm,
            message: message.to_string(),
            confirm,
            cancel,
            ..Dialog::default()
        });
    }
    pub fn form(title: &str, form: fn() -> Dom, confirm: fn() -> bool, cancel: fn()) {
        DIALOGS.lock_mut().push_cloned(Self {
            type_: DialogType::Form,
            title: title.to_string(),
            form,
            confirm,
            cancel,
            ..Dialog::default()
        });
    }
}

// ===

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

pub fn dialogs() -> impl Signal<Item=Option<Dom>> {
    DIALOGS.signal_vec_cloned().to_signal_cloned().map(current_element)
}

fn current_element(list: Vec<Dialog>) -> Option<Dom> {
    list.last().map(|dialog| match dialog.type_ {
        DialogType::Confirm => dialog_confirm(dialog),
        DialogType::Form => dialog_form(dialog),
    })
}

fn dialog_common(rows: Vec<Dom>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children(rows)
        }))
    })
}

fn dialog_confirm(data: &Dialog) -> Dom {
    dialog_common(vec![
        html!(TAG_DIV,{
            .class(css_class("body"))
            .text(&data.message)
        }),
        dialog_footer(data, "Sim", "Não"),
    ])
}

fn dialog_form(data: &Dialog) -> Dom {
    dialog_common(vec![
        html!(TAG_DIV,{
            .class(css_class("header"))
            .text(&data.title)
        }),
        html!(TAG_DIV,{
            .class(css_class("body"))
            .child((data.form)())
        }),
        dialog_footer(data, "Salvar", "Cancelar"),
    ])
}

fn dialog_footer(data: &Dialog, label_confirm: &str, label_cancel: &str) -> Dom {
    let confirm = data.confirm;
    let cancel = data.cancel;

    html!(TAG_DIV,{
        .class(css_class("footer"))
        .children([
            html!(TAG_BUTTON, {
                .text(label_confirm)
                .attr("aria-label", "confirm")
                .event(move|_: events::Click|{
                    if confirm() {
                        dialog_close();
                    }
                })
            }),
            html!(TAG_BUTTON, {
                .text(label_cancel)
                .attr("aria-label", "cancel")
                .event(move|_: events::Click|{
                    cancel();
                    dialog_close();
                })
            }),
        ])
    })
}

fn dialog_close() {
    let mut list = DIALOGS.lock_mut();
    let count = list.len();
    if count > 0 {
        list.remove(count - 1);
    }
}
