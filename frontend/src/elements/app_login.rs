use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;

use crate::constants::{APP_TITLE, PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::elements::app_message::{login_message, toasts};
use crate::elements::app_root::app_root;
use crate::session::{login, session_start};
use crate::state::SESSION;
use crate::utils::{clear_input, get_html_element, get_input_value, query_selector, set_title};

const KEY_ENTER: &str = "Enter";
const FIELD_NAME: &str = "login-username";
const FIELD_PASS: &str = "login-password";

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

pub fn app_state() -> Dom {
    session_start();
    html!(TAG_DIV, {
        .child_signal(SESSION.signal_ref(|session| session.is_some()).dedupe().map(|authorized| {
            if authorized {
                set_title(APP_TITLE);
                Some(app_root())
            } else {
                Some(login_page())
            }
        }))
        .child(toasts())
    })
}

fn login_page() -> Dom {
    set_title(&format!("{APP_TITLE} | Entrar"));
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("form"))
            .children([
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TITLE, "Usuário")
                    .attr(PROP_PLACEHOLDER, "Usuário")
                    .attr(PROP_NAME, FIELD_NAME)
                    .event(handle_key_name)
                }),
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TITLE, "Senha")
                    .attr(PROP_PLACEHOLDER, "Senha")
                    .attr(PROP_TYPE, "password")
                    .attr(PROP_NAME, FIELD_PASS)
                    .event(handle_key_pass)
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("button"))
                    .text("Entrar")
                    .event(|_: events::Click| login_submit())
                }),
                login_message(),
            ])
        }))
    })
}

fn handle_key_name(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        if let Some(elem) = get_html_element(query_selector(&format!("[name={FIELD_PASS}]"))) {
            if elem.focus().is_ok() {}
        }
    }
}

fn handle_key_pass(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        login_submit();
    }
}

fn login_submit() {
    let username = get_input_value(FIELD_NAME).trim().to_string();
    let password = get_input_value(FIELD_PASS);
    clear_input(FIELD_PASS);
    login(username, password);
}
