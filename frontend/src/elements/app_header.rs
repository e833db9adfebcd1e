use dominator::{Dom, events, html, svg};

use crate::constants::{APP_TITLE, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::session::logout;
use crate::state::SESSION;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("title"))
                .text(APP_TITLE)
            }),
            html!(TAG_SPAN, {
                .class(css_class("user"))
                .text_signal(SESSION.signal_ref(|session| {
                    session.as_ref()
                        .map(|s| format!("{} ({})", s.user.username, s.user.role))
                        .unwrap_or_default()
                }))
            }),
            button_icon("Sair", icon_exit(), logout),
        ])
    })
}

fn button_icon(title: &str, icon: Dom, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .attr(PROP_TITLE, title)
        .children([icon])
        .event(move|_: events::Click|click())
    })
}

fn icon_exit() -> Dom {
    svg!("svg", {
        .attr("viewBox", "0 0 512 512")
        .class(css_class("icon"))
        .children([
            svg!("path", {
                .attr("fill", "currentColor")
                .attr("d", "M497 273L329 441c-15 15-41 4.5-41-17v-96H152c-13.3 0-24-10.7-24-24v-96c0-13.3 10.7-24 24-24h136V88c0-21.4 25.9-32 41-17l168 168c9.3 9.4 9.3 24.6 0 34zM192 436v-40c0-6.6-5.4-12-12-12H96c-17.7 0-32-14.3-32-32V160c0-17.7 14.3-32 32-32h84c6.6 0 12-5.4 12-12V76c0-6.6-5.4-12-12-12H96c-53 0-96 43-96 96v192c0 53 43 96 96 96h84c6.6 0 12-5.4 12-12z")
            })
        ])
    })
}
