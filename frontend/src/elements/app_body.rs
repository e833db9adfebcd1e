use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;

use crate::constants::{TAG_BUTTON, TAG_DIV};
use crate::sections::clients::{clients_load, clients_section};
use crate::sections::dashboard::{dashboard_load, dashboard_section};
use crate::sections::documents::{documents_load, documents_section};
use crate::sections::payments::{payments_load, payments_section};
use crate::sections::sheet::{sheets_load, sheets_section};
use crate::sections::users::{users_load, users_section};
use crate::session::current_role;
use crate::state::{CURRENT_SECTION, SESSION};
use crate::types::{Section, SECTIONS};

fn css_class(label: &str) -> String {
    format!("app-body__{label}")
}

pub fn app_body() -> Dom {
    html!(TAG_DIV,{
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("sidebar"))
                .children(SECTIONS.iter().map(|section| nav_button(*section)))
            }),
            html!(TAG_DIV, {
                .class(css_class("content"))
                .child_signal(CURRENT_SECTION.signal().map(|section| Some(section_view(section))))
            })
        ])
    })
}

fn nav_button(section: Section) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("nav"))
        .class_signal("active", CURRENT_SECTION.signal().map(move|s| s == section))
        .visible_signal(SESSION.signal_ref(move|session| {
            session.as_ref().map(|s| section.is_visible_for(&s.user.role)).unwrap_or_default()
        }))
        .text(section.label())
        .event(move|_: events::Click| open_section(section))
    })
}

fn section_view(section: Section) -> Dom {
    match section {
        Section::Dashboard => dashboard_section(),
        Section::Clients => clients_section(),
        Section::Sheets => sheets_section(),
        Section::Documents => documents_section(),
        Section::Payments => payments_section(),
        Section::Users => users_section(),
    }
}

pub fn open_section(section: Section) {
    if !section.is_visible_for(&current_role()) {
        return;
    }
    CURRENT_SECTION.set(section);
    match section {
        Section::Dashboard => dashboard_load(),
        Section::Clients => clients_load(),
        Section::Sheets => sheets_load(),
        Section::Documents => documents_load(),
        Section::Payments => payments_load(),
        Section::Users => users_load(),
    }
}
