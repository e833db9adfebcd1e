use dominator::{Dom, html};
use futures_signals::signal_vec::SignalVecExt;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_SELECTED, PROP_TYPE, PROP_VALUE, TAG_DIV, TAG_INPUT, TAG_OPTION, TAG_SELECT, TAG_SPAN};
use crate::state::CLIENTS;

fn css_class(label: &str) -> String {
    format!("form__{label}")
}

pub fn input_field(label: &str, name: &str, type_: &str, value: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("row"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("label"))
                .text(label)
            }),
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_NAME, name)
                .attr(PROP_TYPE, type_)
                .attr(PROP_PLACEHOLDER, label)
                .prop(PROP_VALUE, value)
            }),
        ])
    })
}

pub fn select_field(label: &str, name: &str, options: &[(&str, &str)], selected: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("row"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("label"))
                .text(label)
            }),
            html!(TAG_SELECT, {
                .class(css_class("input"))
                .attr(PROP_NAME, name)
                .children(options.iter().map(|(value, text)| {
                    html!(TAG_OPTION, {
                        .attr(PROP_VALUE, value)
                        .prop(PROP_SELECTED, *value == selected)
                        .text(text)
                    })
                }))
            }),
        ])
    })
}

/// Client picker fed by the loaded client list; value 0 means none.
pub fn select_client(name: &str, empty_label: &str) -> Dom {
    html!(TAG_SELECT, {
        .class(css_class("input"))
        .attr(PROP_NAME, name)
        .child(html!(TAG_OPTION, {
            .attr(PROP_VALUE, "0")
            .text(empty_label)
        }))
        .children_signal_vec(CLIENTS.signal_vec_cloned().map(|client| html!(TAG_OPTION, {
            .attr(PROP_VALUE, &client.id.to_string())
            .text(&client.name)
        })))
    })
}
