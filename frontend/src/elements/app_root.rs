use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::elements::app_body::app_body;
use crate::elements::app_header::app_header;

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .children([app_header(), app_body()])
        .child_signal(dialogs())
    })
}
