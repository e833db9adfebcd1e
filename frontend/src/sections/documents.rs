use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use web_sys::FormData;

use shared::constants::{FORM_CLIENT_ID, FORM_DESCRIPTION, FORM_FILE};

use crate::connect_files::connect_files;
use crate::constants::{PROP_NAME, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::elements::app_message::{toast_error, toast_success};
use crate::sections::clients::clients_load;
use crate::sections::form::{input_field, select_client};
use crate::state::UPLOAD_PROGRESS;
use crate::utils::{clear_input, get_input_file, get_input_value};

const FIELD_CLIENT: &str = "document-client";
const FIELD_DESCRIPTION: &str = "document-description";
const FIELD_FILE: &str = "document-file";

fn css_class(label: &str) -> String {
    format!("documents__{label}")
}

pub fn documents_load() {
    UPLOAD_PROGRESS.set(None);
    clients_load();
}

pub fn documents_section() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            select_client(FIELD_CLIENT, "Selecione um cliente"),
            input_field("Descrição", FIELD_DESCRIPTION, "text", ""),
            html!(TAG_INPUT, {
                .class(css_class("file"))
                .attr(PROP_TYPE, "file")
                .attr(PROP_NAME, FIELD_FILE)
            }),
            html!(TAG_BUTTON, {
                .text("Enviar Documento")
                .attr_signal("disabled", UPLOAD_PROGRESS.signal().map(|p| p.map(|_| "disabled")))
                .event(|_: events::Click| document_upload())
            }),
            html!(TAG_DIV, {
                .class(css_class("progress"))
                .visible_signal(UPLOAD_PROGRESS.signal().map(|p| p.is_some()))
                .text_signal(UPLOAD_PROGRESS.signal().map(|p| format!("Enviando... {}%", p.unwrap_or_default())))
            }),
        ])
    })
}

fn document_upload() {
    let client_id = get_input_value(FIELD_CLIENT).parse::<i32>().unwrap_or_default();
    let file = match get_input_file(FIELD_FILE) {
        Some(file) if client_id > 0 => file,
        _ => {
            toast_error("Selecione um cliente e um arquivo");
            return;
        }
    };

    let Ok(form) = FormData::new() else {
        return;
    };
    let appended = form.append_with_blob_and_filename(FORM_FILE, &file, &file.name())
        .and_then(|_| form.append_with_str(FORM_CLIENT_ID, &client_id.to_string()))
        .and_then(|_| form.append_with_str(FORM_DESCRIPTION, get_input_value(FIELD_DESCRIPTION).trim()));
    if appended.is_err() {
        log::error!("document_upload: form data");
        return;
    }

    UPLOAD_PROGRESS.set(Some(0));
    connect_files(&form, upload_progress, upload_done);
}

fn upload_progress(value: u32) {
    UPLOAD_PROGRESS.set(Some(value));
}

fn upload_done(result: Result<(), String>) {
    UPLOAD_PROGRESS.set(None);
    match result {
        Ok(()) => {
            clear_input(FIELD_FILE);
            clear_input(FIELD_DESCRIPTION);
            toast_success("Documento enviado com sucesso!");
        }
        Err(message) => toast_error(&message),
    }
}
