use dominator::{Dom, events, html};
use futures_signals::signal_vec::SignalVecExt;

use shared::constants::API_CLIENTS;
use shared::types::{ApiMessage, ClientForm, ClientRecord, CreatedId};
use shared::utils::{client_actions, ClientAction};

use crate::connect_fetch::{api_delete, api_get, api_send, spawn_handler, FetchError};
use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_TABLE, TAG_TD, TAG_TH, TAG_TR};
use crate::dialog::dialogs::Dialog;
use crate::elements::app_message::{toast_error, toast_success};
use crate::sections::form::input_field;
use crate::session::current_role;
use crate::state::{CLIENTS, DELETE_ID, EDIT_CLIENT};
use crate::utils::get_input_value;

const FIELD_NAME: &str = "client-name";
const FIELD_EMAIL: &str = "client-email";
const FIELD_PHONE: &str = "client-phone";
const FIELD_DOCUMENT: &str = "client-document";
const FIELD_ADDRESS: &str = "client-address";

fn css_class(label: &str) -> String {
    format!("clients__{label}")
}

pub fn clients_load() {
    spawn_handler(clients_fetch());
}

async fn clients_fetch() -> Result<(), FetchError> {
    let list = api_get::<Vec<ClientRecord>>(API_CLIENTS).await?;
    CLIENTS.lock_mut().replace_cloned(list);
    Ok(())
}

pub fn clients_section() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("toolbar"))
                .child(html!(TAG_BUTTON, {
                    .text("Novo Cliente")
                    .event(|_: events::Click| client_new())
                }))
            }),
            html!(TAG_TABLE, {
                .class(css_class("table"))
                .child(html!(TAG_TR, {
                    .children(["Nome", "Email", "Telefone", "Documento", "Ações"].iter().map(|label| {
                        html!(TAG_TH, { .text(label) })
                    }))
                }))
                .children_signal_vec(CLIENTS.signal_vec_cloned().map(client_row))
            }),
        ])
    })
}

fn client_row(row: ClientRecord) -> Dom {
    let id = row.id;
    let actions = client_actions(&current_role()).into_iter().map(|action| match action {
        ClientAction::Edit => html!(TAG_BUTTON, {
            .class(css_class("action"))
            .text("Editar")
            .event(move|_: events::Click| client_edit(id))
        }),
        ClientAction::Delete => html!(TAG_BUTTON, {
            .class(css_class("action"))
            .class(css_class("danger"))
            .text("Excluir")
            .event(move|_: events::Click| client_delete_ask(id))
        }),
    });

    html!(TAG_TR, {
        .children([
            html!(TAG_TD, { .text(&row.name) }),
            html!(TAG_TD, { .text(&row.email) }),
            html!(TAG_TD, { .text(row.phone.as_deref().unwrap_or("-")) }),
            html!(TAG_TD, { .text(&row.document) }),
            html!(TAG_TD, { .children(actions) }),
        ])
    })
}

fn client_new() {
    EDIT_CLIENT.set(None);
    Dialog::form("Novo Cliente", client_form, client_save, || {});
}

fn client_edit(id: i32) {
    spawn_handler(client_edit_fetch(id));
}

async fn client_edit_fetch(id: i32) -> Result<(), FetchError> {
    let client = api_get::<ClientRecord>(&format!("{API_CLIENTS}/{id}")).await?;
    EDIT_CLIENT.set(Some(client));
    Dialog::form("Editar Cliente", client_form, client_save, || EDIT_CLIENT.set(None));
    Ok(())
}

fn client_form() -> Dom {
    let client = EDIT_CLIENT.get_cloned().unwrap_or_default();
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            input_field("Nome", FIELD_NAME, "text", &client.name),
            input_field("Email", FIELD_EMAIL, "email", &client.email),
            input_field("Telefone", FIELD_PHONE, "text", client.phone.as_deref().unwrap_or_default()),
            input_field("Documento", FIELD_DOCUMENT, "text", &client.document),
            input_field("Endereço", FIELD_ADDRESS, "text", client.address.as_deref().unwrap_or_default()),
        ])
    })
}

fn client_save() -> bool {
    let data = ClientForm {
        name: get_input_value(FIELD_NAME),
        email: get_input_value(FIELD_EMAIL),
        phone: Some(get_input_value(FIELD_PHONE)),
        document: get_input_value(FIELD_DOCUMENT),
        address: Some(get_input_value(FIELD_ADDRESS)),
    }.normalized();
    if !data.is_complete() {
        toast_error("Preencha nome, email e documento");
        return false;
    }

    let editing = EDIT_CLIENT.get_cloned().map(|c| c.id);
    spawn_handler(client_send(editing, data));
    true
}

async fn client_send(editing: Option<i32>, data: ClientForm) -> Result<(), FetchError> {
    match editing {
        Some(id) => {
            api_send::<_, ApiMessage>("PUT", &format!("{API_CLIENTS}/{id}"), &data).await?;
            toast_success("Cliente atualizado com sucesso!");
        }
        None => {
            api_send::<_, CreatedId>("POST", API_CLIENTS, &data).await?;
            toast_success("Cliente cadastrado com sucesso!");
        }
    }
    EDIT_CLIENT.set(None);
    clients_load();
    Ok(())
}

fn client_delete_ask(id: i32) {
    DELETE_ID.set(id);
    Dialog::confirm("Tem certeza que deseja excluir este cliente?", client_delete, || DELETE_ID.set(0));
}

fn client_delete() -> bool {
    let id = DELETE_ID.replace(0);
    if id > 0 {
        spawn_handler(client_delete_send(id));
    }
    true
}

async fn client_delete_send(id: i32) -> Result<(), FetchError> {
    api_delete(&format!("{API_CLIENTS}/{id}")).await?;
    toast_success("Cliente excluído com sucesso!");
    clients_load();
    Ok(())
}
