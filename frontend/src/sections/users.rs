use dominator::{Dom, events, html};
use futures_signals::signal_vec::SignalVecExt;

use shared::constants::{API_REGISTER, API_USERS, ROLES, ROLE_EMPLOYEE};
use shared::types::{ApiMessage, RegisterRequest, UserStruct};

use crate::connect_fetch::{api_get, api_send, spawn_handler, FetchError};
use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_TABLE, TAG_TD, TAG_TH, TAG_TR};
use crate::dialog::dialogs::Dialog;
use crate::elements::app_message::{toast_error, toast_success};
use crate::sections::form::{input_field, select_field};
use crate::state::USERS;
use crate::utils::get_input_value;

const FIELD_USERNAME: &str = "user-username";
const FIELD_EMAIL: &str = "user-email";
const FIELD_PASSWORD: &str = "user-password";
const FIELD_ROLE: &str = "user-role";

fn css_class(label: &str) -> String {
    format!("users__{label}")
}

pub fn users_load() {
    spawn_handler(users_fetch());
}

async fn users_fetch() -> Result<(), FetchError> {
    let list = api_get::<Vec<UserStruct>>(API_USERS).await?;
    USERS.lock_mut().replace_cloned(list);
    Ok(())
}

pub fn users_section() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("toolbar"))
                .child(html!(TAG_BUTTON, {
                    .text("Novo Usuário")
                    .event(|_: events::Click| Dialog::form("Novo Usuário", user_form, user_save, || {}))
                }))
            }),
            html!(TAG_TABLE, {
                .class(css_class("table"))
                .child(html!(TAG_TR, {
                    .children(["Usuário", "Email", "Perfil"].iter().map(|label| html!(TAG_TH, { .text(label) })))
                }))
                .children_signal_vec(USERS.signal_vec_cloned().map(|row| html!(TAG_TR, {
                    .children([
                        html!(TAG_TD, { .text(&row.username) }),
                        html!(TAG_TD, { .text(&row.email) }),
                        html!(TAG_TD, { .text(&row.role) }),
                    ])
                })))
            }),
        ])
    })
}

fn user_form() -> Dom {
    let roles = ROLES.iter().map(|role| (*role, *role)).collect::<Vec<_>>();
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            input_field("Usuário", FIELD_USERNAME, "text", ""),
            input_field("Email", FIELD_EMAIL, "email", ""),
            input_field("Senha", FIELD_PASSWORD, "password", ""),
            select_field("Perfil", FIELD_ROLE, &roles, ROLE_EMPLOYEE),
        ])
    })
}

fn user_save() -> bool {
    let data = RegisterRequest {
        username: get_input_value(FIELD_USERNAME).trim().to_string(),
        email: get_input_value(FIELD_EMAIL).trim().to_string(),
        password: get_input_value(FIELD_PASSWORD),
        role: get_input_value(FIELD_ROLE),
    };
    if data.username.is_empty() || data.password.is_empty() {
        toast_error("Usuário e senha são obrigatórios");
        return false;
    }
    spawn_handler(user_send(data));
    true
}

async fn user_send(data: RegisterRequest) -> Result<(), FetchError> {
    let res = api_send::<_, ApiMessage>("POST", API_REGISTER, &data).await?;
    toast_success(&res.message);
    users_load();
    Ok(())
}
