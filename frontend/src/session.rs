use wasm_bindgen_futures::spawn_local;

use shared::constants::{API_LOGIN, STORAGE_TOKEN, STORAGE_USER};
use shared::types::{LoginRequest, LoginResponse, UserStruct};

use crate::connect_fetch::{api_send, FetchError};
use crate::dialog::dialogs::DIALOGS;
use crate::elements::app_body::open_section;
use crate::elements::app_message::toast_success;
use crate::state::{LOGIN_MESSAGE, SESSION};
use crate::types::{Section, Session};
use crate::utils::{obj_to_string, storage_get, storage_remove, storage_set, string_to_obj};

pub fn current_token() -> Option<String> {
    SESSION.lock_ref().as_ref().map(|s| s.token.clone())
}

pub fn current_user() -> Option<UserStruct> {
    SESSION.lock_ref().as_ref().map(|s| s.user.clone())
}

pub fn current_role() -> String {
    current_user().map(|u| u.role).unwrap_or_default()
}

/// Both keys must be present and the user must have an id.
pub fn session_restore() -> Option<Session> {
    let token = storage_get(STORAGE_TOKEN)?;
    let user = storage_get(STORAGE_USER).and_then(|text| string_to_obj::<UserStruct>(&text))?;
    let session = Session { token, user };
    if session.is_valid() {
        Some(session)
    } else {
        storage_remove(STORAGE_TOKEN);
        storage_remove(STORAGE_USER);
        None
    }
}

fn session_save(session: &Session) {
    storage_set(STORAGE_TOKEN, &session.token);
    storage_set(STORAGE_USER, &obj_to_string(&session.user));
}

fn session_clear() {
    storage_remove(STORAGE_TOKEN);
    storage_remove(STORAGE_USER);
    DIALOGS.lock_mut().clear();
    SESSION.set(None);
}

pub fn session_start() {
    if let Some(session) = session_restore() {
        log::info!("session restored: {}", session.user.username);
        SESSION.set(Some(session));
        open_section(Section::Dashboard);
    }
}

pub fn login(username: String, password: String) {
    LOGIN_MESSAGE.set_neq("".to_string());
    spawn_local(async move {
        let data = LoginRequest { username, password };
        match api_send::<_, LoginResponse>("POST", API_LOGIN, &data).await {
            Ok(res) => {
                let session = Session { token: res.access_token, user: res.user };
                session_save(&session);
                log::info!("login: {}", session.user.username);
                SESSION.set(Some(session));
                open_section(Section::Dashboard);
                toast_success("Login realizado com sucesso!");
            }
            Err(FetchError::Status(_, message)) => {
                LOGIN_MESSAGE.set(message);
            }
            Err(err) => {
                log::error!("login: {err}");
                LOGIN_MESSAGE.set("Erro ao fazer login".to_string());
            }
        }
    });
}

pub fn logout() {
    session_clear();
    LOGIN_MESSAGE.set_neq("".to_string());
}

/// Any 401 on an authenticated call ends up here.
pub fn session_expired() {
    session_clear();
    LOGIN_MESSAGE.set(FetchError::Unauthorized.to_string());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn expired_session_is_cleared() {
        let user = UserStruct { id: 4, username: "bia".to_string(), email: "".to_string(), role: "gerente".to_string() };
        let session = Session { token: "t0k3n".to_string(), user };
        session_save(&session);
        SESSION.set(Some(session));

        session_expired();

        assert!(SESSION.lock_ref().is_none());
        assert_eq!(storage_get(STORAGE_TOKEN), None);
        assert_eq!(storage_get(STORAGE_USER), None);
        assert_eq!(LOGIN_MESSAGE.get_cloned(), "Sessão expirada");
        assert_eq!(session_restore().map(|s| s.token), None);
    }
}
