use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use once_cell::sync::Lazy;

use shared::types::UserStruct;

use crate::config::CONFIG;
use crate::types::SessionStruct;
use crate::utils::new_token;

pub static USER_AUTH: Lazy<Arc<Mutex<HashMap<String, SessionStruct>>>> = Lazy::new(|| Arc::new(Mutex::new(HashMap::new())));

pub fn session_create(user: &UserStruct) -> String {
    let token = new_token(&user.id);
    session_insert(&token, SessionStruct::new(user, CONFIG.session_hours));
    token
}

pub fn session_insert(token: &str, session: SessionStruct) {
    if let Ok(mut user_auth) = USER_AUTH.lock() {
        user_auth.insert(token.to_string(), session);
    }
}

/// Expired sessions are dropped on lookup.
pub fn session_by_token(token: &str) -> Option<SessionStruct> {
    let mut user_auth = USER_AUTH.lock().ok()?;
    if user_auth.get(token)?.is_expired(Utc::now()) {
        user_auth.remove(token);
        None
    } else {
        user_auth.get(token).cloned()
    }
}

pub fn session_remove_expired() -> usize {
    let now = Utc::now();
    match USER_AUTH.lock() {
        Ok(mut user_auth) => {
            let before = user_auth.len();
            user_auth.retain(|_, session| !session.is_expired(now));
            before - user_auth.len()
        }
        Err(_) => 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn user(id: i32, role: &str) -> UserStruct {
        UserStruct { id, username: format!("u{id}"), email: "".to_string(), role: role.to_string() }
    }

    #[test]
    fn created_session_is_found() {
        let token = session_create(&user(7, "gerente"));
        let session = session_by_token(&token).unwrap();
        assert_eq!(session.idu, 7);
        assert_eq!(session.role, "gerente");
        assert!(session_by_token("unknown-token").is_none());
    }

    #[test]
    fn expired_session_is_gone() {
        let mut session = SessionStruct::new(&user(8, "admin"), 1);
        session.expires = Utc::now() - Duration::minutes(1);
        session_insert("expired-token-state-test", session);

        assert!(session_by_token("expired-token-state-test").is_none());
        assert!(!USER_AUTH.lock().unwrap().contains_key("expired-token-state-test"));
    }

    #[test]
    fn cleaner_keeps_live_sessions() {
        let mut old = SessionStruct::new(&user(9, "admin"), 1);
        old.expires = Utc::now() - Duration::hours(2);
        session_insert("expired-token-cleaner-test", old);
        let live = session_create(&user(10, "admin"));

        assert!(session_remove_expired() >= 1);
        assert!(session_by_token(&live).is_some());
    }
}
