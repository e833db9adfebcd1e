use serde::de::DeserializeOwned;
use warp::{Filter, Rejection};

use shared::constants::HEADER_AUTHORIZATION;
use shared::utils::is_privileged;

use crate::error::AppError;
use crate::state::session_by_token;
use crate::types::SessionStruct;
use crate::utils::bearer_token;

pub fn with_session() -> impl Filter<Extract=(SessionStruct, ), Error=Rejection> + Clone {
    warp::header::optional::<String>(HEADER_AUTHORIZATION)
        .and_then(|header: Option<String>| async move {
            bearer_token(header.as_deref())
                .and_then(session_by_token)
                .ok_or_else(|| warp::reject::custom(AppError::Unauthorized))
        })
}

pub fn with_privileged() -> impl Filter<Extract=(SessionStruct, ), Error=Rejection> + Clone {
    with_session()
        .and_then(|session: SessionStruct| async move {
            if is_privileged(&session.role) {
                Ok(session)
            } else {
                Err(warp::reject::custom(AppError::Forbidden))
            }
        })
}

pub fn with_json<T>(limit: u64) -> impl Filter<Extract=(T, ), Error=Rejection> + Clone
    where
        T: DeserializeOwned + Send
{
    warp::body::content_length_limit(limit).and(warp::body::json())
}

#[cfg(test)]
mod tests {
    use shared::types::UserStruct;

    use super::*;
    use crate::state::session_create;

    fn user(role: &str) -> UserStruct {
        UserStruct { id: 1, username: "ana".to_string(), email: "".to_string(), role: role.to_string() }
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let res = warp::test::request().filter(&with_session()).await;
        let err = res.unwrap_err();
        assert!(matches!(err.find::<AppError>(), Some(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let res = warp::test::request()
            .header("authorization", "Bearer not-a-session")
            .filter(&with_session())
            .await;
        assert!(matches!(res.unwrap_err().find::<AppError>(), Some(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn known_token_yields_session() {
        let token = session_create(&user("funcionario"));
        let session = warp::test::request()
            .header("authorization", format!("Bearer {token}"))
            .filter(&with_session())
            .await
            .unwrap();
        assert_eq!(session.username, "ana");
    }

    #[tokio::test]
    async fn employee_is_not_privileged() {
        let token = session_create(&user("funcionario"));
        let res = warp::test::request()
            .header("authorization", format!("Bearer {token}"))
            .filter(&with_privileged())
            .await;
        assert!(matches!(res.unwrap_err().find::<AppError>(), Some(AppError::Forbidden)));

        let token = session_create(&user("gerente"));
        let res = warp::test::request()
            .header("authorization", format!("Bearer {token}"))
            .filter(&with_privileged())
            .await;
        assert!(res.is_ok());
    }
}
