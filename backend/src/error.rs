use std::convert::Infallible;

use thiserror::Error;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

use shared::types::ApiMessage;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Sessão expirada")]
    Unauthorized,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Acesso negado")]
    Forbidden,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Erro interno")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reject for AppError {}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(app_err) = err.find::<AppError>() {
        (app_err.status(), app_err.to_string())
    } else if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        tracing::warn!("body: {body_err}");
        (StatusCode::BAD_REQUEST, "Dados inválidos".to_string())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Parâmetros inválidos".to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Arquivo muito grande".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Formato não suportado".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Método não permitido".to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Não encontrado".to_string())
    } else {
        tracing::error!("unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, AppError::Internal.to_string())
    };

    Ok(warp::reply::with_status(warp::reply::json(&ApiMessage { message }), status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Conflict("x".to_string()).status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound("Cliente").to_string(), "Cliente não encontrado");
    }

    #[tokio::test]
    async fn custom_rejection_becomes_json_message() {
        let reply = handle_rejection(AppError::Forbidden.into()).await.unwrap().into_response();
        assert_eq!(reply.status(), StatusCode::FORBIDDEN);

        let reply = handle_rejection(warp::reject::not_found()).await.unwrap().into_response();
        assert_eq!(reply.status(), StatusCode::NOT_FOUND);
    }
}
