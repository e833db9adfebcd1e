use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Request, RequestInit, Response};

use shared::constants::{BEARER_PREFIX, DEFAULT_API_BASE, HEADER_AUTHORIZATION, STORAGE_API_BASE};
use shared::types::ResponseKind;

use crate::elements::app_message::toast_error;
use crate::session::{current_token, session_expired};
use crate::utils::storage_get;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Sessão expirada")]
    Unauthorized,

    #[error("{1}")]
    Status(u16, String),

    #[error("Erro de conexão com o servidor")]
    Network,

    #[error("Resposta inválida do servidor")]
    Decode,
}

impl From<JsValue> for FetchError {
    fn from(err: JsValue) -> Self {
        log::error!("fetch: {:?}", err);
        FetchError::Network
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// `/api` unless local storage says otherwise.
pub fn api_base() -> String {
    storage_get(STORAGE_API_BASE)
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn api_url(path: &str) -> String {
    format!("{}/{path}", api_base())
}

pub async fn api_get<R>(path: &str) -> Result<R, FetchError>
    where R: DeserializeOwned
{
    decode(send("GET", path, None).await?)
}

pub async fn api_send<T, R>(method: &str, path: &str, data: &T) -> Result<R, FetchError>
    where
        T: Serialize,
        R: DeserializeOwned
{
    let data = serde_wasm_bindgen::to_value(data).map_err(|err| {
        log::error!("api_send: {:?}", err);
        FetchError::Decode
    })?;
    decode(send(method, path, Some(data)).await?)
}

pub async fn api_delete(path: &str) -> Result<(), FetchError> {
    send("DELETE", path, None).await.map(|_| ())
}

fn decode<R: DeserializeOwned>(data: JsValue) -> Result<R, FetchError> {
    serde_wasm_bindgen::from_value::<R>(data).map_err(|err| {
        log::error!("decode: {:?}", err);
        FetchError::Decode
    })
}

async fn send(method: &str, path: &str, data: Option<JsValue>) -> Result<JsValue, FetchError> {
    let mut opts = RequestInit::new();
    opts.method(method);
    if let Some(data) = data {
        if let Ok(data) = js_sys::JSON::stringify(&data) {
            opts.body(Some(&data));
        }
    }

    let request = Request::new_with_str_and_init(&api_url(path), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    let token = current_token();
    if let Some(token) = &token {
        request.headers().set(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}"))?;
    }

    let window = web_sys::window().ok_or(FetchError::Network)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into().map_err(|_| FetchError::Decode)?;

    let json = match resp.json() {
        Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    };

    match ResponseKind::from_status(resp.status()) {
        ResponseKind::Success => Ok(json),
        ResponseKind::Unauthorized if token.is_some() => {
            session_expired();
            Err(FetchError::Unauthorized)
        }
        _ => {
            let message = serde_wasm_bindgen::from_value::<ErrorBody>(json)
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("Erro {}", resp.status()));
            Err(FetchError::Status(resp.status(), message))
        }
    }
}

/// Runs a handler; its failure becomes an error toast.
pub fn spawn_handler<F>(future: F)
    where F: Future<Output=Result<(), FetchError>> + 'static
{
    spawn_local(async move {
        match future.await {
            Ok(()) => {}
            Err(FetchError::Unauthorized) => {}
            Err(err) => toast_error(&err.to_string()),
        }
    });
}
