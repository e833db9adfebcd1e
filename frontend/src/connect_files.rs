use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, FormData, ProgressEvent, XmlHttpRequest};

use shared::constants::{API_DOCUMENTS, BEARER_PREFIX, HEADER_AUTHORIZATION};
use shared::types::{ApiMessage, ResponseKind};

use crate::connect_fetch::api_url;
use crate::session::{current_token, session_expired};
use crate::utils::string_to_obj;

/// Multipart upload with progress reporting.
pub fn connect_files(form: &FormData, progress: fn(u32), full: fn(Result<(), String>)) {
    let Some(token) = current_token() else {
        return;
    };
    if let Ok(xhr) = XmlHttpRequest::new() {
        if xhr.open_with_async("POST", &api_url(API_DOCUMENTS), true).is_err() {
            full(Err("Falha ao enviar o documento".to_string()));
            return;
        }
        xhr.set_request_header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}")).ok();

        if let Ok(upload) = xhr.upload() {
            let onprogress_callback = Closure::<dyn FnMut(_)>::new(move |e: ProgressEvent| {
                if e.total() > 0.0 {
                    let value = (e.loaded() / e.total() * 100.0).round() as u32;
                    progress(value.min(100));
                }
            });
            upload.set_onprogress(Some(onprogress_callback.as_ref().unchecked_ref()));
            onprogress_callback.forget();
        }

        let onerror_callback = Closure::<dyn FnMut(_)>::new(move |_e: ErrorEvent| {
            log::error!("[connect_files]");
            full(Err("Erro de conexão com o servidor".to_string()));
        });
        xhr.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
        onerror_callback.forget();

        let xhr_load = xhr.clone();
        let onload_callback = Closure::<dyn FnMut()>::new(move || {
            let status = xhr_load.status().unwrap_or_default();
            match ResponseKind::from_status(status) {
                ResponseKind::Success => full(Ok(())),
                ResponseKind::Unauthorized => session_expired(),
                ResponseKind::Failure => {
                    let message = xhr_load.response_text().ok().flatten()
                        .and_then(|text| string_to_obj::<ApiMessage>(&text))
                        .map(|body| body.message)
                        .unwrap_or_else(|| format!("Erro {status}"));
                    full(Err(message));
                }
            }
        });
        xhr.set_onload(Some(onload_callback.as_ref().unchecked_ref()));
        onload_callback.forget();

        if xhr.send_with_opt_form_data(Some(form)).is_err() {
            full(Err("Falha ao enviar o documento".to_string()));
        }
    }
}
