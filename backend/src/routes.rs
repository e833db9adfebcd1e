use warp::http::StatusCode;
use warp::multipart::FormData;
use warp::{reply, Filter, Rejection, Reply};

use shared::constants::{API_BILLET, API_CLIENTS, API_DOCUMENTS, API_HEALTH, API_LOGIN, API_PAYMENTS, API_REGISTER, API_SPREADSHEETS, API_USERS, DOCUMENT_MAX_SIZE, ROOT_API};
use shared::types::{ApiMessage, ClientForm, CreatedId, LoginRequest, LoginResponse, PaymentRequest, RegisterRequest, SpreadsheetSave};

use crate::billet::{billet_page, Billet};
use crate::config::CONFIG;
use crate::constants::{LIMIT_FORM, LIMIT_LOGIN, LIMIT_SHEET};
use crate::db_clients::{db_client_delete, db_client_insert, db_client_select, db_client_update, db_clients_select};
use crate::db_payments::{db_client_payments_select, db_payment_insert, db_payment_select, db_payments_select};
use crate::db_spreadsheets::{db_spreadsheet_insert, db_spreadsheet_select, db_spreadsheet_update, db_spreadsheets_select};
use crate::db_user::{db_user_list, db_user_login, db_user_register};
use crate::error::AppError;
use crate::filters::{with_json, with_privileged, with_session};
use crate::state::{session_by_token, session_create};
use crate::types::{BilletQuery, SessionStruct};
use crate::upload::{documents_remove, upload};

fn created(id: i32) -> reply::WithStatus<reply::Json> {
    reply::with_status(reply::json(&CreatedId { id }), StatusCode::CREATED)
}

fn message(text: &str) -> reply::Json {
    reply::json(&ApiMessage::new(text))
}

pub fn api_routes() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    warp::path(ROOT_API).and(
        routes_session()
            .or(routes_clients())
            .or(routes_spreadsheets())
            .or(routes_payments())
            .or(routes_documents())
    )
}

fn routes_session() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    let health = warp::path(API_HEALTH)
        .and(warp::path::end())
        .and(warp::get())
        .map(|| reply::json(&serde_json::json!({ "status": "Backend rodando com sucesso!" })));

    let login = warp::path(API_LOGIN)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_json::<LoginRequest>(LIMIT_LOGIN))
        .and_then(route_login);

    let register = warp::path(API_REGISTER)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_privileged())
        .and(with_json::<RegisterRequest>(LIMIT_FORM))
        .and_then(route_register);

    let users = warp::path(API_USERS)
        .and(warp::path::end())
        .and(warp::get())
        .and(with_privileged())
        .and_then(route_users);

    health.or(login).or(register).or(users)
}

fn routes_clients() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    let list = warp::path(API_CLIENTS)
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_clients);

    let create = warp::path(API_CLIENTS)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_session())
        .and(with_json::<ClientForm>(LIMIT_FORM))
        .and_then(route_client_create);

    let item = warp::path(API_CLIENTS)
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_client);

    let update = warp::path(API_CLIENTS)
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(with_session())
        .and(with_json::<ClientForm>(LIMIT_FORM))
        .and_then(route_client_update);

    let delete = warp::path(API_CLIENTS)
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_privileged())
        .and_then(route_client_delete);

    let payments = warp::path(API_CLIENTS)
        .and(warp::path::param::<i32>())
        .and(warp::path(API_PAYMENTS))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_client_payments);

    list.or(create).or(item).or(update).or(delete).or(payments)
}

fn routes_spreadsheets() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    let list = warp::path(API_SPREADSHEETS)
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_spreadsheets);

    let create = warp::path(API_SPREADSHEETS)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_session())
        .and(with_json::<SpreadsheetSave>(LIMIT_SHEET))
        .and_then(route_spreadsheet_create);

    let item = warp::path(API_SPREADSHEETS)
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_spreadsheet);

    let update = warp::path(API_SPREADSHEETS)
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(with_session())
        .and(with_json::<SpreadsheetSave>(LIMIT_SHEET))
        .and_then(route_spreadsheet_update);

    list.or(create).or(item).or(update)
}

fn routes_payments() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    let list = warp::path(API_PAYMENTS)
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and_then(route_payments);

    let create = warp::path(API_PAYMENTS)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_session())
        .and(with_json::<PaymentRequest>(LIMIT_FORM))
        .and_then(route_payment_create);

    let billet = warp::path(API_PAYMENTS)
        .and(warp::path::param::<i32>())
        .and(warp::path(API_BILLET))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<BilletQuery>())
        .and_then(route_billet);

    list.or(create).or(billet)
}

fn routes_documents() -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    warp::path(API_DOCUMENTS)
        .and(warp::path::end())
        .and(warp::post())
        .and(with_session())
        .and(warp::multipart::form().max_length(DOCUMENT_MAX_SIZE))
        .and_then(route_document)
}

// ===

pub async fn route_login(data: LoginRequest) -> Result<impl Reply, Rejection> {
    let user = db_user_login(data.username.trim(), &data.password).await?
        .ok_or(AppError::InvalidCredentials)?;
    let access_token = session_create(&user);
    tracing::info!("login: {}", user.username);
    Ok(reply::json(&LoginResponse { access_token, user }))
}

pub async fn route_register(session: SessionStruct, data: RegisterRequest) -> Result<impl Reply, Rejection> {
    let idu = db_user_register(&data).await?;
    tracing::info!("user {} ({idu}) created by {}", data.username, session.username);
    Ok(reply::with_status(message("Usuário criado com sucesso"), StatusCode::CREATED))
}

pub async fn route_users(_session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_user_list().await?))
}

// ===

pub async fn route_clients(_session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_clients_select().await?))
}

pub async fn route_client(id: i32, _session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_client_select(&id).await?))
}

pub async fn route_client_create(_session: SessionStruct, data: ClientForm) -> Result<impl Reply, Rejection> {
    Ok(created(db_client_insert(data).await?))
}

pub async fn route_client_update(id: i32, _session: SessionStruct, data: ClientForm) -> Result<impl Reply, Rejection> {
    db_client_update(&id, data).await?;
    Ok(message("Cliente atualizado"))
}

pub async fn route_client_delete(id: i32, session: SessionStruct) -> Result<impl Reply, Rejection> {
    db_client_delete(&id).await?;
    documents_remove(&id).await;
    tracing::info!("client {id} deleted by {}", session.username);
    Ok(message("Cliente excluído"))
}

pub async fn route_client_payments(id: i32, _session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_client_payments_select(&id).await?))
}

// ===

pub async fn route_spreadsheets(_session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_spreadsheets_select().await?))
}

pub async fn route_spreadsheet(id: i32, _session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_spreadsheet_select(&id).await?))
}

pub async fn route_spreadsheet_create(session: SessionStruct, data: SpreadsheetSave) -> Result<impl Reply, Rejection> {
    Ok(created(db_spreadsheet_insert(&session, &data).await?))
}

pub async fn route_spreadsheet_update(id: i32, session: SessionStruct, data: SpreadsheetSave) -> Result<impl Reply, Rejection> {
    db_spreadsheet_update(&session, &id, &data).await?;
    Ok(message("Planilha salva"))
}

// ===

pub async fn route_payments(_session: SessionStruct) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&db_payments_select().await?))
}

pub async fn route_payment_create(_session: SessionStruct, data: PaymentRequest) -> Result<impl Reply, Rejection> {
    Ok(created(db_payment_insert(&data).await?))
}

pub async fn route_billet(id: i32, q: BilletQuery) -> Result<impl Reply, Rejection> {
    session_by_token(&q.token).ok_or(AppError::Unauthorized)?;
    let payment = db_payment_select(&id).await?;
    let billet = Billet::for_payment(&CONFIG.bank_code, &payment).ok_or_else(|| {
        tracing::error!("billet: payment {id} does not fit the barcode layout");
        AppError::Internal
    })?;
    Ok(reply::html(billet_page(&payment, &billet)))
}

// ===

pub async fn route_document(session: SessionStruct, form: FormData) -> Result<impl Reply, Rejection> {
    let id = upload(&session, form).await?;
    tracing::info!("document {id} uploaded by {}", session.username);
    Ok(created(id))
}

#[cfg(test)]
mod tests {
    use shared::types::UserStruct;

    use super::*;
    use crate::error::handle_rejection;

    fn token(role: &str) -> String {
        session_create(&UserStruct { id: 2, username: "bia".to_string(), email: "".to_string(), role: role.to_string() })
    }

    #[tokio::test]
    async fn health_needs_no_session() {
        let api = api_routes().recover(handle_rejection);
        let res = warp::test::request().method("GET").path("/api/health").reply(&api).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn resources_require_session() {
        let api = api_routes().recover(handle_rejection);
        for (method, path) in [("GET", "/api/clients"), ("GET", "/api/clients/1"), ("DELETE", "/api/clients/1"),
            ("GET", "/api/spreadsheets"), ("PUT", "/api/spreadsheets/1"), ("GET", "/api/payments"),
            ("POST", "/api/documents"), ("GET", "/api/payments/1/billet")] {
            let res = warp::test::request().method(method).path(path).reply(&api).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{method} {path}");
        }
    }

    #[tokio::test]
    async fn unauthorized_body_carries_message() {
        let api = api_routes().recover(handle_rejection);
        let res = warp::test::request().method("GET").path("/api/clients").reply(&api).await;
        let body: ApiMessage = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.message, "Sessão expirada");
    }

    #[tokio::test]
    async fn employee_cannot_register_users_or_delete_clients() {
        let api = api_routes().recover(handle_rejection);
        let token = token("funcionario");

        let res = warp::test::request()
            .method("POST")
            .path("/api/register")
            .header("authorization", format!("Bearer {token}"))
            .json(&RegisterRequest { username: "x".to_string(), email: "".to_string(), password: "y".to_string(), role: "admin".to_string() })
            .reply(&api)
            .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = warp::test::request()
            .method("DELETE")
            .path("/api/clients/5")
            .header("authorization", format!("Bearer {token}"))
            .reply(&api)
            .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = warp::test::request()
            .method("GET")
            .path("/api/users")
            .header("authorization", format!("Bearer {token}"))
            .reply(&api)
            .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn malformed_login_is_bad_request() {
        let api = api_routes().recover(handle_rejection);
        let res = warp::test::request()
            .method("POST")
            .path("/api/login")
            .header("content-type", "application/json")
            .body("{\"username\": 1}")
            .reply(&api)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let api = api_routes().recover(handle_rejection);
        let res = warp::test::request().method("GET").path("/api/ledger").reply(&api).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
