use shared::types::{ClientForm, ClientRecord};

use crate::db::{db_query, db_query_one, db_update_query};
use crate::db_types::{DBClient, DBId};
use crate::error::AppError;

const NAME: &str = "Cliente";

fn check(form: ClientForm) -> Result<ClientForm, AppError> {
    let form = form.normalized();
    if form.is_complete() {
        Ok(form)
    } else {
        Err(AppError::BadRequest("Nome, e-mail e documento são obrigatórios".to_string()))
    }
}

pub async fn db_clients_select() -> Result<Vec<ClientRecord>, AppError> {
    let rows = db_query(DBClient::from, include_str!("../sql/select_clients.sql"), &[]).await?;
    Ok(rows.into_iter().map(ClientRecord::from).collect())
}

pub async fn db_client_select(id: &i32) -> Result<ClientRecord, AppError> {
    db_query_one(DBClient::from, include_str!("../sql/select_client.sql"), &[id]).await?
        .map(ClientRecord::from)
        .ok_or(AppError::NotFound(NAME))
}

pub async fn db_client_insert(form: ClientForm) -> Result<i32, AppError> {
    let form = check(form)?;
    db_query_one(DBId::from, include_str!("../sql/insert_client.sql"), &[&form.name, &form.email, &form.phone, &form.document, &form.address]).await?
        .map(|row| row.id)
        .ok_or(AppError::Internal)
}

pub async fn db_client_update(id: &i32, form: ClientForm) -> Result<(), AppError> {
    let form = check(form)?;
    match db_update_query(include_str!("../sql/update_client.sql"), &[id, &form.name, &form.email, &form.phone, &form.document, &form.address]).await? {
        0 => Err(AppError::NotFound(NAME)),
        _ => Ok(())
    }
}

pub async fn db_client_delete(id: &i32) -> Result<(), AppError> {
    match db_update_query(include_str!("../sql/delete_client.sql"), &[id]).await? {
        0 => Err(AppError::NotFound(NAME)),
        _ => Ok(())
    }
}
