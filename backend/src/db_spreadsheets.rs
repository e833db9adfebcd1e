use shared::types::{Spreadsheet, SpreadsheetSave};

use crate::db::{db_query, db_query_one, db_update_query};
use crate::db_types::{DBId, DBSpreadsheet};
use crate::error::AppError;
use crate::types::SessionStruct;

const NAME: &str = "Planilha";

fn prepare(data: &SpreadsheetSave) -> Result<(String, String), AppError> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Informe o nome da planilha".to_string()));
    }
    let content = serde_json::to_string(&data.data).map_err(|err| {
        tracing::error!("serde_json[SheetData] {:?}", err);
        AppError::Internal
    })?;
    Ok((name.to_string(), content))
}

pub async fn db_spreadsheets_select() -> Result<Vec<Spreadsheet>, AppError> {
    let rows = db_query(DBSpreadsheet::from, include_str!("../sql/select_spreadsheets.sql"), &[]).await?;
    Ok(rows.into_iter().map(Spreadsheet::from).collect())
}

pub async fn db_spreadsheet_select(id: &i32) -> Result<Spreadsheet, AppError> {
    db_query_one(DBSpreadsheet::from, include_str!("../sql/select_spreadsheet.sql"), &[id]).await?
        .map(Spreadsheet::from)
        .ok_or(AppError::NotFound(NAME))
}

pub async fn db_spreadsheet_insert(session: &SessionStruct, data: &SpreadsheetSave) -> Result<i32, AppError> {
    let (name, content) = prepare(data)?;
    db_query_one(DBId::from, include_str!("../sql/insert_spreadsheet.sql"), &[&name, &content, &session.idu]).await?
        .map(|row| row.id)
        .ok_or(AppError::Internal)
}

pub async fn db_spreadsheet_update(session: &SessionStruct, id: &i32, data: &SpreadsheetSave) -> Result<(), AppError> {
    let (name, content) = prepare(data)?;
    match db_update_query(include_str!("../sql/update_spreadsheet.sql"), &[id, &name, &content, &session.idu]).await? {
        0 => Err(AppError::NotFound(NAME)),
        _ => Ok(())
    }
}
