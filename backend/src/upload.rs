use bytes::Buf;
use futures_util::TryStreamExt;
use tokio::fs;
use uuid::Uuid;
use warp::multipart::{FormData, Part};

use shared::constants::{FORM_CLIENT_ID, FORM_DESCRIPTION, FORM_FILE};

use crate::constants::{path_to_client_dir, path_to_document};
use crate::db::db_query_one;
use crate::db_clients::db_client_select;
use crate::db_types::DBId;
use crate::error::AppError;
use crate::types::SessionStruct;
use crate::utils::get_file_ext;

#[derive(Debug, Default)]
pub struct DocumentUpload {
    pub client_id: Option<i32>,
    pub description: String,
    pub file_name: String,
    pub content: Vec<u8>,
}

impl DocumentUpload {
    pub fn is_complete(&self) -> bool {
        self.client_id.unwrap_or_default() > 0 && !self.file_name.is_empty() && !self.content.is_empty()
    }
}

pub async fn upload(session: &SessionStruct, form: FormData) -> Result<i32, AppError> {
    let parts: Vec<Part> = form.try_collect().await.map_err(|e| {
        tracing::warn!("files_handler: {}", e);
        AppError::BadRequest("Formulário inválido".to_string())
    })?;

    let mut data = DocumentUpload::default();
    for p in parts {
        let name = p.name().to_string();
        match name.as_str() {
            n if n == FORM_CLIENT_ID => {
                data.client_id = part_as_string(p).await?.trim().parse::<i32>().ok();
            }
            n if n == FORM_DESCRIPTION => {
                data.description = part_as_string(p).await?.trim().to_string();
            }
            n if n == FORM_FILE => {
                data.file_name = p.filename().unwrap_or_default().to_string();
                data.content = part_as_bytes(p).await?;
            }
            _ => {}
        }
    }

    if !data.is_complete() {
        return Err(AppError::BadRequest("Selecione um cliente e um arquivo".to_string()));
    }
    store(session, data).await
}

async fn store(session: &SessionStruct, data: DocumentUpload) -> Result<i32, AppError> {
    let client_id = data.client_id.unwrap_or_default();
    db_client_select(&client_id).await?;

    let stored_name = format!("{}{}", Uuid::new_v4(), get_file_ext(&data.file_name));
    let content_type = mime_guess::from_path(&data.file_name).first_or_octet_stream().to_string();
    let size = data.content.len() as i64;

    fs::create_dir_all(path_to_client_dir(&client_id)).await.map_err(io_error)?;
    fs::write(path_to_document(&client_id, &stored_name), &data.content).await.map_err(io_error)?;

    let row = db_query_one(
        DBId::from,
        include_str!("../sql/insert_document.sql"),
        &[&client_id, &data.description, &data.file_name, &stored_name, &content_type, &size, &session.idu],
    ).await;

    match row {
        Ok(Some(row)) => Ok(row.id),
        Ok(None) | Err(_) => {
            fs::remove_file(path_to_document(&client_id, &stored_name)).await.ok();
            Err(AppError::Internal)
        }
    }
}

/// Drops every stored file of a client; a missing folder is not an error.
pub async fn documents_remove(client_id: &i32) {
    match fs::remove_dir_all(path_to_client_dir(client_id)).await {
        Ok(()) => tracing::info!("documents of client {client_id} removed"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => tracing::error!("documents_remove: {:?}", err),
    }
}

fn io_error(err: std::io::Error) -> AppError {
    tracing::error!("upload: {:?}", err);
    AppError::Internal
}

async fn part_as_bytes(p: Part) -> Result<Vec<u8>, AppError> {
    p.stream()
        .try_fold(Vec::new(), |mut acc, buf| async move {
            acc.extend_from_slice(buf.chunk());
            Ok(acc)
        })
        .await
        .map_err(|e| {
            tracing::warn!("part_as_bytes: {}", e);
            AppError::BadRequest("Falha ao receber o arquivo".to_string())
        })
}

async fn part_as_string(p: Part) -> Result<String, AppError> {
    Ok(String::from_utf8_lossy(&part_as_bytes(p).await?).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_needs_client_and_file() {
        let mut data = DocumentUpload::default();
        assert!(!data.is_complete());
        data.client_id = Some(3);
        data.file_name = "nota.pdf".to_string();
        assert!(!data.is_complete());
        data.content = vec![1, 2, 3];
        assert!(data.is_complete());
        data.client_id = Some(0);
        assert!(!data.is_complete());
    }

    #[tokio::test]
    async fn client_folder_is_removed() {
        let client_id = 990_001;
        fs::create_dir_all(path_to_client_dir(&client_id)).await.unwrap();
        fs::write(path_to_document(&client_id, "a.pdf"), b"%PDF").await.unwrap();

        documents_remove(&client_id).await;
        assert!(fs::metadata(path_to_client_dir(&client_id)).await.is_err());

        documents_remove(&client_id).await;
    }
}
