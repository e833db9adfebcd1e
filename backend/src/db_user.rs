use shared::constants::ROLE_ADMIN;
use shared::types::{RegisterRequest, UserStruct};
use shared::utils::is_known_role;

use crate::config::CONFIG;
use crate::db::{db_query, db_query_one};
use crate::db_types::{DBCount, DBId, DBUser, DBUserAuth};
use crate::error::AppError;
use crate::utils::{new_salt, password_hash};

pub async fn db_user_login(username: &str, password: &str) -> Result<Option<UserStruct>, AppError> {
    let row = db_query_one(DBUserAuth::from, include_str!("../sql/select_user_login.sql"), &[&username]).await?;
    Ok(row
        .filter(|row| row.password_hash == password_hash(&row.salt, password))
        .map(|row| UserStruct::from(row.user)))
}

pub async fn db_user_list() -> Result<Vec<UserStruct>, AppError> {
    let rows = db_query(DBUser::from, include_str!("../sql/select_users.sql"), &[]).await?;
    Ok(rows.into_iter().map(UserStruct::from).collect())
}

pub async fn db_user_register(data: &RegisterRequest) -> Result<i32, AppError> {
    let username = data.username.trim();
    if username.is_empty() || data.password.is_empty() {
        return Err(AppError::BadRequest("Usuário e senha são obrigatórios".to_string()));
    }
    if !is_known_role(&data.role) {
        return Err(AppError::BadRequest(format!("Perfil desconhecido: {}", data.role)));
    }
    let salt = new_salt();
    let hash = password_hash(&salt, &data.password);
    let email = data.email.trim();

    let row = db_query_one(DBId::from, include_str!("../sql/insert_user.sql"), &[&username, &email, &hash, &salt, &data.role]).await?;
    match row {
        Some(row) => Ok(row.id),
        None => Err(AppError::Conflict(format!("Usuário {username} já existe"))),
    }
}

/// Seeds the first administrator on an empty users table.
pub async fn db_user_admin_init() -> Result<(), AppError> {
    let count = db_query_one(DBCount::from, include_str!("../sql/count_users.sql"), &[]).await?
        .map(|row| row.count)
        .unwrap_or_default();
    if count > 0 {
        return Ok(());
    }
    if CONFIG.admin_password.is_empty() {
        tracing::warn!("no users and CONTABIL_ADMIN_PASSWORD is empty, nobody can log in");
        return Ok(());
    }
    let idu = db_user_register(&RegisterRequest {
        username: CONFIG.admin_user.clone(),
        email: "".to_string(),
        password: CONFIG.admin_password.clone(),
        role: ROLE_ADMIN.to_string(),
    }).await?;
    tracing::info!("administrator {} created with id {idu}", CONFIG.admin_user);
    Ok(())
}
