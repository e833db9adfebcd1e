use std::sync::Arc;

use deadpool_postgres::{Config, ManagerConfig, Object, Pool, RecyclingMethod, Runtime};
use once_cell::sync::Lazy;
use postgres_types::ToSql;
use tokio_postgres::{NoTls, Row};

use crate::config::CONFIG;
use crate::error::AppError;

static DB_POOL: Lazy<Arc<Pool>> = Lazy::new(|| {
    let p = &CONFIG.db;

    let mut cfg = Config::new();
    cfg.dbname = Some(p.db.clone());
    cfg.user = Some(p.user.clone());
    cfg.password = Some(p.password.clone());
    cfg.host = Some(p.host.clone());
    cfg.port = Some(p.port);

    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls).expect("Database pool misconfigured!");

    Arc::new(pool)
});

pub async fn db_conn() -> Result<Object, AppError> {
    DB_POOL.get().await.map_err(|err| {
        tracing::error!("db_conn: {:?}", err);
        AppError::Internal
    })
}

pub async fn db_init_schema() -> Result<(), AppError> {
    let db = db_conn().await?;
    db.batch_execute(include_str!("../sql/schema.sql")).await.map_err(|err| {
        tracing::error!("db_init_schema: {:?}", err);
        AppError::Internal
    })
}

pub async fn db_query<R>(data_from: fn(Row) -> R, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<R>, AppError>
{
    let db = db_conn().await?;
    match db.query(statement, params).await {
        Ok(result) => {
            Ok(result.into_iter().map(data_from).collect::<Vec<_>>())
        }
        Err(err) => {
            tracing::error!("db_query [statement]: {:?}", statement);
            tracing::error!("db_query [params]: {:?}", params);
            tracing::error!("db_query [error]: {:?}", err);
            Err(AppError::Internal)
        }
    }
}

pub async fn db_query_one<R>(data_from: fn(Row) -> R, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Option<R>, AppError>
{
    Ok(db_query(data_from, statement, params).await?.into_iter().next())
}

/// Returns the number of affected rows.
pub async fn db_update_query(statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64, AppError>
{
    let db = db_conn().await?;
    match db.execute(statement, params).await {
        Ok(count) => {
            Ok(count)
        }
        Err(err) => {
            tracing::error!("db_query [statement]: {:?}", statement);
            tracing::error!("db_query [params]: {:?}", params);
            tracing::error!("db_query [error]: {:?}", err);
            Err(AppError::Internal)
        }
    }
}
