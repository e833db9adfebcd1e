use tracing_subscriber::fmt::format::FmtSpan;
use warp::Filter;

use crate::config::CONFIG;
use crate::constants::test_dirs;
use crate::db::db_init_schema;
use crate::db_user::db_user_admin_init;
use crate::error::handle_rejection;
use crate::routes::api_routes;
use crate::tasks::run_tasks;

mod billet;
mod config;
mod constants;
mod db;
mod db_clients;
mod db_payments;
mod db_spreadsheets;
mod db_types;
mod db_user;
mod error;
mod filters;
mod routes;
mod state;
mod tasks;
mod types;
mod upload;
mod utils;

#[tokio::main(worker_threads = 2)]
async fn main() {
    let with_ansi = cfg!(target_os = "macos");

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(with_ansi)
        .with_max_level(CONFIG.log_level)
        .with_thread_ids(true)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing: {err}");
    }

    if db_init_schema().await.is_err() {
        tracing::error!("database unavailable, requests will fail until it is up");
    } else if let Err(err) = db_user_admin_init().await {
        tracing::error!("db_user_admin_init: {err}");
    }
    test_dirs();

    tokio::task::spawn(async {
        run_tasks().await;
    });

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["authorization", "content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    let routes_dir = warp::get().and(warp::fs::dir(CONFIG.static_dir.clone()));

    let routes = api_routes().or(routes_dir);

    tracing::info!("listening on {}:{}", CONFIG.host, CONFIG.port);
    warp::serve(
        routes
            .recover(handle_rejection)
            .with(warp::trace::request()).with(cors),
    )
        .run((CONFIG.host, CONFIG.port))
        .await;
}
