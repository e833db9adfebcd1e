use std::fs;

use crate::config::CONFIG;

pub const LIMIT_LOGIN: u64 = 1024;
pub const LIMIT_FORM: u64 = 16 * 1024;
pub const LIMIT_SHEET: u64 = 4 * 1024 * 1024;

pub fn path_to_client_dir(client_id: &i32) -> String {
    format!("{}/{client_id}", CONFIG.upload_dir)
}

pub fn path_to_document(client_id: &i32, stored_name: &str) -> String {
    format!("{}/{stored_name}", path_to_client_dir(client_id))
}

pub fn test_dirs() {
    let path_to_dir = &CONFIG.upload_dir;
    if let Err(err) = fs::create_dir_all(path_to_dir) {
        tracing::error!("test_dirs: {:?}", err);
    }
}
