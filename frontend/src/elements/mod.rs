pub mod app_body;
pub mod app_header;
pub mod app_login;
pub mod app_message;
pub mod app_root;
