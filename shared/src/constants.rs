
pub static ROOT_API: &'static str = "api";
pub static DEFAULT_API_BASE: &'static str = "/api";

pub static API_HEALTH: &'static str = "health";
pub static API_LOGIN: &'static str = "login";
pub static API_REGISTER: &'static str = "register";
pub static API_USERS: &'static str = "users";
pub static API_CLIENTS: &'static str = "clients";
pub static API_SPREADSHEETS: &'static str = "spreadsheets";
pub static API_DOCUMENTS: &'static str = "documents";
pub static API_PAYMENTS: &'static str = "payments";
pub static API_BILLET: &'static str = "billet";

pub static HEADER_AUTHORIZATION: &'static str = "Authorization";
pub static BEARER_PREFIX: &'static str = "Bearer ";

pub static ROLE_ADMIN: &'static str = "admin";
pub static ROLE_MANAGER: &'static str = "gerente";
pub static ROLE_EMPLOYEE: &'static str = "funcionario";

pub static ROLES: [&'static str; 3] = ["admin", "gerente", "funcionario"];
pub static PRIVILEGED_ROLES: [&'static str; 2] = ["admin", "gerente"];

pub static STORAGE_TOKEN: &'static str = "token";
pub static STORAGE_USER: &'static str = "user";
pub static STORAGE_API_BASE: &'static str = "api_base";

pub static FORM_FILE: &'static str = "file";
pub static FORM_CLIENT_ID: &'static str = "client_id";
pub static FORM_DESCRIPTION: &'static str = "description";

pub const GRID_DEFAULT_COLS: usize = 10;
pub const GRID_DEFAULT_ROWS: usize = 50;

pub const MESSAGE_TIMEOUT_MS: u32 = 3000;
pub const DOCUMENT_MAX_SIZE: u64 = 20 * 1024 * 1024;
