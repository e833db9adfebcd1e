use std::{env, fmt::Display, net::Ipv4Addr, str::FromStr};

use once_cell::sync::Lazy;
use tracing::{info, warn, Level};

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub log_level: Level,
    pub db: DBParams,
    pub upload_dir: String,
    pub static_dir: String,
    pub session_hours: i64,
    pub admin_user: String,
    pub admin_password: String,
    pub bank_code: String,
    pub payee: String,
}

pub struct DBParams {
    pub db: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("CONTABIL_HOST", "127.0.0.1"),
            port: try_load("CONTABIL_PORT", "3031"),
            log_level: try_load("CONTABIL_LOG", "info"),
            db: DBParams {
                db: try_load("PG_DB", "contabil"),
                user: try_load("PG_USER", "contabil"),
                password: secret("PG_PASSWORD"),
                host: try_load("PG_HOST", "127.0.0.1"),
                port: try_load("PG_PORT", "5432"),
            },
            upload_dir: try_load("CONTABIL_UPLOAD_DIR", "./uploads"),
            static_dir: try_load("CONTABIL_STATIC_DIR", "./frontend/dist"),
            session_hours: try_load("CONTABIL_SESSION_HOURS", "12"),
            admin_user: try_load("CONTABIL_ADMIN_USER", "admin"),
            admin_password: secret("CONTABIL_ADMIN_PASSWORD"),
            bank_code: try_load("CONTABIL_BANK_CODE", "001"),
            payee: try_load("CONTABIL_PAYEE", "Escritório de Contabilidade"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Secrets are never echoed to the log and default to empty.
fn secret(key: &str) -> String {
    env::var(key).map(|s| s.trim().to_string()).unwrap_or_else(|_| {
        warn!("{key} not set");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let port: u16 = try_load("CONTABIL_TEST_UNSET_PORT", "3031");
        assert_eq!(port, 3031);
    }

    #[test]
    fn reads_environment() {
        env::set_var("CONTABIL_TEST_SESSION_HOURS", "48");
        let hours: i64 = try_load("CONTABIL_TEST_SESSION_HOURS", "12");
        assert_eq!(hours, 48);
    }

    #[test]
    fn parses_log_level() {
        let level: Level = try_load("CONTABIL_TEST_UNSET_LOG", "debug");
        assert_eq!(level, Level::DEBUG);
    }

    #[test]
    #[should_panic(expected = "Environment misconfigured!")]
    fn rejects_garbage() {
        env::set_var("CONTABIL_TEST_BAD_PORT", "not-a-port");
        let _: u16 = try_load("CONTABIL_TEST_BAD_PORT", "3031");
    }
}
