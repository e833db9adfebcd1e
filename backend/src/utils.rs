use std::fmt::LowerHex;

use sha2::{Digest, Sha512};
use uuid::Uuid;

use shared::constants::BEARER_PREFIX;

pub fn get_hash(text: String) -> String {
    format!("{:x}", hash_prepare(text))
}

fn hash_prepare(text: String) -> impl LowerHex {
    let mut hasher = Sha512::new();
    hasher.update(text);
    hasher.finalize()
}

pub fn new_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn password_hash(salt: &str, password: &str) -> String {
    get_hash(format!("{salt}:{password}"))
}

pub fn new_token(idu: &i32) -> String {
    get_hash(format!("{}-{idu}-{}", Uuid::new_v4(), chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()))
}

pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Only `.` followed by ASCII alphanumerics is kept.
pub fn get_file_ext(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => {
            let ext = &file_name[pos + 1..];
            if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                format!(".{}", ext.to_ascii_lowercase())
            } else {
                "".to_string()
            }
        }
        _ => "".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_depends_on_salt() {
        let a = password_hash("s1", "segredo");
        assert_eq!(a, password_hash("s1", "segredo"));
        assert_ne!(a, password_hash("s2", "segredo"));
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(new_token(&1), new_token(&1));
    }

    #[test]
    fn bearer_header() {
        assert_eq!(bearer_token(Some("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(Some("Basic abc")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_html("Ação"), "Ação");
    }

    #[test]
    fn file_ext() {
        assert_eq!(get_file_ext("nota.PDF"), ".pdf");
        assert_eq!(get_file_ext("arquivo"), "");
        assert_eq!(get_file_ext(".env"), "");
        assert_eq!(get_file_ext("a.x/../../etc"), "");
        assert_eq!(get_file_ext("nota."), "");
        assert_eq!(get_file_ext("foto.jp g"), "");
    }
}
