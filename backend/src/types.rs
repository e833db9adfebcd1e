use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use shared::types::UserStruct;

#[derive(Debug, Deserialize)]
pub struct BilletQuery {
    #[serde(default)]
    pub token: String,
}

#[derive(Clone, Debug)]
pub struct SessionStruct {
    pub idu: i32,
    pub username: String,
    pub role: String,
    pub expires: DateTime<Utc>,
}

impl SessionStruct {
    pub fn new(user: &UserStruct, hours: i64) -> Self {
        Self {
            idu: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            expires: Utc::now() + Duration::hours(hours),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}
