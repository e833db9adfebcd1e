use std::error::Error as StdError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, Type};

use shared::types::{ClientRecord, Payment, SheetData, Spreadsheet, UserStruct};
use shared::utils::from_cents;

#[derive(Debug, Clone)]
pub struct DBUser {
    pub idu: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<Row> for DBUser {
    fn from(row: Row) -> Self {
        Self {
            idu: row.get("idu"),
            username: row.get("username"),
            email: row.get("email"),
            role: row.get("role"),
        }
    }
}

impl From<DBUser> for UserStruct {
    fn from(row: DBUser) -> Self {
        Self {
            id: row.idu,
            username: row.username,
            email: row.email,
            role: row.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DBUserAuth {
    pub user: DBUser,
    pub password_hash: String,
    pub salt: String,
}

impl From<Row> for DBUserAuth {
    fn from(row: Row) -> Self {
        Self {
            password_hash: row.get("password_hash"),
            salt: row.get("salt"),
            user: DBUser::from(row),
        }
    }
}

// ===

#[derive(Debug, Clone)]
pub struct DBClient {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: String,
    pub address: Option<String>,
}

impl From<Row> for DBClient {
    fn from(row: Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            phone: row.get("phone"),
            document: row.get("document"),
            address: row.get("address"),
        }
    }
}

impl From<DBClient> for ClientRecord {
    fn from(row: DBClient) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            document: row.document,
            address: row.address,
        }
    }
}

// ===

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DBSheetData(pub SheetData);

impl<'a> FromSql<'a> for DBSheetData {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<DBSheetData, Box<(dyn StdError + Send + Sync + 'static)>> {
        // jsonb is prefixed with a one-byte format version
        match serde_json::from_slice::<SheetData>(raw.get(1..).unwrap_or_default()) {
            Ok(data) => Ok(DBSheetData(data)),
            Err(err) => {
                tracing::error!("from_sql DBSheetData {:?}", err);
                Ok(DBSheetData::default())
            }
        }
    }
    fn accepts(ty: &Type) -> bool {
        ty == &Type::JSONB
    }
}

#[derive(Debug, Clone)]
pub struct DBSpreadsheet {
    pub id: i32,
    pub name: String,
    pub data: DBSheetData,
}

impl From<Row> for DBSpreadsheet {
    fn from(row: Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            data: row.get("data"),
        }
    }
}

impl From<DBSpreadsheet> for Spreadsheet {
    fn from(row: DBSpreadsheet) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            data: row.data.0,
        }
    }
}

// ===

#[derive(Debug, Clone)]
pub struct DBPayment {
    pub id: i32,
    pub client_id: i32,
    pub client_name: String,
    pub client_document: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

impl From<Row> for DBPayment {
    fn from(row: Row) -> Self {
        Self {
            id: row.get("id"),
            client_id: row.get("client_id"),
            client_name: row.get("client_name"),
            client_document: row.get("client_document"),
            amount_cents: row.get("amount_cents"),
            due_date: row.get("due_date"),
            description: row.get("description"),
        }
    }
}

impl From<DBPayment> for Payment {
    fn from(row: DBPayment) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            client_name: Some(row.client_name),
            amount: from_cents(row.amount_cents),
            due_date: row.due_date.format("%Y-%m-%d").to_string(),
            description: row.description,
        }
    }
}

// ===

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DBCount {
    pub count: i64,
}

impl From<Row> for DBCount {
    fn from(row: Row) -> Self {
        Self {
            count: row.get("count"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DBId {
    pub id: i32,
}

impl From<Row> for DBId {
    fn from(row: Row) -> Self {
        Self {
            id: row.get("id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonb_sheet_skips_version_byte() {
        let mut raw = vec![1u8];
        raw.extend_from_slice(br#"[["a","b"],["c"]]"#);
        let data = DBSheetData::from_sql(&Type::JSONB, &raw).unwrap();
        assert_eq!(data.0, vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
    }

    #[test]
    fn broken_jsonb_sheet_is_empty() {
        let data = DBSheetData::from_sql(&Type::JSONB, &[1u8, b'{']).unwrap();
        assert!(data.0.is_empty());
    }

    #[test]
    fn payment_row_maps_to_wire_type() {
        let payment = Payment::from(DBPayment {
            id: 4,
            client_id: 2,
            client_name: "Padaria Sol".to_string(),
            client_document: "123".to_string(),
            amount_cents: 15075,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            description: None,
        });
        assert_eq!(payment.amount, 150.75);
        assert_eq!(payment.due_date, "2024-05-10");
        assert_eq!(payment.client_name.as_deref(), Some("Padaria Sol"));
    }
}
