use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct UserStruct {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserStruct,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct CreatedId {
    pub id: i32,
}

// ===

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ClientRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub document: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub document: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl ClientForm {
    /// Empty optional fields are stored as absent.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(self.phone),
            document: self.document.trim().to_string(),
            address: non_empty(self.address),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.document.trim().is_empty()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

// ===

pub type SheetData = Vec<Vec<String>>;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Spreadsheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub data: SheetData,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SpreadsheetSave {
    pub name: String,
    pub data: SheetData,
}

// ===

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub client_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub amount: f64,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PaymentRequest {
    pub client_id: i32,
    pub amount: f64,
    pub due_date: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ===

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    Unauthorized,
    Failure,
}

impl ResponseKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => ResponseKind::Success,
            401 => ResponseKind::Unauthorized,
            _ => ResponseKind::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_classified_apart_from_other_failures() {
        assert_eq!(ResponseKind::from_status(200), ResponseKind::Success);
        assert_eq!(ResponseKind::from_status(201), ResponseKind::Success);
        assert_eq!(ResponseKind::from_status(401), ResponseKind::Unauthorized);
        assert_eq!(ResponseKind::from_status(403), ResponseKind::Failure);
        assert_eq!(ResponseKind::from_status(500), ResponseKind::Failure);
    }

    #[test]
    fn client_form_drops_blank_optionals() {
        let form = ClientForm {
            name: " Padaria Sol ".to_string(),
            email: "contato@sol.com.br".to_string(),
            phone: Some("   ".to_string()),
            document: "12.345.678/0001-90".to_string(),
            address: Some("Rua A, 10".to_string()),
        }.normalized();

        assert_eq!(form.name, "Padaria Sol");
        assert_eq!(form.phone, None);
        assert_eq!(form.address.as_deref(), Some("Rua A, 10"));
        assert!(form.is_complete());
    }

    #[test]
    fn client_record_without_phone_parses() {
        let text = r#"{"id":3,"name":"Ana","email":"ana@x.com","document":"123","phone":null}"#;
        let client: ClientRecord = serde_json::from_str(text).unwrap();
        assert_eq!(client.id, 3);
        assert_eq!(client.phone, None);
        assert_eq!(client.address, None);
    }

    #[test]
    fn new_spreadsheet_serializes_without_id() {
        let sheet = Spreadsheet { id: None, name: "Nova Planilha".to_string(), data: vec![vec!["a".to_string()]] };
        let text = serde_json::to_string(&sheet).unwrap();
        assert_eq!(text, r#"{"name":"Nova Planilha","data":[["a"]]}"#);
    }
}
