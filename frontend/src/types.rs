use serde::{Deserialize, Serialize};

use shared::types::UserStruct;
use shared::utils::is_privileged;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Clients,
    Sheets,
    Documents,
    Payments,
    Users,
}

pub static SECTIONS: [Section; 6] = [
    Section::Dashboard,
    Section::Clients,
    Section::Sheets,
    Section::Documents,
    Section::Payments,
    Section::Users,
];

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Painel",
            Section::Clients => "Clientes",
            Section::Sheets => "Planilhas",
            Section::Documents => "Documentos",
            Section::Payments => "Boletos",
            Section::Users => "Usuários",
        }
    }

    /// Only admin and gerente see it.
    pub fn is_restricted(&self) -> bool {
        matches!(self, Section::Users)
    }

    pub fn is_visible_for(&self, role: &str) -> bool {
        !self.is_restricted() || is_privileged(role)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserStruct,
}

impl Session {
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && self.user.id != 0
    }

    pub fn is_privileged(&self) -> bool {
        is_privileged(&self.user.role)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DashboardTotals {
    pub clients: usize,
    pub payments: usize,
    pub spreadsheets: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str, id: i32, role: &str) -> Session {
        Session {
            token: token.to_string(),
            user: UserStruct { id, username: "ana".to_string(), email: "".to_string(), role: role.to_string() },
        }
    }

    #[test]
    fn session_needs_token_and_user() {
        assert!(session("abc", 3, "funcionario").is_valid());
        assert!(!session("", 3, "funcionario").is_valid());
        assert!(!session("abc", 0, "admin").is_valid());
    }

    #[test]
    fn users_section_is_gated() {
        assert!(Section::Users.is_visible_for("admin"));
        assert!(Section::Users.is_visible_for("gerente"));
        assert!(!Section::Users.is_visible_for("funcionario"));
        assert!(SECTIONS.iter().filter(|s| **s != Section::Users).all(|s| s.is_visible_for("funcionario")));
    }
}
