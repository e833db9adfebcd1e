use crate::constants::{PRIVILEGED_ROLES, ROLES};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClientAction {
    Edit,
    Delete,
}

pub fn is_privileged(role: &str) -> bool {
    PRIVILEGED_ROLES.contains(&role)
}

pub fn is_known_role(role: &str) -> bool {
    ROLES.contains(&role)
}

pub fn client_actions(role: &str) -> Vec<ClientAction> {
    if is_privileged(role) {
        vec![ClientAction::Edit, ClientAction::Delete]
    } else {
        vec![ClientAction::Edit]
    }
}

pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// `1234.5` -> `R$ 1.234,50`
pub fn format_money(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let units = (cents / 100).to_string();

    let mut grouped = String::new();
    for (ind, ch) in units.chars().enumerate() {
        if ind > 0 && (units.len() - ind) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// Accepts `1234.56`, `1234,56`, `1.234,56` and `1.500` (thousands dot).
/// Anything else with separators, like `1,234.56` or `1.2345`, is rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    let normalized = match text.split_once(',') {
        Some((units, fraction)) if is_digits(fraction) => format!("{}.{fraction}", grouped_units(units)?),
        Some(_) => return None,
        None => match text.split_once('.') {
            Some((units, fraction)) if is_digits(units) && is_digits(fraction) && fraction.len() <= 2 => {
                format!("{units}.{fraction}")
            }
            _ => grouped_units(text)?,
        },
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// `1.234.567` -> `1234567`; groups after the first must have three digits.
fn grouped_units(text: &str) -> Option<String> {
    let mut groups = text.split('.');
    let mut units = groups.next().filter(|head| is_digits(head))?.to_string();
    let head_len = units.len();
    for group in groups {
        if head_len > 3 || group.len() != 3 || !is_digits(group) {
            return None;
        }
        units.push_str(group);
    }
    Some(units)
}

/// `2024-05-10` (optionally followed by a time part) -> `10/05/2024`.
pub fn format_date_br(iso: &str) -> String {
    let date = iso.split(['T', ' ']).next().unwrap_or_default();
    let parts = date.split('-').collect::<Vec<_>>();
    if parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
        format!("{}/{}/{}", parts[2], parts[1], parts[0])
    } else {
        iso.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_is_offered_only_to_privileged_roles() {
        assert_eq!(client_actions("admin"), vec![ClientAction::Edit, ClientAction::Delete]);
        assert_eq!(client_actions("gerente"), vec![ClientAction::Edit, ClientAction::Delete]);
        assert_eq!(client_actions("funcionario"), vec![ClientAction::Edit]);
        assert_eq!(client_actions(""), vec![ClientAction::Edit]);
        assert!(!is_privileged("Admin"));
    }

    #[test]
    fn known_roles() {
        assert!(is_known_role("funcionario"));
        assert!(!is_known_role("root"));
    }

    #[test]
    fn money_uses_brazilian_separators() {
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(7.5), "R$ 7,50");
        assert_eq!(format_money(1234.5), "R$ 1.234,50");
        assert_eq!(format_money(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_money(-12.0), "-R$ 12,00");
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("150"), Some(150.0));
        assert_eq!(parse_amount("150.25"), Some(150.25));
        assert_eq!(parse_amount("1.150,25"), Some(1150.25));
        assert_eq!(parse_amount(" 99,9 "), Some(99.9));
        assert_eq!(parse_amount("1.500"), Some(1500.0));
        assert_eq!(parse_amount("1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("1,234.56"), None);
        assert_eq!(parse_amount("1.2345"), None);
        assert_eq!(parse_amount("1234.567"), None);
        assert_eq!(parse_amount("1,2,3"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn cents_conversion_rounds() {
        assert_eq!(to_cents(19.999), 2000);
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(from_cents(12345), 123.45);
    }

    #[test]
    fn dates_are_shown_day_first() {
        assert_eq!(format_date_br("2024-05-10"), "10/05/2024");
        assert_eq!(format_date_br("2024-05-10T00:00:00"), "10/05/2024");
        assert_eq!(format_date_br("amanhã"), "amanhã");
    }
}
