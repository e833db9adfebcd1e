//! Boleto barcode and digitable line (FEBRABAN layout).
//!
//! Barcode, 44 digits:
//! bank(3) currency(1) check(1) due factor(4) amount(10) free field(25).
//!
//! Digitable line, 47 digits in five fields; the first three carry their
//! own modulo 10 check digit, the fourth repeats the barcode check digit.

use chrono::NaiveDate;

use shared::utils::{format_date_br, format_money, from_cents};

use crate::config::CONFIG;
use crate::db_types::DBPayment;
use crate::utils::escape_html;

const CURRENCY_REAL: char = '9';

fn factor_base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 10, 7).expect("valid base date")
}

/// Days since 1997-10-07; after 9999 the count restarts at 1000.
pub fn due_date_factor(due: NaiveDate) -> u32 {
    let days = (due - factor_base()).num_days().max(0) as u32;
    if days <= 9999 {
        days
    } else {
        (days - 10000) % 9000 + 1000
    }
}

fn digits(text: &str) -> impl DoubleEndedIterator<Item=u32> + '_ {
    text.chars().filter_map(|c| c.to_digit(10))
}

pub fn mod10(text: &str) -> u32 {
    let sum: u32 = digits(text).rev().enumerate()
        .map(|(ind, d)| {
            let v = if ind % 2 == 0 { d * 2 } else { d };
            v / 10 + v % 10
        })
        .sum();
    (10 - sum % 10) % 10
}

pub fn mod11(text: &str) -> u32 {
    let sum: u32 = digits(text).rev().enumerate()
        .map(|(ind, d)| d * (ind as u32 % 8 + 2))
        .sum();
    match 11 - sum % 11 {
        0 | 10 | 11 => 1,
        dv => dv,
    }
}

fn all_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.chars().all(|c| c.is_ascii_digit())
}

pub fn build_barcode(bank_code: &str, factor: u32, amount_cents: i64, free_field: &str) -> Option<String> {
    if !all_digits(bank_code, 3) || !all_digits(free_field, 25) || factor > 9999 || !(0..=9_999_999_999).contains(&amount_cents) {
        return None;
    }
    let body = format!("{bank_code}{CURRENCY_REAL}{factor:04}{amount_cents:010}{free_field}");
    let dv = mod11(&body);
    Some(format!("{}{dv}{}", &body[..4], &body[4..]))
}

pub fn digitable_line(barcode: &str) -> String {
    let field_1 = format!("{}{}", &barcode[0..4], &barcode[19..24]);
    let field_1 = format!("{field_1}{}", mod10(&field_1));
    let field_2 = format!("{}{}", &barcode[24..34], mod10(&barcode[24..34]));
    let field_3 = format!("{}{}", &barcode[34..44], mod10(&barcode[34..44]));
    format!(
        "{}.{} {}.{} {}.{} {} {}",
        &field_1[..5], &field_1[5..],
        &field_2[..5], &field_2[5..],
        &field_3[..5], &field_3[5..],
        &barcode[4..5],
        &barcode[5..19]
    )
}

pub fn free_field(client_id: i32, payment_id: i32) -> String {
    format!("{:011}{:014}", client_id.max(0), payment_id.max(0))
}

#[derive(Debug, Clone)]
pub struct Billet {
    pub barcode: String,
    pub digitable_line: String,
}

impl Billet {
    pub fn for_payment(bank_code: &str, payment: &DBPayment) -> Option<Self> {
        let barcode = build_barcode(
            bank_code,
            due_date_factor(payment.due_date),
            payment.amount_cents,
            &free_field(payment.client_id, payment.id),
        )?;
        Some(Self { digitable_line: digitable_line(&barcode), barcode })
    }
}

pub fn billet_page(payment: &DBPayment, billet: &Billet) -> String {
    let due_date = format_date_br(&payment.due_date.format("%Y-%m-%d").to_string());
    let amount = format_money(from_cents(payment.amount_cents));
    let description = payment.description.clone().unwrap_or_else(|| "Pagamento".to_string());
    format!(
        include_str!("../templates/billet.html"),
        id = payment.id,
        payee = escape_html(&CONFIG.payee),
        client = escape_html(&payment.client_name),
        document = escape_html(&payment.client_document),
        description = escape_html(&description),
        due_date = due_date,
        amount = amount,
        line = billet.digitable_line,
        barcode = billet.barcode,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn factor_follows_febraban_calendar() {
        assert_eq!(due_date_factor(date(2000, 7, 3)), 1000);
        assert_eq!(due_date_factor(date(2025, 2, 21)), 9999);
        assert_eq!(due_date_factor(date(2025, 2, 22)), 1000);
        assert_eq!(due_date_factor(date(2025, 2, 23)), 1001);
    }

    #[test]
    fn modulo_10() {
        assert_eq!(mod10("7"), 5);
        assert_eq!(mod10("123"), 0);
        assert_eq!(mod10("001905009"), 5);
        assert_eq!(mod10("4014481606"), 9);
        assert_eq!(mod10("0680935031"), 4);
    }

    #[test]
    fn modulo_11() {
        assert_eq!(mod11("9"), 4);
        assert_eq!(mod11("19"), 1);
        assert_eq!(mod11("0000"), 1);
    }

    #[test]
    fn known_barcode_and_line() {
        let barcode = build_barcode("001", 3737, 100, "0500940144816060680935031").unwrap();
        assert_eq!(barcode, "00193373700000001000500940144816060680935031");
        assert_eq!(digitable_line(&barcode), "00190.50095 40144.816069 06809.350314 3 37370000000100");
    }

    #[test]
    fn line_converts_back_to_barcode() {
        let barcode = build_barcode("237", due_date_factor(date(2024, 5, 10)), 15075, &free_field(12, 345)).unwrap();
        assert_eq!(barcode.len(), 44);

        let d = digitable_line(&barcode).chars().filter(|c| c.is_ascii_digit()).collect::<String>();
        assert_eq!(d.len(), 47);
        let rebuilt = format!("{}{}{}{}{}{}", &d[0..4], &d[32..33], &d[33..47], &d[4..9], &d[10..20], &d[21..31]);
        assert_eq!(rebuilt, barcode);
    }

    #[test]
    fn invalid_inputs_are_refused() {
        assert!(build_barcode("01", 1000, 100, &free_field(1, 1)).is_none());
        assert!(build_barcode("001", 1000, -1, &free_field(1, 1)).is_none());
        assert!(build_barcode("001", 1000, 10_000_000_000, &free_field(1, 1)).is_none());
        assert!(build_barcode("001", 1000, 100, "123").is_none());
    }
}
