use chrono::NaiveDate;

use shared::types::{Payment, PaymentRequest};
use shared::utils::to_cents;

use crate::db::{db_query, db_query_one};
use crate::db_clients::db_client_select;
use crate::db_types::{DBId, DBPayment};
use crate::error::AppError;

pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

pub fn parse_due_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Data de vencimento inválida".to_string()))
}

pub fn check_amount(amount: f64) -> Result<i64, AppError> {
    let cents = if amount.is_finite() { to_cents(amount) } else { 0 };
    if cents <= 0 || cents > MAX_AMOUNT_CENTS {
        Err(AppError::BadRequest("Valor inválido".to_string()))
    } else {
        Ok(cents)
    }
}

pub async fn db_payments_select() -> Result<Vec<Payment>, AppError> {
    let rows = db_query(DBPayment::from, include_str!("../sql/select_payments.sql"), &[]).await?;
    Ok(rows.into_iter().map(Payment::from).collect())
}

pub async fn db_client_payments_select(client_id: &i32) -> Result<Vec<Payment>, AppError> {
    db_client_select(client_id).await?;
    let rows = db_query(DBPayment::from, include_str!("../sql/select_client_payments.sql"), &[client_id]).await?;
    Ok(rows.into_iter().map(Payment::from).collect())
}

pub async fn db_payment_select(id: &i32) -> Result<DBPayment, AppError> {
    db_query_one(DBPayment::from, include_str!("../sql/select_payment.sql"), &[id]).await?
        .ok_or(AppError::NotFound("Boleto"))
}

pub async fn db_payment_insert(data: &PaymentRequest) -> Result<i32, AppError> {
    let cents = check_amount(data.amount)?;
    let due_date = parse_due_date(&data.due_date)?;
    let description = data.description.as_ref()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    db_client_select(&data.client_id).await
        .map_err(|_| AppError::BadRequest("Selecione um cliente".to_string()))?;

    db_query_one(DBId::from, include_str!("../sql/insert_payment.sql"), &[&data.client_id, &cents, &due_date, &description]).await?
        .map(|row| row.id)
        .ok_or(AppError::Internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_must_be_iso() {
        assert_eq!(parse_due_date("2024-05-10").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert!(parse_due_date("10/05/2024").is_err());
        assert!(parse_due_date("2024-02-30").is_err());
    }

    #[test]
    fn amount_must_be_positive() {
        assert_eq!(check_amount(150.75).unwrap(), 15075);
        assert!(check_amount(0.0).is_err());
        assert!(check_amount(-3.0).is_err());
        assert!(check_amount(0.004).is_err());
        assert!(check_amount(f64::NAN).is_err());
        assert!(check_amount(1e12).is_err());
    }
}
