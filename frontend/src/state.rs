use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;
use once_cell::sync::Lazy;

use shared::types::{ClientRecord, Payment, SheetData, Spreadsheet, UserStruct};

use crate::types::{DashboardTotals, Section, Session};

pub static SESSION: Lazy<Mutable<Option<Session>>> = Lazy::new(|| Mutable::new(None));

pub static LOGIN_MESSAGE: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static CURRENT_SECTION: Lazy<Mutable<Section>> = Lazy::new(|| Mutable::new(Section::Dashboard));

pub static TOTALS: Lazy<Mutable<DashboardTotals>> = Lazy::new(|| Mutable::new(DashboardTotals::default()));

pub static CLIENTS: Lazy<MutableVec<ClientRecord>> = Lazy::new(|| {
    MutableVec::new()
});

pub static EDIT_CLIENT: Lazy<Mutable<Option<ClientRecord>>> = Lazy::new(|| Mutable::new(None));

pub static DELETE_ID: Lazy<Mutable<i32>> = Lazy::new(|| Mutable::new(0));

pub static PAYMENTS: Lazy<MutableVec<Payment>> = Lazy::new(|| {
    MutableVec::new()
});

pub static PAYMENTS_CLIENT: Lazy<Mutable<i32>> = Lazy::new(|| Mutable::new(0));

pub static USERS: Lazy<MutableVec<UserStruct>> = Lazy::new(|| {
    MutableVec::new()
});

pub static SHEETS: Lazy<MutableVec<Spreadsheet>> = Lazy::new(|| {
    MutableVec::new()
});

pub static CURRENT_SHEET_ID: Lazy<Mutable<Option<i32>>> = Lazy::new(|| Mutable::new(None));

pub static SHEET_NAME: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static SHEET_DATA: Lazy<Mutable<SheetData>> = Lazy::new(|| Mutable::new(vec![]));

pub static UPLOAD_PROGRESS: Lazy<Mutable<Option<u32>>> = Lazy::new(|| Mutable::new(None));
