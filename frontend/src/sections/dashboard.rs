use dominator::{Dom, html};
use futures_signals::signal::SignalExt;

use shared::constants::{API_CLIENTS, API_PAYMENTS, API_SPREADSHEETS};
use shared::types::{ClientRecord, Payment, Spreadsheet};

use crate::connect_fetch::{api_get, spawn_handler, FetchError};
use crate::constants::{TAG_DIV, TAG_SPAN};
use crate::state::TOTALS;
use crate::types::DashboardTotals;

fn css_class(label: &str) -> String {
    format!("dashboard__{label}")
}

pub fn dashboard_load() {
    spawn_handler(dashboard_fetch());
}

async fn dashboard_fetch() -> Result<(), FetchError> {
    let (clients, payments, sheets) = futures::join!(
        api_get::<Vec<ClientRecord>>(API_CLIENTS),
        api_get::<Vec<Payment>>(API_PAYMENTS),
        api_get::<Vec<Spreadsheet>>(API_SPREADSHEETS),
    );
    TOTALS.set(DashboardTotals {
        clients: clients?.len(),
        payments: payments?.len(),
        spreadsheets: sheets?.len(),
    });
    Ok(())
}

pub fn dashboard_section() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            card("Clientes", |t| t.clients),
            card("Boletos", |t| t.payments),
            card("Planilhas", |t| t.spreadsheets),
        ])
    })
}

fn card(label: &str, value: fn(&DashboardTotals) -> usize) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("value"))
                .text_signal(TOTALS.signal().map(move |t| value(&t).to_string()))
            }),
            html!(TAG_SPAN, {
                .class(css_class("label"))
                .text(label)
            }),
        ])
    })
}
