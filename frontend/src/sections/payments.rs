use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::{SignalVec, SignalVecExt};

use shared::constants::{API_BILLET, API_PAYMENTS};
use shared::types::{CreatedId, Payment, PaymentRequest};
use shared::utils::{format_date_br, format_money, parse_amount};

use crate::connect_fetch::{api_get, api_send, api_url, spawn_handler, FetchError};
use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::dialog::dialogs::Dialog;
use crate::elements::app_message::{toast_error, toast_success};
use crate::sections::clients::clients_load;
use crate::sections::form::{input_field, select_client};
use crate::session::current_token;
use crate::state::{PAYMENTS, PAYMENTS_CLIENT};
use crate::utils::{get_input_value, value_from_target, window_open};

const FIELD_FILTER: &str = "payments-client";
const FIELD_CLIENT: &str = "payment-client";
const FIELD_AMOUNT: &str = "payment-amount";
const FIELD_DUE_DATE: &str = "payment-due-date";
const FIELD_DESCRIPTION: &str = "payment-description";

fn css_class(label: &str) -> String {
    format!("payments__{label}")
}

pub fn payments_load() {
    clients_load();
    spawn_handler(payments_fetch());
}

async fn payments_fetch() -> Result<(), FetchError> {
    let list = api_get::<Vec<Payment>>(API_PAYMENTS).await?;
    PAYMENTS.lock_mut().replace_cloned(list);
    Ok(())
}

pub fn payments_section() -> Dom {
    PAYMENTS_CLIENT.set(0);
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("toolbar"))
                .children([
                    html!(TAG_DIV, {
                        .class(css_class("filter"))
                        .child(select_client(FIELD_FILTER, "Todos os clientes"))
                        .event(|e: events::Change| {
                            PAYMENTS_CLIENT.set(value_from_target(e.target()).parse::<i32>().unwrap_or_default());
                        })
                    }),
                    html!(TAG_BUTTON, {
                        .text("Novo Boleto")
                        .event(|_: events::Click| payment_new())
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .children_signal_vec(payments_filtered().map(payment_row))
            }),
            html!(TAG_DIV, {
                .class(css_class("empty"))
                .visible_signal(payments_filtered().is_empty())
                .text("Nenhum boleto encontrado")
            }),
        ])
    })
}

fn payments_filtered() -> impl SignalVec<Item = Payment> {
    PAYMENTS.signal_vec_cloned().filter_signal_cloned(|row| {
        let client_id = row.client_id;
        PAYMENTS_CLIENT.signal().map(move |filter| filter == 0 || filter == client_id)
    })
}

fn payment_row(row: Payment) -> Dom {
    let id = row.id;
    html!(TAG_DIV, {
        .class(css_class("item"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("client"))
                .text(row.client_name.as_deref().unwrap_or_default())
            }),
            html!(TAG_SPAN, {
                .class(css_class("description"))
                .text(row.description.as_deref().filter(|d| !d.is_empty()).unwrap_or("Pagamento"))
            }),
            html!(TAG_SPAN, {
                .class(css_class("due-date"))
                .text(&format_date_br(&row.due_date))
            }),
            html!(TAG_SPAN, {
                .class(css_class("amount"))
                .text(&format_money(row.amount))
            }),
            html!(TAG_BUTTON, {
                .text("Baixar Boleto")
                .event(move|_: events::Click| billet_open(id))
            }),
        ])
    })
}

fn billet_url(id: i32, token: &str) -> String {
    let token = String::from(js_sys::encode_uri_component(token));
    api_url(&format!("{API_PAYMENTS}/{id}/{API_BILLET}?token={token}"))
}

fn billet_open(id: i32) {
    if let Some(token) = current_token() {
        window_open(&billet_url(id, &token));
    }
}

fn payment_new() {
    Dialog::form("Novo Boleto", payment_form, payment_save, || {});
}

fn payment_form() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            select_client(FIELD_CLIENT, "Selecione um cliente"),
            input_field("Valor (R$)", FIELD_AMOUNT, "text", ""),
            input_field("Vencimento", FIELD_DUE_DATE, "date", ""),
            input_field("Descrição", FIELD_DESCRIPTION, "text", ""),
        ])
    })
}

fn payment_save() -> bool {
    let client_id = get_input_value(FIELD_CLIENT).parse::<i32>().unwrap_or_default();
    let amount = parse_amount(&get_input_value(FIELD_AMOUNT));
    let due_date = get_input_value(FIELD_DUE_DATE).trim().to_string();
    let description = get_input_value(FIELD_DESCRIPTION).trim().to_string();

    let amount = match amount {
        Some(amount) if client_id > 0 && !due_date.is_empty() => amount,
        _ => {
            toast_error("Informe cliente, valor e vencimento");
            return false;
        }
    };

    let data = PaymentRequest {
        client_id,
        amount,
        due_date,
        description: Some(description).filter(|d| !d.is_empty()),
    };
    spawn_handler(payment_send(data));
    true
}

async fn payment_send(data: PaymentRequest) -> Result<(), FetchError> {
    api_send::<_, CreatedId>("POST", API_PAYMENTS, &data).await?;
    toast_success("Boleto gerado com sucesso!");
    payments_load();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use crate::utils::{query_selector, query_selector_all};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn empty_hidden() -> bool {
        query_selector(&format!(".{}", css_class("empty")))
            .and_then(|e| e.get_attribute("style"))
            .map(|style| style.contains("none"))
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn empty_message_follows_client_filter() {
        PAYMENTS.lock_mut().replace_cloned(vec![Payment {
            id: 1,
            client_id: 7,
            client_name: Some("Padaria".to_string()),
            amount: 150.0,
            due_date: "2024-05-10".to_string(),
            description: None,
        }]);
        let _handle = dominator::append_dom(&dominator::body(), payments_section());
        TimeoutFuture::new(0).await;
        assert_eq!(query_selector_all(&format!(".{}", css_class("item"))).len(), 1);
        assert!(empty_hidden());

        PAYMENTS_CLIENT.set(8);
        TimeoutFuture::new(0).await;
        assert_eq!(query_selector_all(&format!(".{}", css_class("item"))).len(), 0);
        assert!(!empty_hidden());
    }
}
