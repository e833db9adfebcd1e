//! Ledger editor.
//!
//! The grid is a table of editable cells tagged with `data-row` and
//! `data-col`; saving reads every cell back into a two-dimensional array.

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use shared::constants::API_SPREADSHEETS;
use shared::grid::{cell_text, column_label, grid_size, parse_cell_position, GridReader};
use shared::types::{ApiMessage, CreatedId, SheetData, Spreadsheet, SpreadsheetSave};

use crate::connect_fetch::{api_get, api_send, spawn_handler, FetchError};
use crate::constants::{DATA_COL, DATA_ROW, PROP_EDITABLE, PROP_ID, PROP_SELECTED, PROP_VALUE, SHEET_GRID_ID, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_OPTION, TAG_SELECT, TAG_TABLE, TAG_TD, TAG_TH, TAG_TR};
use crate::elements::app_message::toast_success;
use crate::state::{CURRENT_SHEET_ID, SHEETS, SHEET_DATA, SHEET_NAME};
use crate::utils::{attr_data, query_selector_all, value_from_target};

const NEW_SHEET_NAME: &str = "Nova Planilha";

fn css_class(label: &str) -> String {
    format!("sheet__{label}")
}

pub fn sheets_load() {
    spawn_handler(sheets_fetch());
}

async fn sheets_fetch() -> Result<(), FetchError> {
    let list = api_get::<Vec<Spreadsheet>>(API_SPREADSHEETS).await?;
    let first = list.first().and_then(|s| s.id);
    SHEETS.lock_mut().replace_cloned(list);
    match first {
        Some(id) => sheet_open(id),
        None => sheet_new(),
    }
    Ok(())
}

fn sheet_open(id: i32) {
    spawn_handler(sheet_fetch(id));
}

async fn sheet_fetch(id: i32) -> Result<(), FetchError> {
    let sheet = api_get::<Spreadsheet>(&format!("{API_SPREADSHEETS}/{id}")).await?;
    CURRENT_SHEET_ID.set(sheet.id);
    SHEET_NAME.set(sheet.name);
    SHEET_DATA.set(sheet.data);
    Ok(())
}

fn sheet_new() {
    CURRENT_SHEET_ID.set(None);
    SHEET_NAME.set(NEW_SHEET_NAME.to_string());
    SHEET_DATA.set(vec![]);
}

fn sheet_save() {
    let data = SpreadsheetSave {
        name: SHEET_NAME.get_cloned(),
        data: grid_read(),
    };
    spawn_handler(sheet_send(CURRENT_SHEET_ID.get(), data));
}

async fn sheet_send(current: Option<i32>, data: SpreadsheetSave) -> Result<(), FetchError> {
    match current {
        Some(id) => {
            api_send::<_, ApiMessage>("PUT", &format!("{API_SPREADSHEETS}/{id}"), &data).await?;
            let mut sheets = SHEETS.lock_mut();
            if let Some(pos) = sheets.iter().position(|s| s.id == Some(id)) {
                let sheet = Spreadsheet { name: data.name, ..sheets[pos].clone() };
                sheets.set_cloned(pos, sheet);
            }
        }
        None => {
            let created = api_send::<_, CreatedId>("POST", API_SPREADSHEETS, &data).await?;
            CURRENT_SHEET_ID.set(Some(created.id));
            SHEETS.lock_mut().push_cloned(Spreadsheet { id: Some(created.id), name: data.name, data: vec![] });
        }
    }
    toast_success("Planilha salva com sucesso!");
    Ok(())
}

pub fn sheets_section() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("toolbar"))
                .children([
                    sheet_selector(),
                    html!(TAG_INPUT, {
                        .class(css_class("name"))
                        .prop_signal(PROP_VALUE, SHEET_NAME.signal_cloned())
                        .event(|e: events::Change| SHEET_NAME.set(value_from_target(e.target())))
                    }),
                    html!(TAG_BUTTON, {
                        .text("Salvar")
                        .event(|_: events::Click| sheet_save())
                    }),
                    html!(TAG_BUTTON, {
                        .text("Nova Planilha")
                        .event(|_: events::Click| sheet_new())
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("grid"))
                .child_signal(SHEET_DATA.signal_cloned().map(|data| Some(grid_table(&data))))
            }),
        ])
    })
}

fn sheet_selector() -> Dom {
    html!(TAG_SELECT, {
        .class(css_class("selector"))
        .children_signal_vec(SHEETS.signal_vec_cloned().map(|sheet| {
            let id = sheet.id.unwrap_or_default();
            html!(TAG_OPTION, {
                .attr(PROP_VALUE, &id.to_string())
                .prop_signal(PROP_SELECTED, CURRENT_SHEET_ID.signal().map(move |current| current == Some(id)))
                .text(&sheet.name)
            })
        }))
        .event(|e: events::Change| {
            if let Ok(id) = value_from_target(e.target()).parse::<i32>() {
                sheet_open(id);
            }
        })
    })
}

pub fn grid_table(data: &SheetData) -> Dom {
    let size = grid_size(data);

    let header = html!(TAG_TR, {
        .child(html!(TAG_TH))
        .children((0..size.cols).map(|col| html!(TAG_TH, { .text(&column_label(col)) })))
    });

    let rows = (0..size.rows).map(|row| {
        html!(TAG_TR, {
            .child(html!(TAG_TH, { .text(&(row + 1).to_string()) }))
            .children((0..size.cols).map(|col| {
                html!(TAG_TD, {
                    .attr(PROP_EDITABLE, "true")
                    .attr(attr_data(DATA_ROW).as_str(), &row.to_string())
                    .attr(attr_data(DATA_COL).as_str(), &col.to_string())
                    .text(cell_text(data, row, col))
                })
            }))
        })
    });

    html!(TAG_TABLE, {
        .attr(PROP_ID, SHEET_GRID_ID)
        .class(css_class("table"))
        .child(header)
        .children(rows)
    })
}

pub fn grid_read() -> SheetData {
    query_selector_all(&format!("#{SHEET_GRID_ID} td[{PROP_EDITABLE}=true]"))
        .into_iter()
        .filter_map(|cell| {
            let dataset = cell.dataset();
            let (row, col) = parse_cell_position(
                &dataset.get(DATA_ROW).unwrap_or_default(),
                &dataset.get(DATA_COL).unwrap_or_default(),
            )?;
            Some((row, col, cell.text_content().unwrap_or_default()))
        })
        .collect::<GridReader>()
        .finish()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use shared::grid::padded;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sheet(rows: &[&[&str]]) -> SheetData {
        rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
    }

    #[wasm_bindgen_test]
    fn rendered_grid_reads_back_padded() {
        let data = sheet(&[&["Data", "Histórico", "Valor"], &["01/02", "Aluguel", "1.200,00"], &["02/02"], &["", "a  b", "  120,00 "]]);
        let _handle = dominator::append_dom(&dominator::body(), grid_table(&data));

        let read = grid_read();
        assert_eq!(read.len(), 50);
        assert_eq!(read, padded(&data, grid_size(&data)));
        assert_eq!(read[2], vec!["02/02".to_string(), "".to_string(), "".to_string()]);
        assert_eq!(read[3][1], "a  b");
        assert_eq!(read[3][2], "  120,00 ");
    }
}
