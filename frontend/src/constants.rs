pub static PROP_EDITABLE: &'static str = "contenteditable";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";
pub static PROP_ID: &'static str = "id";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_OPTION: &'static str = "option";
pub static TAG_TABLE: &'static str = "table";
pub static TAG_TR: &'static str = "tr";
pub static TAG_TH: &'static str = "th";
pub static TAG_TD: &'static str = "td";

pub static DATA_ROW: &'static str = "row";
pub static DATA_COL: &'static str = "col";

pub static SHEET_GRID_ID: &'static str = "spreadsheet-grid";

pub static APP_TITLE: &'static str = "Contabil";
