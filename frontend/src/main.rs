use crate::elements::app_login::app_state;

mod connect_fetch;
mod connect_files;
mod constants;
mod dialog;
mod elements;
mod sections;
mod session;
mod state;
mod types;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    dominator::append_dom(&dominator::body(), app_state());
}
