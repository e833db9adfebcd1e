pub mod constants;
pub mod grid;
pub mod types;
pub mod utils;
