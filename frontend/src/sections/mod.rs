pub mod clients;
pub mod dashboard;
pub mod documents;
pub mod form;
pub mod payments;
pub mod sheet;
pub mod users;
