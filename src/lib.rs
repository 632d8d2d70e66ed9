pub mod args;
pub mod calc;
pub mod commands;
mod config;
pub mod date;
mod error;
pub mod gateway;
pub mod menu;
pub mod model;
pub mod report;
pub mod store;
mod utils;


pub use config::Config;
pub use error::{error_type, Error, ErrorType, IntoResult, Result};
pub use model::{Amount, Kind};
