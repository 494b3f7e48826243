pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod store;
pub mod ui;
mod utils;


pub use config::Config;
pub use error::Error;
pub use error::Result;
