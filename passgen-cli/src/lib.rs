#[macro_use]
extern crate serde;

pub mod app;
pub mod commands;
pub mod config;
pub mod desktop;

pub use app::{App, AppError};
pub use config::Config;
pub use desktop::Desktop;
