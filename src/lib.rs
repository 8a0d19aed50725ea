pub mod api;
pub mod articles;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
