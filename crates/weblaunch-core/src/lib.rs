pub mod browser;
pub mod config;
pub mod launcher;
pub mod locale;
pub mod logging;
