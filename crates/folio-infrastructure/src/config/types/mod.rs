//! Configuration types

mod app;
mod book;
mod logging;

pub use app::AppConfig;
pub use book::BookConfig;
pub use logging::LoggingConfig;
