pub mod alerts;
pub mod date;
pub mod error;
pub mod logger;
