pub mod config;
pub mod logging;
pub mod num;
pub mod short_string;
