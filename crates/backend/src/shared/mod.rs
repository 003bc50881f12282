pub mod config;
pub mod gateway;
pub mod request_log;
