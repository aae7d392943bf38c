pub mod config;
pub mod csv;
pub mod http_client;
pub mod storage;
