pub mod batch;
pub mod config;
pub mod fetch;
pub mod label;
pub mod logging;
pub mod storage;
