pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod test_utils;
