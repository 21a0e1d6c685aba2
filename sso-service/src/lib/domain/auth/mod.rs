pub mod errors;
#[cfg(test)]
pub(crate) mod mocks;
pub mod models;
pub mod ports;
pub mod service;
