pub mod config;
pub mod logging;

// Verification engine
pub mod aggregate;
pub mod checker;
pub mod checksum;
pub mod manifest;
pub mod result;
pub mod store;
