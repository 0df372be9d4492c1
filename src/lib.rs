// ABOUTME: Library root for oecli - remote administration of JovianDSS appliances.
// ABOUTME: The command-line binary is in main.rs.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod output;
pub mod response;
pub mod ssh;
pub mod transport;

pub use client::Client;
pub use error::{Error, ErrorKind, Result};
pub use response::Response;
