// ABOUTME: SSH transport for reaching the appliance.
// ABOUTME: Supports key, password, and agent authentication with a pluggable host key policy.

mod client;
mod error;
mod host_key;

pub use client::{SshConnection, SshConnector};
pub use error::{Error, Result};
pub use host_key::HostKeyPolicy;
