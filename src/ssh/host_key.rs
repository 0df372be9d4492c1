// ABOUTME: Host key verification policy and the russh client handler enforcing it.
// ABOUTME: Strict known_hosts checking by default; TOFU and accept-any are explicit opt-ins.

use russh::client;
use russh::keys::known_hosts::{
    check_known_hosts, check_known_hosts_path, learn_known_hosts, learn_known_hosts_path,
};
use russh::keys::ssh_key;
use std::path::PathBuf;

/// How the server's host key is verified before authenticating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyPolicy {
    /// Only accept keys already present in known_hosts.
    Strict { known_hosts: Option<PathBuf> },
    /// Accept and record unknown keys; changed keys are still rejected.
    TrustOnFirstUse { known_hosts: Option<PathBuf> },
    /// Accept any key without verification.
    AcceptAny,
}

impl Default for HostKeyPolicy {
    fn default() -> Self {
        HostKeyPolicy::Strict { known_hosts: None }
    }
}

impl HostKeyPolicy {
    /// Decide whether `key` presented by `host:port` is acceptable.
    pub fn verify(&self, host: &str, port: u16, key: &ssh_key::PublicKey) -> bool {
        let (known_hosts, trust_on_first_use) = match self {
            HostKeyPolicy::AcceptAny => {
                tracing::warn!(
                    "Accepting host key for {}:{} without verification",
                    host,
                    port
                );
                return true;
            }
            HostKeyPolicy::Strict { known_hosts } => (known_hosts, false),
            HostKeyPolicy::TrustOnFirstUse { known_hosts } => (known_hosts, true),
        };

        let check_result = match known_hosts {
            Some(path) => check_known_hosts_path(host, port, key, path),
            None => check_known_hosts(host, port, key),
        };

        match check_result {
            Ok(true) => true,
            Ok(false) if trust_on_first_use => {
                tracing::warn!(
                    "Trust-On-First-Use: accepting unknown host key for {}:{}",
                    host,
                    port
                );
                let learn_result = match known_hosts {
                    Some(path) => learn_known_hosts_path(host, port, key, path),
                    None => learn_known_hosts(host, port, key),
                };
                if let Err(e) = learn_result {
                    tracing::warn!("Failed to save host key to known_hosts: {}", e);
                }
                true
            }
            Ok(false) => false,
            Err(russh::keys::Error::KeyChanged { .. }) => {
                tracing::warn!("Host key for {}:{} does not match known_hosts", host, port);
                false
            }
            // Unreadable known_hosts counts as an unknown host
            Err(_) => trust_on_first_use,
        }
    }
}

/// SSH client handler for russh.
pub(crate) struct SshHandler {
    host: String,
    port: u16,
    policy: HostKeyPolicy,
}

impl SshHandler {
    pub(crate) fn new(host: String, port: u16, policy: HostKeyPolicy) -> Self {
        Self { host, port, policy }
    }
}

impl client::Handler for SshHandler {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &ssh_key::PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        Ok(self
            .policy
            .verify(&self.host, self.port, server_public_key))
    }
}
