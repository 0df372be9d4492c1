// ABOUTME: Command executor combining a credential source with a transport.
// ABOUTME: Resolves credentials on every call and returns the command's stdout bytes.

use crate::config::CredentialSource;
use crate::error::Result;
use crate::transport::{Connector, Transport};

/// Runs command strings against the appliance.
#[derive(Debug, Clone)]
pub struct CommandExecutor<S, C> {
    credentials: S,
    transport: Transport<C>,
}

impl<S: CredentialSource, C: Connector> CommandExecutor<S, C> {
    pub fn new(credentials: S, transport: Transport<C>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Execute `command` and return its raw stdout.
    ///
    /// Credentials are re-read for every call so rotated secrets take effect
    /// without restarting. Errors from the credential source and transport are
    /// returned as-is.
    pub async fn run(&self, command: &str) -> Result<Vec<u8>> {
        let credentials = self.credentials.resolve()?;
        let output = self.transport.execute(&credentials, command).await?;
        Ok(output.stdout)
    }
}
