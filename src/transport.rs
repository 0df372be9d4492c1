// ABOUTME: Single-command transport sessions over a pluggable connector.
// ABOUTME: Bounds connection setup, runs one command, and always closes the connection.

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::ssh;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

/// Default bound on connection establishment (TCP, key exchange, authentication).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured result of a remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: u32,
}

impl RawOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Opens connections to a remote host.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Connection;

    /// Open an unauthenticated connection to the host named by `credentials`.
    async fn open(&self, credentials: &Credentials) -> ssh::Result<Self::Connection>;
}

/// One open connection, used for a single command.
#[async_trait]
pub trait Connection: Send {
    async fn authenticate(&mut self, credentials: &Credentials) -> ssh::Result<()>;

    async fn exec(&mut self, command: &str) -> ssh::Result<RawOutput>;

    /// Release the connection. Called exactly once per opened connection.
    async fn close(&mut self) -> ssh::Result<()>;
}

/// Runs one command per session: connect, authenticate, execute, close.
#[derive(Debug, Clone)]
pub struct Transport<C> {
    connector: C,
    connect_timeout: Duration,
}

impl<C: Connector> Transport<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Execute `command` on the host described by `credentials`.
    ///
    /// A non-zero exit status is reported as [`Error::RemoteCommand`] carrying
    /// the captured stderr, even if stdout holds output.
    pub async fn execute(&self, credentials: &Credentials, command: &str) -> Result<RawOutput> {
        let deadline = Instant::now() + self.connect_timeout;

        tracing::debug!(
            "Connecting to {}:{} as {}",
            credentials.address,
            credentials.port,
            credentials.username
        );

        let mut connection = timeout_at(deadline, self.connector.open(credentials))
            .await
            .map_err(|_| ssh::Error::ConnectTimeout(self.connect_timeout))??;

        let result = self
            .run_on(&mut connection, credentials, command, deadline)
            .await;

        if let Err(e) = connection.close().await {
            tracing::warn!(
                "Failed to close connection to {}:{}: {}",
                credentials.address,
                credentials.port,
                e
            );
        }

        let output = result?;
        if !output.success() {
            return Err(Error::RemoteCommand {
                exit_code: output.exit_code,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }

    async fn run_on(
        &self,
        connection: &mut C::Connection,
        credentials: &Credentials,
        command: &str,
        deadline: Instant,
    ) -> ssh::Result<RawOutput> {
        timeout_at(deadline, connection.authenticate(credentials))
            .await
            .map_err(|_| ssh::Error::ConnectTimeout(self.connect_timeout))??;

        tracing::debug!("Executing: {}", command);
        let output = connection.exec(command).await?;
        tracing::debug!("Command exited with status {}", output.exit_code);

        Ok(output)
    }
}
