// ABOUTME: russh-backed connector and connection for the transport layer.
// ABOUTME: Handles connection, authentication, and command execution.

use super::error::{Error, Result};
use super::host_key::{HostKeyPolicy, SshHandler};
use crate::config::Credentials;
use crate::transport::{Connection, Connector, RawOutput};
use async_trait::async_trait;
use russh::client::{self, Config, Handle};
use russh::keys::agent::client::AgentClient;
use russh::keys::{PrivateKeyWithHashAlg, load_secret_key, ssh_key};
use russh::{ChannelMsg, Disconnect};
use std::path::Path;
use std::sync::Arc;

/// Opens SSH connections, verifying host keys with the injected policy.
#[derive(Debug, Clone, Default)]
pub struct SshConnector {
    policy: HostKeyPolicy,
}

impl SshConnector {
    pub fn new(policy: HostKeyPolicy) -> Self {
        Self { policy }
    }
}

/// Session settings. No inactivity timeout: appliance commands may run silently
/// for a long time and must not be cut off.
fn session_config() -> Config {
    Config {
        inactivity_timeout: None,
        ..Default::default()
    }
}

fn classify_connect_error(err: russh::Error, host: &str, port: u16) -> Error {
    match err {
        russh::Error::UnknownKey => Error::HostKeyRejected {
            host: host.to_string(),
            port,
        },
        russh::Error::IO(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => {
            Error::Connection(format!("connection refused to {host}:{port}"))
        }
        e => Error::Connection(e.to_string()),
    }
}

#[async_trait]
impl Connector for SshConnector {
    type Connection = SshConnection;

    async fn open(&self, credentials: &Credentials) -> Result<SshConnection> {
        let handler = SshHandler::new(
            credentials.address.clone(),
            credentials.port,
            self.policy.clone(),
        );

        let handle = client::connect(
            Arc::new(session_config()),
            (credentials.address.as_str(), credentials.port),
            handler,
        )
        .await
        .map_err(|e| classify_connect_error(e, &credentials.address, credentials.port))?;

        Ok(SshConnection { handle })
    }
}

/// An open SSH connection to the appliance.
pub struct SshConnection {
    handle: Handle<SshHandler>,
}

impl std::fmt::Debug for SshConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SshConnection")
            .field("handle", &"<russh::Handle>")
            .finish()
    }
}

impl SshConnection {
    async fn authenticate_key(&mut self, user: &str, key: ssh_key::PrivateKey) -> Result<bool> {
        let hash_alg = self
            .handle
            .best_supported_rsa_hash()
            .await
            .map_err(Error::Protocol)?
            .flatten();

        let result = self
            .handle
            .authenticate_publickey(user, PrivateKeyWithHashAlg::new(Arc::new(key), hash_alg))
            .await
            .map_err(Error::Protocol)?;

        Ok(result.success())
    }

    async fn authenticate_password(&mut self, user: &str, password: &str) -> Result<bool> {
        let result = self
            .handle
            .authenticate_password(user, password)
            .await
            .map_err(Error::Protocol)?;

        Ok(result.success())
    }

    /// Fallback when neither a key file nor a password is configured.
    async fn authenticate_default(&mut self, user: &str) -> Result<bool> {
        if let Ok(mut agent) = AgentClient::connect_env().await {
            let keys = agent.request_identities().await.unwrap_or_default();
            for key in keys {
                match self
                    .handle
                    .authenticate_publickey_with(user, key, None, &mut agent)
                    .await
                {
                    Ok(result) if result.success() => return Ok(true),
                    _ => continue,
                }
            }
        }

        let home = std::env::var("HOME").map_err(|_| {
            Error::NoAuthMethod("no password or key configured and HOME not set".to_string())
        })?;

        let default_keys = [
            format!("{}/.ssh/id_ed25519", home),
            format!("{}/.ssh/id_rsa", home),
            format!("{}/.ssh/id_ecdsa", home),
        ];

        let mut tried_any = false;
        for key_path in &default_keys {
            if let Ok(key) = load_secret_key(key_path, None) {
                tried_any = true;
                if self.authenticate_key(user, key).await? {
                    return Ok(true);
                }
            }
        }

        if !tried_any {
            return Err(Error::NoAuthMethod(
                "no password or key configured, SSH agent empty and no default keys found"
                    .to_string(),
            ));
        }

        Ok(false)
    }
}

fn load_key(path: &Path) -> Result<ssh_key::PrivateKey> {
    load_secret_key(path, None).map_err(|e| Error::KeyLoadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Connection for SshConnection {
    async fn authenticate(&mut self, credentials: &Credentials) -> Result<()> {
        let user = credentials.username.as_str();

        if credentials.key_path.is_none() && credentials.password.is_none() {
            return if self.authenticate_default(user).await? {
                Ok(())
            } else {
                Err(Error::AuthenticationFailed)
            };
        }

        if let Some(key_path) = &credentials.key_path {
            match load_key(key_path) {
                Ok(key) => {
                    if self.authenticate_key(user, key).await? {
                        return Ok(());
                    }
                    tracing::debug!("Key {} rejected for {}", key_path.display(), user);
                }
                Err(e) if credentials.password.is_some() => {
                    tracing::warn!("{}; falling back to password", e);
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(password) = &credentials.password {
            if self.authenticate_password(user, password).await? {
                return Ok(());
            }
            tracing::debug!("Password rejected for {}", user);
        }

        Err(Error::AuthenticationFailed)
    }

    async fn exec(&mut self, command: &str) -> Result<RawOutput> {
        let mut channel = self.handle.channel_open_session().await?;

        channel.exec(true, command).await?;

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut exit_code = 0u32;

        let mut got_exit_status = false;
        let mut got_eof = false;

        loop {
            match channel.wait().await {
                Some(ChannelMsg::Data { data }) => {
                    stdout.extend_from_slice(&data);
                }
                Some(ChannelMsg::ExtendedData { data, ext }) => {
                    if ext == 1 {
                        stderr.extend_from_slice(&data);
                    }
                }
                Some(ChannelMsg::ExitStatus { exit_status }) => {
                    exit_code = exit_status;
                    got_exit_status = true;
                    if got_eof {
                        break;
                    }
                }
                Some(ChannelMsg::Eof) => {
                    got_eof = true;
                    if got_exit_status {
                        break;
                    }
                }
                Some(ChannelMsg::Close) => {
                    break;
                }
                Some(_) => {}
                None => break,
            }
        }

        // No exit status means the channel died (network drop, server kill)
        if !got_exit_status {
            return Err(Error::ChannelClosed);
        }

        Ok(RawOutput {
            stdout,
            stderr,
            exit_code,
        })
    }

    async fn close(&mut self) -> Result<()> {
        self.handle
            .disconnect(Disconnect::ByApplication, "", "en")
            .await
            .map_err(Error::Protocol)
    }
}
