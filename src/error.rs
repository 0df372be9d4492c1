// ABOUTME: Caller-facing error taxonomy for oecli.
// ABOUTME: Classifies configuration, network, auth, remote-command, protocol and domain failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("authentication error: {0}")]
    Authentication(String),

    #[error("host key rejected for {host}:{port}")]
    HostKeyRejected { host: String, port: u16 },

    #[error("remote command exited with status {exit_code}: {stderr}")]
    RemoteCommand { exit_code: u32, stderr: String },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("{0}")]
    Domain(String),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential source missing or malformed.
    Configuration,
    /// Network unreachable, refused, or connect timeout.
    Connection,
    /// Credentials rejected by the remote host.
    Authentication,
    /// Server key failed the host-key policy.
    HostKey,
    /// Remote process exited with non-zero status.
    RemoteCommand,
    /// Output was not a JSON object.
    Protocol,
    /// Appliance reported a rejection in the `error` field.
    Domain,
}

impl ErrorKind {
    /// Process exit code used by the binary for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::RemoteCommand => 1,
            ErrorKind::Connection => 2,
            ErrorKind::Authentication => 3,
            ErrorKind::Configuration => 4,
            ErrorKind::HostKey => 5,
            ErrorKind::Protocol => 6,
            ErrorKind::Domain => 7,
        }
    }
}

impl Error {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::Connection(_) => ErrorKind::Connection,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::HostKeyRejected { .. } => ErrorKind::HostKey,
            Error::RemoteCommand { .. } => ErrorKind::RemoteCommand,
            Error::Protocol(_) => ErrorKind::Protocol,
            Error::Domain(_) => ErrorKind::Domain,
        }
    }

    /// Returns the appliance's message if this is a domain rejection.
    pub fn domain_message(&self) -> Option<&str> {
        match self {
            Error::Domain(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<crate::ssh::Error> for Error {
    fn from(err: crate::ssh::Error) -> Self {
        use crate::ssh::Error as Ssh;

        match err {
            Ssh::Connection(msg) => Error::Connection(msg),
            Ssh::ConnectTimeout(timeout) => {
                Error::Connection(format!("connection timed out after {timeout:?}"))
            }
            Ssh::ChannelClosed => Error::Connection(err.to_string()),
            Ssh::Protocol(e) => Error::Connection(format!("SSH protocol error: {e}")),
            Ssh::Io(e) => Error::Connection(e.to_string()),
            Ssh::AuthenticationFailed | Ssh::NoAuthMethod(_) | Ssh::KeyLoadFailed { .. } => {
                Error::Authentication(err.to_string())
            }
            Ssh::HostKeyRejected { host, port } => Error::HostKeyRejected { host, port },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
