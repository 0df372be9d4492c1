// ABOUTME: Credential configuration for appliance connections.
// ABOUTME: Reads the [credentials] section of the INI file fresh on every resolve.

mod ini;

use crate::error::{Error, Result};
use ini::Ini;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the credential file.
pub const CREDENTIALS_CONFIG: &str = "/etc/oecli/ssh.conf";

/// Section holding the connection parameters.
pub const CREDENTIALS_SECTION: &str = "credentials";

/// Connection parameters for the appliance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub address: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    pub key_path: Option<PathBuf>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("key_path", &self.key_path)
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from the INI file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_ini(&content)
    }

    /// Parse credentials from INI text.
    pub fn from_ini(content: &str) -> Result<Self> {
        let ini = Ini::parse(content).map_err(Error::Configuration)?;

        if !ini.has_section(CREDENTIALS_SECTION) {
            return Err(Error::Configuration(format!(
                "missing [{CREDENTIALS_SECTION}] section"
            )));
        }

        let address = required(&ini, "address")?;
        let port_str = required(&ini, "port")?;
        let port = port_str
            .parse::<u16>()
            .map_err(|_| Error::Configuration(format!("invalid port: {port_str}")))?;
        let username = required(&ini, "username")?;

        Ok(Credentials {
            address,
            port,
            username,
            password: optional(&ini, "password"),
            key_path: optional(&ini, "key_filename").map(PathBuf::from),
        })
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

fn required(ini: &Ini, key: &str) -> Result<String> {
    ini.get(CREDENTIALS_SECTION, key)
        .map(|v| unquote(v).to_string())
        .ok_or_else(|| Error::Configuration(format!("missing required key `{key}`")))
}

/// Empty values are normalized to "no value".
fn optional(ini: &Ini, key: &str) -> Option<String> {
    ini.get(CREDENTIALS_SECTION, key)
        .map(unquote)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A source of credentials, consulted once per command execution.
pub trait CredentialSource: Send + Sync {
    fn resolve(&self) -> Result<Credentials>;
}

/// Credentials read from an INI file on every call.
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CredentialsFile {
    fn default() -> Self {
        Self::new(CREDENTIALS_CONFIG)
    }
}

impl CredentialSource for CredentialsFile {
    fn resolve(&self) -> Result<Credentials> {
        tracing::debug!("Reading credentials from {}", self.path.display());
        Credentials::load(&self.path)
    }
}

impl CredentialSource for Credentials {
    fn resolve(&self) -> Result<Credentials> {
        Ok(self.clone())
    }
}
