// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted fake connector and credential file helpers.

use async_trait::async_trait;
use oecli::config::Credentials;
use oecli::ssh;
use oecli::transport::{Connection, Connector, RawOutput};
use parking_lot::Mutex;
use std::sync::{Arc, Once};
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("oecli=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Credentials used by tests that don't read a file.
#[allow(dead_code)]
pub fn credentials() -> Credentials {
    Credentials {
        address: "nas.example".to_string(),
        port: 22,
        username: "admin".to_string(),
        password: Some("secret".to_string()),
        key_path: None,
    }
}

/// Write an INI credential file into a fresh temp dir.
#[allow(dead_code)]
pub fn credential_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ssh.conf");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[allow(dead_code)]
pub const VALID_CONFIG: &str = r#"[credentials]
address = "nas.example"
port = "22"
username = "admin"
password = "secret"
key_filename = ""
"#;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Proceed,
    Fail,
    Hang,
}

/// Everything the fake observed.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct Calls {
    pub opens: usize,
    pub auths: usize,
    pub commands: Vec<String>,
    pub closes: usize,
    pub credentials: Vec<Credentials>,
}

#[derive(Debug, Clone)]
struct Script {
    open: Step,
    auth: Step,
    exec: Option<RawOutput>,
    exec_delay: Duration,
}

/// Connector whose behavior is scripted per test.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FakeConnector {
    script: Script,
    calls: Arc<Mutex<Calls>>,
}

#[allow(dead_code)]
impl FakeConnector {
    /// Successful exchange printing `stdout` with exit status 0.
    pub fn replying(stdout: &str) -> Self {
        Self::exiting(0, stdout, "")
    }

    pub fn exiting(exit_code: u32, stdout: &str, stderr: &str) -> Self {
        Self {
            script: Script {
                open: Step::Proceed,
                auth: Step::Proceed,
                exec: Some(RawOutput {
                    stdout: stdout.as_bytes().to_vec(),
                    stderr: stderr.as_bytes().to_vec(),
                    exit_code,
                }),
                exec_delay: Duration::ZERO,
            },
            calls: Arc::default(),
        }
    }

    /// Channel dies before reporting an exit status.
    pub fn dropping_channel() -> Self {
        let mut fake = Self::replying("");
        fake.script.exec = None;
        fake
    }

    pub fn with_open(mut self, step: Step) -> Self {
        self.script.open = step;
        self
    }

    pub fn with_auth(mut self, step: Step) -> Self {
        self.script.auth = step;
        self
    }

    /// Command runs for `delay` before replying.
    pub fn with_exec_delay(mut self, delay: Duration) -> Self {
        self.script.exec_delay = delay;
        self
    }

    pub fn calls(&self) -> parking_lot::MutexGuard<'_, Calls> {
        self.calls.lock()
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Connection = FakeConnection;

    async fn open(&self, credentials: &Credentials) -> ssh::Result<FakeConnection> {
        {
            let mut calls = self.calls.lock();
            calls.opens += 1;
            calls.credentials.push(credentials.clone());
        }
        match self.script.open {
            Step::Proceed => Ok(FakeConnection {
                script: self.script.clone(),
                calls: Arc::clone(&self.calls),
            }),
            Step::Fail => Err(ssh::Error::Connection(format!(
                "connection refused to {}:{}",
                credentials.address, credentials.port
            ))),
            Step::Hang => std::future::pending().await,
        }
    }
}

#[allow(dead_code)]
pub struct FakeConnection {
    script: Script,
    calls: Arc<Mutex<Calls>>,
}

#[async_trait]
impl Connection for FakeConnection {
    async fn authenticate(&mut self, _credentials: &Credentials) -> ssh::Result<()> {
        self.calls.lock().auths += 1;
        match self.script.auth {
            Step::Proceed => Ok(()),
            Step::Fail => Err(ssh::Error::AuthenticationFailed),
            Step::Hang => std::future::pending().await,
        }
    }

    async fn exec(&mut self, command: &str) -> ssh::Result<RawOutput> {
        self.calls.lock().commands.push(command.to_string());
        if !self.script.exec_delay.is_zero() {
            tokio::time::sleep(self.script.exec_delay).await;
        }
        self.script.exec.clone().ok_or(ssh::Error::ChannelClosed)
    }

    async fn close(&mut self) -> ssh::Result<()> {
        self.calls.lock().closes += 1;
        Ok(())
    }
}
