// ABOUTME: Command-line assembly for appliance operations.
// ABOUTME: Re-exports one builder function per remote operation.

mod iscsi;
mod pool;
mod snapshot;
mod system;
mod volume;

pub use iscsi::{
    AttachOptions, attach_volume_to_iscsi_target, create_iscsi_target, delete_iscsi_target,
    detach_volume_from_iscsi_target, get_iscsi_targets_for_given_pool,
    get_volumes_assigned_to_iscsi_target,
};
pub use pool::{PoolOptions, create_pool, delete_pool, get_pools};
pub use snapshot::{
    create_clone_for_given_snapshot, create_snapshot, delete_clone, delete_snapshot,
    get_clones_for_given_snapshot, get_snapshots_for_given_volume,
};
pub use system::{reboot, shutdown};
pub use volume::{VolumeOptions, create_volume, delete_volume, get_volumes_for_given_pool};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Arg {
    Flag(&'static str),
    Value(&'static str, String),
}

/// A single appliance CLI invocation, rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: &'static str,
    args: Vec<Arg>,
}

impl Command {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    /// Start a command that answers with a JSON document.
    pub fn json(name: &'static str) -> Self {
        Self::new(name).flag("--json")
    }

    /// Whether the command asks for JSON output.
    pub fn expects_json(&self) -> bool {
        self.args.contains(&Arg::Flag("--json"))
    }

    pub fn flag(mut self, flag: &'static str) -> Self {
        self.args.push(Arg::Flag(flag));
        self
    }

    pub fn flag_if(self, flag: &'static str, enabled: bool) -> Self {
        if enabled { self.flag(flag) } else { self }
    }

    pub fn arg(mut self, flag: &'static str, value: impl ToString) -> Self {
        self.args.push(Arg::Value(flag, value.to_string()));
        self
    }

    /// Append `flag value` only when `value` is set and non-empty.
    pub fn arg_opt<T: ToString>(self, flag: &'static str, value: Option<T>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.arg(flag, v),
            _ => self,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            match arg {
                Arg::Flag(flag) => write!(f, " {flag}")?,
                Arg::Value(flag, value) => write!(f, " {flag} {value}")?,
            }
        }
        Ok(())
    }
}
