// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: One subcommand per appliance operation plus connection options.

use clap::{Args, Parser, Subcommand, ValueEnum};
use oecli::commands::{AttachOptions, PoolOptions, VolumeOptions};
use oecli::config::CREDENTIALS_CONFIG;
use oecli::ssh::HostKeyPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oecli")]
#[command(about = "Remote administration client for JovianDSS storage appliances")]
#[command(version)]
pub struct Cli {
    /// Credential file with a [credentials] section
    #[arg(short, long, global = true, default_value = CREDENTIALS_CONFIG)]
    pub config: PathBuf,

    /// How the appliance's host key is verified
    #[arg(long, global = true, value_enum, default_value_t = HostKeyMode::Strict)]
    pub host_key_policy: HostKeyMode,

    /// known_hosts file (defaults to ~/.ssh/known_hosts)
    #[arg(long, global = true)]
    pub known_hosts: Option<PathBuf>,

    /// Connection establishment timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub connect_timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only the compact reply
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON event lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostKeyMode {
    /// Only hosts already in known_hosts
    Strict,
    /// Record unknown hosts, reject changed keys
    Tofu,
    /// Skip verification entirely
    AcceptAny,
}

impl Cli {
    pub fn host_key_policy(&self) -> HostKeyPolicy {
        let known_hosts = self.known_hosts.clone();
        match self.host_key_policy {
            HostKeyMode::Strict => HostKeyPolicy::Strict { known_hosts },
            HostKeyMode::Tofu => HostKeyPolicy::TrustOnFirstUse { known_hosts },
            HostKeyMode::AcceptAny => HostKeyPolicy::AcceptAny,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all pools
    GetPools,

    /// Create a pool
    CreatePool {
        #[arg(long)]
        pool: String,
        /// Layout as TYPE:DISK1,DISK2;TYPE:DISK3 (single, mirror, raidz1-3)
        #[arg(long)]
        vdevs: String,
        #[command(flatten)]
        options: PoolArgs,
    },

    /// Delete a pool
    DeletePool {
        #[arg(long)]
        pool: String,
    },

    /// List volumes on a pool
    GetVolumesForGivenPool {
        #[arg(long)]
        pool: String,
    },

    /// Create a volume
    CreateVolume {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        /// Size with unit, e.g. 10G
        #[arg(long)]
        size: String,
        #[command(flatten)]
        options: VolumeArgs,
    },

    /// Delete a volume
    DeleteVolume {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
    },

    /// List snapshots of a volume
    GetSnapshotsForGivenVolume {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
    },

    /// Create a snapshot
    CreateSnapshot {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        snapshot: String,
    },

    /// Delete a snapshot
    DeleteSnapshot {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        snapshot: String,
    },

    /// List clones of a snapshot
    GetClonesForGivenSnapshot {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        snapshot: String,
    },

    /// Create a clone from a snapshot
    CreateCloneForGivenSnapshot {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        snapshot: String,
        #[arg(long)]
        clone: String,
    },

    /// Delete a clone
    DeleteClone {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        snapshot: String,
        #[arg(long)]
        clone: String,
    },

    /// List iSCSI targets on a pool
    GetIscsiTargetsForGivenPool {
        #[arg(long)]
        pool: String,
    },

    /// List volumes attached to an iSCSI target
    GetVolumesAssignedToIscsiTarget {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        target: String,
    },

    /// Create an iSCSI target
    CreateIscsiTarget {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        target: String,
    },

    /// Delete an iSCSI target
    DeleteIscsiTarget {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        target: String,
    },

    /// Attach a volume to an iSCSI target
    AttachVolumeToIscsiTarget {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        target: String,
        #[command(flatten)]
        options: AttachArgs,
    },

    /// Detach a volume from an iSCSI target
    DetachVolumeFromIscsiTarget {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        target: String,
    },

    /// Reboot the appliance
    Reboot,

    /// Shut down the appliance
    Shutdown,
}

#[derive(Args)]
pub struct PoolArgs {
    /// Use multiple mirror groups
    #[arg(long)]
    pub vdevs_mirror_multiple_group: bool,
    /// Write log group as TYPE:DISK1,DISK2 (single, mirror)
    #[arg(long)]
    pub write_log: Option<String>,
    /// Read cache disks as DISK1,DISK2
    #[arg(long)]
    pub read_cache: Option<String>,
    /// Spare disks as DISK1,DISK2
    #[arg(long)]
    pub spare: Option<String>,
}

impl From<PoolArgs> for PoolOptions {
    fn from(args: PoolArgs) -> Self {
        PoolOptions {
            vdevs_mirror_multiple_group: args.vdevs_mirror_multiple_group,
            write_log: args.write_log,
            read_cache: args.read_cache,
            spare: args.spare,
        }
    }
}

#[derive(Args)]
pub struct VolumeArgs {
    #[arg(long, default_value = "131072")]
    pub blocksize: String,
    #[arg(long)]
    pub thin_provisioning: bool,
    #[arg(long, default_value = "off")]
    pub deduplication: String,
    #[arg(long, default_value = "lz4")]
    pub compression: String,
    #[arg(long, default_value = "always")]
    pub sync: String,
    #[arg(long, default_value = "latency")]
    pub logbias: String,
    #[arg(long, default_value = "all")]
    pub primary_cache: String,
    #[arg(long, default_value = "all")]
    pub secondary_cache: String,
    #[arg(long, default_value = "1")]
    pub copies: String,
}

impl From<VolumeArgs> for VolumeOptions {
    fn from(args: VolumeArgs) -> Self {
        VolumeOptions {
            blocksize: args.blocksize,
            thin_provisioning: args.thin_provisioning,
            deduplication: args.deduplication,
            compression: args.compression,
            sync: args.sync,
            logbias: args.logbias,
            primary_cache: args.primary_cache,
            secondary_cache: args.secondary_cache,
            copies: args.copies,
        }
    }
}

#[derive(Args)]
pub struct AttachArgs {
    #[arg(long)]
    pub scsiid: Option<String>,
    #[arg(long)]
    pub lun: Option<u32>,
    /// rw or ro
    #[arg(long)]
    pub mode: Option<String>,
}

impl From<AttachArgs> for AttachOptions {
    fn from(args: AttachArgs) -> Self {
        AttachOptions {
            scsiid: args.scsiid,
            lun: args.lun,
            mode: args.mode,
        }
    }
}
