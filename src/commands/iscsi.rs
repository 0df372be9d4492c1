// ABOUTME: iSCSI target operations and volume attachment.
// ABOUTME: Targets live on a pool; volumes are attached with optional SCSI id, LUN and mode.

use super::Command;

/// Optional attachment parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachOptions {
    pub scsiid: Option<String>,
    pub lun: Option<u32>,
    /// `rw` or `ro`.
    pub mode: Option<String>,
}

pub fn get_iscsi_targets_for_given_pool(pool: &str) -> Command {
    Command::json("get_iscsi_targets_for_given_pool").arg("--pool", pool)
}

pub fn get_volumes_assigned_to_iscsi_target(pool: &str, target: &str) -> Command {
    Command::json("get_volumes_assigned_to_iscsi_target")
        .arg("--pool", pool)
        .arg("--target", target)
}

pub fn create_iscsi_target(pool: &str, target: &str) -> Command {
    Command::json("create_iscsi_target")
        .arg("--pool", pool)
        .arg("--target", target)
}

pub fn delete_iscsi_target(pool: &str, target: &str) -> Command {
    Command::json("delete_iscsi_target")
        .arg("--pool", pool)
        .arg("--target", target)
}

pub fn attach_volume_to_iscsi_target(
    pool: &str,
    volume: &str,
    target: &str,
    options: &AttachOptions,
) -> Command {
    Command::json("attach_volume_to_iscsi_target")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--target", target)
        .arg_opt("--scsiid", options.scsiid.as_deref())
        .arg_opt("--lun", options.lun)
        .arg_opt("--mode", options.mode.as_deref())
}

pub fn detach_volume_from_iscsi_target(pool: &str, volume: &str, target: &str) -> Command {
    Command::json("detach_volume_from_iscsi_target")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--target", target)
}
