// ABOUTME: Pool operations: list, create, delete.
// ABOUTME: Vdev layouts are passed through verbatim for the appliance to validate.

use super::Command;

/// Optional pool layout settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolOptions {
    /// Spread mirrors across multiple groups.
    pub vdevs_mirror_multiple_group: bool,
    /// Write log group, e.g. `mirror:sde,sdf`.
    pub write_log: Option<String>,
    /// Read cache disks, e.g. `sdg,sdh`.
    pub read_cache: Option<String>,
    /// Spare disks, e.g. `sdi`.
    pub spare: Option<String>,
}

pub fn get_pools() -> Command {
    Command::json("get_pools")
}

/// `vdevs` uses the appliance format `TYPE:DISK1,DISK2;TYPE:DISK3`,
/// with TYPE one of single, mirror, raidz1, raidz2, raidz3.
pub fn create_pool(pool: &str, vdevs: &str, options: &PoolOptions) -> Command {
    Command::json("create_pool")
        .arg("--pool", pool)
        .arg("--vdevs", vdevs)
        .flag_if(
            "--vdevs-mirror-multiple-group",
            options.vdevs_mirror_multiple_group,
        )
        .arg_opt("--write-log", options.write_log.as_deref())
        .arg_opt("--read-cache", options.read_cache.as_deref())
        .arg_opt("--spare", options.spare.as_deref())
}

pub fn delete_pool(pool: &str) -> Command {
    Command::json("delete_pool").arg("--pool", pool)
}
