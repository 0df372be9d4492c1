// ABOUTME: Volume (zvol) operations: list, create, delete.
// ABOUTME: Property values are forwarded as-is; the appliance rejects invalid ones.

use super::Command;

/// ZFS properties for a new volume. `Default` matches the appliance defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeOptions {
    /// Block size in bytes: 8192, 16384, 32768, 65536 or 131072.
    pub blocksize: String,
    pub thin_provisioning: bool,
    /// off, on, verify, sha256 or sha256,verify.
    pub deduplication: String,
    /// off, on, lzjb, gzip, gzip-1 .. gzip-9, zle or lz4.
    pub compression: String,
    /// always, standard or disabled.
    pub sync: String,
    /// latency or throughput.
    pub logbias: String,
    /// all, none or metadata.
    pub primary_cache: String,
    /// all, none or metadata.
    pub secondary_cache: String,
    /// 1, 2 or 3.
    pub copies: String,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self {
            blocksize: "131072".to_string(),
            thin_provisioning: false,
            deduplication: "off".to_string(),
            compression: "lz4".to_string(),
            sync: "always".to_string(),
            logbias: "latency".to_string(),
            primary_cache: "all".to_string(),
            secondary_cache: "all".to_string(),
            copies: "1".to_string(),
        }
    }
}

pub fn get_volumes_for_given_pool(pool: &str) -> Command {
    Command::json("get_volumes_for_given_pool").arg("--pool", pool)
}

/// `size` carries its unit, e.g. `512M` or `10G`.
pub fn create_volume(pool: &str, volume: &str, size: &str, options: &VolumeOptions) -> Command {
    Command::json("create_volume")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--size", size)
        .arg("--blocksize", &options.blocksize)
        .arg("--deduplication", &options.deduplication)
        .arg("--compression", &options.compression)
        .arg("--sync", &options.sync)
        .arg("--logbias", &options.logbias)
        .arg("--primary-cache", &options.primary_cache)
        .arg("--secondary-cache", &options.secondary_cache)
        .arg("--copies", &options.copies)
        .flag_if("--thin-provisioning", options.thin_provisioning)
}

pub fn delete_volume(pool: &str, volume: &str) -> Command {
    Command::json("delete_volume")
        .arg("--pool", pool)
        .arg("--volume", volume)
}
