// ABOUTME: Snapshot and clone operations.
// ABOUTME: Clones are addressed through their parent volume and snapshot.

use super::Command;

pub fn get_snapshots_for_given_volume(pool: &str, volume: &str) -> Command {
    Command::json("get_snapshots_for_given_volume")
        .arg("--pool", pool)
        .arg("--volume", volume)
}

pub fn create_snapshot(pool: &str, volume: &str, snapshot: &str) -> Command {
    Command::json("create_snapshot")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--snapshot", snapshot)
}

pub fn delete_snapshot(pool: &str, volume: &str, snapshot: &str) -> Command {
    Command::json("delete_snapshot")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--snapshot", snapshot)
}

pub fn get_clones_for_given_snapshot(pool: &str, volume: &str, snapshot: &str) -> Command {
    Command::json("get_clones_for_given_snapshot")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--snapshot", snapshot)
}

pub fn create_clone_for_given_snapshot(
    pool: &str,
    volume: &str,
    snapshot: &str,
    clone: &str,
) -> Command {
    Command::json("create_clone_for_given_snapshot")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--snapshot", snapshot)
        .arg("--clone", clone)
}

pub fn delete_clone(pool: &str, volume: &str, snapshot: &str, clone: &str) -> Command {
    Command::json("delete_clone")
        .arg("--pool", pool)
        .arg("--volume", volume)
        .arg("--snapshot", snapshot)
        .arg("--clone", clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_commands_carry_full_lineage() {
        assert_eq!(
            create_clone_for_given_snapshot("tank", "v1", "s1", "c1").to_string(),
            "create_clone_for_given_snapshot --json --pool tank --volume v1 --snapshot s1 --clone c1"
        );
        assert_eq!(
            delete_clone("tank", "v1", "s1", "c1").to_string(),
            "delete_clone --json --pool tank --volume v1 --snapshot s1 --clone c1"
        );
    }
}
