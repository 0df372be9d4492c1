// ABOUTME: Appliance power operations.
// ABOUTME: These take no JSON flag; the appliance CLI only accepts --yes.

use super::Command;

pub fn reboot() -> Command {
    Command::new("reboot").flag("--yes")
}

pub fn shutdown() -> Command {
    Command::new("shutdown").flag("--yes")
}
