// ABOUTME: High-level client exposing one method per appliance operation.
// ABOUTME: Every call goes command builder -> executor -> response decoder.

use crate::commands::{self, AttachOptions, Command, PoolOptions, VolumeOptions};
use crate::config::{CredentialSource, CredentialsFile};
use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::response::{self, Response};
use crate::ssh::{HostKeyPolicy, SshConnector};
use crate::transport::{Connector, Transport};
use std::path::PathBuf;

/// Client for a JovianDSS appliance.
#[derive(Debug, Clone)]
pub struct Client<S, C> {
    executor: CommandExecutor<S, C>,
}

impl Client<CredentialsFile, SshConnector> {
    /// Production client: credentials from `path`, SSH with `policy`.
    pub fn from_config_file(path: impl Into<PathBuf>, policy: HostKeyPolicy) -> Self {
        Self::new(CommandExecutor::new(
            CredentialsFile::new(path),
            Transport::new(SshConnector::new(policy)),
        ))
    }
}

impl<S: CredentialSource, C: Connector> Client<S, C> {
    pub fn new(executor: CommandExecutor<S, C>) -> Self {
        Self { executor }
    }

    /// Run an arbitrary command and decode its reply.
    pub async fn call(&self, command: &Command) -> Result<Response> {
        let raw = self.executor.run(&command.to_string()).await?;
        response::decode(&raw)
    }

    pub async fn get_pools(&self) -> Result<Response> {
        self.call(&commands::get_pools()).await
    }

    pub async fn create_pool(
        &self,
        pool: &str,
        vdevs: &str,
        options: &PoolOptions,
    ) -> Result<Response> {
        self.call(&commands::create_pool(pool, vdevs, options))
            .await
    }

    pub async fn delete_pool(&self, pool: &str) -> Result<Response> {
        self.call(&commands::delete_pool(pool)).await
    }

    pub async fn get_volumes_for_given_pool(&self, pool: &str) -> Result<Response> {
        self.call(&commands::get_volumes_for_given_pool(pool)).await
    }

    pub async fn create_volume(
        &self,
        pool: &str,
        volume: &str,
        size: &str,
        options: &VolumeOptions,
    ) -> Result<Response> {
        self.call(&commands::create_volume(pool, volume, size, options))
            .await
    }

    pub async fn delete_volume(&self, pool: &str, volume: &str) -> Result<Response> {
        self.call(&commands::delete_volume(pool, volume)).await
    }

    pub async fn get_snapshots_for_given_volume(
        &self,
        pool: &str,
        volume: &str,
    ) -> Result<Response> {
        self.call(&commands::get_snapshots_for_given_volume(pool, volume))
            .await
    }

    pub async fn create_snapshot(
        &self,
        pool: &str,
        volume: &str,
        snapshot: &str,
    ) -> Result<Response> {
        self.call(&commands::create_snapshot(pool, volume, snapshot))
            .await
    }

    pub async fn delete_snapshot(
        &self,
        pool: &str,
        volume: &str,
        snapshot: &str,
    ) -> Result<Response> {
        self.call(&commands::delete_snapshot(pool, volume, snapshot))
            .await
    }

    pub async fn get_clones_for_given_snapshot(
        &self,
        pool: &str,
        volume: &str,
        snapshot: &str,
    ) -> Result<Response> {
        self.call(&commands::get_clones_for_given_snapshot(
            pool, volume, snapshot,
        ))
        .await
    }

    pub async fn create_clone_for_given_snapshot(
        &self,
        pool: &str,
        volume: &str,
        snapshot: &str,
        clone: &str,
    ) -> Result<Response> {
        self.call(&commands::create_clone_for_given_snapshot(
            pool, volume, snapshot, clone,
        ))
        .await
    }

    pub async fn delete_clone(
        &self,
        pool: &str,
        volume: &str,
        snapshot: &str,
        clone: &str,
    ) -> Result<Response> {
        self.call(&commands::delete_clone(pool, volume, snapshot, clone))
            .await
    }

    pub async fn get_iscsi_targets_for_given_pool(&self, pool: &str) -> Result<Response> {
        self.call(&commands::get_iscsi_targets_for_given_pool(pool))
            .await
    }

    pub async fn get_volumes_assigned_to_iscsi_target(
        &self,
        pool: &str,
        target: &str,
    ) -> Result<Response> {
        self.call(&commands::get_volumes_assigned_to_iscsi_target(
            pool, target,
        ))
        .await
    }

    pub async fn create_iscsi_target(&self, pool: &str, target: &str) -> Result<Response> {
        self.call(&commands::create_iscsi_target(pool, target)).await
    }

    pub async fn delete_iscsi_target(&self, pool: &str, target: &str) -> Result<Response> {
        self.call(&commands::delete_iscsi_target(pool, target)).await
    }

    pub async fn attach_volume_to_iscsi_target(
        &self,
        pool: &str,
        volume: &str,
        target: &str,
        options: &AttachOptions,
    ) -> Result<Response> {
        self.call(&commands::attach_volume_to_iscsi_target(
            pool, volume, target, options,
        ))
        .await
    }

    pub async fn detach_volume_from_iscsi_target(
        &self,
        pool: &str,
        volume: &str,
        target: &str,
    ) -> Result<Response> {
        self.call(&commands::detach_volume_from_iscsi_target(
            pool, volume, target,
        ))
        .await
    }

    pub async fn reboot(&self) -> Result<Response> {
        self.call(&commands::reboot()).await
    }

    pub async fn shutdown(&self) -> Result<Response> {
        self.call(&commands::shutdown()).await
    }
}
