// ABOUTME: Entry point for the oecli CLI application.
// ABOUTME: Parses arguments, runs one appliance operation, and prints the reply.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use oecli::config::{CredentialSource, CredentialsFile};
use oecli::executor::CommandExecutor;
use oecli::output::{Output, OutputMode};
use oecli::ssh::SshConnector;
use oecli::transport::{Connector, Transport};
use oecli::{Client, Response, Result};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);
    output.start_timer();

    let transport = Transport::new(SshConnector::new(cli.host_key_policy()))
        .connect_timeout(Duration::from_secs(cli.connect_timeout));
    let client = Client::new(CommandExecutor::new(
        CredentialsFile::new(cli.config.clone()),
        transport,
    ));

    match run(&client, cli.command).await {
        Ok(response) => output.response(response),
        Err(e) => {
            output.error(&e);
            std::process::exit(e.kind().exit_code());
        }
    }
}

async fn run<S, C>(client: &Client<S, C>, command: Commands) -> Result<Response>
where
    S: CredentialSource,
    C: Connector,
{
    match command {
        Commands::GetPools => client.get_pools().await,
        Commands::CreatePool {
            pool,
            vdevs,
            options,
        } => client.create_pool(&pool, &vdevs, &options.into()).await,
        Commands::DeletePool { pool } => client.delete_pool(&pool).await,
        Commands::GetVolumesForGivenPool { pool } => client.get_volumes_for_given_pool(&pool).await,
        Commands::CreateVolume {
            pool,
            volume,
            size,
            options,
        } => {
            client
                .create_volume(&pool, &volume, &size, &options.into())
                .await
        }
        Commands::DeleteVolume { pool, volume } => client.delete_volume(&pool, &volume).await,
        Commands::GetSnapshotsForGivenVolume { pool, volume } => {
            client.get_snapshots_for_given_volume(&pool, &volume).await
        }
        Commands::CreateSnapshot {
            pool,
            volume,
            snapshot,
        } => client.create_snapshot(&pool, &volume, &snapshot).await,
        Commands::DeleteSnapshot {
            pool,
            volume,
            snapshot,
        } => client.delete_snapshot(&pool, &volume, &snapshot).await,
        Commands::GetClonesForGivenSnapshot {
            pool,
            volume,
            snapshot,
        } => {
            client
                .get_clones_for_given_snapshot(&pool, &volume, &snapshot)
                .await
        }
        Commands::CreateCloneForGivenSnapshot {
            pool,
            volume,
            snapshot,
            clone,
        } => {
            client
                .create_clone_for_given_snapshot(&pool, &volume, &snapshot, &clone)
                .await
        }
        Commands::DeleteClone {
            pool,
            volume,
            snapshot,
            clone,
        } => client.delete_clone(&pool, &volume, &snapshot, &clone).await,
        Commands::GetIscsiTargetsForGivenPool { pool } => {
            client.get_iscsi_targets_for_given_pool(&pool).await
        }
        Commands::GetVolumesAssignedToIscsiTarget { pool, target } => {
            client
                .get_volumes_assigned_to_iscsi_target(&pool, &target)
                .await
        }
        Commands::CreateIscsiTarget { pool, target } => {
            client.create_iscsi_target(&pool, &target).await
        }
        Commands::DeleteIscsiTarget { pool, target } => {
            client.delete_iscsi_target(&pool, &target).await
        }
        Commands::AttachVolumeToIscsiTarget {
            pool,
            volume,
            target,
            options,
        } => {
            client
                .attach_volume_to_iscsi_target(&pool, &volume, &target, &options.into())
                .await
        }
        Commands::DetachVolumeFromIscsiTarget {
            pool,
            volume,
            target,
        } => {
            client
                .detach_volume_from_iscsi_target(&pool, &volume, &target)
                .await
        }
        Commands::Reboot => client.reboot().await,
        Commands::Shutdown => client.shutdown().await,
    }
}
