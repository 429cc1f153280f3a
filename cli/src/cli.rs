use std::path::PathBuf;

use clap::Parser;
use gif_portal_client::config::{
    parse_commitment,
    Cluster,
    PortalConfig,
    DEFAULT_GRID_COLUMNS,
};
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;

use crate::load_env;

#[derive(Parser)]
#[command(name = "gif-portal")]
pub struct CliArgs {
    /// Cluster name (`devnet`, `testnet`, `mainnet-beta`, `localnet`) or an RPC URL.
    #[arg(short = 'u', long, default_value = "devnet")]
    pub cluster: Cluster,

    /// How strictly a submitted transaction must be confirmed before the call returns:
    /// `processed`, `confirmed` or `finalized`.
    #[arg(short = 'c', long, default_value = "processed", value_parser = parse_commitment)]
    pub commitment: CommitmentConfig,

    /// The GIF portal program address. Defaults to the interface's program id.
    #[arg(long)]
    pub program_id: Option<Address>,

    /// Wallet keypair file. Without one there is no wallet to connect.
    #[arg(short = 'w', long)]
    pub wallet: Option<PathBuf>,

    /// Base account keypair file. Falls back to the `GIF_PORTAL_BASE_ACCOUNT` environment
    /// variable.
    #[arg(long)]
    pub base_account: Option<PathBuf>,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS)]
    pub columns: usize,
}

/// Builds the portal config from parsed CLI arguments and the environment.
/// See [`crate::load_env`] for the expected environment variables.
pub fn config_from_args(args: &CliArgs) -> anyhow::Result<PortalConfig> {
    let base_account = load_env::base_account_keypair(args.base_account.as_deref())?;

    let mut config = PortalConfig::new(base_account);
    config.cluster = args.cluster.clone();
    config.commitment = args.commitment;
    if let Some(program_id) = args.program_id {
        config.program_id = program_id;
    }
    config.grid_columns = args.columns;

    Ok(config)
}
