//! Startup configuration: which cluster to talk to, how strictly to confirm transactions, and the
//! fixed program and base account the portal works against.

use std::{
    fmt,
    path::Path,
    str::FromStr,
};

use anyhow::{
    bail,
    Context,
};
use gif_portal_interface::program;
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    bs58,
    signature::{
        Keypair,
        Signer,
    },
};

pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// A named public cluster or a custom RPC URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://localhost:8899",
            Cluster::Custom(url) => url,
        }
    }
}

impl FromStr for Cluster {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet-beta" | "m" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" | "l" => Ok(Cluster::Localnet),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Cluster::Custom(url.to_string()))
            }
            other => bail!("Unknown cluster `{other}`. Expected a cluster name or an http(s) URL"),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Localnet => write!(f, "localnet"),
            Cluster::Custom(url) => write!(f, "{url}"),
        }
    }
}

/// Parses a commitment level name.
pub fn parse_commitment(s: &str) -> anyhow::Result<CommitmentConfig> {
    match s {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => bail!("Unknown commitment `{other}`. Expected processed, confirmed or finalized"),
    }
}

/// Everything the portal needs to know at startup. Built once and injected into the runtime and
/// the renderer.
pub struct PortalConfig {
    pub cluster: Cluster,
    /// Used for both preflight checks and confirmation of submitted transactions.
    pub commitment: CommitmentConfig,
    pub program_id: Address,
    /// The keypair of the account holding the list. Only needed to sign its creation.
    pub base_account: Keypair,
    pub grid_columns: usize,
}

impl PortalConfig {
    /// Creates a config for `base_account` on devnet with `processed` commitment and the default
    /// program id.
    pub fn new(base_account: Keypair) -> Self {
        Self {
            cluster: Cluster::default(),
            commitment: CommitmentConfig::processed(),
            program_id: program::ID,
            base_account,
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }

    pub fn base_account_address(&self) -> Address {
        self.base_account.pubkey()
    }
}

/// Parses a keypair from either a JSON byte array (the `solana-keygen` file format) or a base58
/// encoded secret key.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let kp_str = kp_str.trim();
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}

pub fn read_keypair_file(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
    parse_keypair(&contents).with_context(|| format!("Couldn't parse {}", path.display()))
}
