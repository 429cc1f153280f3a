//! A terminal GIF portal: connect a wallet, create the shared list once, submit links to it, and
//! browse everything submitted so far as a grid.

use clap::Parser;
use gif_portal_client::{
    portal::Portal,
    print_kv,
    runtime::RpcRuntime,
    wallet::KeypairWallet,
};
use tokio::io::BufReader;

use crate::{
    cli::{
        config_from_args,
        CliArgs,
    },
    shell::run_shell,
};

pub mod cli;
pub mod load_env;
pub mod shell;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = config_from_args(&args)?;
    let wallet = args
        .wallet
        .as_deref()
        .map(KeypairWallet::from_file)
        .transpose()?;

    print_kv!("Cluster", config.cluster);
    print_kv!("Commitment", format!("{:?}", config.commitment.commitment));
    print_kv!("Program", config.program_id);
    print_kv!("Base account", config.base_account_address());

    let runtime = RpcRuntime::from_config(&config);
    let mut portal = Portal::new(wallet, runtime);

    let stdin = BufReader::new(tokio::io::stdin());
    run_shell(&mut portal, stdin, config.grid_columns).await
}
