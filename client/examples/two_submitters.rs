//! Two wallets submit to the same base account on a local validator. Each sees the other's link,
//! in submission order, after re-fetching.

use gif_portal_client::{
    config::{
        Cluster,
        PortalConfig,
    },
    portal::Portal,
    runtime::RpcRuntime,
    wallet::KeypairWallet,
};
use solana_sdk::signature::Keypair;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut config = PortalConfig::new(Keypair::new());
    config.cluster = Cluster::Localnet;

    let wallet_1 = KeypairWallet::new(
        Keypair::new(),
        std::env::temp_dir().join("gif-portal-submitter-1.trusted"),
    );
    let wallet_2 = KeypairWallet::new(
        Keypair::new(),
        std::env::temp_dir().join("gif-portal-submitter-2.trusted"),
    );
    let (address_1, address_2) = (wallet_1.address(), wallet_2.address());

    let runtime_1 = RpcRuntime::from_config(&config);
    let runtime_2 = RpcRuntime::from_config(&config);
    runtime_1.rpc.fund_account(&address_1).await?;
    runtime_2.rpc.fund_account(&address_2).await?;

    let mut portal_1 = Portal::new(Some(wallet_1), runtime_1);
    let mut portal_2 = Portal::new(Some(wallet_2), runtime_2);
    portal_1.connect().await?;
    portal_2.connect().await?;

    // Only one of them needs to create the list.
    portal_1.initialize_account().await;

    portal_2.append_entry("second-wallet-first.gif").await;
    portal_1.append_entry("first-wallet-second.gif").await;
    portal_2.refresh().await;

    let entries = portal_2.view().entries().unwrap_or_default();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].link, "second-wallet-first.gif");
    assert_eq!(entries[0].submitter, address_2);
    assert_eq!(entries[1].submitter, address_1);

    Ok(())
}
