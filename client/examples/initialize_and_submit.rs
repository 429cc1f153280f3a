//! Creates a fresh base account on a local validator, submits two links through the portal, and
//! prints the resulting grid.
//!
//! Expects `solana-test-validator` running on localhost with the GIF portal program deployed at
//! [`gif_portal_interface::program::ID`].

use gif_portal_client::{
    config::{
        Cluster,
        PortalConfig,
    },
    portal::{
        Portal,
        Screen,
    },
    render::render,
    runtime::RpcRuntime,
    wallet::KeypairWallet,
};
use solana_sdk::signature::Keypair;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut config = PortalConfig::new(Keypair::new());
    config.cluster = Cluster::Localnet;

    let user = Keypair::new();
    let marker = std::env::temp_dir().join("gif-portal-example.trusted");
    let wallet = KeypairWallet::new(user, marker);

    let runtime = RpcRuntime::from_config(&config);
    runtime.rpc.fund_account(&wallet.address()).await?;

    let mut portal = Portal::new(Some(wallet), runtime);
    portal.connect().await?;
    assert!(matches!(portal.screen(), Screen::Uninitialized { .. }));

    portal.initialize_account().await;
    assert!(matches!(portal.screen(), Screen::Loaded { .. }));

    for link in ["https://media.giphy.com/a.gif", "https://media.giphy.com/b.gif"] {
        portal.set_input(link);
        portal.submit().await;
    }

    let links: Vec<_> = portal
        .view()
        .entries()
        .unwrap_or_default()
        .iter()
        .map(|entry| entry.link.as_str())
        .collect();
    assert_eq!(
        links,
        ["https://media.giphy.com/a.gif", "https://media.giphy.com/b.gif"]
    );

    print!("{}", render(&portal.screen(), config.grid_columns));

    Ok(())
}
